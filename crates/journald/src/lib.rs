//! journald - journal session host
//!
//! This binary provides:
//! - In-memory journal editing for one session
//! - Photo attachments embedded as data URLs
//! - Optional best-effort mirroring to a remote content store
//! - Scripted add/update/delete runs

pub mod config;
pub mod photo;
pub mod script;
pub mod session;

pub use config::Config;
pub use session::Session;
