//! Journal Core Library
//!
//! This crate provides the journal entry data model and the in-process
//! store that owns the ordered entry collection for a session.
//!
//! # Modules
//!
//! - [`types`]: Entry types (JournalEntry, NewEntry, EntryUpdate)
//! - [`id`]: Entry id assignment
//! - [`store`]: Copy-on-write journal store with change subscription
//! - [`registry`]: Named store handles for hosts that share by key

pub mod id;
pub mod registry;
pub mod store;
pub mod types;

pub use id::IdSource;
pub use registry::JournalRegistry;
pub use store::{JournalStore, Snapshot};
pub use types::*;
