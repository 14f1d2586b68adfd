//! journal-sync - remote mirroring for journal entries
//!
//! This crate provides:
//! - Endpoint configuration (`STRAPI_BASE_URL`)
//! - A pluggable HTTP transport
//! - The sync gateway, which posts one entry and never fails its caller

pub mod config;
pub mod error;
pub mod gateway;
pub mod transport;

pub use config::GatewayConfig;
pub use error::SyncError;
pub use gateway::{create_remote, SyncGateway, SyncStats};
pub use transport::{HttpTransport, Transport};
