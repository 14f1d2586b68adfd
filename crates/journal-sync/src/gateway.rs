//! Sync gateway: best-effort mirroring of new entries
//!
//! Each call posts a single entry wrapped as `{"data": ...}` to
//! `<base_url>/journals`. Failures are logged, counted and handed to an
//! optional hook; they never reach the caller of [`SyncGateway::create_remote`].
//! There is no queue and no retry.

use crate::config::GatewayConfig;
use crate::error::SyncError;
use crate::transport::{HttpTransport, Transport};
use journal_core::NewEntry;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Request body shape expected by the content store
#[derive(Serialize)]
struct Envelope<'a> {
    data: &'a NewEntry,
}

/// Called after a failed attempt, once the failure has been logged
pub type FailureHook = Arc<dyn Fn(&NewEntry, &SyncError) + Send + Sync>;

/// Outcome counters since the gateway was built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub delivered: u64,
    pub failed: u64,
}

/// Posts entries to the remote content store
pub struct SyncGateway {
    config: GatewayConfig,
    transport: Arc<dyn Transport>,
    on_failure: Option<FailureHook>,
    stats: Mutex<SyncStats>,
}

impl SyncGateway {
    /// Gateway over HTTP
    pub fn new(config: GatewayConfig) -> Result<Self, SyncError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Gateway over a caller-supplied transport
    pub fn with_transport(config: GatewayConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            on_failure: None,
            stats: Mutex::new(SyncStats::default()),
        }
    }

    /// Register a hook to surface failures, e.g. as a user notification
    pub fn on_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(&NewEntry, &SyncError) + Send + Sync + 'static,
    {
        self.on_failure = Some(Arc::new(hook));
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn stats(&self) -> SyncStats {
        *self.stats.lock()
    }

    /// Encode `payload` as the request body
    pub fn encode(payload: &NewEntry) -> Result<Vec<u8>, SyncError> {
        Ok(serde_json::to_vec(&Envelope { data: payload })?)
    }

    /// Post `payload` once and report the outcome
    pub async fn try_create_remote(&self, payload: &NewEntry) -> Result<(), SyncError> {
        let body = Self::encode(payload)?;
        self.transport
            .post_json(&self.config.journals_url(), body)
            .await
    }

    /// Post `payload` once; failures are logged and absorbed.
    pub async fn create_remote(&self, payload: &NewEntry) {
        match self.try_create_remote(payload).await {
            Ok(()) => {
                self.stats.lock().delivered += 1;
                info!(title = %payload.title, "journal entry mirrored to remote store");
            }
            Err(e) => {
                self.stats.lock().failed += 1;
                warn!(
                    error = %e,
                    endpoint = %self.config.journals_url(),
                    "failed to create remote journal entry; configure STRAPI_BASE_URL and the journals content type once the backend is ready"
                );
                if let Some(hook) = &self.on_failure {
                    hook(payload, &e);
                }
            }
        }
    }

    /// Fire-and-forget variant of [`create_remote`](Self::create_remote).
    ///
    /// The returned handle may be dropped; the attempt still completes on
    /// the runtime.
    pub fn spawn_create_remote(self: &Arc<Self>, payload: NewEntry) -> JoinHandle<()> {
        let gateway = self.clone();
        tokio::spawn(async move { gateway.create_remote(&payload).await })
    }
}

impl std::fmt::Debug for SyncGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncGateway")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .field("on_failure", &self.on_failure.is_some())
            .finish()
    }
}

/// Mirror one entry using `STRAPI_BASE_URL` as read at call time.
///
/// Never fails; see [`SyncGateway::create_remote`].
pub async fn create_remote(payload: &NewEntry) {
    match SyncGateway::new(GatewayConfig::from_env()) {
        Ok(gateway) => gateway.create_remote(payload).await,
        Err(e) => warn!(error = %e, "failed to create remote journal entry"),
    }
}
