//! Journal session: one store plus an optional remote mirror
//!
//! The store never talks to the gateway. Mirroring is a separate step the
//! session takes only when asked, and its outcome never changes local state.

use crate::config::{AddArgs, Config};
use crate::photo;
use crate::script;
use chrono::{SecondsFormat, Utc};
use journal_core::{IdSource, JournalEntry, JournalStore, NewEntry, Snapshot};
use journal_sync::{SyncGateway, SyncStats};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Session state owned by the host
pub struct Session {
    store: JournalStore,
    gateway: Arc<SyncGateway>,
    pending: JoinSet<()>,
}

impl Session {
    /// Session with an HTTP gateway built from `config`
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let gateway = SyncGateway::new(config.gateway())?.on_failure(|entry, _| {
            warn!(title = %entry.title, "entry kept locally only");
        });
        Ok(Self::new(JournalStore::new(), Arc::new(gateway)))
    }

    pub fn new(store: JournalStore, gateway: Arc<SyncGateway>) -> Self {
        Self {
            store,
            gateway,
            pending: JoinSet::new(),
        }
    }

    pub fn store(&self) -> &JournalStore {
        &self.store
    }

    /// Add locally, then start mirroring in the background if `sync`.
    pub fn add(&mut self, entry: NewEntry, sync: bool) -> JournalEntry {
        let created = self.store.add(entry);
        if sync {
            let gateway = self.gateway.clone();
            let payload = created.payload();
            self.pending
                .spawn(async move { gateway.create_remote(&payload).await });
        }
        created
    }

    /// Wait for background sync attempts and report their totals
    pub async fn finish(&mut self) -> SyncStats {
        while let Some(result) = self.pending.join_next().await {
            if let Err(e) = result {
                warn!(error = %e, "sync task did not complete");
            }
        }
        self.gateway.stats()
    }

    /// `add` subcommand
    pub fn run_add(&mut self, args: AddArgs) -> anyhow::Result<JournalEntry> {
        let now = Utc::now();
        let mut entry = NewEntry::new(
            args.title,
            args.content,
            args.date
                .unwrap_or_else(|| now.format("%Y-%m-%d").to_string()),
            args.created_at
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        if let Some(path) = &args.photo {
            entry = entry.with_photo(photo::load(path)?);
        }
        Ok(self.add(entry, args.sync))
    }

    /// `import` subcommand: entries are added in file order
    pub fn run_import(&mut self, file: &Path, sync: bool) -> anyhow::Result<usize> {
        let text = read(file)?;
        let entries: Vec<NewEntry> = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("invalid entries in {}: {e}", file.display()))?;
        let count = entries.len();
        for entry in entries {
            self.add(entry, sync);
        }
        info!(count, "entries imported");
        Ok(count)
    }

    /// Current journal, newest first
    pub fn snapshot(&self) -> Snapshot {
        self.store.entries()
    }
}

/// `edit` subcommand: scripts use counter ids so they can refer to entries
pub fn run_edit(file: &Path) -> anyhow::Result<(Snapshot, script::ScriptReport)> {
    let text = read(file)?;
    let ops = script::parse(&text)
        .map_err(|e| anyhow::anyhow!("invalid script {}: {e}", file.display()))?;
    let store = JournalStore::with_ids(IdSource::counter(1));
    let report = script::apply(&store, ops);
    Ok((store.entries(), report))
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))
}
