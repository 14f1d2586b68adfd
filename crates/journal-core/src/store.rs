//! Copy-on-write journal store
//!
//! The store holds the session's entries as an immutable snapshot. Every
//! mutation builds a fresh sequence and swaps it in under the channel's
//! write lock, so readers holding an older snapshot never see a partial
//! update and concurrent writers are serialized.

use crate::id::IdSource;
use crate::types::*;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Immutable view of the entry sequence, newest first
pub type Snapshot = Arc<[JournalEntry]>;

/// Shared handle to a session's journal entries.
///
/// Cloning the handle shares the same underlying sequence.
#[derive(Clone)]
pub struct JournalStore {
    inner: Arc<Inner>,
}

struct Inner {
    entries: watch::Sender<Snapshot>,
    ids: IdSource,
}

impl JournalStore {
    /// Create an empty store with clock-based ids
    pub fn new() -> Self {
        Self::with_ids(IdSource::clock())
    }

    /// Create an empty store drawing ids from `ids`
    pub fn with_ids(ids: IdSource) -> Self {
        let (entries, _) = watch::channel(Snapshot::from(Vec::new()));
        Self {
            inner: Arc::new(Inner { entries, ids }),
        }
    }

    /// Current sequence, newest first
    pub fn entries(&self) -> Snapshot {
        self.inner.entries.borrow().clone()
    }

    /// Watch the sequence; the receiver is notified after each mutation
    /// that changed it.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.entries.subscribe()
    }

    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<JournalEntry> {
        self.inner
            .entries
            .borrow()
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }

    /// Create an entry with a fresh id and place it at the front.
    pub fn add(&self, entry: NewEntry) -> JournalEntry {
        let created = JournalEntry::from_new(self.inner.ids.next_id(), entry);
        let head = created.clone();

        self.inner.entries.send_modify(move |current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.push(head);
            next.extend(current.iter().cloned());
            *current = next.into();
        });

        debug!(id = %created.id, "journal entry added");
        created
    }

    /// Replace the supplied fields of the entry matching `id`.
    ///
    /// Returns false, leaving the sequence untouched and observers
    /// unnotified, when no entry matches.
    pub fn update(&self, id: EntryId, changes: &EntryUpdate) -> bool {
        let updated = self.inner.entries.send_if_modified(|current| {
            if !current.iter().any(|entry| entry.id == id) {
                return false;
            }
            *current = current
                .iter()
                .map(|entry| {
                    if entry.id == id {
                        changes.apply(entry)
                    } else {
                        entry.clone()
                    }
                })
                .collect();
            true
        });

        debug!(%id, updated, "journal entry update");
        updated
    }

    /// Remove the entry matching `id`, keeping the order of the rest.
    ///
    /// Returns false when no entry matches.
    pub fn delete(&self, id: EntryId) -> bool {
        let deleted = self.inner.entries.send_if_modified(|current| {
            if !current.iter().any(|entry| entry.id == id) {
                return false;
            }
            *current = current
                .iter()
                .filter(|entry| entry.id != id)
                .cloned()
                .collect();
            true
        });

        debug!(%id, deleted, "journal entry delete");
        deleted
    }
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JournalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalStore")
            .field("entries", &self.len())
            .field("ids", &self.inner.ids.strategy())
            .finish()
    }
}
