//! Edit scripts
//!
//! A script is a JSON array of operations applied in order to a fresh store:
//!
//! ```json
//! [
//!   {"op": "add", "entry": {"title": "A", "content": "c1", "date": "2024-01-01", "createdAt": "t1"}},
//!   {"op": "update", "id": 1, "changes": {"content": "c2"}},
//!   {"op": "delete", "id": 1}
//! ]
//! ```
//!
//! Scripts run against counter ids starting at 1, so the n-th `add` creates
//! id n.

use journal_core::{EntryId, EntryUpdate, JournalStore, NewEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Add { entry: NewEntry },
    Update { id: EntryId, changes: EntryUpdate },
    Delete { id: EntryId },
}

/// What applying a script did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub added: Vec<EntryId>,
    pub updated: usize,
    pub deleted: usize,
    /// Updates and deletes that named an absent id
    pub ignored: usize,
}

/// Parse a script document
pub fn parse(input: &str) -> serde_json::Result<Vec<Operation>> {
    serde_json::from_str(input)
}

/// Apply operations in order
pub fn apply(store: &JournalStore, ops: Vec<Operation>) -> ScriptReport {
    let mut report = ScriptReport::default();
    for op in ops {
        match op {
            Operation::Add { entry } => report.added.push(store.add(entry).id),
            Operation::Update { id, changes } => {
                if store.update(id, &changes) {
                    report.updated += 1;
                } else {
                    report.ignored += 1;
                }
            }
            Operation::Delete { id } => {
                if store.delete(id) {
                    report.deleted += 1;
                } else {
                    report.ignored += 1;
                }
            }
        }
    }
    debug!(?report, "script applied");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::IdSource;

    const SCRIPT: &str = r#"[
        {"op": "add", "entry": {"title": "A", "content": "c1", "date": "2024-01-01", "createdAt": "t1"}},
        {"op": "add", "entry": {"title": "B", "content": "c", "date": "2024-01-02", "createdAt": "t2"}},
        {"op": "update", "id": 1, "changes": {"content": "c2"}},
        {"op": "update", "id": 99, "changes": {"title": "nope"}},
        {"op": "delete", "id": 2},
        {"op": "delete", "id": 2}
    ]"#;

    #[test]
    fn test_parse_and_apply() {
        let ops = parse(SCRIPT).unwrap();
        assert_eq!(ops.len(), 6);

        let store = JournalStore::with_ids(IdSource::counter(1));
        let report = apply(&store, ops);

        assert_eq!(report.added, [EntryId(1), EntryId(2)]);
        assert_eq!(report.updated, 1);
        assert_eq!(report.deleted, 1);
        assert_eq!(report.ignored, 2);

        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "A");
        assert_eq!(entries[0].content, "c2");
        assert_eq!(entries[0].created_at, "t1");
    }

    #[test]
    fn test_update_cannot_touch_created_at() {
        let script = r#"[{"op": "update", "id": 1, "changes": {"createdAt": "t9"}}]"#;
        assert!(parse(script).is_err());
    }

    #[test]
    fn test_unknown_op() {
        assert!(parse(r#"[{"op": "rename", "id": 1}]"#).is_err());
    }
}
