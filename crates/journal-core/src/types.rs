//! Journal entry types
//!
//! Field names serialize in camelCase so the same values can be handed to a
//! browser front end or a remote content store without renaming.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// IDENTITY
// =============================================================================

/// Entry identifier, unique within a session and never reused.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// =============================================================================
// ENTRIES
// =============================================================================

/// One journal record as held by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Assigned by the store on creation, immutable afterwards
    pub id: EntryId,
    pub title: String,
    pub content: String,
    /// User-facing date the entry is about
    pub date: String,
    /// Creation timestamp, immutable afterwards
    pub created_at: String,
    /// Embedded image, usually a `data:` URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_data_url: Option<String>,
}

/// Every entry field except `id`.
///
/// This is the input to [`JournalStore::add`](crate::JournalStore::add) and
/// also the payload mirrored to the remote content store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub date: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_data_url: Option<String>,
}

impl NewEntry {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            date: date.into(),
            created_at: created_at.into(),
            photo_data_url: None,
        }
    }

    /// Attach a photo data URL
    pub fn with_photo(mut self, data_url: impl Into<String>) -> Self {
        self.photo_data_url = Some(data_url.into());
        self
    }
}

impl JournalEntry {
    /// Build a full entry from an assigned id and the caller's fields
    pub fn from_new(id: EntryId, entry: NewEntry) -> Self {
        Self {
            id,
            title: entry.title,
            content: entry.content,
            date: entry.date,
            created_at: entry.created_at,
            photo_data_url: entry.photo_data_url,
        }
    }

    /// The entry without its id, as sent to a remote store
    pub fn payload(&self) -> NewEntry {
        NewEntry {
            title: self.title.clone(),
            content: self.content.clone(),
            date: self.date.clone(),
            created_at: self.created_at.clone(),
            photo_data_url: self.photo_data_url.clone(),
        }
    }
}

// =============================================================================
// PARTIAL UPDATES
// =============================================================================

/// Partial update of the mutable entry fields.
///
/// `id` and `createdAt` are not representable here. For the photo, `None`
/// leaves it alone, `Some(None)` removes it and `Some(Some(url))` replaces
/// it; in JSON that is a missing key, `null`, or a string.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub photo_data_url: Option<Option<String>>,
}

impl EntryUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn photo(mut self, data_url: impl Into<String>) -> Self {
        self.photo_data_url = Some(Some(data_url.into()));
        self
    }

    pub fn remove_photo(mut self) -> Self {
        self.photo_data_url = Some(None);
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.date.is_none()
            && self.photo_data_url.is_none()
    }

    /// Return a copy of `entry` with the supplied fields replaced
    pub fn apply(&self, entry: &JournalEntry) -> JournalEntry {
        let mut next = entry.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(content) = &self.content {
            next.content = content.clone();
        }
        if let Some(date) = &self.date {
            next.date = date.clone();
        }
        if let Some(photo) = &self.photo_data_url {
            next.photo_data_url = photo.clone();
        }
        next
    }
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JournalEntry {
        JournalEntry::from_new(
            EntryId(7),
            NewEntry::new("A", "c1", "2024-01-01", "t1"),
        )
    }

    #[test]
    fn test_entry_json_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["createdAt"], "t1");
        assert!(json.get("photoDataUrl").is_none());

        let with_photo = JournalEntry {
            photo_data_url: Some("data:image/png;base64,AA==".into()),
            ..sample()
        };
        let json = serde_json::to_value(with_photo).unwrap();
        assert_eq!(json["photoDataUrl"], "data:image/png;base64,AA==");
    }

    #[test]
    fn test_payload_drops_id() {
        let entry = sample();
        let payload = entry.payload();
        assert_eq!(JournalEntry::from_new(entry.id, payload), entry);
    }

    #[test]
    fn test_update_touches_only_supplied_fields() {
        let entry = sample();
        let updated = EntryUpdate::default().title("X").apply(&entry);

        assert_eq!(updated.title, "X");
        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.content, entry.content);
        assert_eq!(updated.date, entry.date);
        assert_eq!(updated.created_at, entry.created_at);
        assert_eq!(updated.photo_data_url, None);
    }

    #[test]
    fn test_update_photo_null_vs_missing() {
        let missing: EntryUpdate = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert_eq!(missing.photo_data_url, None);

        let cleared: EntryUpdate = serde_json::from_str(r#"{"photoDataUrl":null}"#).unwrap();
        assert_eq!(cleared.photo_data_url, Some(None));

        let set: EntryUpdate = serde_json::from_str(r#"{"photoDataUrl":"data:x"}"#).unwrap();
        assert_eq!(set.photo_data_url, Some(Some("data:x".to_string())));

        let entry = sample();
        let with_photo = set.apply(&entry);
        assert_eq!(with_photo.photo_data_url.as_deref(), Some("data:x"));
        assert_eq!(cleared.apply(&with_photo).photo_data_url, None);
    }

    #[test]
    fn test_update_rejects_immutable_fields() {
        assert!(serde_json::from_str::<EntryUpdate>(r#"{"id":1}"#).is_err());
        assert!(serde_json::from_str::<EntryUpdate>(r#"{"createdAt":"t2"}"#).is_err());
    }

    #[test]
    fn test_empty_update() {
        assert!(EntryUpdate::default().is_empty());
        assert!(!EntryUpdate::default().remove_photo().is_empty());
    }
}
