use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Record-store collection holding tag records.
pub const COLLECTION: &str = "tags";

/// Stored field names, shared by query composition and storage adapters.
pub mod fields {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const PUBLISHED_REFERENCE_COUNT: &str = "publishedReferenceCount";
}

/// A classification label attachable to content items.
///
/// Tags are created, updated and deleted by collaborators outside this crate;
/// everything here is a read path. `published_reference_count` counts the
/// published items currently referencing the tag and is maintained elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub title: String,
    pub published_reference_count: i64,
}

impl Tag {
    /// Decodes a raw record-store row into a `Tag`.
    ///
    /// This is the single seam where a record missing an expected field (or
    /// carrying one of the wrong type) turns into a hard data-integrity
    /// failure instead of silently corrupting an ordering downstream.
    pub fn from_record(record: &Value) -> Result<Self, TagRecordError> {
        serde_json::from_value(record.clone()).map_err(TagRecordError::Malformed)
    }
}

/// One tag-to-item edge. Many-to-many: an item may carry several tags and a
/// tag may be attached to several items. Read-only facts from this crate's
/// perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagItemAssociation {
    pub tag_id: String,
    pub item_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum TagRecordError {
    #[error("tag record is not well formed: {0}")]
    Malformed(#[source] serde_json::Error),
}
