use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::record_store::RecordStore;
use crate::application::ports::tag_association_repository::TagAssociationRepository;
use crate::application::ports::title_collation::TitleCollation;
use crate::application::use_cases::tags::find_tag_by_title::FindTagByTitle;
use crate::application::use_cases::tags::most_used_tags::MostUsedTags;
use crate::application::use_cases::tags::tags_for_item::TagsForItem;
use crate::domain::tags::tag::Tag;

/// Read-only access to tag records.
///
/// Raw query execution is delegated to the injected record store; this service
/// adds the query composition, the locale re-sort for display, and the
/// association-to-tag stitching. All collaborators arrive at construction, so
/// there is no settable/uninitialized state, and every operation is a
/// stateless single-shot read safe to call from concurrent tasks.
#[derive(Clone)]
pub struct TagStore {
    records: Arc<dyn RecordStore>,
    associations: Arc<dyn TagAssociationRepository>,
    collation: Arc<dyn TitleCollation>,
}

impl TagStore {
    pub fn new(
        records: Arc<dyn RecordStore>,
        associations: Arc<dyn TagAssociationRepository>,
        collation: Arc<dyn TitleCollation>,
    ) -> Self {
        Self {
            records,
            associations,
            collation,
        }
    }

    /// `Ok(None)` when no tag carries the title; never an error for a miss.
    pub async fn find_by_title(&self, title: &str) -> anyhow::Result<Option<Tag>> {
        FindTagByTitle {
            records: self.records.as_ref(),
        }
        .execute(title)
        .await
    }

    /// The `n` most-referenced tags, ordered by title under the configured
    /// locale's collation.
    pub async fn most_used(&self, n: usize) -> anyhow::Result<Vec<Tag>> {
        MostUsedTags {
            records: self.records.as_ref(),
            collation: self.collation.as_ref(),
        }
        .execute(n)
        .await
    }

    /// The item's tags in association order, `None` standing in for any
    /// association whose tag record no longer exists.
    pub async fn tags_for_item(&self, item_id: Uuid) -> anyhow::Result<Vec<Option<Tag>>> {
        TagsForItem {
            records: self.records.as_ref(),
            associations: self.associations.as_ref(),
        }
        .execute(item_id)
        .await
    }
}
