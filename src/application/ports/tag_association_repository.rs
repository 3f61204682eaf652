use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::tags::tag::TagItemAssociation;

/// Lookup over the tag-item join table, owned and written elsewhere.
#[async_trait]
pub trait TagAssociationRepository: Send + Sync {
    /// All associations referencing the item, in stored order. The order is
    /// meaningful: resolved tag lists preserve it. An item with no tags yields
    /// an empty vec.
    async fn list_by_item_id(&self, item_id: Uuid) -> anyhow::Result<Vec<TagItemAssociation>>;
}
