use uuid::Uuid;

use crate::application::ports::record_store::RecordStore;
use crate::application::ports::tag_association_repository::TagAssociationRepository;
use crate::domain::tags::tag::{self, Tag};

pub struct TagsForItem<'a, R, A>
where
    R: RecordStore + ?Sized,
    A: TagAssociationRepository + ?Sized,
{
    pub records: &'a R,
    pub associations: &'a A,
}

impl<'a, R, A> TagsForItem<'a, R, A>
where
    R: RecordStore + ?Sized,
    A: TagAssociationRepository + ?Sized,
{
    /// Resolves the item's associations into full tag records, one entry per
    /// association in the order the repository returned them. An association
    /// whose tag no longer exists contributes `None` at its position rather
    /// than failing the batch; callers must tolerate the placeholder.
    pub async fn execute(&self, item_id: Uuid) -> anyhow::Result<Vec<Option<Tag>>> {
        let relations = self.associations.list_by_item_id(item_id).await?;

        let mut resolved = Vec::with_capacity(relations.len());
        for relation in relations {
            let entry = match self.records.get(tag::COLLECTION, &relation.tag_id).await? {
                Some(record) => Some(Tag::from_record(&record)?),
                None => {
                    tracing::debug!(
                        %item_id,
                        tag_id = %relation.tag_id,
                        "association points at a tag that no longer exists"
                    );
                    None
                }
            };
            resolved.push(entry);
        }
        Ok(resolved)
    }
}
