use serde_json::Value;

use crate::application::ports::record_store::{FilterOperator, Query, RecordStore};
use crate::domain::tags::tag::{self, Tag};

pub struct FindTagByTitle<'a, R: RecordStore + ?Sized> {
    pub records: &'a R,
}

impl<'a, R: RecordStore + ?Sized> FindTagByTitle<'a, R> {
    /// Exact-equality lookup on the title field. The input is passed through
    /// unnormalized; case and whitespace sensitivity are the store's call.
    pub async fn execute(&self, title: &str) -> anyhow::Result<Option<Tag>> {
        let query = Query::new()
            .filter(
                tag::fields::TITLE,
                FilterOperator::Equal,
                Value::String(title.to_owned()),
            )
            .page_size(1)
            .page_count(1);

        let page = self.records.query(tag::COLLECTION, query).await?;
        match page.records.first() {
            None => {
                tracing::debug!(%title, "no tag with this title");
                Ok(None)
            }
            Some(record) => Ok(Some(Tag::from_record(record)?)),
        }
    }
}
