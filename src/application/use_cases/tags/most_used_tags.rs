use crate::application::ports::record_store::{Query, RecordStore, SortDirection};
use crate::application::ports::title_collation::TitleCollation;
use crate::domain::tags::tag::{self, Tag};

pub struct MostUsedTags<'a, R, C>
where
    R: RecordStore + ?Sized,
    C: TitleCollation + ?Sized,
{
    pub records: &'a R,
    pub collation: &'a C,
}

impl<'a, R, C> MostUsedTags<'a, R, C>
where
    R: RecordStore + ?Sized,
    C: TitleCollation + ?Sized,
{
    /// Top `n` tags by published reference count, returned in locale order on
    /// `title`. Two distinct passes: the count ordering only decides which
    /// tags make the page, then collation alone decides the returned order.
    /// Fusing them into one composite sort would change what callers see.
    pub async fn execute(&self, n: usize) -> anyhow::Result<Vec<Tag>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let query = Query::new()
            .sort(
                tag::fields::PUBLISHED_REFERENCE_COUNT,
                SortDirection::Descending,
            )
            .page(1)
            .page_size(n)
            .page_count(1);

        let page = self.records.query(tag::COLLECTION, query).await?;
        let mut tags = page
            .records
            .iter()
            .map(Tag::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        tags.sort_by(|a, b| self.collation.compare(&a.title, &b.title));
        Ok(tags)
    }
}
