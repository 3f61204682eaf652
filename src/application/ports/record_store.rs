use async_trait::async_trait;
use serde_json::Value;

/// Comparison applied by a [`PropertyFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-property predicate evaluated by the store. Comparison semantics
/// (case folding, whitespace) are the store's, not ours.
#[derive(Debug, Clone)]
pub struct PropertyFilter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: Value,
}

#[derive(Debug, Clone)]
pub struct SortField {
    pub field: String,
    pub direction: SortDirection,
}

/// Declarative query against one record collection: property filters, sort
/// fields applied in order, and paging. Built with consuming builder calls:
///
/// ```ignore
/// Query::new()
///     .sort(fields::PUBLISHED_REFERENCE_COUNT, SortDirection::Descending)
///     .page_size(10)
///     .page_count(1)
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    pub filters: Vec<PropertyFilter>,
    pub sorts: Vec<SortField>,
    /// 1-based page to return.
    pub current_page: usize,
    pub page_size: Option<usize>,
    /// Upper bound on pages the store should materialize, when it supports one.
    pub page_count: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sorts: Vec::new(),
            current_page: 1,
            page_size: None,
            page_count: None,
        }
    }

    pub fn filter(
        mut self,
        field: impl Into<String>,
        operator: FilterOperator,
        value: Value,
    ) -> Self {
        self.filters.push(PropertyFilter {
            field: field.into(),
            operator,
            value,
        });
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sorts.push(SortField {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn page_count(mut self, page_count: usize) -> Self {
        self.page_count = Some(page_count);
        self
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

/// One page of query results, ordered as the store returned them.
#[derive(Debug, Clone)]
pub struct RecordPage {
    /// Matches across all pages, not just this one.
    pub total_count: u64,
    pub records: Vec<Value>,
}

/// Generic persistence collaborator underlying every entity in the system.
/// Rows travel as loosely typed JSON; decoding into domain models happens on
/// this side of the boundary.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn query(&self, collection: &str, query: Query) -> anyhow::Result<RecordPage>;

    /// Direct lookup by object id. `None` when no such record exists.
    async fn get(&self, collection: &str, id: &str) -> anyhow::Result<Option<Value>>;
}
