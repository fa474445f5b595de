use crate::common::*;

use crate::model::metric::metric_table::*;

#[doc = "Why the extractor came back without rows"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /* the warehouse client could not be built at startup */
    Disabled,
    /* the query ran but matched nothing */
    NoRows,
    QueryFailed(String),
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::Disabled => f.write_str("warehouse client not initialized"),
            EmptyReason::NoRows => f.write_str("query returned no rows"),
            EmptyReason::QueryFailed(cause) => write!(f, "query failed: {}", cause),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Rows(MetricTable),
    Empty(EmptyReason),
}

impl FetchResult {
    pub fn into_table(self) -> Option<MetricTable> {
        match self {
            FetchResult::Rows(table) => Some(table),
            FetchResult::Empty(_) => None,
        }
    }
}
