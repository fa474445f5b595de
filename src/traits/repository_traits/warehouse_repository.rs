use crate::common::*;

use crate::dto::query_result_set::*;

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    #[doc = "Runs one SQL statement and returns every row of the result"]
    async fn run_query(&self, sql: &str) -> Result<QueryResultSet, anyhow::Error>;
}
