use crate::common::*;

use crate::dto::fetch_result::*;

#[async_trait]
pub trait ExtractService {
    #[doc = "
        Fetch ad performance rows from `project.dataset.table`
        # Arguments
        * `project_id` - warehouse project identifier
        * `dataset_id` - dataset holding the table
        * `table_id` - ad performance table
        # Returns
        * `FetchResult::Rows` with at least one row, or `FetchResult::Empty` with the reason
    "]
    async fn fetch_ad_performance(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
    ) -> FetchResult;
}
