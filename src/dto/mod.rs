pub mod chart_outcome;
pub mod chart_series;
pub mod fetch_result;
pub mod query_result_set;
pub mod workflow_report;
