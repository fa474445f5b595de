use crate::model::metric::metric_table::*;

pub trait FallbackService {
    #[doc = "Deterministic sample table used when the warehouse gives nothing back"]
    fn generate_sample_table(&self) -> MetricTable;
}
