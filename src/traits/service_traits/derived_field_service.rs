use crate::enums::ctr_status::*;
use crate::model::metric::metric_table::*;

pub trait DerivedFieldService {
    #[doc = "Make sure the table has a `ctr` column when it can have one"]
    fn ensure_ctr(&self, table: &mut MetricTable) -> CtrStatus;
}
