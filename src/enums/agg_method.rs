use crate::model::metric::metric_column::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggMethod {
    Sum,
    Mean,
}

#[doc = "Rates are averaged, counts and amounts are summed"]
pub fn agg_method_for(metric: MetricColumn) -> AggMethod {
    if metric.is_rate() {
        AggMethod::Mean
    } else {
        AggMethod::Sum
    }
}
