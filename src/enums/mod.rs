pub mod agg_method;
pub mod chart_kind;
pub mod ctr_status;
pub mod data_source;
