pub mod metric_column;
pub mod metric_row;
pub mod metric_table;
