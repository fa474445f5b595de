use crate::common::*;

use crate::dto::chart_outcome::*;

use crate::enums::data_source::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartReport {
    pub file_name: String,
    pub outcome: ChartOutcome,
}

#[doc = "Summary of one workflow run: where the data came from and what each chart did"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct WorkflowReport {
    pub data_source: DataSource,
    pub row_count: usize,
    pub charts: Vec<ChartReport>,
}

impl WorkflowReport {
    pub fn written_count(&self) -> usize {
        self.charts.iter().filter(|c| c.outcome.is_written()).count()
    }

    pub fn outcome_of(&self, file_name: &str) -> Option<&ChartOutcome> {
        self.charts
            .iter()
            .find(|c| c.file_name == file_name)
            .map(|c| &c.outcome)
    }
}
