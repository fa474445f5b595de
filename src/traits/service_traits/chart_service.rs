use crate::common::*;

use crate::dto::chart_outcome::*;
use crate::model::metric::{metric_column::*, metric_table::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Line chart of clicks and impressions summed per date
        # Arguments
        * `table` - needs `date`, `clicks` and `impressions`
        * `output_path` - where the PNG is written, replacing any existing file
    "]
    async fn generate_trend_line_chart(&self, table: &MetricTable, output_path: &Path) -> ChartOutcome;

    #[doc = "
        Pie chart of `metric` summed per campaign, non-positive campaigns left out
        # Arguments
        * `table` - needs `campaign_name` and `metric`
        * `metric` - column to sum, e.g. cost or clicks
        * `output_path` - where the PNG is written, replacing any existing file
    "]
    async fn generate_campaign_pie_chart(
        &self,
        table: &MetricTable,
        metric: MetricColumn,
        output_path: &Path,
    ) -> ChartOutcome;

    #[doc = "
        Bar chart of `metric` per ad group, highest first. Rates are averaged, everything else summed
        # Arguments
        * `table` - needs `ad_group_name` and `metric`
        * `metric` - column to compare, e.g. ctr or conversions
        * `output_path` - where the PNG is written, replacing any existing file
    "]
    async fn generate_ad_group_bar_chart(
        &self,
        table: &MetricTable,
        metric: MetricColumn,
        output_path: &Path,
    ) -> ChartOutcome;
}
