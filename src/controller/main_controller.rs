use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::metric::{metric_column::*, metric_table::*};

use crate::dto::{chart_outcome::*, fetch_result::*, workflow_report::*};

use crate::enums::{ctr_status::*, data_source::*};

use crate::traits::service_traits::{
    chart_service::*, derived_field_service::*, extract_service::*, fallback_service::*,
};

pub const PREVIEW_ROWS: usize = 5;

pub const TREND_CHART_FILE: &str = "performance_trend.png";
pub const COST_PIE_CHART_FILE: &str = "campaign_cost_distribution.png";
pub const CLICKS_PIE_CHART_FILE: &str = "campaign_clicks_distribution.png";
pub const CTR_BAR_CHART_FILE: &str = "ad_group_ctr_comparison.png";
pub const CONVERSIONS_BAR_CHART_FILE: &str = "ad_group_conversions_comparison.png";

#[derive(Debug, new)]
pub struct MainController<
    E: ExtractService,
    F: FallbackService,
    D: DerivedFieldService,
    C: ChartService,
> {
    extract_service: E,
    fallback_service: F,
    derived_field_service: D,
    chart_service: C,
}

impl<E, F, D, C> MainController<E, F, D, C>
where
    E: ExtractService,
    F: FallbackService,
    D: DerivedFieldService,
    C: ChartService,
{
    #[doc = r#"
        Runs the whole pipeline once.

        1. Creates `output_dir` if it does not exist
        2. Fetches ad performance rows from the warehouse, switching to the
           sample table when nothing comes back
        3. Logs a preview of the first rows
        4. Makes sure the table has a `ctr` column
        5. Draws the five charts in a fixed order; one chart failing or being
           skipped does not stop the others

        # Arguments
        * `project_id` / `dataset_id` / `table_id` - source table coordinates
        * `output_dir` - directory the PNG files are written into

        # Returns
        * `WorkflowReport` - data source, row count and what happened to each chart
    "#]
    pub async fn main_task(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
        output_dir: &Path,
    ) -> WorkflowReport {
        /* 1. Output directory */
        match ensure_dir(output_dir).await {
            Ok(()) => info!("Output directory: {}", output_dir.display()),
            Err(e) => error!("[MainController->main_task] {:?}", e),
        }

        /* 2. Data, from the warehouse or the sample set */
        let (mut table, data_source): (MetricTable, DataSource) = match self
            .extract_service
            .fetch_ad_performance(project_id, dataset_id, table_id)
            .await
        {
            FetchResult::Rows(table) => (table, DataSource::Extracted),
            FetchResult::Empty(reason) => {
                warn!(
                    "Failed to fetch data from the warehouse ({}). Using sample data for demonstration.",
                    reason
                );
                (self.fallback_service.generate_sample_table(), DataSource::Fallback)
            }
        };

        /* 3. Preview */
        info!(
            "Data preview ({} source, {} rows):\n{}",
            data_source,
            table.len(),
            table.preview(PREVIEW_ROWS)
        );

        /* 4. Derived ctr */
        let ctr_status: CtrStatus = self.derived_field_service.ensure_ctr(&mut table);
        info!("ctr column status: {:?}", ctr_status);

        /* 5. Charts */
        let table: &MetricTable = &table;
        let mut charts: Vec<ChartReport> = Vec::new();

        let trend: ChartOutcome = self
            .chart_service
            .generate_trend_line_chart(table, &output_dir.join(TREND_CHART_FILE))
            .await;
        charts.push(ChartReport::new(TREND_CHART_FILE.to_string(), trend));

        for (metric, file_name) in [
            (MetricColumn::Cost, COST_PIE_CHART_FILE),
            (MetricColumn::Clicks, CLICKS_PIE_CHART_FILE),
        ] {
            let outcome: ChartOutcome = self
                .chart_service
                .generate_campaign_pie_chart(table, metric, &output_dir.join(file_name))
                .await;
            charts.push(ChartReport::new(file_name.to_string(), outcome));
        }

        let ctr_bar: ChartOutcome = if table.has_column(MetricColumn::Ctr) {
            self.chart_service
                .generate_ad_group_bar_chart(
                    table,
                    MetricColumn::Ctr,
                    &output_dir.join(CTR_BAR_CHART_FILE),
                )
                .await
        } else {
            warn!("Skipping CTR chart as 'ctr' column could not be determined or created.");
            ChartOutcome::Skipped(String::from("ctr column is not available"))
        };
        charts.push(ChartReport::new(CTR_BAR_CHART_FILE.to_string(), ctr_bar));

        let conversions_bar: ChartOutcome = self
            .chart_service
            .generate_ad_group_bar_chart(
                table,
                MetricColumn::Conversions,
                &output_dir.join(CONVERSIONS_BAR_CHART_FILE),
            )
            .await;
        charts.push(ChartReport::new(
            CONVERSIONS_BAR_CHART_FILE.to_string(),
            conversions_bar,
        ));

        let report: WorkflowReport = WorkflowReport::new(data_source, table.len(), charts);

        for chart in report.charts() {
            info!("{}: {}", chart.file_name(), chart.outcome());
        }
        info!(
            "Visualization process complete. {} of {} charts written to '{}'.",
            report.written_count(),
            report.charts().len(),
            output_dir.display()
        );

        report
    }
}
