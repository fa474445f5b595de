use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::*;
use std::path::Path;

use crate::model::metric::{metric_column::*, metric_table::*};

use crate::dto::{chart_outcome::*, chart_series::*};

use crate::enums::{agg_method::*, chart_kind::*};

use crate::utils_modules::{io_utils::*, metric_utils::*};

const BACKGROUND: RGBColor = RGBColor(255, 255, 255);
const TEXT_COLOR: RGBColor = RGBColor(40, 40, 40);
const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);
const CLICKS_COLOR: RGBColor = RGBColor(31, 119, 180);
const IMPRESSIONS_COLOR: RGBColor = RGBColor(255, 127, 14);
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

const SLICE_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

#[doc = "Daily sums for the trend chart, or the reason the chart cannot be drawn"]
pub(crate) fn prepare_trend_points(table: &MetricTable) -> Result<Vec<DailyTrendPoint>, String> {
    let missing: Vec<MetricColumn> = table.missing_columns(&[
        MetricColumn::Date,
        MetricColumn::Clicks,
        MetricColumn::Impressions,
    ]);

    if !missing.is_empty() {
        return Err(format!(
            "table is missing required columns for performance trend chart: {}",
            join_columns(&missing)
        ));
    }

    let points: Vec<DailyTrendPoint> = table.sum_by_date();

    if points.is_empty() {
        return Err(String::from("no dated rows to plot performance trend"));
    }

    Ok(points)
}

#[doc = "Positive campaign totals for the pie chart, ordered by campaign name"]
pub(crate) fn prepare_campaign_slices(
    table: &MetricTable,
    metric: MetricColumn,
) -> Result<Vec<GroupValue>, String> {
    if !metric.is_numeric() {
        return Err(format!("'{}' is not a numeric column", metric));
    }

    let missing: Vec<MetricColumn> = table.missing_columns(&[MetricColumn::CampaignName, metric]);

    if !missing.is_empty() {
        return Err(format!(
            "table is missing required columns for campaign distribution chart: {}",
            join_columns(&missing)
        ));
    }

    /* a pie slice cannot be zero or negative */
    let slices: Vec<GroupValue> = table
        .aggregate_by_group(MetricColumn::CampaignName, metric, AggMethod::Sum)
        .into_iter()
        .filter(|group| group.value > 0.0)
        .collect();

    if slices.is_empty() {
        return Err(format!(
            "no positive data available for {} to plot campaign distribution",
            metric
        ));
    }

    Ok(slices)
}

#[doc = "Per ad group values for the bar chart, highest first"]
pub(crate) fn prepare_ad_group_bars(
    table: &MetricTable,
    metric: MetricColumn,
) -> Result<Vec<GroupValue>, String> {
    if !metric.is_numeric() {
        return Err(format!("'{}' is not a numeric column", metric));
    }

    let missing: Vec<MetricColumn> = table.missing_columns(&[MetricColumn::AdGroupName, metric]);

    if !missing.is_empty() {
        return Err(format!(
            "table is missing required columns for ad group comparison chart: {}",
            join_columns(&missing)
        ));
    }

    let mut bars: Vec<GroupValue> =
        table.aggregate_by_group(MetricColumn::AdGroupName, metric, agg_method_for(metric));

    /* stable: ties keep ad group name order */
    bars.sort_by(|a, b| b.value.total_cmp(&a.value));

    if bars.is_empty() {
        return Err(format!(
            "no data available for {} to plot ad group comparison",
            metric
        ));
    }

    Ok(bars)
}

fn join_columns(columns: &[MetricColumn]) -> String {
    columns
        .iter()
        .map(|c| c.name())
        .collect::<Vec<&str>>()
        .join(", ")
}

#[derive(Debug, Clone, Default, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(&self, values: &[i64]) -> (i64, i64) {
        if values.is_empty() {
            return (0, 100);
        }

        let min_val: i64 = *values.iter().min().unwrap_or(&0);
        let max_val: i64 = *values.iter().max().unwrap_or(&100);

        let padding: i64 = ((max_val - min_val) as f64 * 0.1).max(1.0) as i64;

        let y_min: i64 = (min_val - padding).max(0);
        let y_max: i64 = max_val + padding;

        (y_min, y_max)
    }

    #[doc = "Bar chart value range: always includes zero, 10% headroom on the far side"]
    fn calculate_bar_range(&self, bars: &[GroupValue]) -> (f64, f64) {
        let max_val: f64 = bars.iter().map(|b| b.value).fold(0.0, f64::max);
        let min_val: f64 = bars.iter().map(|b| b.value).fold(0.0, f64::min);

        let y_max: f64 = if max_val > 0.0 { max_val * 1.1 } else { 1.0 };
        let y_min: f64 = if min_val < 0.0 { min_val * 1.1 } else { 0.0 };

        (y_min, y_max)
    }

    #[doc = r#"
        Runs `draw` on the blocking pool against a staging file next to
        `output_path`, then renames the staging file over the target.

        If drawing fails the staging file is removed and the target is left as
        it was, so a broken chart never replaces a good one.
    "#]
    async fn write_chart_file<F>(&self, output_path: &Path, draw: F) -> anyhow::Result<()>
    where
        F: FnOnce(&Path) -> anyhow::Result<()> + Send + 'static,
    {
        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir(parent).await?;
            }
        }

        let staging_path: PathBuf = staging_path_for(output_path);
        let draw_path: PathBuf = staging_path.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || draw(&draw_path));

        let drawing_result: anyhow::Result<()> = match handle.await {
            Ok(result) => result.context("[ChartServiceImpl->write_chart_file] drawing/present failed"),
            Err(e) => Err(anyhow!(
                "[ChartServiceImpl->write_chart_file] blocking task join failed (panic/cancelled): {:?}",
                e
            )),
        };

        let finalize: anyhow::Result<()> = match drawing_result {
            Ok(()) => tokio::fs::rename(&staging_path, output_path)
                .await
                .with_context(|| {
                    format!(
                        "[ChartServiceImpl->write_chart_file] Failed to move chart into {}",
                        output_path.display()
                    )
                }),
            Err(e) => Err(e),
        };

        if finalize.is_err() {
            self.discard_staging_file(&staging_path).await;
        }

        finalize
    }

    async fn discard_staging_file(&self, staging_path: &Path) {
        if let Err(e) = tokio::fs::remove_file(staging_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "[ChartServiceImpl->discard_staging_file] Could not remove {}: {:?}",
                    staging_path.display(),
                    e
                );
            }
        }
    }

    fn skipped(&self, kind: ChartKind, reason: String) -> ChartOutcome {
        warn!("Skipping {}: {}", kind, reason);
        ChartOutcome::Skipped(reason)
    }

    fn finish(&self, kind: ChartKind, output_path: &Path, result: anyhow::Result<()>) -> ChartOutcome {
        match result {
            Ok(()) => {
                info!("{} saved to {}", kind, output_path.display());
                ChartOutcome::Written(output_path.to_path_buf())
            }
            Err(e) => {
                error!("Error creating {}: {:?}", kind, e);
                ChartOutcome::Failed(format!("{:#}", e))
            }
        }
    }
}

fn draw_trend_chart(
    path: &Path,
    points: &[DailyTrendPoint],
    (y_min, y_max): (i64, i64),
) -> anyhow::Result<()> {
    let x_labels: Vec<String> = points
        .iter()
        .map(|p| p.date.format("%Y-%m-%d").to_string())
        .collect();
    let x_max: usize = points.len().saturating_sub(1).max(1);

    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Performance Trends Over Time",
            ("sans-serif", 32).into_font().color(&TEXT_COLOR),
        )
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Count")
        .x_labels(x_labels.len().clamp(2, 10))
        .y_labels(10)
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .x_label_style(("sans-serif", 16).into_font().color(&TEXT_COLOR))
        .y_label_style(("sans-serif", 16).into_font().color(&TEXT_COLOR))
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .y_label_formatter(&|y| format_thousands(*y))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, p)| (i, p.clicks)),
            ShapeStyle::from(&CLICKS_COLOR).stroke_width(3),
        ))?
        .label("Clicks")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CLICKS_COLOR.stroke_width(3)));

    chart.draw_series(
        points
            .iter()
            .enumerate()
            .map(|(i, p)| Circle::new((i, p.clicks), 5, CLICKS_COLOR.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, p)| (i, p.impressions)),
            ShapeStyle::from(&IMPRESSIONS_COLOR).stroke_width(3),
        ))?
        .label("Impressions")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], IMPRESSIONS_COLOR.stroke_width(3))
        });

    chart.draw_series(points.iter().enumerate().map(|(i, p)| {
        Cross::new((i, p.impressions), 6, IMPRESSIONS_COLOR.stroke_width(2))
    }))?;

    chart
        .configure_series_labels()
        .background_style(BACKGROUND.mix(0.8))
        .border_style(TEXT_COLOR)
        .label_font(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_pie_chart(path: &Path, title: &str, slices: &[GroupValue]) -> anyhow::Result<()> {
    let sizes: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let labels: Vec<String> = slices.iter().map(|s| s.key.clone()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| SLICE_PALETTE[i % SLICE_PALETTE.len()])
        .collect();

    let root = BitMapBackend::new(path, (1000, 800)).into_drawing_area();
    root.fill(&BACKGROUND)?;
    let root = root.titled(title, ("sans-serif", 32).into_font().color(&TEXT_COLOR))?;

    let (width, height) = root.dim_in_pixel();
    let center: (i32, i32) = ((width / 2) as i32, (height / 2) as i32);
    let radius: f64 = width.min(height) as f64 * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR));
    pie.percentages(("sans-serif", radius * 0.08).into_font().color(&BACKGROUND));

    root.draw(&pie)?;
    root.present()?;
    Ok(())
}

fn draw_bar_chart(
    path: &Path,
    title: &str,
    y_desc: &str,
    bars: &[GroupValue],
    (y_min, y_max): (f64, f64),
) -> anyhow::Result<()> {
    let x_labels: Vec<String> = bars.iter().map(|b| b.key.clone()).collect();

    let root = BitMapBackend::new(path, (1400, 700)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32).into_font().color(&TEXT_COLOR))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d((0..bars.len()).into_segmented(), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Ad Group")
        .y_desc(y_desc)
        .x_labels(bars.len() + 1)
        .y_labels(10)
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .x_label_style(("sans-serif", 13).into_font().color(&TEXT_COLOR))
        .y_label_style(("sans-serif", 16).into_font().color(&TEXT_COLOR))
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => x_labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(8)
            .data(bars.iter().enumerate().map(|(i, b)| (i, b.value))),
    )?;

    root.present()?;
    Ok(())
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_trend_line_chart(&self, table: &MetricTable, output_path: &Path) -> ChartOutcome {
        let points: Vec<DailyTrendPoint> = match prepare_trend_points(table) {
            Ok(points) => points,
            Err(reason) => return self.skipped(ChartKind::Trend, reason),
        };

        /* Calculate y_range before moving into closure */
        let all_values: Vec<i64> = points
            .iter()
            .flat_map(|p| [p.clicks, p.impressions])
            .collect();
        let y_range: (i64, i64) = self.calculate_y_range(&all_values);

        let result: anyhow::Result<()> = self
            .write_chart_file(output_path, move |path| draw_trend_chart(path, &points, y_range))
            .await;

        self.finish(ChartKind::Trend, output_path, result)
    }

    async fn generate_campaign_pie_chart(
        &self,
        table: &MetricTable,
        metric: MetricColumn,
        output_path: &Path,
    ) -> ChartOutcome {
        let slices: Vec<GroupValue> = match prepare_campaign_slices(table, metric) {
            Ok(slices) => slices,
            Err(reason) => return self.skipped(ChartKind::CampaignDistribution, reason),
        };

        let title: String = format!("Campaign Distribution by {}", metric.label());

        let result: anyhow::Result<()> = self
            .write_chart_file(output_path, move |path| draw_pie_chart(path, &title, &slices))
            .await;

        self.finish(ChartKind::CampaignDistribution, output_path, result)
    }

    async fn generate_ad_group_bar_chart(
        &self,
        table: &MetricTable,
        metric: MetricColumn,
        output_path: &Path,
    ) -> ChartOutcome {
        let bars: Vec<GroupValue> = match prepare_ad_group_bars(table, metric) {
            Ok(bars) => bars,
            Err(reason) => return self.skipped(ChartKind::AdGroupComparison, reason),
        };

        let title: String = format!("Ad Group Comparison by {}", metric.label());
        let y_desc: &'static str = metric.label();
        let y_range: (f64, f64) = self.calculate_bar_range(&bars);

        let result: anyhow::Result<()> = self
            .write_chart_file(output_path, move |path| {
                draw_bar_chart(path, &title, y_desc, &bars, y_range)
            })
            .await;

        self.finish(ChartKind::AdGroupComparison, output_path, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::metric::metric_row::*;
    use crate::service::{derived_field_service_impl::*, fallback_service_impl::*};
    use crate::traits::service_traits::{derived_field_service::*, fallback_service::*};

    fn campaign_row(campaign: &str, ad_group: &str, cost: f64, conversions: i64, ctr: f64) -> MetricRow {
        MetricRow {
            cost: Some(cost),
            conversions: Some(conversions),
            ctr: Some(ctr),
            campaign_name: Some(campaign.to_string()),
            ad_group_name: Some(ad_group.to_string()),
            ..MetricRow::default()
        }
    }

    fn grouped_table(rows: Vec<MetricRow>) -> MetricTable {
        MetricTable::new(
            [
                MetricColumn::Cost,
                MetricColumn::Conversions,
                MetricColumn::Ctr,
                MetricColumn::CampaignName,
                MetricColumn::AdGroupName,
            ],
            rows,
        )
    }

    fn keys(values: &[GroupValue]) -> Vec<&str> {
        values.iter().map(|v| v.key.as_str()).collect()
    }

    #[test]
    fn pie_drops_non_positive_campaigns() {
        let table: MetricTable = grouped_table(vec![
            campaign_row("A", "a1", 10.0, 1, 1.0),
            campaign_row("B", "b1", 0.0, 1, 1.0),
            campaign_row("C", "c1", -5.0, 1, 1.0),
            campaign_row("C", "c2", 3.0, 1, 1.0),
            campaign_row("D", "d1", 2.5, 1, 1.0),
        ]);

        let slices: Vec<GroupValue> =
            prepare_campaign_slices(&table, MetricColumn::Cost).expect("slices");

        assert_eq!(keys(&slices), vec!["A", "D"]);
        assert!(slices.iter().all(|s| s.value > 0.0));
    }

    #[test]
    fn bars_use_mean_for_rates_and_sum_for_counts() {
        let table: MetricTable = grouped_table(vec![
            campaign_row("A", "x", 1.0, 5, 2.0),
            campaign_row("A", "x", 1.0, 5, 4.0),
            campaign_row("A", "y", 1.0, 20, 1.0),
            campaign_row("A", "z", 1.0, 1, 9.0),
        ]);

        let ctr_bars: Vec<GroupValue> =
            prepare_ad_group_bars(&table, MetricColumn::Ctr).expect("ctr bars");
        assert_eq!(keys(&ctr_bars), vec!["z", "x", "y"]);
        assert!((ctr_bars[1].value - 3.0).abs() < 1e-9);

        let conversion_bars: Vec<GroupValue> =
            prepare_ad_group_bars(&table, MetricColumn::Conversions).expect("conversion bars");
        assert_eq!(keys(&conversion_bars), vec!["y", "x", "z"]);
        assert!((conversion_bars[1].value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn bars_are_sorted_descending() {
        let table: MetricTable = grouped_table(
            (0..12)
                .map(|i| campaign_row("A", &format!("g{:02}", i), 1.0, (i * 7) % 5, 1.0))
                .collect(),
        );

        let bars: Vec<GroupValue> =
            prepare_ad_group_bars(&table, MetricColumn::Conversions).expect("bars");

        assert!(bars.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn trend_needs_date_clicks_and_impressions() {
        let table: MetricTable = grouped_table(vec![campaign_row("A", "x", 1.0, 1, 1.0)]);
        let reason: String = prepare_trend_points(&table).expect_err("should skip");

        assert!(reason.contains("date"));
        assert!(reason.contains("clicks"));
    }

    #[test]
    fn y_range_is_padded_and_non_negative() {
        let service: ChartServiceImpl = ChartServiceImpl::new();

        assert_eq!(service.calculate_y_range(&[]), (0, 100));
        assert_eq!(service.calculate_y_range(&[100, 1100]), (0, 1200));
        assert_eq!(service.calculate_y_range(&[5, 5]), (4, 6));
        assert_eq!(
            service.calculate_bar_range(&[GroupValue::new("a".to_string(), -2.0)]),
            (-2.2, 1.0)
        );
    }

    #[tokio::test]
    async fn all_non_positive_pie_is_skipped_without_a_file() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("tempdir");
        let output: PathBuf = dir.path().join("campaign_cost_distribution.png");
        let table: MetricTable = grouped_table(vec![
            campaign_row("A", "x", 0.0, 1, 1.0),
            campaign_row("B", "y", -1.0, 1, 1.0),
        ]);

        let outcome: ChartOutcome = ChartServiceImpl::new()
            .generate_campaign_pie_chart(&table, MetricColumn::Cost, &output)
            .await;

        assert!(outcome.is_skipped());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn missing_ad_group_column_is_skipped_without_a_file() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("tempdir");
        let output: PathBuf = dir.path().join("ad_group_ctr_comparison.png");
        let table: MetricTable = MetricTable::new(
            [MetricColumn::Ctr],
            vec![MetricRow {
                ctr: Some(1.0),
                ..MetricRow::default()
            }],
        );

        let outcome: ChartOutcome = ChartServiceImpl::new()
            .generate_ad_group_bar_chart(&table, MetricColumn::Ctr, &output)
            .await;

        assert!(outcome.is_skipped());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn failed_draw_leaves_no_files_behind() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("tempdir");
        let output: PathBuf = dir.path().join("broken.png");
        std::fs::write(&output, b"previous chart").expect("seed");

        let result: anyhow::Result<()> = ChartServiceImpl::new()
            .write_chart_file(&output, |_path| Err(anyhow!("font not found")))
            .await;

        assert!(result.is_err());
        assert_eq!(std::fs::read(&output).expect("still there"), b"previous chart");
        assert!(!staging_path_for(&output).exists());
    }

    #[tokio::test]
    async fn successful_draw_replaces_the_target() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("tempdir");
        let output: PathBuf = dir.path().join("nested/chart.png");

        for content in ["first", "second"] {
            ChartServiceImpl::new()
                .write_chart_file(&output, move |path| {
                    std::fs::write(path, content)?;
                    Ok(())
                })
                .await
                .expect("write");
        }

        assert_eq!(std::fs::read_to_string(&output).expect("read"), "second");
        assert!(!staging_path_for(&output).exists());
    }

    #[tokio::test]
    async fn rerendering_a_pie_overwrites_the_previous_image() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("tempdir");
        let output: PathBuf = dir.path().join("campaign_clicks_distribution.png");
        let service: ChartServiceImpl = ChartServiceImpl::new();

        let first: ChartOutcome = service
            .generate_campaign_pie_chart(
                &grouped_table(vec![
                    campaign_row("A", "x", 10.0, 1, 1.0),
                    campaign_row("B", "y", 30.0, 1, 1.0),
                ]),
                MetricColumn::Cost,
                &output,
            )
            .await;
        assert_eq!(first, ChartOutcome::Written(output.clone()));
        let first_bytes: Vec<u8> = std::fs::read(&output).expect("first image");

        let second: ChartOutcome = service
            .generate_campaign_pie_chart(
                &grouped_table(vec![campaign_row("Only", "z", 5.0, 1, 1.0)]),
                MetricColumn::Cost,
                &output,
            )
            .await;
        assert_eq!(second, ChartOutcome::Written(output.clone()));

        let second_bytes: Vec<u8> = std::fs::read(&output).expect("second image");
        assert_ne!(first_bytes, second_bytes);
        assert!(!staging_path_for(&output).exists());

        let files: Vec<PathBuf> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").path())
            .collect();
        assert_eq!(files, vec![output]);
    }

    #[tokio::test]
    async fn sample_table_renders_every_chart_kind() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("tempdir");
        let mut table: MetricTable = FallbackServiceImpl::new().generate_sample_table();
        DerivedFieldServiceImpl::new().ensure_ctr(&mut table);
        let service: ChartServiceImpl = ChartServiceImpl::new();

        let trend_path: PathBuf = dir.path().join("performance_trend.png");
        let pie_path: PathBuf = dir.path().join("campaign_cost_distribution.png");
        let ctr_path: PathBuf = dir.path().join("ad_group_ctr_comparison.png");
        let conversions_path: PathBuf = dir.path().join("ad_group_conversions_comparison.png");

        let outcomes: Vec<(ChartOutcome, &PathBuf)> = vec![
            (service.generate_trend_line_chart(&table, &trend_path).await, &trend_path),
            (
                service
                    .generate_campaign_pie_chart(&table, MetricColumn::Cost, &pie_path)
                    .await,
                &pie_path,
            ),
            (
                service
                    .generate_ad_group_bar_chart(&table, MetricColumn::Ctr, &ctr_path)
                    .await,
                &ctr_path,
            ),
            (
                service
                    .generate_ad_group_bar_chart(&table, MetricColumn::Conversions, &conversions_path)
                    .await,
                &conversions_path,
            ),
        ];

        for (outcome, path) in outcomes {
            assert_eq!(outcome, ChartOutcome::Written(path.clone()));
            let size: u64 = std::fs::metadata(path).expect("chart file").len();
            assert!(size > 0, "{} is empty", path.display());
            assert!(!staging_path_for(path).exists());
        }
    }
}
