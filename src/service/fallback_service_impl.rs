use crate::common::*;

use crate::traits::service_traits::fallback_service::*;

use crate::model::metric::{metric_column::*, metric_row::*, metric_table::*};

use crate::utils_modules::metric_utils::*;

/* (date, clicks, impressions, cost, conversions, campaign, ad group) */
type SampleRecord = (&'static str, i64, i64, f64, i64, &'static str, &'static str);

const SAMPLE_RECORDS: [SampleRecord; 10] = [
    ("2024-01-01", 100, 1000, 50.0, 10, "Winter Sale Campaign", "Ad Group Ski"),
    ("2024-01-01", 150, 1200, 70.0, 12, "Brand Awareness Q1", "Ad Group General"),
    ("2024-01-02", 120, 1100, 60.0, 11, "Winter Sale Campaign", "Ad Group Snowboard"),
    ("2024-01-02", 180, 1500, 80.0, 15, "Brand Awareness Q1", "Ad Group Video"),
    ("2024-01-03", 90, 950, 40.0, 8, "Winter Sale Campaign", "Ad Group Boots"),
    ("2024-01-03", 110, 1050, 50.0, 9, "Brand Awareness Q1", "Ad Group Social"),
    ("2024-01-04", 200, 2000, 100.0, 20, "Spring Promo", "Ad Group Flowers"),
    ("2024-01-04", 220, 2500, 120.0, 22, "New Product Launch", "Ad Group Gadget A"),
    ("2024-01-05", 130, 1150, 65.0, 12, "Spring Promo", "Ad Group Garden"),
    ("2024-01-05", 160, 1400, 75.0, 14, "New Product Launch", "Ad Group Gadget B"),
];

#[derive(Debug, Clone, Default, new)]
pub struct FallbackServiceImpl;

impl FallbackService for FallbackServiceImpl {
    fn generate_sample_table(&self) -> MetricTable {
        let rows: Vec<MetricRow> = SAMPLE_RECORDS
            .iter()
            .map(
                |&(date, clicks, impressions, cost, conversions, campaign, ad_group)| MetricRow {
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
                    clicks: Some(clicks),
                    impressions: Some(impressions),
                    cost: Some(cost),
                    conversions: Some(conversions),
                    campaign_name: Some(campaign.to_string()),
                    ad_group_name: Some(ad_group.to_string()),
                    ctr: Some(calc_ctr_percentage(clicks, impressions)),
                },
            )
            .collect();

        MetricTable::new(MetricColumn::ALL, rows)
    }
}
