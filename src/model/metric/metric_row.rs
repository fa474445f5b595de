use crate::common::*;

use crate::model::metric::metric_column::*;

#[doc = r#"
    One row of ad performance data.

    Each field is optional because a cell can be NULL in the warehouse, and
    because a column may be missing from the table altogether. Which columns
    exist is decided by `MetricTable`, not by the row.
"#]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct MetricRow {
    pub date: Option<NaiveDate>,
    pub clicks: Option<i64>,
    pub impressions: Option<i64>,
    pub cost: Option<f64>,
    pub conversions: Option<i64>,
    pub campaign_name: Option<String>,
    pub ad_group_name: Option<String>,
    pub ctr: Option<f64>,
}

impl MetricRow {
    #[doc = "Numeric value of a metric column, or None for NULL or non-numeric columns"]
    pub fn metric_value(&self, column: MetricColumn) -> Option<f64> {
        match column {
            MetricColumn::Clicks => self.clicks.map(|v| v as f64),
            MetricColumn::Impressions => self.impressions.map(|v| v as f64),
            MetricColumn::Cost => self.cost,
            MetricColumn::Conversions => self.conversions.map(|v| v as f64),
            MetricColumn::Ctr => self.ctr,
            MetricColumn::Date | MetricColumn::CampaignName | MetricColumn::AdGroupName => None,
        }
    }

    #[doc = "Grouping key of a string column"]
    pub fn group_key(&self, column: MetricColumn) -> Option<&str> {
        match column {
            MetricColumn::CampaignName => self.campaign_name.as_deref(),
            MetricColumn::AdGroupName => self.ad_group_name.as_deref(),
            _ => None,
        }
    }

    #[doc = "Drops the cell of a column, used when the column is not part of the table"]
    pub fn clear(&mut self, column: MetricColumn) {
        match column {
            MetricColumn::Date => self.date = None,
            MetricColumn::Clicks => self.clicks = None,
            MetricColumn::Impressions => self.impressions = None,
            MetricColumn::Cost => self.cost = None,
            MetricColumn::Conversions => self.conversions = None,
            MetricColumn::CampaignName => self.campaign_name = None,
            MetricColumn::AdGroupName => self.ad_group_name = None,
            MetricColumn::Ctr => self.ctr = None,
        }
    }

    #[doc = "Cell rendered as text for the log preview"]
    pub fn display_cell(&self, column: MetricColumn) -> String {
        let cell: Option<String> = match column {
            MetricColumn::Date => self.date.map(|d| d.format("%Y-%m-%d").to_string()),
            MetricColumn::Clicks => self.clicks.map(|v| v.to_string()),
            MetricColumn::Impressions => self.impressions.map(|v| v.to_string()),
            MetricColumn::Cost => self.cost.map(|v| format!("{:.2}", v)),
            MetricColumn::Conversions => self.conversions.map(|v| v.to_string()),
            MetricColumn::CampaignName => self.campaign_name.clone(),
            MetricColumn::AdGroupName => self.ad_group_name.clone(),
            MetricColumn::Ctr => self.ctr.map(|v| format!("{:.4}", v)),
        };

        cell.unwrap_or_else(|| String::from("NULL"))
    }
}
