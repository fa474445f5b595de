use crate::common::*;

#[doc = r#"
    Columns of the ad performance table.

    Every stage of the pipeline talks about columns through this enum instead of
    raw strings, so a typo becomes a compile error rather than a skipped chart.
    Variant order is also the display order used by the table preview.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricColumn {
    Date,
    Clicks,
    Impressions,
    Cost,
    Conversions,
    CampaignName,
    AdGroupName,
    Ctr,
}

impl MetricColumn {
    pub const ALL: [MetricColumn; 8] = [
        MetricColumn::Date,
        MetricColumn::Clicks,
        MetricColumn::Impressions,
        MetricColumn::Cost,
        MetricColumn::Conversions,
        MetricColumn::CampaignName,
        MetricColumn::AdGroupName,
        MetricColumn::Ctr,
    ];

    #[doc = "Canonical column name, also used as the SQL alias"]
    pub fn name(&self) -> &'static str {
        match self {
            MetricColumn::Date => "date",
            MetricColumn::Clicks => "clicks",
            MetricColumn::Impressions => "impressions",
            MetricColumn::Cost => "cost",
            MetricColumn::Conversions => "conversions",
            MetricColumn::CampaignName => "campaign_name",
            MetricColumn::AdGroupName => "ad_group_name",
            MetricColumn::Ctr => "ctr",
        }
    }

    #[doc = "Human readable label used for chart titles and axes"]
    pub fn label(&self) -> &'static str {
        match self {
            MetricColumn::Date => "Date",
            MetricColumn::Clicks => "Clicks",
            MetricColumn::Impressions => "Impressions",
            MetricColumn::Cost => "Cost",
            MetricColumn::Conversions => "Conversions",
            MetricColumn::CampaignName => "Campaign",
            MetricColumn::AdGroupName => "Ad Group",
            MetricColumn::Ctr => "CTR",
        }
    }

    #[doc = "Looks a column up by name, ignoring ASCII case"]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|column| column.name().eq_ignore_ascii_case(name.trim()))
    }

    #[doc = "True for columns that hold a number and can be summed or averaged"]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            MetricColumn::Clicks
                | MetricColumn::Impressions
                | MetricColumn::Cost
                | MetricColumn::Conversions
                | MetricColumn::Ctr
        )
    }

    #[doc = "A column whose name reads like a ratio is averaged rather than summed"]
    pub fn is_rate(&self) -> bool {
        let name: String = self.name().to_lowercase();
        name.contains("ctr") || name.contains("rate")
    }
}

impl fmt::Display for MetricColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricColumn {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| anyhow!("[MetricColumn->from_str] Unknown column: {}", s))
    }
}
