use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Trend,
    CampaignDistribution,
    AdGroupComparison,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Trend => f.write_str("trend line chart"),
            ChartKind::CampaignDistribution => f.write_str("campaign distribution pie chart"),
            ChartKind::AdGroupComparison => f.write_str("ad group comparison bar chart"),
        }
    }
}
