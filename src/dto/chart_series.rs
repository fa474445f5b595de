use crate::common::*;

#[doc = "Clicks and impressions summed over one calendar date"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub clicks: i64,
    pub impressions: i64,
}

#[doc = "One aggregated value per grouping key (campaign or ad group)"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct GroupValue {
    pub key: String,
    pub value: f64,
}
