use crate::common::*;

use crate::traits::service_traits::derived_field_service::*;

use crate::model::metric::{metric_column::*, metric_row::*, metric_table::*};

use crate::enums::ctr_status::*;

use crate::utils_modules::metric_utils::*;

#[derive(Debug, Clone, Default, new)]
pub struct DerivedFieldServiceImpl;

impl DerivedFieldService for DerivedFieldServiceImpl {
    #[doc = r#"
        Adds a percentage `ctr` column when the table lacks one.

        1. `ctr` already present: left untouched
        2. `clicks` and `impressions` present: `100 * clicks / impressions`, 0 when
           impressions are 0 or either cell is NULL
        3. otherwise, if `ad_group_name` is present: all zeros, so the ad group
           comparison still has something to draw
        4. otherwise: unchanged, the CTR chart will be skipped
    "#]
    fn ensure_ctr(&self, table: &mut MetricTable) -> CtrStatus {
        if table.has_column(MetricColumn::Ctr) {
            return CtrStatus::AlreadyPresent;
        }

        if table.missing_columns(&[MetricColumn::Clicks, MetricColumn::Impressions]).is_empty() {
            info!("Calculating 'ctr' as it's missing...");
            table.attach_column(MetricColumn::Ctr, |row: &mut MetricRow| {
                let ctr: f64 = match (row.clicks, row.impressions) {
                    (Some(clicks), Some(impressions)) => calc_ctr_percentage(clicks, impressions),
                    _ => 0.0,
                };
                row.ctr = Some(ctr);
            });
            return CtrStatus::Computed;
        }

        warn!("Cannot compute 'ctr': 'clicks' or 'impressions' is missing.");

        if table.has_column(MetricColumn::AdGroupName) {
            table.attach_column(MetricColumn::Ctr, |row: &mut MetricRow| row.ctr = Some(0.0));
            return CtrStatus::ZeroFilled;
        }

        CtrStatus::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_table(clicks: &[i64], impressions: &[i64]) -> MetricTable {
        let rows: Vec<MetricRow> = clicks
            .iter()
            .zip(impressions)
            .map(|(c, i)| MetricRow {
                clicks: Some(*c),
                impressions: Some(*i),
                ad_group_name: Some("g".to_string()),
                ..MetricRow::default()
            })
            .collect();

        MetricTable::new(
            [MetricColumn::Clicks, MetricColumn::Impressions, MetricColumn::AdGroupName],
            rows,
        )
    }

    fn ctr_values(table: &MetricTable) -> Vec<Option<f64>> {
        table.rows().iter().map(|r| r.ctr).collect()
    }

    #[test]
    fn computes_percentage_with_zero_guard() {
        let mut table: MetricTable = counts_table(&[100, 150], &[1000, 0]);

        let status: CtrStatus = DerivedFieldServiceImpl::new().ensure_ctr(&mut table);

        assert_eq!(status, CtrStatus::Computed);
        assert!(table.has_column(MetricColumn::Ctr));
        assert_eq!(ctr_values(&table), vec![Some(10.0), Some(0.0)]);
    }

    #[test]
    fn every_row_follows_the_rule() {
        let clicks: Vec<i64> = vec![0, 7, 33, 500, 12, 0];
        let impressions: Vec<i64> = vec![0, 0, 330, 400, 4096, 90];
        let mut table: MetricTable = counts_table(&clicks, &impressions);

        DerivedFieldServiceImpl::new().ensure_ctr(&mut table);

        for (row, (c, i)) in table.rows().iter().zip(clicks.iter().zip(&impressions)) {
            let ctr: f64 = row.ctr.expect("ctr");
            assert!(ctr.is_finite());
            if *i == 0 {
                assert_eq!(ctr, 0.0);
            } else {
                assert!((ctr - 100.0 * *c as f64 / *i as f64).abs() < 1e-9);
            }
        }
        /* clicks above impressions is kept, not clamped */
        assert!((table.rows()[3].ctr.unwrap() - 125.0).abs() < 1e-9);
    }

    #[test]
    fn existing_ctr_is_left_alone() {
        let mut table: MetricTable = counts_table(&[1], &[2]);
        table.attach_column(MetricColumn::Ctr, |r| r.ctr = Some(0.5));

        let status: CtrStatus = DerivedFieldServiceImpl::new().ensure_ctr(&mut table);

        assert_eq!(status, CtrStatus::AlreadyPresent);
        assert_eq!(ctr_values(&table), vec![Some(0.5)]);
    }

    #[test]
    fn zero_fill_when_only_ad_groups_exist() {
        let row: MetricRow = MetricRow {
            ad_group_name: Some("g".to_string()),
            clicks: Some(3),
            ..MetricRow::default()
        };
        let mut table: MetricTable =
            MetricTable::new([MetricColumn::AdGroupName, MetricColumn::Clicks], vec![row]);

        let status: CtrStatus = DerivedFieldServiceImpl::new().ensure_ctr(&mut table);

        assert_eq!(status, CtrStatus::ZeroFilled);
        assert_eq!(ctr_values(&table), vec![Some(0.0)]);
    }

    #[test]
    fn nothing_to_do_leaves_table_unchanged() {
        let row: MetricRow = MetricRow {
            cost: Some(1.0),
            ..MetricRow::default()
        };
        let mut table: MetricTable = MetricTable::new([MetricColumn::Cost], vec![row]);
        let before: MetricTable = table.clone();

        let status: CtrStatus = DerivedFieldServiceImpl::new().ensure_ctr(&mut table);

        assert_eq!(status, CtrStatus::Unavailable);
        assert_eq!(table, before);
    }
}
