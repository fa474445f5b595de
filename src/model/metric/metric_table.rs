use crate::common::*;

use crate::model::metric::{metric_column::*, metric_row::*};

use crate::dto::chart_series::*;

use crate::enums::agg_method::*;

#[doc = r#"
    In-memory ad performance table shared by every stage of the workflow.

    The set of columns is declared when the table is built. Cells belonging to
    undeclared columns are cleared at that point, so `has_column` is the only
    presence check the rest of the program needs.
"#]
#[derive(Debug, Clone, Default, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct MetricTable {
    columns: BTreeSet<MetricColumn>,
    rows: Vec<MetricRow>,
}

impl MetricTable {
    pub fn new<I>(columns: I, rows: Vec<MetricRow>) -> Self
    where
        I: IntoIterator<Item = MetricColumn>,
    {
        let columns: BTreeSet<MetricColumn> = columns.into_iter().collect();
        let mut rows: Vec<MetricRow> = rows;

        for column in MetricColumn::ALL {
            if !columns.contains(&column) {
                rows.iter_mut().for_each(|row| row.clear(column));
            }
        }

        MetricTable { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: MetricColumn) -> bool {
        self.columns.contains(&column)
    }

    #[doc = "Columns from `required` that the table does not have"]
    pub fn missing_columns(&self, required: &[MetricColumn]) -> Vec<MetricColumn> {
        required
            .iter()
            .copied()
            .filter(|column| !self.has_column(*column))
            .collect()
    }

    #[doc = r#"
        Adds or replaces a whole column in one pass.

        `cell` is called once per row and writes the new value. The column is
        declared afterwards, so readers never see it half filled.
    "#]
    pub fn attach_column<F>(&mut self, column: MetricColumn, mut cell: F)
    where
        F: FnMut(&mut MetricRow),
    {
        self.rows.iter_mut().for_each(|row| cell(row));
        self.columns.insert(column);
    }

    #[doc = r#"
        Sums clicks and impressions per date.

        Rows without a date are left out. NULL counts add nothing. The result is
        ordered by ascending date.
    "#]
    pub fn sum_by_date(&self) -> Vec<DailyTrendPoint> {
        let mut daily: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();

        for row in &self.rows {
            let Some(date) = row.date else {
                continue;
            };

            let entry: &mut (i64, i64) = daily.entry(date).or_insert((0, 0));
            entry.0 += row.clicks.unwrap_or(0);
            entry.1 += row.impressions.unwrap_or(0);
        }

        daily
            .into_iter()
            .map(|(date, (clicks, impressions))| DailyTrendPoint::new(date, clicks, impressions))
            .collect()
    }

    #[doc = r#"
        Aggregates `metric` per distinct value of `key`, ordered by key.

        * `Sum`  - NULL cells add nothing, every group appears
        * `Mean` - NULL cells are not counted, groups with no value at all are dropped
    "#]
    pub fn aggregate_by_group(
        &self,
        key: MetricColumn,
        metric: MetricColumn,
        method: AggMethod,
    ) -> Vec<GroupValue> {
        let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

        for row in &self.rows {
            let Some(group) = row.group_key(key) else {
                continue;
            };

            let entry: &mut (f64, usize) = groups.entry(group).or_insert((0.0, 0));

            if let Some(value) = row.metric_value(metric) {
                entry.0 += value;
                entry.1 += 1;
            }
        }

        groups
            .into_iter()
            .filter_map(|(group, (total, count))| match method {
                AggMethod::Sum => Some(GroupValue::new(group.to_string(), total)),
                AggMethod::Mean if count > 0 => {
                    Some(GroupValue::new(group.to_string(), total / count as f64))
                }
                AggMethod::Mean => None,
            })
            .collect()
    }

    #[doc = "Fixed-width text rendering of the first `limit` rows, for the log"]
    pub fn preview(&self, limit: usize) -> String {
        let columns: Vec<MetricColumn> = self.columns.iter().copied().collect();

        let mut cells: Vec<Vec<String>> = Vec::new();
        cells.push(columns.iter().map(|c| c.name().to_string()).collect());

        for row in self.rows.iter().take(limit) {
            cells.push(columns.iter().map(|c| row.display_cell(*c)).collect());
        }

        let widths: Vec<usize> = (0..columns.len())
            .map(|i| cells.iter().map(|line| line[i].len()).max().unwrap_or(0))
            .collect();

        cells
            .iter()
            .map(|line| {
                line.iter()
                    .zip(&widths)
                    .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                    .collect::<Vec<String>>()
                    .join("  ")
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
