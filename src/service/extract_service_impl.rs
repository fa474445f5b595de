use crate::common::*;

use crate::traits::{repository_traits::warehouse_repository::*, service_traits::extract_service::*};

use crate::model::metric::{metric_column::*, metric_row::*, metric_table::*};

use crate::dto::{fetch_result::*, query_result_set::*};

use crate::utils_modules::traits::*;

/* Physical column names in the source table, in select order */
const SOURCE_COLUMNS: [(&str, MetricColumn); 7] = [
    ("clicks_column", MetricColumn::Clicks),
    ("impressions_column", MetricColumn::Impressions),
    ("cost_column", MetricColumn::Cost),
    ("conversions_column", MetricColumn::Conversions),
    ("campaign_name_column", MetricColumn::CampaignName),
    ("ad_group_name_column", MetricColumn::AdGroupName),
    ("date_column", MetricColumn::Date),
];

#[doc = r#"
    The one query this program runs: the seven raw columns aliased to their
    canonical names plus a zero-guarded `ctr` ratio.
"#]
pub fn build_ad_performance_query(project_id: &str, dataset_id: &str, table_id: &str) -> String {
    let select_list: String = SOURCE_COLUMNS
        .iter()
        .map(|(source, column)| format!("      {} AS {},", source, column.name()))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"
    SELECT
{select_list}
      CASE
        WHEN impressions_column = 0 THEN 0
        ELSE clicks_column / impressions_column
      END AS {ctr}
    FROM
      `{project_id}.{dataset_id}.{table_id}`
"#,
        ctr = MetricColumn::Ctr.name(),
    )
}

#[doc = r#"
    Turns a raw result set into a `MetricTable`.

    Fields are matched to columns by name; fields that are not metric columns
    are ignored. The table declares exactly the matched columns.
"#]
pub fn convert_result_set(result_set: &QueryResultSet) -> Result<MetricTable, anyhow::Error> {
    let mapping: Vec<Option<(MetricColumn, &str)>> = result_set
        .fields()
        .iter()
        .map(|field| {
            MetricColumn::from_name(field.name()).map(|column| (column, field.field_type().as_str()))
        })
        .collect();

    let columns: Vec<MetricColumn> = mapping.iter().flatten().map(|(column, _)| *column).collect();

    let rows: Vec<MetricRow> = result_set
        .rows()
        .iter()
        .enumerate()
        .map(|(row_idx, raw_row)| {
            let cells: &Vec<Value> = raw_row
                .get("f")
                .and_then(|f| f.as_array())
                .ok_or_else(|| {
                    anyhow!("[convert_result_set] row {} has no 'f' array", row_idx)
                })?;

            let mut row: MetricRow = MetricRow::default();

            for (cell, target) in cells.iter().zip(&mapping) {
                let Some((column, field_type)) = target else {
                    continue;
                };

                decode_into(&mut row, *column, cell, field_type)
                    .with_context(|| format!("[convert_result_set] row {}, column {}", row_idx, column))?;
            }

            Ok::<MetricRow, anyhow::Error>(row)
        })
        .collect::<Result<_, _>>()?;

    Ok(MetricTable::new(columns, rows))
}

fn decode_into(
    row: &mut MetricRow,
    column: MetricColumn,
    cell: &Value,
    field_type: &str,
) -> Result<(), anyhow::Error> {
    match column {
        MetricColumn::Date => row.date = decode_cell::<NaiveDate>(cell, field_type)?,
        MetricColumn::Clicks => row.clicks = decode_cell::<i64>(cell, field_type)?,
        MetricColumn::Impressions => row.impressions = decode_cell::<i64>(cell, field_type)?,
        MetricColumn::Cost => row.cost = decode_cell::<f64>(cell, field_type)?,
        MetricColumn::Conversions => row.conversions = decode_cell::<i64>(cell, field_type)?,
        MetricColumn::CampaignName => row.campaign_name = decode_cell::<String>(cell, field_type)?,
        MetricColumn::AdGroupName => row.ad_group_name = decode_cell::<String>(cell, field_type)?,
        MetricColumn::Ctr => row.ctr = decode_cell::<f64>(cell, field_type)?,
    }

    Ok(())
}

#[derive(Debug)]
pub struct ExtractServiceImpl<R: WarehouseRepository> {
    warehouse: Option<R>,
}

impl<R: WarehouseRepository> ExtractServiceImpl<R> {
    #[doc = r#"
        `None` means the warehouse client could not be built. The extractor then
        stays disabled and every fetch answers `Empty(Disabled)`.
    "#]
    pub fn new(warehouse: Option<R>) -> Self {
        ExtractServiceImpl { warehouse }
    }

    pub fn is_enabled(&self) -> bool {
        self.warehouse.is_some()
    }
}

#[async_trait]
impl<R: WarehouseRepository> ExtractService for ExtractServiceImpl<R> {
    async fn fetch_ad_performance(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
    ) -> FetchResult {
        let Some(warehouse) = &self.warehouse else {
            warn!("Warehouse client not initialized. Cannot fetch data.");
            return FetchResult::Empty(EmptyReason::Disabled);
        };

        let query: String = build_ad_performance_query(project_id, dataset_id, table_id);

        let table: MetricTable = match warehouse
            .run_query(&query)
            .await
            .and_then(|result_set| convert_result_set(&result_set))
        {
            Ok(table) => table,
            Err(e) => {
                error!(
                    "[ExtractServiceImpl->fetch_ad_performance] Error executing warehouse query: {:?}",
                    e
                );
                return FetchResult::Empty(EmptyReason::QueryFailed(format!("{:#}", e)));
            }
        };

        if table.is_empty() {
            warn!(
                "Query on {}.{}.{} executed but returned no rows",
                project_id, dataset_id, table_id
            );
            return FetchResult::Empty(EmptyReason::NoRows);
        }

        info!(
            "Successfully fetched {} rows of ad performance data from {}.{}.{}",
            table.len(),
            project_id,
            dataset_id,
            table_id
        );

        FetchResult::Rows(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWarehouse {
        result: Result<QueryResultSet, String>,
    }

    #[async_trait]
    impl WarehouseRepository for FixedWarehouse {
        async fn run_query(&self, sql: &str) -> Result<QueryResultSet, anyhow::Error> {
            assert!(sql.contains("`proj.ds.tbl`"));
            self.result.clone().map_err(|e| anyhow!(e))
        }
    }

    fn fields() -> Vec<WarehouseField> {
        [
            ("clicks", "INTEGER"),
            ("impressions", "INTEGER"),
            ("cost", "FLOAT"),
            ("conversions", "INTEGER"),
            ("campaign_name", "STRING"),
            ("ad_group_name", "STRING"),
            ("date", "DATE"),
            ("ctr", "FLOAT"),
        ]
        .iter()
        .map(|(name, ty)| WarehouseField::new(name.to_string(), ty.to_string()))
        .collect()
    }

    fn raw_row(clicks: &str, impressions: &str, ctr: &str) -> Value {
        json!({ "f": [
            { "v": clicks },
            { "v": impressions },
            { "v": "12.5" },
            { "v": "3" },
            { "v": "Winter Sale Campaign" },
            { "v": "Ad Group Ski" },
            { "v": "2024-01-01" },
            { "v": ctr }
        ]})
    }

    #[test]
    fn query_aliases_every_source_column() {
        let sql: String = build_ad_performance_query("proj", "ds", "tbl");

        for (source, column) in SOURCE_COLUMNS {
            assert!(sql.contains(&format!("{} AS {},", source, column.name())));
        }
        assert!(sql.contains("WHEN impressions_column = 0 THEN 0"));
        assert!(sql.contains("ELSE clicks_column / impressions_column"));
        assert!(sql.contains("END AS ctr"));
        assert!(sql.contains("`proj.ds.tbl`"));
    }

    #[test]
    fn result_set_converts_to_typed_rows() {
        let result_set: QueryResultSet =
            QueryResultSet::new(fields(), vec![raw_row("100", "1000", "0.1")]);

        let table: MetricTable = convert_result_set(&result_set).expect("convert");

        assert_eq!(table.columns().len(), 8);
        let row: &MetricRow = &table.rows()[0];
        assert_eq!(row.clicks, Some(100));
        assert_eq!(row.impressions, Some(1000));
        assert_eq!(row.cost, Some(12.5));
        assert_eq!(row.ad_group_name.as_deref(), Some("Ad Group Ski"));
        assert_eq!(row.ctr, Some(0.1));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let result_set: QueryResultSet = QueryResultSet::new(
            vec![
                WarehouseField::new("extra".to_string(), "STRING".to_string()),
                WarehouseField::new("clicks".to_string(), "INTEGER".to_string()),
            ],
            vec![json!({ "f": [ { "v": "ignored" }, { "v": "7" } ] })],
        );

        let table: MetricTable = convert_result_set(&result_set).expect("convert");

        assert!(table.has_column(MetricColumn::Clicks));
        assert_eq!(table.columns().len(), 1);
        assert_eq!(table.rows()[0].clicks, Some(7));
    }

    #[tokio::test]
    async fn disabled_extractor_is_always_empty() {
        let extractor: ExtractServiceImpl<FixedWarehouse> = ExtractServiceImpl::new(None);

        for _ in 0..2 {
            assert_eq!(
                extractor.fetch_ad_performance("proj", "ds", "tbl").await,
                FetchResult::Empty(EmptyReason::Disabled)
            );
        }
    }

    #[tokio::test]
    async fn query_failure_is_reported_as_empty() {
        let extractor = ExtractServiceImpl::new(Some(FixedWarehouse {
            result: Err("404 Not found: Table proj:ds.tbl".to_string()),
        }));

        match extractor.fetch_ad_performance("proj", "ds", "tbl").await {
            FetchResult::Empty(EmptyReason::QueryFailed(cause)) => {
                assert!(cause.contains("Not found"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn undecodable_rows_are_reported_as_empty() {
        let extractor = ExtractServiceImpl::new(Some(FixedWarehouse {
            result: Ok(QueryResultSet::new(fields(), vec![raw_row("many", "1000", "0.1")])),
        }));

        assert!(matches!(
            extractor.fetch_ad_performance("proj", "ds", "tbl").await,
            FetchResult::Empty(EmptyReason::QueryFailed(_))
        ));
    }

    #[tokio::test]
    async fn zero_rows_is_empty_and_rows_are_returned() {
        let empty = ExtractServiceImpl::new(Some(FixedWarehouse {
            result: Ok(QueryResultSet::new(fields(), Vec::new())),
        }));
        assert_eq!(
            empty.fetch_ad_performance("proj", "ds", "tbl").await,
            FetchResult::Empty(EmptyReason::NoRows)
        );

        let full = ExtractServiceImpl::new(Some(FixedWarehouse {
            result: Ok(QueryResultSet::new(
                fields(),
                vec![raw_row("100", "1000", "0.1"), raw_row("5", "0", "0")],
            )),
        }));
        let table: MetricTable = full
            .fetch_ad_performance("proj", "ds", "tbl")
            .await
            .into_table()
            .expect("rows");
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].ctr, Some(0.0));
    }
}
