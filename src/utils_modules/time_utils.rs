use crate::common::*;

#[doc = r#"
    Converts a BigQuery cell into a calendar date according to the field type.

    * `DATE`      - `2024-01-05`
    * `DATETIME`  - `2024-01-05T13:45:00` (fractional seconds allowed)
    * `TIMESTAMP` - epoch seconds as a float string, e.g. `1.7044128E9`
    * `STRING`    - anything starting with `YYYY-MM-DD`
"#]
pub fn parse_warehouse_date(field_type: &str, raw: &str) -> anyhow::Result<NaiveDate> {
    let raw: &str = raw.trim();

    match field_type.to_ascii_uppercase().as_str() {
        "TIMESTAMP" => {
            let secs: f64 = raw.parse::<f64>().with_context(|| {
                format!("[parse_warehouse_date] TIMESTAMP is not epoch seconds: {}", raw)
            })?;
            let dt: DateTime<Utc> = DateTime::<Utc>::from_timestamp(secs.floor() as i64, 0)
                .ok_or_else(|| anyhow!("[parse_warehouse_date] TIMESTAMP out of range: {}", raw))?;
            Ok(dt.date_naive())
        }
        "DATETIME" => {
            let dt: NaiveDateTime = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .with_context(|| format!("[parse_warehouse_date] Invalid DATETIME: {}", raw))?;
            Ok(dt.date())
        }
        _ => {
            let head: &str = raw.get(..10).unwrap_or(raw);
            NaiveDate::parse_from_str(head, "%Y-%m-%d")
                .with_context(|| format!("[parse_warehouse_date] Invalid DATE: {}", raw))
        }
    }
}
