use crate::common::*;

use crate::utils_modules::time_utils::*;

/* BigQuery cell text -> typed value. `field_type` is the schema type, e.g. "INTEGER" */
pub trait FromWarehouseCell: Sized {
    fn from_warehouse_cell(field_type: &str, raw: &str) -> anyhow::Result<Self>;
}

impl FromWarehouseCell for i64 {
    fn from_warehouse_cell(field_type: &str, raw: &str) -> anyhow::Result<Self> {
        let raw: &str = raw.trim();

        if let Ok(v) = raw.parse::<i64>() {
            return Ok(v);
        }

        /* FLOAT or NUMERIC source column: keep the integer part */
        let v: f64 = raw.parse::<f64>().map_err(|e| {
            anyhow!(
                "[i64->from_warehouse_cell] '{}' ({}) is not a number: {}",
                raw,
                field_type,
                e
            )
        })?;

        if !v.is_finite() {
            return Err(anyhow!("[i64->from_warehouse_cell] non-finite value: {}", raw));
        }

        Ok(v.trunc() as i64)
    }
}

impl FromWarehouseCell for f64 {
    fn from_warehouse_cell(field_type: &str, raw: &str) -> anyhow::Result<Self> {
        let v: f64 = raw.trim().parse::<f64>().map_err(|e| {
            anyhow!(
                "[f64->from_warehouse_cell] '{}' ({}) is not a number: {}",
                raw,
                field_type,
                e
            )
        })?;

        if v.is_finite() {
            Ok(v)
        } else {
            Err(anyhow!("[f64->from_warehouse_cell] non-finite value: {}", raw))
        }
    }
}

impl FromWarehouseCell for String {
    fn from_warehouse_cell(_field_type: &str, raw: &str) -> anyhow::Result<Self> {
        Ok(raw.to_string())
    }
}

impl FromWarehouseCell for NaiveDate {
    fn from_warehouse_cell(field_type: &str, raw: &str) -> anyhow::Result<Self> {
        parse_warehouse_date(field_type, raw)
    }
}

#[doc = r#"
    Decodes one `{"v": ...}` cell of a BigQuery row.

    `null` becomes `None`. JSON numbers are accepted as well as the strings
    the REST API normally sends. Any other value, booleans included, is an error.
"#]
pub fn decode_cell<T: FromWarehouseCell>(cell: &Value, field_type: &str) -> anyhow::Result<Option<T>> {
    match cell.get("v") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => T::from_warehouse_cell(field_type, raw).map(Some),
        Some(Value::Number(n)) => T::from_warehouse_cell(field_type, &n.to_string()).map(Some),
        Some(other) => Err(anyhow!(
            "[decode_cell] Unsupported cell value for {}: {}",
            field_type,
            other
        )),
    }
}
