use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct WarehouseField {
    pub name: String,
    pub field_type: String,
}

#[doc = r#"
    Raw result of one warehouse query, all pages concatenated.

    `rows` keeps the REST shape `{"f": [{"v": ...}, ...]}` with cells in the
    same order as `fields`.
"#]
#[derive(Debug, Clone, Default, Getters, new)]
#[getset(get = "pub")]
pub struct QueryResultSet {
    pub fields: Vec<WarehouseField>,
    pub rows: Vec<Value>,
}
