use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteRow, SqliteValueRef};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::config::RowFormat;

/// One row of the `players` table.
///
/// The table's schema is owned by whoever loads the store, so the row is kept
/// as column names and JSON values, both in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl PlayerRecord {
    /// Render the row in the requested wire shape.
    pub fn into_json(self, format: RowFormat) -> Value {
        match format {
            RowFormat::Array => Value::Array(self.values),
            RowFormat::Object => {
                let fields: Map<String, Value> = self.columns.into_iter().zip(self.values).collect();
                Value::Object(fields)
            }
        }
    }
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for PlayerRecord {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let mut columns = Vec::with_capacity(row.len());
        let mut values = Vec::with_capacity(row.len());

        for column in row.columns() {
            let index = column.ordinal();
            columns.push(column.name().to_string());
            values.push(column_value(row, index)?);
        }

        Ok(Self { columns, values })
    }
}

// SQLite is dynamically typed, so dispatch on the storage class of the value
// itself rather than the declared column type.
fn column_value(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw: SqliteValueRef<'_> = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let storage_class = raw.type_info().name().to_string();
    let value = match storage_class.as_str() {
        "INTEGER" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        // NaN and infinities map to null
        "REAL" => Value::from(row.try_get_unchecked::<f64, _>(index)?),
        "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        _ => Value::from(row.try_get_unchecked::<String, _>(index)?),
    };

    Ok(value)
}
