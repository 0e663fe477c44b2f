// JSON conversion at the I/O boundary
// Author: Gabriel Demetrios Lafis

use serde_json::{Map, Value as JsonValue};

use crate::frame::FrameData;
use crate::utils::{FrameError, FrameResult};
use super::Value;

/// Convert a JSON scalar to a cell value
///
/// Nested arrays and objects have no cell representation and are kept as
/// their JSON text.
pub fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map_or(Value::Null, Value::Float),
        },
        JsonValue::String(s) => Value::String(s.clone()),
        other => Value::String(other.to_string()),
    }
}

/// Convert a cell value to JSON; NaN becomes `null`
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Integer(i) => JsonValue::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map_or(JsonValue::Null, JsonValue::Number),
        Value::String(s) => JsonValue::String(s.clone()),
    }
}

impl FrameData {
    /// Decode a fully materialized JSON table
    ///
    /// Accepts an object of column arrays or an array of row arrays. Shape
    /// checks are left to the frame constructor.
    pub fn from_json(json: &JsonValue) -> FrameResult<FrameData> {
        match json {
            JsonValue::Object(obj) => columns_from_object(obj),
            JsonValue::Array(rows) => {
                let mut out = Vec::with_capacity(rows.len());
                for (i, row) in rows.iter().enumerate() {
                    let cells = row.as_array().ok_or_else(|| {
                        FrameError::InvalidArgument(format!("row {} is not an array", i))
                    })?;
                    out.push(cells.iter().map(json_to_value).collect());
                }
                Ok(FrameData::Rows(out))
            }
            _ => Err(FrameError::InvalidArgument(
                "JSON root must be an object of arrays or an array of arrays".to_string(),
            )),
        }
    }
}

fn columns_from_object(obj: &Map<String, JsonValue>) -> FrameResult<FrameData> {
    let mut columns = Vec::with_capacity(obj.len());
    for (name, column) in obj {
        let cells = column.as_array().ok_or_else(|| {
            FrameError::InvalidArgument(format!("column '{}' is not an array", name))
        })?;
        columns.push((name.clone(), cells.iter().map(json_to_value).collect()));
    }
    Ok(FrameData::Columns(columns))
}
