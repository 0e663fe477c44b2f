// Data module for cells, labels and column storage
// Author: Gabriel Demetrios Lafis

mod dtype;
mod json;
mod storage;

pub use dtype::*;
pub use json::*;
pub use storage::*;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a single cell value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Create a NaN cell
    pub fn nan() -> Self {
        Value::Float(f64::NAN)
    }

    /// Check if the value counts as missing (null or NaN)
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }
}

// NaN cells compare equal to each other so that whole frames can be compared.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => write!(f, "NaN"),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Represents a row label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Str(String),
}

impl Label {
    /// Build the default `0..n` row labels
    pub fn range(n: usize) -> Vec<Label> {
        (0..n as i64).map(Label::Int).collect()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Int(i) => write!(f, "{}", i),
            Label::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Label {
    fn from(i: i64) -> Self {
        Label::Int(i)
    }
}

impl From<i32> for Label {
    fn from(i: i32) -> Self {
        Label::Int(i as i64)
    }
}

impl From<usize> for Label {
    fn from(i: usize) -> Self {
        Label::Int(i as i64)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Str(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Str(s)
    }
}

/// Represents the inferred element type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    Int,
    Float,
    String,
    Boolean,
    Undefined,
}

impl Dtype {
    /// Check if the dtype is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, Dtype::Int | Dtype::Float)
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Dtype::Int => "int64",
            Dtype::Float => "float64",
            Dtype::String => "string",
            Dtype::Boolean => "boolean",
            Dtype::Undefined => "undefined",
        };
        write!(f, "{}", name)
    }
}

/// Represents a frame axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Rows,
    Columns,
}

impl Axis {
    /// Map the numeric axis convention (0 = rows, 1 = columns)
    pub fn from_number(axis: usize) -> Option<Axis> {
        match axis {
            0 => Some(Axis::Rows),
            1 => Some(Axis::Columns),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "row"),
            Axis::Columns => write!(f, "column"),
        }
    }
}
