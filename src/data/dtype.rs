// Dtype inference for column values
// Author: Gabriel Demetrios Lafis

use crate::utils::InferenceConfig;
use super::{Dtype, Value};

/// Category assigned to a single sampled value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Boolean,
    Int,
    Float,
    String,
}

/// Infers column dtypes by sampling non-missing values
#[derive(Debug, Clone, Copy, Default)]
pub struct DtypeInferencer {
    config: InferenceConfig,
}

impl DtypeInferencer {
    /// Create a new inferencer with the given configuration
    pub fn new(config: InferenceConfig) -> Self {
        DtypeInferencer { config }
    }

    /// Infer the dtype of a single column
    ///
    /// At most `sample_limit` non-missing values are inspected, and never
    /// fewer than one. Any string
    /// forces `String`, float dominates int, and a column holding nothing but
    /// missing values is `Undefined`. Booleans mixed with numbers have no
    /// common category and fall back to `String`.
    pub fn infer(&self, values: &[Value]) -> Dtype {
        let mut seen_bool = false;
        let mut seen_int = false;
        let mut seen_float = false;

        let sampled = values
            .iter()
            .filter(|v| !v.is_missing())
            .take(self.config.sample_limit.max(1));

        for value in sampled {
            match classify(value) {
                Some(Kind::String) => return Dtype::String,
                Some(Kind::Boolean) => seen_bool = true,
                Some(Kind::Int) => seen_int = true,
                Some(Kind::Float) => seen_float = true,
                None => {}
            }
        }

        match (seen_bool, seen_int || seen_float) {
            (true, true) => Dtype::String,
            (true, false) => Dtype::Boolean,
            (false, true) if seen_float => Dtype::Float,
            (false, true) => Dtype::Int,
            (false, false) => Dtype::Undefined,
        }
    }

    /// Infer dtypes for a set of columns
    pub fn infer_all(&self, columns: &[Vec<Value>]) -> Vec<Dtype> {
        columns.iter().map(|c| self.infer(c)).collect()
    }
}

/// Classify one value; missing values have no category
fn classify(value: &Value) -> Option<Kind> {
    match value {
        Value::Null => None,
        Value::Boolean(_) => Some(Kind::Boolean),
        Value::Integer(_) => Some(Kind::Int),
        Value::Float(f) if f.is_nan() => None,
        Value::Float(_) => Some(Kind::Float),
        Value::String(s) => Some(classify_str(s)),
    }
}

/// Numeric-looking strings count as numbers; a `.` marks a float
fn classify_str(s: &str) -> Kind {
    let s = s.trim();
    let numeric_chars = !s.is_empty()
        && s.chars().any(|c| c.is_ascii_digit())
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));

    if !numeric_chars {
        Kind::String
    } else if s.parse::<i64>().is_ok() {
        Kind::Int
    } else if s.contains('.') && s.parse::<f64>().is_ok() {
        Kind::Float
    } else {
        Kind::String
    }
}
