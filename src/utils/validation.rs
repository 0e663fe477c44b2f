// Validation utilities
// Author: Gabriel Demetrios Lafis

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::data::Axis;
use super::{FrameError, FrameResult};

/// Validate that a sequence has the expected length
pub fn validate_length(context: &str, expected: usize, actual: usize) -> FrameResult<()> {
    if expected != actual {
        Err(FrameError::length_mismatch(context, expected, actual))
    } else {
        Ok(())
    }
}

/// Validate that every label along an axis is unique
pub fn validate_unique<T>(labels: &[T], axis: Axis) -> FrameResult<()>
where
    T: Eq + Hash + Display,
{
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label) {
            return Err(FrameError::DuplicateKey {
                key: label.to_string(),
                axis,
            });
        }
    }

    Ok(())
}

/// Validate that all rows of a row-major table have the same width
pub fn validate_rectangular<T>(rows: &[Vec<T>], width: usize) -> FrameResult<()> {
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(FrameError::length_mismatch(
                format!("row {} width", i),
                width,
                row.len(),
            ));
        }
    }

    Ok(())
}
