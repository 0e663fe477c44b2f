// Error handling utilities
// Author: Gabriel Demetrios Lafis

use thiserror::Error;

use crate::data::Axis;

/// Error raised by frame construction, selection and mutation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("Length mismatch: {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("{}", unknown_label_message(.labels, .axis))]
    UnknownLabel { labels: Vec<String>, axis: Axis },

    #[error("{}", out_of_range_message(.position, .length, .axis))]
    IndexOutOfRange {
        position: i64,
        length: usize,
        axis: Axis,
    },

    #[error("Malformed slice '{slice}': {reason}")]
    MalformedSlice { slice: String, reason: String },

    #[error("Duplicate {axis} label '{key}'")]
    DuplicateKey { key: String, axis: Axis },

    #[error("Invalid {axis} position '{item}': positions must be integers")]
    InvalidPosition { item: String, axis: Axis },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FrameError {
    /// Shorthand for a length mismatch
    pub fn length_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        FrameError::LengthMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Shorthand for a single unknown label
    pub fn unknown_label(label: impl ToString, axis: Axis) -> Self {
        FrameError::UnknownLabel {
            labels: vec![label.to_string()],
            axis,
        }
    }

    /// Shorthand for a malformed slice
    pub fn malformed_slice(slice: &str, reason: impl Into<String>) -> Self {
        FrameError::MalformedSlice {
            slice: slice.to_string(),
            reason: reason.into(),
        }
    }
}

fn unknown_label_message(labels: &[String], axis: &Axis) -> String {
    let quoted: Vec<String> = labels.iter().map(|l| format!("'{}'", l)).collect();
    if quoted.len() == 1 {
        format!("Unknown {} label {}", axis, quoted[0])
    } else {
        format!("Unknown {} labels {}", axis, quoted.join(", "))
    }
}

fn out_of_range_message(position: &i64, length: &usize, axis: &Axis) -> String {
    let length = *length;
    if length == 0 {
        format!(
            "Index out of range: {} position {} on an empty axis",
            axis, position
        )
    } else {
        format!(
            "Index out of range: {} position {} exceeds the maximum position {} (length {})",
            axis,
            position,
            length - 1,
            length
        )
    }
}

/// Result type alias for FrameError
pub type FrameResult<T> = Result<T, FrameError>;
