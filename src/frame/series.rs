// Single-column frame
// Author: Gabriel Demetrios Lafis

use std::ops::Deref;

use crate::data::{Dtype, Label, Value};
use crate::indexing::Selector;
use crate::utils::{FrameError, FrameResult};
use super::{DataFrame, FrameData, FrameOptions, NDFrame};

/// A labelled column of values
///
/// Always holds exactly one column, so only row-wise mutators are exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    frame: NDFrame,
}

impl Series {
    /// Create a series with the default index
    pub fn new<V: Into<Value>>(values: Vec<V>, name: &str) -> FrameResult<Self> {
        Self::with_options(values, name, FrameOptions::new())
    }

    /// Create a series with explicit row labels
    pub fn with_index<V, I, L>(values: Vec<V>, name: &str, index: I) -> FrameResult<Self>
    where
        V: Into<Value>,
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Self::with_options(values, name, FrameOptions::new().index(index))
    }

    /// Create a series with full construction options
    ///
    /// `options.columns` is ignored; the series name is the column name.
    pub fn with_options<V: Into<Value>>(
        values: Vec<V>,
        name: &str,
        mut options: FrameOptions,
    ) -> FrameResult<Self> {
        options.columns = None;
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let frame = NDFrame::new(
            FrameData::Columns(vec![(name.to_string(), values)]),
            options,
        )?;
        Ok(Series { frame })
    }

    /// Wrap a single-column frame
    pub fn from_ndframe(frame: NDFrame) -> FrameResult<Self> {
        let (_, n_columns) = frame.shape();
        if n_columns != 1 {
            return Err(FrameError::length_mismatch("series column count", 1, n_columns));
        }
        Ok(Series { frame })
    }

    /// The series name
    pub fn name(&self) -> &str {
        &self.frame.column_names()[0]
    }

    /// The series values
    pub fn values(&self) -> &[Value] {
        &self.frame.storage().columns()[0]
    }

    /// The inferred dtype
    pub fn dtype(&self) -> Dtype {
        self.frame.dtypes()[0]
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.frame.shape().0
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at a row label
    pub fn get(&self, label: &Label) -> Option<&Value> {
        self.frame.index_of(label).map(|i| &self.values()[i])
    }

    /// Select rows by label
    pub fn loc(&self, rows: Selector) -> FrameResult<Series> {
        self.frame.loc(rows, Selector::All).map(|frame| Series { frame })
    }

    /// Select rows by position
    pub fn iloc(&self, rows: Selector) -> FrameResult<Series> {
        self.frame.iloc(rows, Selector::All).map(|frame| Series { frame })
    }

    /// First `n` values
    pub fn head(&self, n: usize) -> FrameResult<Series> {
        self.frame.head(n).map(|frame| Series { frame })
    }

    /// Last `n` values
    pub fn tail(&self, n: usize) -> FrameResult<Series> {
        self.frame.tail(n).map(|frame| Series { frame })
    }

    /// Deep copy
    pub fn copy(&self) -> Series {
        self.clone()
    }

    /// Replace the values, keeping labels
    pub fn set_values(&mut self, values: Vec<Value>) -> FrameResult<()> {
        self.frame
            .set_values(values.into_iter().map(|v| vec![v]).collect())
    }

    /// Replace the row labels
    pub fn set_index<I, L>(&mut self, index: I) -> FrameResult<()>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.frame.set_index(index)
    }

    /// Restore the default `0..n` row labels
    pub fn reset_index(&mut self) {
        self.frame.reset_index()
    }

    /// Rename the series
    pub fn rename(&mut self, name: &str) -> FrameResult<()> {
        let current = self.name().to_string();
        self.frame.rename_inplace(&[(current.as_str(), name)])
    }

    /// Convert into a one-column data frame
    pub fn to_frame(self) -> DataFrame {
        DataFrame::from(self.frame)
    }
}

impl Deref for Series {
    type Target = NDFrame;

    fn deref(&self) -> &NDFrame {
        &self.frame
    }
}
