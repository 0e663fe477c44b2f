// Multi-column frame
// Author: Gabriel Demetrios Lafis

use std::ops::{Deref, DerefMut};

use crate::data::Value;
use crate::indexing::Selector;
use crate::utils::FrameResult;
use super::{ColumnView, DropRequest, FrameData, FrameOptions, NDFrame, Series};

/// A table of named columns sharing one row index
///
/// Read accessors and in-place mutators come from `NDFrame`; operations
/// that produce a new frame are wrapped so they return a `DataFrame`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    frame: NDFrame,
}

impl DataFrame {
    /// Create a new data frame
    pub fn new(data: FrameData, options: FrameOptions) -> FrameResult<Self> {
        NDFrame::new(data, options).map(DataFrame::from)
    }

    /// Create a data frame from rows and column names
    pub fn from_rows<S: Into<String>>(rows: Vec<Vec<Value>>, columns: Vec<S>) -> FrameResult<Self> {
        Self::new(FrameData::Rows(rows), FrameOptions::new().columns(columns))
    }

    /// Create a data frame from named columns
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<Value>)>) -> FrameResult<Self> {
        let columns = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .collect();
        Self::new(FrameData::Columns(columns), FrameOptions::new())
    }

    /// Select by label
    pub fn loc(&self, rows: Selector, columns: Selector) -> FrameResult<DataFrame> {
        self.frame.loc(rows, columns).map(DataFrame::from)
    }

    /// Select by position
    pub fn iloc(&self, rows: Selector, columns: Selector) -> FrameResult<DataFrame> {
        self.frame.iloc(rows, columns).map(DataFrame::from)
    }

    /// Copy one column out as a series
    pub fn column(&self, name: &str) -> FrameResult<Series> {
        self.frame.get_column(name)?.to_series()
    }

    /// Iterate over column views in order
    pub fn iter_columns(&self) -> impl Iterator<Item = ColumnView<'_>> {
        (0..self.frame.storage().n_columns()).map(move |j| self.frame.column_at(j))
    }

    /// Return a copy with a column overwritten or appended
    pub fn add_column(&self, name: &str, values: Vec<Value>) -> FrameResult<DataFrame> {
        self.frame.add_column(name, values).map(DataFrame::from)
    }

    /// Return a copy with rows or columns removed
    pub fn drop(&self, request: &DropRequest) -> FrameResult<DataFrame> {
        self.frame.drop(request).map(DataFrame::from)
    }

    /// Return a copy with columns renamed
    pub fn rename(&self, mapping: &[(&str, &str)]) -> FrameResult<DataFrame> {
        self.frame.rename(mapping).map(DataFrame::from)
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> FrameResult<DataFrame> {
        self.frame.head(n).map(DataFrame::from)
    }

    /// Last `n` rows
    pub fn tail(&self, n: usize) -> FrameResult<DataFrame> {
        self.frame.tail(n).map(DataFrame::from)
    }

    /// `n` random rows without replacement
    pub fn sample(&self, n: usize, seed: Option<u64>) -> FrameResult<DataFrame> {
        self.frame.sample(n, seed).map(DataFrame::from)
    }

    /// Deep copy
    pub fn copy(&self) -> DataFrame {
        self.clone()
    }

    /// Unwrap the underlying frame
    pub fn into_ndframe(self) -> NDFrame {
        self.frame
    }
}

impl From<NDFrame> for DataFrame {
    fn from(frame: NDFrame) -> Self {
        DataFrame { frame }
    }
}

impl Deref for DataFrame {
    type Target = NDFrame;

    fn deref(&self) -> &NDFrame {
        &self.frame
    }
}

impl DerefMut for DataFrame {
    fn deref_mut(&mut self) -> &mut NDFrame {
        &mut self.frame
    }
}
