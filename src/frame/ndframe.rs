// NDFrame data model and mutation primitives
// Author: Gabriel Demetrios Lafis

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{Map, Value as JsonValue};

use crate::data::{
    transpose, value_to_json, Axis, Dtype, DtypeInferencer, Label, Storage, Value,
};
use crate::indexing::{IndexingEngine, IndexingMode, Selector};
use crate::utils::{
    validate_length, validate_rectangular, FrameError, FrameResult, FrameSettings,
};
use super::Series;

/// Input table for frame construction
#[derive(Debug, Clone, PartialEq)]
pub enum FrameData {
    /// Row-major values
    Rows(Vec<Vec<Value>>),
    /// Named columns, in order
    Columns(Vec<(String, Vec<Value>)>),
}

/// Optional construction parameters
#[derive(Debug, Clone, Default)]
pub struct FrameOptions {
    pub columns: Option<Vec<String>>,
    pub index: Option<Vec<Label>>,
    pub dtypes: Option<Vec<Dtype>>,
    pub settings: FrameSettings,
}

impl FrameOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column names
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the row labels
    pub fn index<I, L>(mut self, index: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.index = Some(index.into_iter().map(Into::into).collect());
        self
    }

    /// Set explicit dtypes instead of inferring them
    pub fn dtypes(mut self, dtypes: Vec<Dtype>) -> Self {
        self.dtypes = Some(dtypes);
        self
    }

    /// Set the frame settings
    pub fn settings(mut self, settings: FrameSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// What a drop request removes
#[derive(Debug, Clone, PartialEq)]
pub enum DropRequest {
    /// Columns by name
    Columns(Vec<String>),
    /// Rows by label
    Index(Vec<Label>),
    /// Rows by position
    Positions(Vec<usize>),
}

impl DropRequest {
    /// Drop columns by name
    pub fn columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DropRequest::Columns(names.into_iter().map(Into::into).collect())
    }

    /// Drop rows by label
    pub fn index<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        DropRequest::Index(labels.into_iter().map(Into::into).collect())
    }

    /// Drop rows by position
    pub fn rows_at<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        DropRequest::Positions(positions.into_iter().collect())
    }

    /// Drop labels along a numeric axis (0 = rows, 1 = columns)
    pub fn with_axis(labels: Vec<Label>, axis: usize) -> FrameResult<Self> {
        match Axis::from_number(axis) {
            Some(Axis::Rows) => Ok(DropRequest::Index(labels)),
            Some(Axis::Columns) => Ok(DropRequest::Columns(
                labels.iter().map(|l| l.to_string()).collect(),
            )),
            None => Err(FrameError::InvalidArgument(format!(
                "axis must be 0 or 1, got {}",
                axis
            ))),
        }
    }
}

/// Borrowed view of one column
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    pub name: &'a str,
    pub values: &'a [Value],
    pub dtype: Dtype,
    pub index: &'a [Label],
    settings: FrameSettings,
}

impl ColumnView<'_> {
    /// Number of values in the column
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy the column into an owned series
    pub fn to_series(&self) -> FrameResult<Series> {
        let storage = Storage::new(
            vec![self.values.to_vec()],
            vec![self.name.to_string()],
            self.index.to_vec(),
            vec![self.dtype],
        )?;
        Series::from_ndframe(NDFrame::from_storage(storage, self.settings))
    }
}

/// The shared data model behind `Series` and `DataFrame`
///
/// Each frame exclusively owns its storage. Frames are plain values with no
/// interior mutability or locking; share them across threads only through
/// the usual `&`/`&mut` rules.
#[derive(Debug, Clone, PartialEq)]
pub struct NDFrame {
    storage: Storage,
    settings: FrameSettings,
}

impl NDFrame {
    /// Build a frame from row or column data
    pub fn new(data: FrameData, options: FrameOptions) -> FrameResult<Self> {
        let FrameOptions {
            columns: names,
            index,
            dtypes,
            settings,
        } = options;

        let (columns, names, n_rows) = match data {
            FrameData::Rows(rows) => {
                let width = match (&names, rows.first()) {
                    (Some(names), _) => names.len(),
                    (None, Some(first)) => first.len(),
                    (None, None) => 0,
                };
                validate_rectangular(&rows, width)?;
                let names = names.unwrap_or_else(|| (0..width).map(|j| j.to_string()).collect());
                (transpose(&rows, width), names, rows.len())
            }
            FrameData::Columns(pairs) => {
                let n_rows = match pairs.first() {
                    Some((_, values)) => values.len(),
                    None => index.as_ref().map_or(0, |i| i.len()),
                };
                for (name, values) in &pairs {
                    validate_length(&format!("column '{}' length", name), n_rows, values.len())?;
                }
                let (given, columns): (Vec<String>, Vec<Vec<Value>>) = pairs.into_iter().unzip();
                let names = match names {
                    Some(names) => {
                        validate_length("column names", columns.len(), names.len())?;
                        names
                    }
                    None => given,
                };
                (columns, names, n_rows)
            }
        };

        let index = match index {
            Some(index) => {
                validate_length("index", n_rows, index.len())?;
                index
            }
            None => Label::range(n_rows),
        };
        let dtypes = match dtypes {
            Some(dtypes) => {
                validate_length("dtypes", columns.len(), dtypes.len())?;
                dtypes
            }
            None => DtypeInferencer::new(settings.inference).infer_all(&columns),
        };

        let storage = Storage::new(columns, names, index, dtypes)?;
        debug!(
            "Constructed frame with shape {}x{}",
            storage.n_rows(),
            storage.n_columns()
        );
        Ok(NDFrame { storage, settings })
    }

    /// Wrap already validated storage
    pub fn from_storage(storage: Storage, settings: FrameSettings) -> Self {
        NDFrame { storage, settings }
    }

    /// Underlying storage
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Settings this frame was built with
    pub fn settings(&self) -> FrameSettings {
        self.settings
    }

    fn inferencer(&self) -> DtypeInferencer {
        DtypeInferencer::new(self.settings.inference)
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.storage.n_rows(), self.storage.n_columns())
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.storage.n_rows() * self.storage.n_columns()
    }

    /// Check if the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.storage.n_rows() == 0
    }

    /// Row-major values
    pub fn values(&self) -> Vec<Vec<Value>> {
        self.storage.rows()
    }

    /// Column names in order
    pub fn column_names(&self) -> &[String] {
        self.storage.column_names()
    }

    /// Per-column dtypes
    pub fn dtypes(&self) -> &[Dtype] {
        self.storage.dtypes()
    }

    /// Row labels in order
    pub fn index(&self) -> &[Label] {
        self.storage.index()
    }

    /// Position of a row label
    pub fn index_of(&self, label: &Label) -> Option<usize> {
        self.storage.label_position(label)
    }

    /// Borrow one column by name
    pub fn get_column(&self, name: &str) -> FrameResult<ColumnView<'_>> {
        let j = self
            .storage
            .column_position(name)
            .ok_or_else(|| FrameError::unknown_label(name, Axis::Columns))?;

        Ok(self.column_at(j))
    }

    /// View of the column at position `j`; callers keep `j` in range
    pub(crate) fn column_at(&self, j: usize) -> ColumnView<'_> {
        ColumnView {
            name: &self.storage.column_names()[j],
            values: &self.storage.columns()[j],
            dtype: self.storage.dtypes()[j],
            index: self.storage.index(),
            settings: self.settings,
        }
    }

    /// Overwrite or append a column in place
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> FrameResult<()> {
        self.add_column_inplace(name, values)
    }

    /// Select by label
    pub fn loc(&self, rows: Selector, columns: Selector) -> FrameResult<NDFrame> {
        self.select(&rows, &columns, IndexingMode::Label)
    }

    /// Select by position
    pub fn iloc(&self, rows: Selector, columns: Selector) -> FrameResult<NDFrame> {
        self.select(&rows, &columns, IndexingMode::Position)
    }

    /// Select rows and columns in the given mode
    pub fn select(
        &self,
        rows: &Selector,
        columns: &Selector,
        mode: IndexingMode,
    ) -> FrameResult<NDFrame> {
        let storage = IndexingEngine::new(&self.storage, self.inferencer())
            .select(rows, columns, mode)?;
        Ok(NDFrame::from_storage(storage, self.settings))
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> FrameResult<NDFrame> {
        self.iloc(Selector::slice(format!(":{}", n)), Selector::All)
    }

    /// Last `n` rows
    pub fn tail(&self, n: usize) -> FrameResult<NDFrame> {
        let start = self.storage.n_rows().saturating_sub(n);
        self.iloc(Selector::slice(format!("{}:", start)), Selector::All)
    }

    /// `n` random rows without replacement; a seed makes the draw repeatable
    pub fn sample(&self, n: usize, seed: Option<u64>) -> FrameResult<NDFrame> {
        let n_rows = self.storage.n_rows();
        if n > n_rows {
            return Err(FrameError::InvalidArgument(format!(
                "cannot sample {} rows from a frame with {} rows",
                n, n_rows
            )));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let positions = rand::seq::index::sample(&mut rng, n_rows, n).into_vec();

        let storage = IndexingEngine::new(&self.storage, self.inferencer()).take_rows(&positions)?;
        Ok(NDFrame::from_storage(storage, self.settings))
    }

    /// Deep copy; the copy shares nothing with `self`
    pub fn copy(&self) -> NDFrame {
        self.clone()
    }

    /// Replace every value, keeping labels and column names
    pub fn set_values(&mut self, rows: Vec<Vec<Value>>) -> FrameResult<()> {
        let inferencer = self.inferencer();
        self.storage.replace_rows(&rows, &inferencer)?;
        debug!("Replaced values of {}x{} frame", rows.len(), self.storage.n_columns());
        Ok(())
    }

    /// Replace the row labels
    pub fn set_index<I, L>(&mut self, index: I) -> FrameResult<()>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.storage
            .replace_index(index.into_iter().map(Into::into).collect())
    }

    /// Restore the default `0..n` row labels
    pub fn reset_index(&mut self) {
        self.storage.reset_index();
    }

    /// Return a copy with a column overwritten or appended
    pub fn add_column(&self, name: &str, values: Vec<Value>) -> FrameResult<NDFrame> {
        let mut frame = self.copy();
        frame.add_column_inplace(name, values)?;
        Ok(frame)
    }

    /// Overwrite or append a column, re-inferring only that column's dtype
    pub fn add_column_inplace(&mut self, name: &str, values: Vec<Value>) -> FrameResult<()> {
        let dtype = self.inferencer().infer(&values);
        self.storage.upsert_column(name, values, dtype)?;
        debug!("Set column '{}' ({})", name, dtype);
        Ok(())
    }

    /// Return a copy with columns renamed
    pub fn rename(&self, mapping: &[(&str, &str)]) -> FrameResult<NDFrame> {
        let mut frame = self.copy();
        frame.rename_inplace(mapping)?;
        Ok(frame)
    }

    /// Rename columns in place; unknown names are all reported together
    pub fn rename_inplace(&mut self, mapping: &[(&str, &str)]) -> FrameResult<()> {
        let mut names = self.storage.column_names().to_vec();
        let mut missing = Vec::new();

        for (old, new) in mapping {
            match self.storage.column_position(old) {
                Some(j) => names[j] = new.to_string(),
                None => missing.push(old.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(FrameError::UnknownLabel {
                labels: missing,
                axis: Axis::Columns,
            });
        }

        self.storage.replace_column_names(names)
    }

    /// Return a copy with rows or columns removed
    pub fn drop(&self, request: &DropRequest) -> FrameResult<NDFrame> {
        let mut frame = self.copy();
        frame.drop_inplace(request)?;
        Ok(frame)
    }

    /// Remove rows or columns; nothing changes unless every target resolves
    pub fn drop_inplace(&mut self, request: &DropRequest) -> FrameResult<()> {
        match request {
            DropRequest::Columns(names) => {
                let mut positions = Vec::with_capacity(names.len());
                let mut missing = Vec::new();
                for name in names {
                    match self.storage.column_position(name) {
                        Some(j) => positions.push(j),
                        None => missing.push(name.clone()),
                    }
                }
                if !missing.is_empty() {
                    return Err(FrameError::UnknownLabel {
                        labels: missing,
                        axis: Axis::Columns,
                    });
                }

                self.storage.remove_columns(&positions);
            }
            DropRequest::Index(labels) => {
                let mut positions = Vec::with_capacity(labels.len());
                let mut missing = Vec::new();
                for label in labels {
                    match self.storage.label_position(label) {
                        Some(i) => positions.push(i),
                        None => missing.push(label.to_string()),
                    }
                }
                if !missing.is_empty() {
                    return Err(FrameError::UnknownLabel {
                        labels: missing,
                        axis: Axis::Rows,
                    });
                }

                let inferencer = self.inferencer();
                self.storage.remove_rows(&positions, &inferencer);
            }
            DropRequest::Positions(positions) => {
                let n_rows = self.storage.n_rows();
                if let Some(&bad) = positions.iter().find(|&&p| p >= n_rows) {
                    return Err(FrameError::IndexOutOfRange {
                        position: bad as i64,
                        length: n_rows,
                        axis: Axis::Rows,
                    });
                }

                let inferencer = self.inferencer();
                self.storage.remove_rows(positions, &inferencer);
            }
        }

        debug!(
            "Dropped {:?}; shape is now {}x{}",
            request,
            self.storage.n_rows(),
            self.storage.n_columns()
        );
        Ok(())
    }

    /// Encode as a JSON object of column arrays
    pub fn to_json(&self) -> JsonValue {
        let mut obj = Map::with_capacity(self.storage.n_columns());
        for (name, column) in self.storage.column_names().iter().zip(self.storage.columns()) {
            obj.insert(
                name.clone(),
                JsonValue::Array(column.iter().map(value_to_json).collect()),
            );
        }
        JsonValue::Object(obj)
    }
}
