// Column-major table storage
// Author: Gabriel Demetrios Lafis

use crate::utils::{validate_length, validate_rectangular, validate_unique, FrameResult};
use super::{Axis, Dtype, DtypeInferencer, Label, Value};

/// Table storage with one canonical (column-major) layout
///
/// Rows are never stored; `rows()` and `row()` derive them from the columns,
/// so the two views cannot drift apart. The row count lives in `index`, which
/// keeps frames with zero columns well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Storage {
    columns: Vec<Vec<Value>>,
    column_names: Vec<String>,
    index: Vec<Label>,
    dtypes: Vec<Dtype>,
}

impl Storage {
    /// Build storage from columns, validating every shape invariant
    pub fn new(
        columns: Vec<Vec<Value>>,
        column_names: Vec<String>,
        index: Vec<Label>,
        dtypes: Vec<Dtype>,
    ) -> FrameResult<Self> {
        validate_length("column names", columns.len(), column_names.len())?;
        validate_length("dtypes", columns.len(), dtypes.len())?;
        for (name, column) in column_names.iter().zip(&columns) {
            validate_length(&format!("column '{}' length", name), index.len(), column.len())?;
        }
        validate_unique(&column_names, Axis::Columns)?;
        validate_unique(&index, Axis::Rows)?;

        Ok(Storage {
            columns,
            column_names,
            index,
            dtypes,
        })
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    /// Number of columns
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column-major values
    pub fn columns(&self) -> &[Vec<Value>] {
        &self.columns
    }

    /// Values of a single column by position
    pub fn column(&self, position: usize) -> Option<&[Value]> {
        self.columns.get(position).map(|c| c.as_slice())
    }

    /// Column names in order
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Row labels in order
    pub fn index(&self) -> &[Label] {
        &self.index
    }

    /// Per-column dtypes
    pub fn dtypes(&self) -> &[Dtype] {
        &self.dtypes
    }

    /// Derived row-major view of the values
    pub fn rows(&self) -> Vec<Vec<Value>> {
        (0..self.n_rows()).map(|i| self.row(i)).collect()
    }

    /// Derived values of a single row
    pub fn row(&self, position: usize) -> Vec<Value> {
        self.columns.iter().map(|c| c[position].clone()).collect()
    }

    /// Position of a column name
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|n| n == name)
    }

    /// Position of a row label
    pub fn label_position(&self, label: &Label) -> Option<usize> {
        self.index.iter().position(|l| l == label)
    }

    /// Project the given row and column positions into new storage
    ///
    /// Positions must already be resolved and in range; dtypes are re-inferred
    /// from the projected values.
    pub fn take(
        &self,
        rows: &[usize],
        columns: &[usize],
        inferencer: &DtypeInferencer,
    ) -> FrameResult<Self> {
        let projected: Vec<Vec<Value>> = columns
            .iter()
            .map(|&j| rows.iter().map(|&i| self.columns[j][i].clone()).collect())
            .collect();
        let names = columns.iter().map(|&j| self.column_names[j].clone()).collect();
        let index = rows.iter().map(|&i| self.index[i].clone()).collect();
        let dtypes = inferencer.infer_all(&projected);

        Self::new(projected, names, index, dtypes)
    }

    /// Replace all values, keeping labels; the receiver is untouched on error
    pub fn replace_rows(&mut self, rows: &[Vec<Value>], inferencer: &DtypeInferencer) -> FrameResult<()> {
        validate_length("row count", self.n_rows(), rows.len())?;
        validate_rectangular(rows, self.n_columns())?;

        let columns = transpose(rows, self.n_columns());
        self.dtypes = inferencer.infer_all(&columns);
        self.columns = columns;
        Ok(())
    }

    /// Replace the row labels; the receiver is untouched on error
    pub fn replace_index(&mut self, index: Vec<Label>) -> FrameResult<()> {
        validate_length("index", self.n_rows(), index.len())?;
        validate_unique(&index, Axis::Rows)?;
        self.index = index;
        Ok(())
    }

    /// Restore the default `0..n` row labels
    pub fn reset_index(&mut self) {
        self.index = Label::range(self.n_rows());
    }

    /// Rename columns in place; the receiver is untouched on error
    pub fn replace_column_names(&mut self, names: Vec<String>) -> FrameResult<()> {
        validate_length("column names", self.n_columns(), names.len())?;
        validate_unique(&names, Axis::Columns)?;
        self.column_names = names;
        Ok(())
    }

    /// Overwrite an existing column or append a new one
    pub fn upsert_column(&mut self, name: &str, values: Vec<Value>, dtype: Dtype) -> FrameResult<()> {
        validate_length(&format!("column '{}' length", name), self.n_rows(), values.len())?;

        match self.column_position(name) {
            Some(j) => {
                self.columns[j] = values;
                self.dtypes[j] = dtype;
            }
            None => {
                self.columns.push(values);
                self.column_names.push(name.to_string());
                self.dtypes.push(dtype);
            }
        }
        Ok(())
    }

    /// Remove the columns at the given (valid) positions
    pub fn remove_columns(&mut self, positions: &[usize]) {
        let keep = keep_mask(self.n_columns(), positions);
        retain_by_mask(&mut self.columns, &keep);
        retain_by_mask(&mut self.column_names, &keep);
        retain_by_mask(&mut self.dtypes, &keep);
    }

    /// Remove the rows at the given (valid) positions and re-infer dtypes
    pub fn remove_rows(&mut self, positions: &[usize], inferencer: &DtypeInferencer) {
        let keep = keep_mask(self.n_rows(), positions);
        for column in &mut self.columns {
            retain_by_mask(column, &keep);
        }
        retain_by_mask(&mut self.index, &keep);
        self.dtypes = inferencer.infer_all(&self.columns);
    }
}

/// Turn row-major values into column-major values
pub fn transpose(rows: &[Vec<Value>], width: usize) -> Vec<Vec<Value>> {
    (0..width)
        .map(|j| rows.iter().map(|row| row[j].clone()).collect())
        .collect()
}

fn keep_mask(len: usize, positions: &[usize]) -> Vec<bool> {
    let mut keep = vec![true; len];
    for &p in positions {
        if let Some(flag) = keep.get_mut(p) {
            *flag = false;
        }
    }
    keep
}

fn retain_by_mask<T>(items: &mut Vec<T>, keep: &[bool]) {
    let mut flags = keep.iter();
    items.retain(|_| *flags.next().unwrap_or(&true));
}
