// loc / iloc orchestration
// Author: Gabriel Demetrios Lafis

use log::debug;

use crate::data::{DtypeInferencer, Storage};
use crate::utils::FrameResult;
use super::{IndexingMode, Selector, SelectorResolver};

/// Extracts sub-tables from storage
pub struct IndexingEngine<'a> {
    storage: &'a Storage,
    inferencer: DtypeInferencer,
}

impl<'a> IndexingEngine<'a> {
    /// Create a new engine over the given storage
    pub fn new(storage: &'a Storage, inferencer: DtypeInferencer) -> Self {
        IndexingEngine { storage, inferencer }
    }

    /// Select rows and columns, producing new storage
    ///
    /// Both selectors are resolved before anything is copied, so a bad
    /// selector fails without building a partial table. Row and column order
    /// follow the selectors, and dtypes are re-inferred from the projection.
    pub fn select(
        &self,
        rows: &Selector,
        columns: &Selector,
        mode: IndexingMode,
    ) -> FrameResult<Storage> {
        let row_positions = SelectorResolver::rows(self.storage.index(), mode).resolve(rows)?;
        let column_positions =
            SelectorResolver::columns(self.storage.column_names(), mode).resolve(columns)?;

        let result = self
            .storage
            .take(&row_positions, &column_positions, &self.inferencer)?;

        debug!(
            "{:?} selection: {}x{} -> {}x{}",
            mode,
            self.storage.n_rows(),
            self.storage.n_columns(),
            result.n_rows(),
            result.n_columns()
        );
        Ok(result)
    }

    /// Select with `loc` semantics
    pub fn loc(&self, rows: &Selector, columns: &Selector) -> FrameResult<Storage> {
        self.select(rows, columns, IndexingMode::Label)
    }

    /// Select with `iloc` semantics
    pub fn iloc(&self, rows: &Selector, columns: &Selector) -> FrameResult<Storage> {
        self.select(rows, columns, IndexingMode::Position)
    }

    /// Select whole rows by already resolved positions
    pub fn take_rows(&self, positions: &[usize]) -> FrameResult<Storage> {
        let all: Vec<usize> = (0..self.storage.n_columns()).collect();
        self.storage.take(positions, &all, &self.inferencer)
    }
}
