// Rust NDFrame Engine
// Author: Gabriel Demetrios Lafis

//! # Rust NDFrame Engine
//!
//! An eager, in-memory tabular data engine.
//!
//! ## Features
//!
//! - `Series` (one column) and `DataFrame` (many columns) over a shared `NDFrame`
//! - Dtype inference from sampled column values
//! - Label based (`loc`) and position based (`iloc`) selection with lists,
//!   slice strings and boolean masks
//! - Copy and in-place mutation with a strong error guarantee
//!
//! ## Example
//!
//! ```rust
//! use rust_ndframe_engine::{DataFrame, DropRequest, Selector, Value};
//!
//! let df = DataFrame::from_rows(
//!     vec![
//!         vec![Value::from(1), Value::from(2), Value::from(3)],
//!         vec![Value::from(4), Value::from(5), Value::from(6)],
//!         vec![Value::from(20), Value::from(30), Value::from(40)],
//!     ],
//!     vec!["A", "B", "C"],
//! ).unwrap();
//!
//! // Half-open position slice, explicit column positions
//! let sub = df.iloc(Selector::slice("0:2"), Selector::positions([1, 2])).unwrap();
//! assert_eq!(sub.values(), vec![
//!     vec![Value::from(2), Value::from(3)],
//!     vec![Value::from(5), Value::from(6)],
//! ]);
//!
//! // Copy mutation leaves the original untouched
//! let dropped = df.drop(&DropRequest::columns(["C"])).unwrap();
//! assert_eq!(dropped.column_names(), ["A", "B"]);
//! assert_eq!(df.column_names().len(), 3);
//! ```

pub mod data;
pub mod frame;
pub mod indexing;
pub mod utils;

// Re-export main types
pub use data::{Axis, Dtype, DtypeInferencer, Label, Value};
pub use frame::{ColumnView, DataFrame, DropRequest, FrameData, FrameOptions, NDFrame, Series};
pub use indexing::{IndexingMode, Selector, SelectorResolver};
pub use utils::{Config, FrameError, FrameResult, FrameSettings};
