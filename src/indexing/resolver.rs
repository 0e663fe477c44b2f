// Selector resolution for one axis
// Author: Gabriel Demetrios Lafis

use std::collections::HashSet;

use log::trace;

use crate::data::{Axis, Label};
use crate::utils::{FrameError, FrameResult};
use super::{IndexingMode, Selector};

/// Labels of the axis being resolved
#[derive(Debug, Clone, Copy)]
enum AxisLabels<'a> {
    Rows(&'a [Label]),
    Columns(&'a [String]),
}

/// Turns a selector into concrete, ordered positions along one axis
///
/// Slice convention:
/// - `Label` mode resolves both bounds as labels and includes both endpoints.
/// - `Position` mode uses half-open `[start, end)` bounds; negative bounds
///   count from the end and bounds past the axis clamp to its length.
///
/// Explicit lists keep the first occurrence of a repeated item. The resolver
/// never modifies its inputs.
#[derive(Debug, Clone, Copy)]
pub struct SelectorResolver<'a> {
    labels: AxisLabels<'a>,
    mode: IndexingMode,
}

impl<'a> SelectorResolver<'a> {
    /// Resolver for the row axis
    pub fn rows(index: &'a [Label], mode: IndexingMode) -> Self {
        SelectorResolver {
            labels: AxisLabels::Rows(index),
            mode,
        }
    }

    /// Resolver for the column axis
    pub fn columns(names: &'a [String], mode: IndexingMode) -> Self {
        SelectorResolver {
            labels: AxisLabels::Columns(names),
            mode,
        }
    }

    /// The axis this resolver works on
    pub fn axis(&self) -> Axis {
        match self.labels {
            AxisLabels::Rows(_) => Axis::Rows,
            AxisLabels::Columns(_) => Axis::Columns,
        }
    }

    /// Length of the axis
    pub fn len(&self) -> usize {
        match self.labels {
            AxisLabels::Rows(index) => index.len(),
            AxisLabels::Columns(names) => names.len(),
        }
    }

    /// Check if the axis is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a selector to positions
    pub fn resolve(&self, selector: &Selector) -> FrameResult<Vec<usize>> {
        let positions = if let Selector::Mask(mask) = selector {
            self.resolve_mask(mask)?
        } else if let Some(slice) = selector.as_slice() {
            self.resolve_slice(slice)?
        } else if let Selector::Items(items) = selector {
            self.resolve_items(items)?
        } else {
            (0..self.len()).collect()
        };

        trace!(
            "Resolved {:?} on {} axis ({:?}) to {} positions",
            selector,
            self.axis(),
            self.mode,
            positions.len()
        );
        Ok(positions)
    }

    fn resolve_mask(&self, mask: &[bool]) -> FrameResult<Vec<usize>> {
        if mask.len() != self.len() {
            return Err(FrameError::length_mismatch(
                format!("boolean mask on {} axis", self.axis()),
                self.len(),
                mask.len(),
            ));
        }

        Ok(mask
            .iter()
            .enumerate()
            .filter_map(|(i, &keep)| if keep { Some(i) } else { None })
            .collect())
    }

    fn resolve_items(&self, items: &[Label]) -> FrameResult<Vec<usize>> {
        let mut positions = Vec::with_capacity(items.len());
        let mut seen = HashSet::with_capacity(items.len());

        match self.mode {
            IndexingMode::Label => {
                let mut missing = Vec::new();
                for item in items {
                    match self.find_label(item) {
                        Some(p) => {
                            if seen.insert(p) {
                                positions.push(p);
                            }
                        }
                        None => missing.push(item.to_string()),
                    }
                }

                if !missing.is_empty() {
                    return Err(FrameError::UnknownLabel {
                        labels: missing,
                        axis: self.axis(),
                    });
                }
            }
            IndexingMode::Position => {
                for item in items {
                    let p = self.checked_position(item)?;
                    if seen.insert(p) {
                        positions.push(p);
                    }
                }
            }
        }

        Ok(positions)
    }

    fn resolve_slice(&self, slice: &str) -> FrameResult<Vec<usize>> {
        let parts: Vec<&str> = slice.split(':').collect();
        if parts.len() != 2 {
            return Err(FrameError::malformed_slice(
                slice,
                "expected exactly one ':' separating start and end",
            ));
        }
        let (start, end) = (parts[0].trim(), parts[1].trim());

        match self.mode {
            IndexingMode::Position => {
                let len = self.len() as i64;
                let start = match parse_bound(slice, start)? {
                    Some(b) => clamp_bound(b, len),
                    None => 0,
                };
                let end = match parse_bound(slice, end)? {
                    Some(b) => clamp_bound(b, len),
                    None => len,
                };
                Ok((start..end).map(|p| p as usize).collect())
            }
            IndexingMode::Label => {
                if self.is_empty() {
                    return match (start.is_empty(), end.is_empty()) {
                        (true, true) => Ok(Vec::new()),
                        (false, _) => Err(FrameError::unknown_label(start, self.axis())),
                        (true, false) => Err(FrameError::unknown_label(end, self.axis())),
                    };
                }

                let first = if start.is_empty() { 0 } else { self.find_bound(start)? };
                let last = if end.is_empty() { self.len() - 1 } else { self.find_bound(end)? };
                if first > last {
                    Ok(Vec::new())
                } else {
                    Ok((first..=last).collect())
                }
            }
        }
    }

    /// Look up a label; column labels match by their text
    fn find_label(&self, label: &Label) -> Option<usize> {
        match self.labels {
            AxisLabels::Rows(index) => index.iter().position(|l| l == label),
            AxisLabels::Columns(names) => {
                let name = label.to_string();
                names.iter().position(|n| *n == name)
            }
        }
    }

    /// Look up a slice bound; integer text tries an integer label first
    fn find_bound(&self, bound: &str) -> FrameResult<usize> {
        let found = match bound.parse::<i64>() {
            Ok(i) => self
                .find_label(&Label::Int(i))
                .or_else(|| self.find_label(&Label::Str(bound.to_string()))),
            Err(_) => self.find_label(&Label::Str(bound.to_string())),
        };
        found.ok_or_else(|| FrameError::unknown_label(bound, self.axis()))
    }

    fn checked_position(&self, item: &Label) -> FrameResult<usize> {
        let position = match item {
            Label::Int(i) => *i,
            Label::Str(s) => {
                return Err(FrameError::InvalidPosition {
                    item: s.clone(),
                    axis: self.axis(),
                })
            }
        };

        if position < 0 || position >= self.len() as i64 {
            return Err(FrameError::IndexOutOfRange {
                position,
                length: self.len(),
                axis: self.axis(),
            });
        }
        Ok(position as usize)
    }
}

fn parse_bound(slice: &str, bound: &str) -> FrameResult<Option<i64>> {
    if bound.is_empty() {
        return Ok(None);
    }
    bound.parse::<i64>().map(Some).map_err(|_| {
        FrameError::malformed_slice(slice, format!("bound '{}' is not an integer", bound))
    })
}

fn clamp_bound(bound: i64, len: i64) -> i64 {
    if bound < 0 {
        (len + bound).max(0)
    } else {
        bound.min(len)
    }
}
