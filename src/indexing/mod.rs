// Indexing module for label and position based selection
// Author: Gabriel Demetrios Lafis

mod engine;
mod resolver;

pub use engine::*;
pub use resolver::*;

use crate::data::Label;

/// Selection mode: by label (`loc`) or by position (`iloc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexingMode {
    Label,
    Position,
}

/// A request to choose positions along one axis
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Every position on the axis
    All,
    /// Explicit labels (`loc`) or integer positions (`iloc`)
    Items(Vec<Label>),
    /// A `"start:end"` slice string
    Slice(String),
    /// A boolean mask as long as the axis
    Mask(Vec<bool>),
}

impl Selector {
    /// Select explicit labels
    pub fn labels<I, L>(items: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Selector::Items(items.into_iter().map(Into::into).collect())
    }

    /// Select explicit positions
    pub fn positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Selector::Items(positions.into_iter().map(Label::from).collect())
    }

    /// Select a slice string such as `"0:2"`, `"b:"` or `":"`
    pub fn slice(slice: impl Into<String>) -> Self {
        Selector::Slice(slice.into())
    }

    /// Select the positions where the mask is true
    pub fn mask(mask: Vec<bool>) -> Self {
        Selector::Mask(mask)
    }

    /// Parse command line style input: a slice string or a comma separated list
    ///
    /// List items that parse as integers become integer labels.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Selector::All;
        }
        if text.contains(':') {
            return Selector::Slice(text.to_string());
        }

        Selector::Items(
            text.split(',')
                .map(str::trim)
                .map(|item| match item.parse::<i64>() {
                    Ok(i) => Label::Int(i),
                    Err(_) => Label::Str(item.to_string()),
                })
                .collect(),
        )
    }

    /// The slice string carried by this selector, if any
    ///
    /// A list holding a single string with a `:` counts as a slice.
    pub fn as_slice(&self) -> Option<&str> {
        match self {
            Selector::Slice(s) => Some(s),
            Selector::Items(items) => match items.as_slice() {
                [Label::Str(s)] if s.contains(':') => Some(s),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::All
    }
}

impl From<Vec<bool>> for Selector {
    fn from(mask: Vec<bool>) -> Self {
        Selector::Mask(mask)
    }
}

impl From<Vec<Label>> for Selector {
    fn from(items: Vec<Label>) -> Self {
        Selector::Items(items)
    }
}

impl From<&str> for Selector {
    fn from(text: &str) -> Self {
        if text.contains(':') {
            Selector::Slice(text.to_string())
        } else {
            Selector::Items(vec![Label::Str(text.to_string())])
        }
    }
}
