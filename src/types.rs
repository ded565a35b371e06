//! Core data types for validation and preparation
//!
//! Values arriving from untyped record sources (JSON rows, CSV columns,
//! ad-hoc collections) are classified once into a closed [`Input`] tag and
//! dispatched on by the validators. Structural capabilities such as "exposes
//! a shape" are explicit trait contracts rather than ambient assumptions.

use std::collections::BTreeSet;

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextPrepError};

/// Capability contract for values that expose an array shape
pub trait ArrayLike {
    /// Per-axis sizes, outermost axis first
    fn shape(&self) -> &[usize];

    /// Number of axes
    fn ndim(&self) -> usize {
        self.shape().len()
    }
}

impl<S, D> ArrayLike for ndarray::ArrayBase<S, D>
where
    S: ndarray::RawData,
    D: ndarray::Dimension,
{
    fn shape(&self) -> &[usize] {
        ndarray::ArrayBase::shape(self)
    }
}

/// A scalar cell from an untyped record source
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Raw text
    Str(String),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// Missing value
    Null,
}

impl Cell {
    /// Name of the cell's runtime kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Null => "null",
        }
    }

    /// Whether the cell holds raw text
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Labeled, table-shaped container of cells
///
/// The minimal dataframe-like surface the validators need: column labels plus
/// an n-dimensional block of cells that exposes shape and dimensionality.
#[derive(Debug, Clone)]
pub struct Frame {
    labels: Vec<String>,
    data: ArrayD<Cell>,
}

impl Frame {
    /// Create a frame from column labels and a cell block
    ///
    /// # Errors
    /// - Shape error if the block has more than 2 axes
    /// - Invalid argument if the label count does not match the column count
    pub fn new(labels: Vec<String>, data: ArrayD<Cell>) -> Result<Self> {
        if data.ndim() > 2 {
            return Err(TextPrepError::shape(format!(
                "A frame is at most 2-dimensional, got shape {:?}",
                data.shape()
            )));
        }
        let columns = if data.ndim() == 2 {
            data.shape().get(1).copied().unwrap_or(0)
        } else {
            1
        };
        if labels.len() != columns {
            return Err(TextPrepError::invalid_argument(format!(
                "Frame has {} column(s) but {} label(s) were given",
                columns,
                labels.len()
            )));
        }
        Ok(Self { labels, data })
    }

    /// Column labels
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The underlying cell block
    pub fn data(&self) -> &ArrayD<Cell> {
        &self.data
    }
}

impl ArrayLike for Frame {
    fn shape(&self) -> &[usize] {
        self.data.shape()
    }
}

/// Structural classification of a caller-supplied value
///
/// Tagged once per call; every validator dispatches on the tag instead of
/// probing capabilities ad hoc.
#[derive(Debug, Clone)]
pub enum Input {
    /// A single raw text value
    Text(String),
    /// A scalar cell; not iterable
    Scalar(Cell),
    /// An ordered, indexable, reiterable collection of cells
    List(Vec<Cell>),
    /// An iterable but unordered collection of cells
    Set(BTreeSet<Cell>),
    /// An n-dimensional block of cells
    Array(ArrayD<Cell>),
    /// A labeled, table-shaped container of cells
    Frame(Frame),
    /// A single-pass source of documents
    ///
    /// Carries no inspectable contents: holding them here would mean the
    /// caller's iterator was already consumed before the real consumer ran.
    Stream,
}

impl Input {
    /// Name of the classified kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "str",
            Self::Scalar(cell) => cell.kind(),
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Array(_) => "array",
            Self::Frame(_) => "frame",
            Self::Stream => "stream",
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Cell> for Input {
    fn from(value: Cell) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<Cell>> for Input {
    fn from(value: Vec<Cell>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeSet<Cell>> for Input {
    fn from(value: BTreeSet<Cell>) -> Self {
        Self::Set(value)
    }
}

impl From<ArrayD<Cell>> for Input {
    fn from(value: ArrayD<Cell>) -> Self {
        Self::Array(value)
    }
}

impl From<Frame> for Input {
    fn from(value: Frame) -> Self {
        Self::Frame(value)
    }
}
