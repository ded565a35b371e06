#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # textprep
//!
//! Validation and data-preparation utilities for text-analysis pipelines.
//!
//! The crate centers on a set of precondition checks that public operations
//! invoke on their arguments before acting on them: enum-style string
//! parameters, array shapes, train/test split consistency, raw document
//! collections, token sequences, and estimator-like objects. Every check is
//! pure and synchronous; it either confirms its contract or fails
//! immediately with a typed [`TextPrepError`] the caller propagates.
//!
//! Caller-supplied values from untyped sources are classified once into an
//! [`Input`] tag, and the validators dispatch on that tag. Structural
//! capabilities are explicit traits: [`ArrayLike`] for anything exposing a
//! shape, [`Transformer`] for trainable transforms.
//!
//! ## Quick Start
//!
//! ```rust
//! use textprep::{DocumentValidator, Input, ParamValidator};
//!
//! # fn main() -> textprep::Result<()> {
//! // A single raw document is accepted as-is
//! DocumentValidator::validate_documents(&Input::from("a single raw document"))?;
//!
//! // Enum-style parameters are checked case-insensitively
//! ParamValidator::validate_orient("h")?;
//! ParamValidator::validate_sort(Some("desc"))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod estimator;
pub mod types;
pub mod utils;

pub use error::{Result, TextPrepError};
pub use estimator::{Pipeline, Transformer};
pub use types::{ArrayLike, Cell, Frame, Input};
pub use utils::validation::{
    DocumentValidator, EstimatorValidator, ParamValidator, ShapeValidator, TokenValidator,
};
