//! Shape validation utilities
//!
//! Dimensionality and axis-size checks for array-like arguments, plus the
//! cross-argument consistency check for train/test splits.

use crate::error::{Result, TextPrepError};
use crate::types::{ArrayLike, Input};

/// Validator for array shapes and dimensionality
pub struct ShapeValidator;

impl ShapeValidator {
    /// Check that data is effectively one-dimensional
    ///
    /// Accepts shape `(n_samples,)`, or `(n_samples, 1)` — a single column.
    /// Anything wider or deeper is rejected.
    pub fn check_1d_or_column(data: &Input) -> Result<()> {
        let shape = Self::array_shape(data)?;
        let second_axis = shape.get(1).copied().unwrap_or(0);
        if shape.len() > 2 || (shape.len() == 2 && second_axis > 1) {
            return Err(TextPrepError::shape(
                "Data must be shape (n_samples,) or (n_samples, 1).",
            ));
        }
        Ok(())
    }

    /// Check that data is strictly one-dimensional
    pub fn check_1d(data: &Input) -> Result<()> {
        Self::ensure_1d(Self::array_shape(data)?)
    }

    /// Check that four split arrays are consistent with a proper
    /// train/test split
    ///
    /// Sample counts must agree within each (features, labels) pair, and
    /// feature widths must agree across the train/test boundary. A failure
    /// here signals a caller bug, not a bad user value.
    pub fn validate_train_test_split(
        x_train: &dyn ArrayLike,
        x_test: &dyn ArrayLike,
        y_train: &dyn ArrayLike,
        y_test: &dyn ArrayLike,
    ) -> Result<()> {
        fn samples(arr: &dyn ArrayLike) -> usize {
            arr.shape().first().copied().unwrap_or(0)
        }
        fn width(arr: &dyn ArrayLike) -> Option<usize> {
            arr.shape().get(1).copied()
        }

        if samples(x_train) != samples(y_train) {
            return Err(TextPrepError::contract_violation(format!(
                "Train sample counts disagree: features have {}, labels have {}",
                samples(x_train),
                samples(y_train)
            )));
        }
        if samples(x_test) != samples(y_test) {
            return Err(TextPrepError::contract_violation(format!(
                "Test sample counts disagree: features have {}, labels have {}",
                samples(x_test),
                samples(y_test)
            )));
        }

        if x_train.ndim() > 1 && width(x_train) != width(x_test) {
            return Err(TextPrepError::contract_violation(format!(
                "Feature widths disagree across the split: train {:?}, test {:?}",
                width(x_train),
                width(x_test)
            )));
        }
        if y_train.ndim() > 1 && width(y_train) != width(y_test) {
            return Err(TextPrepError::contract_violation(format!(
                "Label widths disagree across the split: train {:?}, test {:?}",
                width(y_train),
                width(y_test)
            )));
        }

        Ok(())
    }

    /// Shape of an array-like input, or a type mismatch for anything else
    fn array_shape(data: &Input) -> Result<&[usize]> {
        match data {
            Input::Array(arr) => Ok(ArrayLike::shape(arr)),
            Input::Frame(frame) => Ok(frame.shape()),
            other => Err(TextPrepError::type_mismatch(format!(
                "Expected array-like, got {}",
                other.kind()
            ))),
        }
    }

    pub(crate) fn ensure_1d(shape: &[usize]) -> Result<()> {
        if shape.len() > 1 {
            return Err(TextPrepError::shape(format!(
                "Expected data to be 1-dimensional, but shape is {shape:?}."
            )));
        }
        Ok(())
    }
}
