//! Estimator validation utilities

use std::any::type_name;

use crate::error::{Result, TextPrepError};
use crate::estimator::Transformer;

/// Validator for estimator-like arguments
pub struct EstimatorValidator;

impl EstimatorValidator {
    /// Check that an object is a standalone trainable transform
    ///
    /// The fit/transform capability is carried by the trait bound; what is
    /// checked at runtime is the exclusion of composite pipelines, which are
    /// rejected by name.
    pub fn validate_transformer<T: Transformer>(obj: &T) -> Result<()> {
        if obj.is_pipeline() {
            return Err(TextPrepError::type_mismatch(format!(
                "Expected a standalone transformer, got pipeline {}",
                type_name::<T>()
            )));
        }
        Ok(())
    }
}
