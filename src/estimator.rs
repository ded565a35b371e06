//! Trainable transform abstraction
//!
//! The capability contract behind "estimator-like" arguments: anything that
//! can be fit to data and then map data. Composite pipelines implement the
//! same trait but advertise themselves so callers that require a standalone
//! transform can reject them.

use ndarray::{ArrayD, ArrayViewD};

use crate::error::{Result, TextPrepError};

/// Trait for trainable transforms
pub trait Transformer {
    /// Fit the transform to the given data
    ///
    /// # Errors
    /// - Transform-specific fitting failures
    fn fit(&mut self, data: ArrayViewD<'_, f64>) -> Result<()>;

    /// Map the given data through the fitted transform
    ///
    /// # Errors
    /// - Transform not fitted
    /// - Transform-specific mapping failures
    fn transform(&self, data: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>>;

    /// Whether this transform is a composite multi-step pipeline
    fn is_pipeline(&self) -> bool {
        false
    }
}

/// Composite transform applying a fixed sequence of steps in order
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Transformer>>,
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to the end of the pipeline
    #[must_use]
    pub fn with_step(mut self, step: Box<dyn Transformer>) -> Self {
        self.steps.push(step);
        self
    }

    /// Number of steps in the pipeline
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Transformer for Pipeline {
    fn fit(&mut self, data: ArrayViewD<'_, f64>) -> Result<()> {
        let mut current = data.to_owned();
        for step in &mut self.steps {
            step.fit(current.view())?;
            current = step.transform(current.view())?;
        }
        Ok(())
    }

    fn transform(&self, data: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        if self.steps.is_empty() {
            return Err(TextPrepError::invalid_argument(
                "Cannot transform with an empty pipeline",
            ));
        }
        let mut current = data.to_owned();
        for step in &self.steps {
            current = step.transform(current.view())?;
        }
        Ok(current)
    }

    fn is_pipeline(&self) -> bool {
        true
    }
}
