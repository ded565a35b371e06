//! Utility modules for data-preparation workflows

pub mod validation;

pub use validation::{
    DocumentValidator, EstimatorValidator, ParamValidator, ShapeValidator, TokenValidator,
};
