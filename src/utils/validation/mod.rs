//! Consolidated argument validation
//!
//! Centralized precondition checks invoked at the top of public operations.
//! Every check is synchronous, read-only with respect to its inputs, and
//! either returns `Ok(())` or fails immediately with a typed error that the
//! caller propagates unmodified.

pub mod documents;
pub mod estimator;
pub mod params;
pub mod shape;
pub mod tokens;

pub use documents::DocumentValidator;
pub use estimator::EstimatorValidator;
pub use params::ParamValidator;
pub use shape::ShapeValidator;
pub use tokens::TokenValidator;
