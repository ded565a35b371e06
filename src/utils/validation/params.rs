//! Parameter validation utilities
//!
//! Checks for short enum-style string parameters shared across the plotting
//! and reporting surfaces.

use std::fmt;

use crate::error::{Result, TextPrepError};

/// Validator for enum-style string parameters
pub struct ParamValidator;

impl ParamValidator {
    /// Validate a bar orientation code
    ///
    /// Accepts `"h"` or `"v"`, case-insensitively.
    pub fn validate_orient(orient: &str) -> Result<()> {
        match orient.to_lowercase().as_str() {
            "h" | "v" => Ok(()),
            _ => Err(TextPrepError::invalid_argument(format!(
                "`orient` must be \"h\" or \"v\", not {orient:?}"
            ))),
        }
    }

    /// Validate a sort direction code
    ///
    /// Accepts `None`, `"asc"`, or `"desc"`, case-insensitively.
    pub fn validate_sort(sort: Option<&str>) -> Result<()> {
        let Some(sort) = sort else {
            return Ok(());
        };
        match sort.to_lowercase().as_str() {
            "asc" | "desc" => Ok(()),
            _ => Err(TextPrepError::invalid_argument(format!(
                "`sort` must be \"asc\", \"desc\", or omitted, not {sort:?}"
            ))),
        }
    }

    /// Build a consistent invalid-value error for a named parameter
    ///
    /// Always an error value; the caller returns it. When `valid_options` is
    /// given the message lists them, otherwise only the parameter name and
    /// the offending value appear.
    pub fn invalid_value<V: fmt::Display>(
        param_name: &str,
        value: V,
        valid_options: Option<&[&str]>,
    ) -> TextPrepError {
        match valid_options {
            Some(options) => TextPrepError::invalid_argument(format!(
                "Invalid value {value} for `{param_name}`. Valid options: {options:?}"
            )),
            None => TextPrepError::invalid_argument(format!(
                "Invalid value for `{param_name}`: {value}"
            )),
        }
    }
}
