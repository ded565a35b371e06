//! Token validation utilities

use crate::error::{Result, TextPrepError};
use crate::types::Input;

/// Validator for token sequence arguments
pub struct TokenValidator;

impl TokenValidator {
    /// Check that input is an ordered, indexable sequence of tokens
    ///
    /// Lists satisfy the sequence contract, as does a bare string, which is
    /// itself an ordered sequence of text. Sets, arrays, frames, and streams
    /// do not. When `check_str` is set, every element must be raw text.
    pub fn validate_tokens(tokens: &Input, check_str: bool) -> Result<()> {
        match tokens {
            Input::List(cells) => {
                if check_str {
                    for cell in cells {
                        if !cell.is_str() {
                            return Err(TextPrepError::type_mismatch(format!(
                                "Expected sequence of str; encountered {} while iterating",
                                cell.kind()
                            )));
                        }
                    }
                }
                Ok(())
            }
            Input::Text(_) => Ok(()),
            other => Err(TextPrepError::type_mismatch(format!(
                "Expected sequence of str, got {}",
                other.kind()
            ))),
        }
    }
}
