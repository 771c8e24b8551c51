// File: src/error.rs
// Purpose: Library error types

use thiserror::Error;

/// Errors surfaced by validation, marking, and registry operations.
///
/// All of these are synchronous and local to the call that raised them;
/// there is no retry or recovery path beyond the caller handling the error.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// `initialize` was handed something other than a configuration object
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A validate/mark/display operation had no resolvable selection
    #[error("no selector supplied")]
    NoSelection,

    /// `upsert` was handed a malformed rule definition
    #[error("invalid rule definition: {0}")]
    RuleDefinition(String),
}

pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_message() {
        assert_eq!(ValidateError::NoSelection.to_string(), "no selector supplied");
    }
}
