//! Template error types

use thiserror::Error;

/// Errors raised while preparing input for the template compiler
///
/// Compilation itself never fails; these surface when caller-supplied input
/// is not a string-to-string mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TemplateError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TemplateError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = TemplateError::invalid("value for 'tone' must be a string");
        assert_eq!(err.to_string(), "Invalid argument: value for 'tone' must be a string");
    }
}
