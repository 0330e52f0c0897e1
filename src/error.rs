use thiserror::Error;

/// Main error type for termlens operations
#[derive(Error, Debug)]
pub enum TermLensError {
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("Malformed range expression: {0}")]
    MalformedRange(String),

    #[error("Invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid {field_type} value: '{value}'")]
    InvalidValue { field_type: String, value: String },
}

/// Result type alias for termlens operations
pub type Result<T> = std::result::Result<T, TermLensError>;

impl TermLensError {
    /// Check if this error should be reported as a request-validation
    /// failure (bad user input) rather than an internal fault.
    ///
    /// All construction-time errors are validation failures; scanning
    /// itself never raises.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            TermLensError::UnknownFieldType(_)
                | TermLensError::MalformedRange(_)
                | TermLensError::InvalidPattern(_)
                | TermLensError::InvalidValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TermLensError::UnknownFieldType("geo_point".to_string());
        assert_eq!(err.to_string(), "Unknown field type: geo_point");
    }

    #[test]
    fn test_malformed_range_display() {
        let err = TermLensError::MalformedRange("a..b..c".to_string());
        assert_eq!(err.to_string(), "Malformed range expression: a..b..c");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = TermLensError::InvalidValue {
            field_type: "long".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid long value: 'abc'");
    }

    #[test]
    fn test_validation_errors() {
        assert!(TermLensError::UnknownFieldType("x".to_string()).is_validation_error());
        assert!(TermLensError::MalformedRange("x".to_string()).is_validation_error());
        assert!(
            TermLensError::InvalidValue {
                field_type: "long".to_string(),
                value: "abc".to_string()
            }
            .is_validation_error()
        );
    }
}
