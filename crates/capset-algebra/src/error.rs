use std::fmt;

/// Errors from building a [`crate::FilterSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSetError {
    /// Identifier pattern was empty or whitespace only
    EmptyIdentifier,
    /// Glob could not be compiled into a matcher
    InvalidPattern {
        field: &'static str,
        pattern: String,
        reason: String,
    },
    /// A field contains a separator of the textual encoding
    ReservedCharacter { field: &'static str, value: String },
}

impl fmt::Display for FilterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSetError::EmptyIdentifier => write!(f, "filter identifier must not be empty"),
            FilterSetError::InvalidPattern {
                field,
                pattern,
                reason,
            } => write!(f, "invalid {} pattern '{}': {}", field, pattern, reason),
            FilterSetError::ReservedCharacter { field, value } => {
                write!(f, "{} '{}' contains a reserved character", field, value)
            }
        }
    }
}

impl std::error::Error for FilterSetError {}
