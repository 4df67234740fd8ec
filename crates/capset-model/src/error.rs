use std::fmt;

/// Errors raised while constructing descriptors and versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Identifier was empty or whitespace only
    EmptyIdentifier,
    /// A field contains a separator of the textual encoding
    ReservedCharacter { field: &'static str, value: String },
    /// Version text is not 1 to 4 dot-separated integers
    InvalidVersion(String),
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::EmptyIdentifier => write!(f, "descriptor identifier must not be empty"),
            DescriptorError::ReservedCharacter { field, value } => {
                write!(
                    f,
                    "{} '{}' contains a reserved character (',' or '=')",
                    field, value
                )
            }
            DescriptorError::InvalidVersion(text) => {
                write!(
                    f,
                    "invalid version '{}': expected 1 to 4 dot-separated numbers",
                    text
                )
            }
        }
    }
}

impl std::error::Error for DescriptorError {}
