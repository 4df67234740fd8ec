//! The external "can this profile satisfy the code" predicate.

use std::fmt;

use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Hidden,
    Info,
    Warning,
    Error,
}

/// A compiler message reported while checking a profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}: {}", self.severity, self.code, self.message)
    }
}

/// Outcome of checking one profile. Failures are data, not errors: a
/// failing profile is reported and the traversal carries on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    Ok,
    /// Names the code uses that the profile does not provide.
    UnsupportedTypes(Vec<String>),
    CompilationErrors(Vec<Diagnostic>),
}

impl SatisfactionResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, SatisfactionResult::Ok)
    }
}

impl fmt::Display for SatisfactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatisfactionResult::Ok => write!(f, "ok"),
            SatisfactionResult::UnsupportedTypes(types) => {
                write!(f, "unsupported types: {}", types.join(", "))
            }
            SatisfactionResult::CompilationErrors(errors) => {
                write!(f, "{} compilation error(s)", errors.len())
            }
        }
    }
}

/// Decides whether a profile meets some requirements. Implementations may
/// be slow (a compilation elsewhere); the filtered view calls them
/// concurrently for sibling subtrees.
#[async_trait]
pub trait Requirements<P: ?Sized + Sync>: Send + Sync {
    async fn satisfied_by(&self, profile: &P) -> SatisfactionResult;
}
