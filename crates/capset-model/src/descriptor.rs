//! Concrete platform identity: identifier, version and optional profile.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{eq_ignore_case, fold_case, DescriptorError, Version, RESERVED_CHARS};

/// One concrete platform, e.g. `.NETFramework,Version=v4.0,Profile=Client`.
///
/// Immutable once built. Equality and hashing ignore the case of
/// `identifier` and `profile`; an empty profile means "no profile".
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "DescriptorRecord")]
pub struct CapabilityDescriptor {
    identifier: String,
    version: Version,
    #[serde(default)]
    profile: String,
}

/// Unvalidated wire shape; deserialization goes through [`CapabilityDescriptor::new`].
#[derive(Deserialize)]
struct DescriptorRecord {
    identifier: String,
    version: Version,
    #[serde(default)]
    profile: String,
}

impl TryFrom<DescriptorRecord> for CapabilityDescriptor {
    type Error = DescriptorError;

    fn try_from(r: DescriptorRecord) -> Result<Self, Self::Error> {
        CapabilityDescriptor::new(r.identifier, r.version, r.profile)
    }
}

impl CapabilityDescriptor {
    /// Validates and builds a descriptor.
    ///
    /// Fails on a blank identifier, or when identifier or profile contain a
    /// separator of the textual encoding.
    pub fn new(
        identifier: impl Into<String>,
        version: Version,
        profile: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        let identifier = identifier.into();
        let profile = profile.into();

        if identifier.trim().is_empty() {
            return Err(DescriptorError::EmptyIdentifier);
        }
        check_reserved("identifier", &identifier)?;
        check_reserved("profile", &profile)?;

        Ok(Self {
            identifier,
            version,
            profile,
        })
    }

    /// Descriptor without a profile.
    pub fn unprofiled(
        identifier: impl Into<String>,
        version: Version,
    ) -> Result<Self, DescriptorError> {
        Self::new(identifier, version, String::new())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Profile name; empty when the descriptor has none.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn has_profile(&self) -> bool {
        !self.profile.is_empty()
    }

    /// Same identifier and profile, ignoring case. Versions are not compared.
    pub fn same_line(&self, other: &CapabilityDescriptor) -> bool {
        eq_ignore_case(&self.identifier, &other.identifier)
            && eq_ignore_case(&self.profile, &other.profile)
    }
}

fn check_reserved(field: &'static str, value: &str) -> Result<(), DescriptorError> {
    if value.contains(RESERVED_CHARS) {
        return Err(DescriptorError::ReservedCharacter {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

impl PartialEq for CapabilityDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.same_line(other)
    }
}

impl Eq for CapabilityDescriptor {}

impl Hash for CapabilityDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold_case(&self.identifier).hash(state);
        self.version.hash(state);
        fold_case(&self.profile).hash(state);
    }
}

impl fmt::Display for CapabilityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},Version=v{}", self.identifier, self.version)?;
        if self.has_profile() {
            write!(f, ",Profile={}", self.profile)?;
        }
        Ok(())
    }
}
