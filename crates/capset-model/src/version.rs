//! Four-part platform versions.
//!
//! Components after `major` are optional. An absent component orders below
//! any present one, so `4.0 < 4.0.0 < 4.0.1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DescriptorError;

/// `major[.minor[.build[.revision]]]`
///
/// Field order matters: the derived `Ord` compares lexicographically and
/// `None < Some(_)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: Option<u32>,
    pub build: Option<u32>,
    pub revision: Option<u32>,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            build: None,
            revision: None,
        }
    }

    pub const fn with_build(self, build: u32) -> Self {
        Self {
            build: Some(build),
            ..self
        }
    }

    /// Sets the revision, filling an absent build with `0`.
    pub const fn with_revision(self, revision: u32) -> Self {
        let build = match self.build {
            Some(b) => b,
            None => 0,
        };
        Self {
            build: Some(build),
            revision: Some(revision),
            ..self
        }
    }

    /// Present components, most significant first.
    pub fn components(&self) -> impl Iterator<Item = u32> {
        std::iter::once(self.major)
            .chain(self.minor)
            .chain(self.build)
            .chain(self.revision)
    }

    /// True when both versions belong to the same major line.
    #[inline]
    pub fn same_major(&self, other: &Version) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in self.components() {
            if !first {
                write!(f, ".")?;
            }
            first = false;
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DescriptorError::InvalidVersion(s.to_string());

        let mut parts = Vec::with_capacity(4);
        for piece in s.trim().split('.') {
            if piece.is_empty() || !piece.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            parts.push(piece.parse::<u32>().map_err(|_| invalid())?);
        }
        if parts.is_empty() || parts.len() > 4 {
            return Err(invalid());
        }

        Ok(Version {
            major: parts[0],
            minor: parts.get(1).copied(),
            build: parts.get(2).copied(),
            revision: parts.get(3).copied(),
        })
    }
}

impl TryFrom<String> for Version {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}
