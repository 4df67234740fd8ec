#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Value types for describing one concrete platform profile.
//!
//! A [`CapabilityDescriptor`] names a platform by identifier, [`Version`] and
//! optional profile. Identifier and profile compare case-insensitively.

pub mod descriptor;
mod error;
pub mod version;

pub use descriptor::CapabilityDescriptor;
pub use error::DescriptorError;
pub use version::Version;

/// Characters that cannot appear inside a descriptor field, since the
/// textual encoding uses them as separators.
pub const RESERVED_CHARS: &[char] = &[',', '='];

/// Case-insensitive string equality used for identifiers and profiles.
///
/// Agrees with [`fold_case`], which hashing goes through.
#[inline]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || fold_case(a) == fold_case(b)
}

/// Canonical case-folded form of an identifier or profile.
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
