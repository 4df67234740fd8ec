#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

//! Set algebra over [`CapabilityDescriptor`]s.
//!
//! The sets here can be infinite (a version floor, a glob pattern) so
//! subset and intersection questions are answered with [`Tri`]: a definite
//! yes, a definite no, or "cannot tell from what is known".

mod error;
mod filter;
mod intersection;
pub mod pattern;
mod set;
mod tri;
mod unit;

pub use capset_model::{CapabilityDescriptor, Version};
pub use error::FilterSetError;
pub use filter::{FilterSet, FilterSetBuilder, PlatformFilter};
pub use intersection::IntersectionSet;
pub use pattern::Pattern;
pub use set::CapabilitySet;
pub use tri::Tri;
pub use unit::UnitSet;
