//! The closed family of capability sets.

use std::fmt;

use capset_model::CapabilityDescriptor;

use crate::{FilterSet, IntersectionSet, Tri, UnitSet};

/// A possibly infinite collection of capability descriptors.
///
/// Membership of a single descriptor is always decidable. Questions between
/// sets answer [`Tri::Unknown`] whenever the representation does not settle
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CapabilitySet {
    /// Version floor on one identifier/profile line.
    Unit(UnitSet),
    /// Pattern match over descriptor characteristics.
    Filter(FilterSet),
    /// Conjunction of member sets.
    Intersection(IntersectionSet),
}

impl CapabilitySet {
    // ---- Constructors ----

    pub fn unit(descriptor: CapabilityDescriptor) -> Self {
        CapabilitySet::Unit(UnitSet::new(descriptor))
    }

    pub fn intersection(members: Vec<CapabilitySet>) -> Self {
        CapabilitySet::Intersection(IntersectionSet::new(members))
    }

    // ---- Queries ----

    pub fn contains(&self, item: &CapabilityDescriptor) -> bool {
        match self {
            CapabilitySet::Unit(s) => s.contains(item),
            CapabilitySet::Filter(s) => s.contains(item),
            CapabilitySet::Intersection(s) => s.contains(item),
        }
    }

    /// Is `other` a subset of `self`?
    pub fn contains_set(&self, other: &CapabilitySet) -> Tri {
        match self {
            CapabilitySet::Unit(s) => s.contains_set(other),
            CapabilitySet::Filter(s) => s.contains_set(other),
            CapabilitySet::Intersection(s) => s.contains_set(other),
        }
    }

    pub fn intersects(&self, other: &CapabilitySet) -> Tri {
        match self {
            CapabilitySet::Unit(s) => s.intersects(other),
            CapabilitySet::Filter(s) => s.intersects(other),
            CapabilitySet::Intersection(s) => s.intersects(other),
        }
    }

    pub fn is_empty(&self) -> Tri {
        match self {
            CapabilitySet::Unit(s) => s.is_empty(),
            CapabilitySet::Filter(s) => s.is_empty(),
            CapabilitySet::Intersection(s) => s.is_empty(),
        }
    }
}

impl From<UnitSet> for CapabilitySet {
    fn from(s: UnitSet) -> Self {
        CapabilitySet::Unit(s)
    }
}

impl From<FilterSet> for CapabilitySet {
    fn from(s: FilterSet) -> Self {
        CapabilitySet::Filter(s)
    }
}

impl From<IntersectionSet> for CapabilitySet {
    fn from(s: IntersectionSet) -> Self {
        CapabilitySet::Intersection(s)
    }
}

/// Unit and filter sets print their textual encoding; intersections print
/// their members for diagnostics only.
impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilitySet::Unit(s) => write!(f, "{}", s),
            CapabilitySet::Filter(s) => write!(f, "{}", s),
            CapabilitySet::Intersection(s) => write!(f, "{}", s),
        }
    }
}
