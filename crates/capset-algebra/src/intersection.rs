//! Conjunction of capability sets.

use std::fmt;

use capset_model::CapabilityDescriptor;

use crate::{CapabilitySet, Tri};

/// Descriptors belonging to every member set.
///
/// Emptiness is computed once at construction. It is only ever proven in
/// the "every member is empty" direction; mutually exclusive non-empty
/// members are not detected, and a caller that knows better can pass a
/// hint through [`IntersectionSet::with_hint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionSet {
    members: Vec<CapabilitySet>,
    empty: Tri,
}

impl IntersectionSet {
    pub fn new(members: Vec<CapabilitySet>) -> Self {
        Self::with_hint(members, Tri::Unknown)
    }

    /// Like [`IntersectionSet::new`], using `is_empty_hint` when emptiness
    /// cannot be derived from the members.
    pub fn with_hint(members: Vec<CapabilitySet>, is_empty_hint: Tri) -> Self {
        let empty = if members.iter().all(|m| m.is_empty().is_true()) {
            // also covers the memberless case
            Tri::True
        } else if let [only] = members.as_slice() {
            only.is_empty()
        } else {
            is_empty_hint
        };
        Self { members, empty }
    }

    pub fn members(&self) -> &[CapabilitySet] {
        &self.members
    }

    /// Member-wise AND. A memberless intersection is empty and holds nothing.
    pub fn contains(&self, item: &CapabilityDescriptor) -> bool {
        !self.members.is_empty() && self.members.iter().all(|m| m.contains(item))
    }

    pub fn contains_set(&self, other: &CapabilitySet) -> Tri {
        if other.is_empty().is_true() {
            return Tri::True;
        }
        if self.empty.is_true() {
            // nothing fits in an empty set, and `other` is not known to be empty
            return if other.is_empty().is_false() {
                Tri::False
            } else {
                Tri::Unknown
            };
        }
        let CapabilitySet::Intersection(other) = other else {
            return Tri::Unknown;
        };

        // every one of our members contains at least one of theirs
        let contains = self
            .members
            .iter()
            .all(|mine| other.members.iter().any(|theirs| mine.contains_set(theirs).is_true()));
        if contains {
            return Tri::True;
        }

        // theirs is inhabited, and one of our members is disjoint from all of theirs
        let not_contains = other.empty.is_false()
            && self
                .members
                .iter()
                .any(|mine| other.members.iter().all(|theirs| mine.intersects(theirs).is_false()));
        if not_contains {
            return Tri::False;
        }

        Tri::Unknown
    }

    /// Only the empty-set short-circuit is attempted.
    pub fn intersects(&self, other: &CapabilitySet) -> Tri {
        if self.empty.is_true() || other.is_empty().is_true() {
            return Tri::False;
        }
        Tri::Unknown
    }

    pub fn is_empty(&self) -> Tri {
        self.empty
    }
}

impl fmt::Display for IntersectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, m) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", m)?;
        }
        write!(f, "]")
    }
}
