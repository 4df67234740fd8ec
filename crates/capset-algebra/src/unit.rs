//! Minimum-version compatibility sets.

use std::fmt;

use capset_model::CapabilityDescriptor;

use crate::{CapabilitySet, Tri};

/// Every descriptor on the same identifier and profile whose version is at
/// least the anchor's, within the anchor's major version.
///
/// Encodes the assumption that newer platform versions are backward
/// compatible supersets of older ones inside a major line, so `4.0` admits
/// `4.5` but not `5.0` nor `3.5`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitSet {
    descriptor: CapabilityDescriptor,
}

impl UnitSet {
    pub fn new(descriptor: CapabilityDescriptor) -> Self {
        Self { descriptor }
    }

    /// The anchor (lowest) descriptor of the line.
    pub fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    pub fn contains(&self, d: &CapabilityDescriptor) -> bool {
        let anchor = &self.descriptor;
        anchor.same_line(d)
            && anchor.version().same_major(&d.version())
            && d.version() >= anchor.version()
    }

    pub fn contains_set(&self, other: &CapabilitySet) -> Tri {
        if other.is_empty().is_true() {
            return Tri::True;
        }
        match other {
            CapabilitySet::Unit(u) => Tri::from(self.contains(u.descriptor())),
            // a pattern generally spans more than one line
            CapabilitySet::Filter(_) => Tri::False,
            CapabilitySet::Intersection(i) => {
                if i.members().iter().any(|m| self.contains_set(m).is_true()) {
                    return Tri::True;
                }
                if i.is_empty().is_false() && i.members().iter().any(|m| self.intersects(m).is_false()) {
                    return Tri::False;
                }
                Tri::Unknown
            }
        }
    }

    pub fn intersects(&self, other: &CapabilitySet) -> Tri {
        if other.is_empty().is_true() {
            return Tri::False;
        }
        match other {
            CapabilitySet::Unit(u) => {
                Tri::from(self.contains(u.descriptor()) || u.contains(&self.descriptor))
            }
            CapabilitySet::Filter(f) => Tri::from(f.admits_line(&self.descriptor)),
            CapabilitySet::Intersection(_) => Tri::Unknown,
        }
    }

    /// "This version or later" always holds at least the anchor.
    pub fn is_empty(&self) -> Tri {
        Tri::False
    }
}

impl From<CapabilityDescriptor> for UnitSet {
    fn from(descriptor: CapabilityDescriptor) -> Self {
        Self::new(descriptor)
    }
}

/// Same encoding as the anchor descriptor.
impl fmt::Display for UnitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor)
    }
}
