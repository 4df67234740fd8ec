//! What the hierarchy needs to know about each item.

use std::collections::BTreeSet;
use std::fmt;

use capset_algebra::CapabilitySet;
use capset_model::CapabilityDescriptor;

/// An item placed in a [`HierarchyGraph`](crate::HierarchyGraph).
///
/// Capability names are opaque and compared exactly. The declared set,
/// when present, is consulted before the names.
pub trait CapabilityProfile {
    fn descriptor(&self) -> &CapabilityDescriptor;

    fn capability_names(&self) -> &BTreeSet<String>;

    fn declared_set(&self) -> Option<&CapabilitySet> {
        None
    }
}

impl<T: CapabilityProfile + ?Sized> CapabilityProfile for std::sync::Arc<T> {
    fn descriptor(&self) -> &CapabilityDescriptor {
        (**self).descriptor()
    }

    fn capability_names(&self) -> &BTreeSet<String> {
        (**self).capability_names()
    }

    fn declared_set(&self) -> Option<&CapabilitySet> {
        (**self).declared_set()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileEntry {
    descriptor: CapabilityDescriptor,
    names: BTreeSet<String>,
    declared: Option<CapabilitySet>,
}

impl ProfileEntry {
    pub fn new<I, S>(descriptor: CapabilityDescriptor, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            descriptor,
            names: names.into_iter().map(Into::into).collect(),
            declared: None,
        }
    }

    pub fn with_declared_set(mut self, set: CapabilitySet) -> Self {
        self.declared = Some(set);
        self
    }
}

impl CapabilityProfile for ProfileEntry {
    fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    fn capability_names(&self) -> &BTreeSet<String> {
        &self.names
    }

    fn declared_set(&self) -> Option<&CapabilitySet> {
        self.declared.as_ref()
    }
}

impl fmt::Display for ProfileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor)
    }
}
