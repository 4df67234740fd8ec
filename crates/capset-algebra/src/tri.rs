//! Three-valued truth.

use std::fmt;

/// Answer to a set question that may not be decidable.
///
/// `Unknown` is a normal result, not an error: callers treat anything other
/// than a definite answer as "no information".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tri {
    True,
    False,
    #[default]
    Unknown,
}

impl Tri {
    #[inline]
    pub fn is_true(self) -> bool {
        self == Tri::True
    }

    #[inline]
    pub fn is_false(self) -> bool {
        self == Tri::False
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Tri::Unknown
    }

    /// The definite value, if any.
    #[inline]
    pub fn known(self) -> Option<bool> {
        match self {
            Tri::True => Some(true),
            Tri::False => Some(false),
            Tri::Unknown => None,
        }
    }

    /// Kleene conjunction.
    pub fn and(self, other: Tri) -> Tri {
        match (self, other) {
            (Tri::False, _) | (_, Tri::False) => Tri::False,
            (Tri::True, Tri::True) => Tri::True,
            _ => Tri::Unknown,
        }
    }

    /// Kleene disjunction.
    pub fn or(self, other: Tri) -> Tri {
        match (self, other) {
            (Tri::True, _) | (_, Tri::True) => Tri::True,
            (Tri::False, Tri::False) => Tri::False,
            _ => Tri::Unknown,
        }
    }

    /// Falls back to `f` only when `self` is `Unknown`.
    pub fn or_else(self, f: impl FnOnce() -> Tri) -> Tri {
        match self {
            Tri::Unknown => f(),
            known => known,
        }
    }
}

impl std::ops::Not for Tri {
    type Output = Tri;

    fn not(self) -> Tri {
        match self {
            Tri::True => Tri::False,
            Tri::False => Tri::True,
            Tri::Unknown => Tri::Unknown,
        }
    }
}

impl From<bool> for Tri {
    fn from(b: bool) -> Self {
        if b {
            Tri::True
        } else {
            Tri::False
        }
    }
}

impl From<Option<bool>> for Tri {
    fn from(b: Option<bool>) -> Self {
        b.map_or(Tri::Unknown, Tri::from)
    }
}

impl From<Tri> for Option<bool> {
    fn from(t: Tri) -> Self {
        t.known()
    }
}

impl fmt::Display for Tri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tri::True => write!(f, "true"),
            Tri::False => write!(f, "false"),
            Tri::Unknown => write!(f, "unknown"),
        }
    }
}
