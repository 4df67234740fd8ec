//! Pattern-based capability sets.
//!
//! A [`FilterSet`] describes the descriptors it accepts by their
//! characteristics rather than by listing them: glob patterns over the
//! identifier and profile, a version floor, tool-version bounds and the
//! platform architectures it runs on. Such a set usually stands for
//! infinitely many descriptors, so most set questions against it are
//! answered conservatively.

use std::fmt;

use capset_model::{eq_ignore_case, CapabilityDescriptor, Version};

use crate::{CapabilitySet, FilterSetError, Pattern, Tri};

/// Platform sub-filter. Carried through the textual encoding; it takes no
/// part in matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformFilter {
    pub identifier: String,
    pub min_version: Option<Version>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSet {
    identifier: Pattern,
    profile: Pattern,
    min_version: Option<Version>,
    min_tool_version: Option<Version>,
    max_tool_version: Option<Version>,
    platform_architectures: Vec<String>,
    platform: Option<PlatformFilter>,
    display_name: String,
    family: String,
    min_version_display_name: String,
}

impl FilterSet {
    pub fn builder(identifier: impl Into<String>) -> FilterSetBuilder {
        FilterSetBuilder::new(identifier)
    }

    // ---- Accessors ----

    pub fn identifier(&self) -> &Pattern {
        &self.identifier
    }

    pub fn profile(&self) -> &Pattern {
        &self.profile
    }

    pub fn min_version(&self) -> Option<Version> {
        self.min_version
    }

    pub fn min_tool_version(&self) -> Option<Version> {
        self.min_tool_version
    }

    pub fn max_tool_version(&self) -> Option<Version> {
        self.max_tool_version
    }

    pub fn platform_architectures(&self) -> &[String] {
        &self.platform_architectures
    }

    pub fn platform(&self) -> Option<&PlatformFilter> {
        self.platform.as_ref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn min_version_display_name(&self) -> &str {
        &self.min_version_display_name
    }

    // ---- Set operations ----

    /// Identifier and profile patterns match and the version reaches the floor.
    pub fn contains(&self, d: &CapabilityDescriptor) -> bool {
        self.identifier.is_match(d.identifier())
            && self.min_version.map_or(true, |min| d.version() >= min)
            && self.profile.is_match(d.profile())
    }

    /// Whether the compatibility line starting at `d` reaches into this set.
    ///
    /// Only majors are compared against the floor: a line covers every later
    /// minor of its major, so it meets any floor in the same or an earlier major.
    pub(crate) fn admits_line(&self, d: &CapabilityDescriptor) -> bool {
        self.identifier.is_match(d.identifier())
            && self.min_version.map_or(true, |min| d.version().major >= min.major)
            && self.profile.is_match(d.profile())
    }

    pub fn contains_set(&self, other: &CapabilitySet) -> Tri {
        match other {
            CapabilitySet::Filter(f) => Tri::from(self.contains_filter(f)),
            // no ceiling here: covering the floor point covers the whole line
            CapabilitySet::Unit(u) => Tri::from(self.contains(u.descriptor())),
            CapabilitySet::Intersection(i) => {
                if i.is_empty().is_true() || i.members().iter().any(|m| self.contains_set(m).is_true()) {
                    Tri::True
                } else {
                    Tri::Unknown
                }
            }
        }
    }

    /// Structural containment of another filter. Never claims containment
    /// it cannot show; may deny containment that actually holds.
    pub fn contains_filter(&self, other: &FilterSet) -> bool {
        self.identifier.covers(&other.identifier)
            && self.profile.covers(&other.profile)
            && floor_within(other.min_version, self.min_version)
            && floor_within(other.min_tool_version, self.min_tool_version)
            && ceiling_within(other.max_tool_version, self.max_tool_version)
            && other.platform_architectures.iter().all(|arch| {
                self.platform_architectures
                    .iter()
                    .any(|mine| eq_ignore_case(mine, arch))
            })
    }

    pub fn intersects(&self, other: &CapabilitySet) -> Tri {
        match other {
            CapabilitySet::Filter(f) => Tri::from(
                self.identifier.overlaps(&f.identifier) && self.profile.overlaps(&f.profile),
            ),
            CapabilitySet::Unit(u) => Tri::from(self.admits_line(u.descriptor())),
            CapabilitySet::Intersection(i) => {
                if i.is_empty().is_true() {
                    Tri::False
                } else {
                    Tri::Unknown
                }
            }
        }
    }

    /// A filter always admits something.
    pub fn is_empty(&self) -> Tri {
        Tri::False
    }
}

/// `other` floor is at least `mine`. An absent floor is the lowest.
fn floor_within(other: Option<Version>, mine: Option<Version>) -> bool {
    match (other, mine) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(o), Some(m)) => o >= m,
    }
}

/// `other` ceiling is at most `mine`. An absent ceiling is the highest.
fn ceiling_within(other: Option<Version>, mine: Option<Version>) -> bool {
    match (other, mine) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(o), Some(m)) => o <= m,
    }
}

/// Textual encoding: `identifier[,Version=v<min>+][,Key=Value]...`.
impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(v) = self.min_version {
            write!(f, ",Version=v{}+", v)?;
        }
        if !self.profile.is_empty() {
            write!(f, ",Profile={}", self.profile)?;
        }
        if !self.display_name.is_empty() {
            write!(f, ",DisplayName={}", self.display_name)?;
        }
        if !self.family.is_empty() {
            write!(f, ",Family={}", self.family)?;
        }
        if !self.min_version_display_name.is_empty() {
            write!(f, ",MinimumVersionDisplayName={}", self.min_version_display_name)?;
        }
        if let Some(v) = self.min_tool_version {
            write!(f, ",MinimumToolVersion={}", v)?;
        }
        if let Some(v) = self.max_tool_version {
            write!(f, ",MaximumToolVersion={}", v)?;
        }
        if !self.platform_architectures.is_empty() {
            write!(
                f,
                ",PlatformArchitectures={}",
                self.platform_architectures.join("|")
            )?;
        }
        if let Some(platform) = &self.platform {
            if !platform.identifier.is_empty() {
                write!(f, ",PlatformIdentifier={}", platform.identifier)?;
            }
            if let Some(v) = platform.min_version {
                write!(f, ",PlatformMinimumVersion={}", v)?;
            }
        }
        Ok(())
    }
}

/// Collects and validates the fields of a [`FilterSet`].
///
/// Text is trimmed on the way in, so that what [`FilterSet`]'s `Display`
/// writes parses back to an equal value.
#[derive(Clone, Debug, Default)]
pub struct FilterSetBuilder {
    identifier: String,
    profile: String,
    min_version: Option<Version>,
    min_tool_version: Option<Version>,
    max_tool_version: Option<Version>,
    platform_architectures: Vec<String>,
    platform_identifier: String,
    platform_min_version: Option<Version>,
    display_name: String,
    family: String,
    min_version_display_name: String,
}

impl FilterSetBuilder {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into().trim().to_string(),
            ..Self::default()
        }
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into().trim().to_string();
        self
    }

    pub fn min_version(mut self, v: Version) -> Self {
        self.min_version = Some(v);
        self
    }

    pub fn min_tool_version(mut self, v: Version) -> Self {
        self.min_tool_version = Some(v);
        self
    }

    pub fn max_tool_version(mut self, v: Version) -> Self {
        self.max_tool_version = Some(v);
        self
    }

    pub fn platform_architecture(mut self, arch: impl Into<String>) -> Self {
        let arch = arch.into().trim().to_string();
        if !arch.is_empty() {
            self.platform_architectures.push(arch);
        }
        self
    }

    pub fn platform_architectures<I, S>(self, archs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        archs
            .into_iter()
            .fold(self, |b, arch| b.platform_architecture(arch))
    }

    pub fn platform_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.platform_identifier = identifier.into().trim().to_string();
        self
    }

    pub fn platform_min_version(mut self, v: Version) -> Self {
        self.platform_min_version = Some(v);
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into().trim().to_string();
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into().trim().to_string();
        self
    }

    pub fn min_version_display_name(mut self, name: impl Into<String>) -> Self {
        self.min_version_display_name = name.into().trim().to_string();
        self
    }

    pub fn build(self) -> Result<FilterSet, FilterSetError> {
        if self.identifier.is_empty() {
            return Err(FilterSetError::EmptyIdentifier);
        }
        reject("identifier", &self.identifier, &[',', '='])?;
        reject("profile", &self.profile, &[',', '='])?;
        reject("display name", &self.display_name, &[','])?;
        reject("family", &self.family, &[','])?;
        reject("minimum version display name", &self.min_version_display_name, &[','])?;
        reject("platform identifier", &self.platform_identifier, &[','])?;
        for arch in &self.platform_architectures {
            reject("platform architecture", arch, &[',', '|'])?;
        }

        let platform = if self.platform_identifier.is_empty() && self.platform_min_version.is_none() {
            None
        } else {
            Some(PlatformFilter {
                identifier: self.platform_identifier,
                min_version: self.platform_min_version,
            })
        };

        Ok(FilterSet {
            identifier: Pattern::new("identifier", &self.identifier)?,
            profile: Pattern::new("profile", &self.profile)?,
            min_version: self.min_version,
            min_tool_version: self.min_tool_version,
            max_tool_version: self.max_tool_version,
            platform_architectures: self.platform_architectures,
            platform,
            display_name: self.display_name,
            family: self.family,
            min_version_display_name: self.min_version_display_name,
        })
    }
}

fn reject(field: &'static str, value: &str, chars: &[char]) -> Result<(), FilterSetError> {
    if value.contains(chars) {
        return Err(FilterSetError::ReservedCharacter {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
