//! Turning parsed records into descriptors and capability sets.

use anyhow::{anyhow, bail, Context, Result};
use capset_algebra::{CapabilitySet, FilterSet, UnitSet};
use capset_model::{CapabilityDescriptor, Version};

use crate::parser::{parse_record, Field, Record};

const KEY_VERSION: &str = "Version";
const KEY_PROFILE: &str = "Profile";

const FILTER_KEYS: &[&str] = &[
    KEY_VERSION,
    KEY_PROFILE,
    "DisplayName",
    "Family",
    "MinimumVersionDisplayName",
    "MinimumToolVersion",
    "MaximumToolVersion",
    "PlatformArchitectures",
    "PlatformIdentifier",
    "PlatformMinimumVersion",
];

/// Parses `Identifier,Version=v<version>[,Profile=<profile>]`.
pub fn parse_descriptor(src: &str) -> Result<CapabilityDescriptor> {
    let record = parse_record(src)?;
    descriptor_from_record(&record)
}

/// Parses the unit encoding, which is the anchor descriptor's encoding.
pub fn parse_unit_set(src: &str) -> Result<UnitSet> {
    parse_descriptor(src).map(UnitSet::new)
}

/// Parses `identifier[,Version=v<min>[+]][,Key=Value]...`. Filters format
/// with the `+`, which keeps them apart from unit text.
pub fn parse_filter_set(src: &str) -> Result<FilterSet> {
    let record = parse_record(src)?;
    filter_from_record(&record)
}

/// Parses either encoding. Text that fits the unit grammar (a literal
/// identifier, a version, at most a literal profile) is read as a unit set;
/// anything else as a filter.
pub fn parse_capability_set(src: &str) -> Result<CapabilitySet> {
    let record = parse_record(src)?;
    if looks_like_unit(&record) {
        descriptor_from_record(&record).map(CapabilitySet::unit)
    } else {
        filter_from_record(&record).map(CapabilitySet::Filter)
    }
}

pub fn try_parse_descriptor(src: &str) -> Option<CapabilityDescriptor> {
    parse_descriptor(src).ok()
}

pub fn try_parse_unit_set(src: &str) -> Option<UnitSet> {
    parse_unit_set(src).ok()
}

pub fn try_parse_filter_set(src: &str) -> Option<FilterSet> {
    parse_filter_set(src).ok()
}

pub fn try_parse_capability_set(src: &str) -> Option<CapabilitySet> {
    parse_capability_set(src).ok()
}

fn looks_like_unit(record: &Record) -> bool {
    !record.head.contains('*')
        && record.has_only(&[KEY_VERSION, KEY_PROFILE])
        && record
            .get(KEY_VERSION)
            .is_some_and(|f| !f.value.ends_with('+'))
        && record
            .get(KEY_PROFILE)
            .map_or(true, |f| !f.value.contains('*'))
}

fn descriptor_from_record(record: &Record) -> Result<CapabilityDescriptor> {
    if let Some(extra) = record
        .fields
        .iter()
        .find(|f| !is_one_of(f, &[KEY_VERSION, KEY_PROFILE]))
    {
        bail!(
            "unexpected key '{}' at {} in descriptor",
            extra.key,
            extra.span.start
        );
    }
    let version_field = record
        .get(KEY_VERSION)
        .ok_or_else(|| {
            anyhow!(
                "descriptor '{}' at {} has no Version",
                record.head,
                record.head_span.start
            )
        })?;
    let version = prefixed_version(version_field, false)?;
    let profile = record
        .get(KEY_PROFILE)
        .map(|f| f.value.as_str())
        .unwrap_or("");

    CapabilityDescriptor::new(record.head.as_str(), version, profile)
        .with_context(|| format!("descriptor '{}' at {}", record.head, record.head_span.start))
}

fn filter_from_record(record: &Record) -> Result<FilterSet> {
    if let Some(extra) = record
        .fields
        .iter()
        .find(|f| !is_one_of(f, FILTER_KEYS))
    {
        bail!("unknown filter key '{}' at {}", extra.key, extra.span.start);
    }

    let mut b = FilterSet::builder(record.head.as_str());
    for field in &record.fields {
        let value = field.value.as_str();
        b = match canonical_key(&field.key) {
            Some(KEY_VERSION) => b.min_version(prefixed_version(field, true)?),
            Some(KEY_PROFILE) => b.profile(value),
            Some("DisplayName") => b.display_name(value),
            Some("Family") => b.family(value),
            Some("MinimumVersionDisplayName") => b.min_version_display_name(value),
            Some("MinimumToolVersion") => b.min_tool_version(plain_version(field)?),
            Some("MaximumToolVersion") => b.max_tool_version(plain_version(field)?),
            Some("PlatformArchitectures") => b.platform_architectures(value.split('|')),
            Some("PlatformIdentifier") => b.platform_identifier(value),
            Some("PlatformMinimumVersion") => b.platform_min_version(plain_version(field)?),
            _ => b,
        };
    }
    b.build()
        .with_context(|| format!("filter '{}' at {}", record.head, record.head_span.start))
}

fn canonical_key(key: &str) -> Option<&'static str> {
    FILTER_KEYS
        .iter()
        .copied()
        .find(|k| k.eq_ignore_ascii_case(key))
}

/// `v4.5`, or with `allow_plus`, the legacy open-ended `v4.5+`.
fn prefixed_version(field: &Field, allow_plus: bool) -> Result<Version> {
    let raw = field.value.as_str();
    let Some(rest) = raw.strip_prefix(['v', 'V']) else {
        bail!(
            "{} '{}' at {} must start with 'v'",
            field.key,
            raw,
            field.span.start
        );
    };
    let rest = if allow_plus {
        rest.strip_suffix('+').unwrap_or(rest)
    } else {
        rest
    };
    rest.parse::<Version>()
        .with_context(|| format!("{} at {}", field.key, field.span.start))
}

fn plain_version(field: &Field) -> Result<Version> {
    field
        .value
        .parse::<Version>()
        .with_context(|| format!("{} at {}", field.key, field.span.start))
}

fn is_one_of(field: &Field, keys: &[&str]) -> bool {
    keys.iter().any(|k| k.eq_ignore_ascii_case(&field.key))
}
