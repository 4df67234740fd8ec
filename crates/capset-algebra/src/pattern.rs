//! Glob patterns over identifiers and profiles.
//!
//! Only `*` is special; it stands for any (possibly empty) sequence. Every
//! other character is literal. Matching is anchored and case-insensitive.

use std::fmt;

use capset_model::eq_ignore_case;
use regex::{Regex, RegexBuilder};

use crate::FilterSetError;

/// Placeholder run substituted for `*` when probing whether one pattern is
/// narrower than another.
const PLACEHOLDER_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `glob`. `field` only labels the error.
    pub fn new(field: &'static str, glob: &str) -> Result<Self, FilterSetError> {
        let body = glob
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = RegexBuilder::new(&format!("^{}$", body))
            .case_insensitive(true)
            .build()
            .map_err(|e| FilterSetError::InvalidPattern {
                field,
                pattern: glob.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            source: glob.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn has_wildcard(&self) -> bool {
        self.source.contains('*')
    }

    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// The pattern with every `*` removed.
    pub fn literal(&self) -> String {
        self.source.replace('*', "")
    }

    /// The pattern with every `*` replaced by `fill`.
    pub fn expand(&self, fill: &str) -> String {
        self.source.replace('*', fill)
    }

    /// Conservative "`other` matches nothing that `self` rejects".
    ///
    /// Probes `other` twice: wildcards filled with the placeholder alphabet
    /// and wildcards dropped. Both probes must be accepted by `self`.
    pub fn covers(&self, other: &Pattern) -> bool {
        self.is_match(&other.expand(PLACEHOLDER_ALPHABET)) && self.is_match(&other.literal())
    }

    /// Loose overlap: either pattern accepts the other's text, or both
    /// reduce to the same literal.
    pub fn overlaps(&self, other: &Pattern) -> bool {
        self.is_match(&other.source)
            || other.is_match(&self.source)
            || eq_ignore_case(&self.literal(), &other.literal())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.source)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(glob: &str) -> Pattern {
        Pattern::new("identifier", glob).unwrap()
    }

    #[test]
    fn literal_characters_are_escaped() {
        let pat = p(".NETFramework");
        assert!(pat.is_match(".netframework"));
        assert!(!pat.is_match("xNETFramework"));
        assert!(p("a+b").is_match("A+B"));
        assert!(!p("a+b").is_match("aab"));
    }

    #[test]
    fn star_matches_any_sequence_and_anchors() {
        let pat = p("Windows*");
        assert!(pat.is_match("Windows"));
        assert!(pat.is_match("WindowsPhoneApp"));
        assert!(!pat.is_match("MyWindows"));
        assert!(p("*").is_match(""));
    }

    #[test]
    fn empty_pattern_only_matches_empty() {
        assert!(p("").is_match(""));
        assert!(!p("").is_match("Client"));
    }

    #[test]
    fn covers_is_conservative() {
        assert!(p("*").covers(&p("Silverlight")));
        assert!(p("Windows*").covers(&p("WindowsPhone*")));
        assert!(p("Net").covers(&p("NET")));
        assert!(!p("WindowsPhone*").covers(&p("Windows*")));
        assert!(!p("Silverlight").covers(&p("*")));
    }

    #[test]
    fn overlaps_by_match_or_literal() {
        assert!(p("Windows*").overlaps(&p("WindowsPhone")));
        assert!(!p("*Phone").overlaps(&p("Windows*")));
        assert!(p("Win*").overlaps(&p("*Win")));
        assert!(!p("Silverlight").overlaps(&p("Xamarin.iOS")));
    }
}
