//! Intersections and the properties that hold across all set kinds.

use capset_algebra::{CapabilitySet, IntersectionSet, Tri};
use capset_parse::{parse_capability_set, parse_descriptor};

fn set(src: &str) -> CapabilitySet {
    parse_capability_set(src).unwrap_or_else(|e| panic!("{src}: {e}"))
}

fn all(srcs: &[&str]) -> Vec<CapabilitySet> {
    srcs.iter().map(|s| set(s)).collect()
}

// ============================================================================
// EMPTINESS
// ============================================================================

#[test]
fn memberless_intersection_is_empty_and_holds_nothing() {
    let empty = IntersectionSet::new(vec![]);
    assert_eq!(empty.is_empty(), Tri::True);
    assert!(!empty.contains(&parse_descriptor("Net,Version=v4.0").unwrap()));
    assert_eq!(empty.to_string(), "[]");
}

#[test]
fn single_member_decides_emptiness() {
    let one = IntersectionSet::with_hint(all(&["Net,Version=v4.0"]), Tri::True);
    assert_eq!(one.is_empty(), Tri::False);
}

#[test]
fn nested_empties_are_empty() {
    let inner = CapabilitySet::intersection(vec![]);
    let outer = IntersectionSet::with_hint(vec![inner.clone(), inner], Tri::False);
    assert_eq!(outer.is_empty(), Tri::True);
}

#[test]
fn hint_is_used_when_members_do_not_decide() {
    let members = all(&["Net*", "*Core"]);
    assert_eq!(IntersectionSet::new(members.clone()).is_empty(), Tri::Unknown);
    assert_eq!(IntersectionSet::with_hint(members, Tri::False).is_empty(), Tri::False);
}

// ============================================================================
// MEMBERSHIP AND CONTAINMENT
// ============================================================================

#[test]
fn contains_requires_every_member() {
    let both = IntersectionSet::new(all(&["Net*", "*Core"]));
    assert!(both.contains(&parse_descriptor("NetCore,Version=v1.0").unwrap()));
    assert!(!both.contains(&parse_descriptor("NetFramework,Version=v1.0").unwrap()));
}

#[test]
fn contains_intersection_when_each_member_covers_one_of_theirs() {
    let wide = CapabilitySet::intersection(all(&["Net*", "*Core"]));
    let narrow = CapabilitySet::intersection(all(&["NetCore,Version=v1.0", "Mono*"]));
    assert_eq!(wide.contains_set(&narrow), Tri::True);
}

#[test]
fn disjoint_member_rules_out_containment() {
    let mine = CapabilitySet::intersection(all(&["Silverlight,Version=v5.0", "S*"]));
    let theirs = CapabilitySet::Intersection(IntersectionSet::with_hint(
        all(&["Net,Version=v4.0", "Net,Version=v4.5"]),
        Tri::False,
    ));
    assert_eq!(mine.contains_set(&theirs), Tri::False);

    let unproven = CapabilitySet::intersection(all(&["Net,Version=v4.0", "Net,Version=v4.5"]));
    assert_eq!(mine.contains_set(&unproven), Tri::Unknown);
}

#[test]
fn empty_set_holds_no_inhabited_set() {
    let empty = CapabilitySet::intersection(vec![]);
    let net = CapabilitySet::intersection(all(&["Net,Version=v4.0"]));
    assert_eq!(net.is_empty(), Tri::False);
    assert_eq!(empty.contains_set(&net), Tri::False);
    assert_eq!(empty.contains_set(&set("Net,Version=v4.0")), Tri::False);
    assert_eq!(net.contains_set(&empty), Tri::True);
}

#[test]
fn other_kinds_are_not_decided() {
    let both = CapabilitySet::intersection(all(&["Net*", "*Core"]));
    assert_eq!(both.contains_set(&set("NetCore,Version=v1.0")), Tri::Unknown);
    assert_eq!(both.intersects(&set("NetCore*")), Tri::Unknown);
    assert_eq!(both.contains_set(&CapabilitySet::intersection(vec![])), Tri::True);
    assert_eq!(both.intersects(&CapabilitySet::intersection(vec![])), Tri::False);
}

#[test]
fn display_joins_members() {
    let both = CapabilitySet::intersection(all(&["Net*", "Net,Version=v4.0"]));
    assert_eq!(both.to_string(), "[Net* & Net,Version=v4.0]");
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn containment_is_reflexive() {
    for src in [
        "Net,Version=v4.0",
        "Net,Version=v4.0,Profile=Client",
        "Windows*,Version=v8.0,Profile=*",
        "Xamarin.*,MinimumToolVersion=12.0,PlatformArchitectures=x86|ARM",
    ] {
        let s = set(src);
        assert_eq!(s.contains_set(&s), Tri::True, "{src}");
    }
    let both = CapabilitySet::intersection(all(&["Net*", "Net,Version=v4.0"]));
    assert_eq!(both.contains_set(&both), Tri::True);
}

#[test]
fn non_empty_sets_intersect_themselves() {
    for src in ["Net,Version=v4.0", "Windows*,Profile=*"] {
        let s = set(src);
        assert_eq!(s.intersects(&s), Tri::True, "{src}");
    }
}

#[test]
fn every_set_contains_the_empty_set() {
    let empty = CapabilitySet::intersection(vec![]);
    for s in [
        set("Net,Version=v4.0"),
        set("Windows*"),
        CapabilitySet::intersection(all(&["Net*"])),
        empty.clone(),
    ] {
        assert_eq!(s.contains_set(&empty), Tri::True, "{s}");
        assert_eq!(s.intersects(&empty), Tri::False, "{s}");
    }
}
