//! Unit sets: version floors on one identifier/profile line.

use capset_algebra::{CapabilitySet, IntersectionSet, Tri};
use capset_parse::{parse_capability_set, parse_descriptor, parse_filter_set};

fn set(src: &str) -> CapabilitySet {
    parse_capability_set(src).unwrap_or_else(|e| panic!("{src}: {e}"))
}

fn unit(src: &str) -> CapabilitySet {
    let s = set(src);
    assert!(matches!(s, CapabilitySet::Unit(_)), "{src} is not a unit set");
    s
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

#[test]
fn every_unit_contains_its_anchor() {
    for src in [
        "Net,Version=v4.0",
        "Net,Version=v4.0,Profile=Client",
        "Silverlight,Version=v5.0.5",
    ] {
        let d = parse_descriptor(src).unwrap();
        assert!(set(src).contains(&d), "{src}");
    }
}

#[test]
fn same_line_membership_follows_version_order() {
    let floor = unit("Net,Version=v4.5");
    for (v, expected) in [("4.0", false), ("4.5", true), ("4.5.1", true), ("4.8", true)] {
        let d = parse_descriptor(&format!("Net,Version=v{v}")).unwrap();
        assert_eq!(floor.contains(&d), expected, "4.5 floor vs {v}");
    }
}

#[test]
fn older_floor_admits_newer_but_not_the_reverse() {
    let net40 = unit("Net,Version=v4.0");
    let net45 = unit("Net,Version=v4.5");
    assert_eq!(net40.contains_set(&net45), Tri::True);
    assert_eq!(net45.contains_set(&net40), Tri::False);
}

#[test]
fn major_line_bounds_the_floor() {
    let net4 = unit("Net,Version=v4.0");
    assert!(!net4.contains(&parse_descriptor("Net,Version=v5.0").unwrap()));
    assert_eq!(net4.contains_set(&unit("Net,Version=v5.0")), Tri::False);
    assert_eq!(net4.intersects(&unit("Net,Version=v5.0")), Tri::False);
}

// ============================================================================
// AGAINST OTHER VARIANTS
// ============================================================================

#[test]
fn never_contains_a_filter() {
    let net = unit("Net,Version=v4.0");
    let narrow = CapabilitySet::Filter(parse_filter_set("Net,Version=v4.5").unwrap());
    assert_eq!(net.contains_set(&narrow), Tri::False);
}

#[test]
fn intersects_units_on_the_same_line() {
    let a = unit("Net,Version=v4.0,Profile=Client");
    let b = unit("Net,Version=v4.5,Profile=Client");
    let c = unit("Net,Version=v4.5");
    assert_eq!(a.intersects(&b), Tri::True);
    assert_eq!(b.intersects(&a), Tri::True);
    assert_eq!(a.intersects(&c), Tri::False);
}

#[test]
fn intersects_filter_by_point_test() {
    let net = unit("Net,Version=v4.0");
    assert_eq!(net.intersects(&set("N*,Version=v4.5+")), Tri::True);
    assert_eq!(net.intersects(&set("N*,Version=v5.0+")), Tri::False);
    assert_eq!(net.intersects(&set("Silverlight*")), Tri::False);
}

#[test]
fn contains_intersection_when_a_member_is_contained() {
    let net = unit("Net,Version=v4.0");
    let both = CapabilitySet::intersection(vec![set("Net,Version=v4.5"), set("N*")]);
    assert_eq!(net.contains_set(&both), Tri::True);
}

#[test]
fn rejects_intersection_with_a_disjoint_member() {
    let net = unit("Net,Version=v4.0");
    let members = vec![set("Silverlight,Version=v5.0"), set("S*")];
    let inhabited = CapabilitySet::Intersection(IntersectionSet::with_hint(members.clone(), Tri::False));
    assert_eq!(net.contains_set(&inhabited), Tri::False);

    // emptiness not known: no verdict
    let unknown = CapabilitySet::intersection(members);
    assert_eq!(net.contains_set(&unknown), Tri::Unknown);
}

#[test]
fn empty_sets_are_trivially_contained_and_never_intersect() {
    let net = unit("Net,Version=v4.0");
    let empty = CapabilitySet::intersection(vec![]);
    assert_eq!(net.contains_set(&empty), Tri::True);
    assert_eq!(net.intersects(&empty), Tri::False);
    assert_eq!(net.is_empty(), Tri::False);
}
