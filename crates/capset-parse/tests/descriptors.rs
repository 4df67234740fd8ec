use capset_algebra::CapabilitySet;
use capset_model::Version;
use capset_parse::{
    parse_capability_set, parse_descriptor, parse_filter_set, parse_unit_set, try_parse_descriptor,
};

#[test]
fn descriptor_with_profile() {
    let d = parse_descriptor(".NETFramework,Version=v4.0,Profile=Client").unwrap();
    assert_eq!(d.identifier(), ".NETFramework");
    assert_eq!(d.version(), Version::new(4, 0));
    assert_eq!(d.profile(), "Client");
}

#[test]
fn descriptor_keys_are_case_insensitive() {
    let d = parse_descriptor("Silverlight, version = V5.0 , PROFILE = WindowsPhone71").unwrap();
    assert_eq!(d.version(), Version::new(5, 0));
    assert_eq!(d.profile(), "WindowsPhone71");
}

#[test]
fn descriptor_display_parses_back() {
    for src in [
        ".NETPortable,Version=v4.0,Profile=Profile328",
        "Windows,Version=v8.1",
        "Net,Version=v4.0.30319.1",
    ] {
        let d = parse_descriptor(src).unwrap();
        assert_eq!(d.to_string(), src);
        assert_eq!(parse_descriptor(&d.to_string()).unwrap(), d);
    }
}

#[test]
fn unit_set_uses_descriptor_encoding() {
    let u = parse_unit_set("Net,Version=v4.0").unwrap();
    assert_eq!(u.to_string(), "Net,Version=v4.0");
    assert!(u.contains(&parse_descriptor("Net,Version=v4.5").unwrap()));
}

#[test]
fn descriptor_needs_a_prefixed_version() {
    assert!(parse_descriptor("Net").is_err());
    assert!(parse_descriptor("Net,Version=4.0").is_err());
    assert!(parse_descriptor("Net,Version=v4.0+").is_err());
    assert!(parse_descriptor("Net,Version=v4.0,Family=x").is_err());
    assert!(try_parse_descriptor("Net,Version=vX").is_none());
}

#[test]
fn errors_point_at_the_identifier() {
    let err = parse_descriptor("  Net").unwrap_err();
    assert_eq!(err.to_string(), "descriptor 'Net' at 2 has no Version");

    let err = parse_filter_set(" Net,Profile=a=b").unwrap_err();
    assert_eq!(err.to_string(), "filter 'Net' at 1");
}

#[test]
fn capability_set_prefers_unit_grammar() {
    assert!(matches!(
        parse_capability_set("Net,Version=v4.0,Profile=Client").unwrap(),
        CapabilitySet::Unit(_)
    ));
    assert!(matches!(
        parse_capability_set("Net*,Version=v4.0").unwrap(),
        CapabilitySet::Filter(_)
    ));
    assert!(matches!(
        parse_capability_set("Net,Version=v4.0+").unwrap(),
        CapabilitySet::Filter(_)
    ));
    assert!(matches!(
        parse_capability_set("Net,Profile=*").unwrap(),
        CapabilitySet::Filter(_)
    ));
    assert!(matches!(
        parse_capability_set("Net,Version=v4.0,Family=Desktop").unwrap(),
        CapabilitySet::Filter(_)
    ));
}
