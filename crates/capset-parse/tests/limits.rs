use capset_parse::{parse_descriptor, parse_filter_set, MAX_INPUT_LEN};

#[test]
fn inputs_over_the_cap_are_rejected() {
    let src = format!("Net,Version=v4.0,Profile={}", "P".repeat(MAX_INPUT_LEN));
    let err = parse_descriptor(&src).unwrap_err();
    assert!(format!("{err}").contains("exceeds"));
    assert!(parse_filter_set(&src).is_err());
}

#[test]
fn long_but_legal_inputs_parse() {
    let archs = (0..200).map(|i| format!("arch{i}")).collect::<Vec<_>>().join("|");
    let f = parse_filter_set(&format!("Net,PlatformArchitectures={archs}")).unwrap();
    assert_eq!(f.platform_architectures().len(), 200);
}
