use super::*;

#[test]
fn test_from_compatible() {
    assert_eq!(
        NodeKind::from_compatible("\"zephyr,greybus-interface\""),
        Some(NodeKind::Interface)
    );
    assert_eq!(
        NodeKind::from_compatible("\"zephyr,greybus-string\""),
        Some(NodeKind::String)
    );
    assert_eq!(
        NodeKind::from_compatible("\"zephyr,greybus-bundle\""),
        Some(NodeKind::Bundle)
    );
    assert_eq!(
        NodeKind::from_compatible("\"zephyr,greybus-i2c-controller\""),
        Some(NodeKind::CPort)
    );
}

#[test]
fn test_quotes_are_significant() {
    assert_eq!(NodeKind::from_compatible("zephyr,greybus-bundle"), None);
    assert_eq!(NodeKind::from_compatible("\"nordic,nrf-uart\""), None);
}

#[test]
fn test_compatibles_roundtrip_through_classifier() {
    for kind in [
        NodeKind::Interface,
        NodeKind::String,
        NodeKind::Bundle,
        NodeKind::CPort,
    ] {
        for compatible in kind.compatibles() {
            assert_eq!(NodeKind::from_compatible(compatible), Some(kind));
        }
    }
}

#[test]
fn test_every_controller_is_a_cport() {
    assert_eq!(NodeKind::CPort.compatibles().len(), 4);
    assert!(CPORT_COMPATIBLES.contains(&"\"zephyr,greybus-control\""));
    assert!(CPORT_COMPATIBLES.contains(&"\"zephyr,greybus-gpio-controller\""));
    assert!(CPORT_COMPATIBLES.contains(&"\"zephyr,greybus-spi-controller\""));
}
