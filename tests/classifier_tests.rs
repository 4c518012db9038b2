//! Integration tests for classification through the public API

use carrier_ip::{
    Carrier, CarrierName, CarrierTable, Classifier, IpVersion, get_mobile_carrier_info,
    is_mobile_carrier_ip,
};

#[test]
fn test_known_carrier_addresses() {
    let cases = [
        ("203.226.1.1", Carrier::SkTelecom),
        ("223.40.7.7", Carrier::SkTelecom),
        ("39.7.100.1", Carrier::Kt),
        ("175.254.0.1", Carrier::Kt),
        ("61.43.2.2", Carrier::LgUplus),
        ("106.99.0.1", Carrier::LgUplus),
    ];

    for (ip, carrier) in cases {
        assert!(is_mobile_carrier_ip(ip), "{ip}");
        let info = get_mobile_carrier_info(ip).unwrap();
        assert_eq!(info.carrier, CarrierName::Known(carrier), "{ip}");
        assert_eq!(info.ip_version, IpVersion::V4);
    }
}

#[test]
fn test_ipv6_carriers() {
    let info = get_mobile_carrier_info("2001:E60:1234::5").unwrap();
    assert_eq!(info.carrier.to_string(), "KT");
    assert_eq!(info.ip_version.to_string(), "IPv6");

    let info = get_mobile_carrier_info("2001:4430::9").unwrap();
    assert_eq!(info.carrier.to_string(), "LG U+");
}

#[test]
fn test_non_mobile_addresses() {
    for ip in ["8.8.8.8", "192.168.0.1", "27.184.0.1", "255.255.255.255", "::1"] {
        assert!(!is_mobile_carrier_ip(ip), "{ip}");
        assert!(get_mobile_carrier_info(ip).is_none(), "{ip}");
    }
}

#[test]
fn test_malformed_input_never_matches() {
    for ip in ["", "localhost", "203.226.1.-1", "203.226.1.1/24", "203,226,1,1", "1.2.3.4a"] {
        assert!(!is_mobile_carrier_ip(ip), "{ip:?}");
        assert!(get_mobile_carrier_info(ip).is_none(), "{ip:?}");
    }
}

#[test]
fn test_info_json_shape() {
    let info = get_mobile_carrier_info("27.165.0.1").unwrap();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["isMobile"], true);
    assert_eq!(json["carrier"], "SK Telecom");
    assert_eq!(json["ipVersion"], "IPv4");
    assert_eq!(json["matchedPrefixOrRange"], "27.160 ~ 27.183");
}

#[test]
fn test_injected_table_replaces_builtin() {
    let table = CarrierTable::builder()
        .ipv4_range("100.64", "100.127", Carrier::Kt)
        .build()
        .unwrap();
    let classifier = Classifier::new(table);

    assert!(classifier.is_mobile_carrier_ip("100.100.1.1"));
    assert!(!classifier.is_mobile_carrier_ip("203.226.1.1"));
    // The built-in table is untouched
    assert!(is_mobile_carrier_ip("203.226.1.1"));
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = std::sync::Arc::new(Classifier::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let classifier = classifier.clone();
            std::thread::spawn(move || classifier.is_mobile_carrier_ip("27.170.0.1"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
