//! Integration tests for loading classifier configuration from disk

mod common;

use carrier_ip::{CarrierName, Classifier, ClassifierConfig, ConfigError};

#[test]
fn test_load_config_from_file() {
    let env = common::TestEnvironment::new();
    let path = env.write_config(
        r#"
        strict_octets = true

        [table]
        single_prefixes = [{ prefix = "10.20", carrier = "lg_uplus" }]
        ipv4_ranges = [{ start = "10.30", end = "10.31" }]
        "#,
    );

    let config = ClassifierConfig::load_from(path).unwrap();
    let classifier = Classifier::from_config(&config).unwrap();

    assert!(classifier.options().strict_octets);
    assert_eq!(
        classifier.carrier_info("10.20.1.1").unwrap().carrier.to_string(),
        "LG U+"
    );
    assert_eq!(
        classifier.carrier_info("10.31.255.255").unwrap().carrier,
        CarrierName::RangeFallback
    );
    assert!(!classifier.is_mobile_carrier_ip("203.226.1.1"));
}

#[test]
fn test_config_without_table_uses_builtin() {
    let env = common::TestEnvironment::new();
    let path = env.write_config("strict_octets = false\n");

    let config = ClassifierConfig::load_from(path).unwrap();
    let classifier = Classifier::from_config(&config).unwrap();

    assert!(classifier.is_mobile_carrier_ip("203.226.1.1"));
    assert!(classifier.is_mobile_carrier_ip("27.159.256.0"));
}

#[test]
fn test_missing_file_is_read_error() {
    let env = common::TestEnvironment::new();
    let err = ClassifierConfig::load_from(&env.table_config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let env = common::TestEnvironment::new();
    let path = env.write_config("strict_octets = [");
    let err = ClassifierConfig::load_from(path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_bad_table_is_table_error() {
    let env = common::TestEnvironment::new();
    let path = env.write_config(
        r#"
        [table]
        ipv4_ranges = [{ start = "10.31", end = "10.30" }]
        "#,
    );

    let config = ClassifierConfig::load_from(path).unwrap();
    let err = Classifier::from_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Table(_)));
}
