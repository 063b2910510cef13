//! Integration tests for configuration loading

use promotrack::config::TrackerConfig;
use promotrack::core::error::ConfigError;
use std::io::Write;

#[test]
fn test_load_from_yaml_file() {
    let yaml = r#"
staff:
  - id: 1
    name: Kim
    department: Production
  - id: 2
    name: Lee
    department: Sales
acting_staff_id: 2
listen_addr: "0.0.0.0:8080"
seed_demo_data: false
"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = TrackerConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.staff.len(), 2);
    assert_eq!(config.acting_staff_id, 2);
    assert_eq!(config.listen_addr, "0.0.0.0:8080");
    assert!(!config.seed_demo_data);
}

#[test]
fn test_missing_file_reports_path() {
    let err = TrackerConfig::from_yaml_file("/nonexistent/tracker.yaml").unwrap_err();
    match err {
        ConfigError::FileNotFound { path } => {
            assert_eq!(path, "/nonexistent/tracker.yaml");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"staff: [unclosed").unwrap();

    let err = TrackerConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_roster_rejected_on_load() {
    let yaml = r#"
staff:
  - id: 1
    name: Kim
    department: Production
acting_staff_id: 42
"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let err = TrackerConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_default_config_is_servable() {
    let config = TrackerConfig::default_config();
    assert!(config.validate().is_ok());
    assert_eq!(config.roster().members().len(), 4);
    assert!(config.seed_demo_data);
}
