//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_morphcloud_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, morphcloud_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[morph]
duration = 1.5
auto_cycle = false

[colors]
color_a = "#ff0000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.morph.duration - 1.5).abs() < f64::EPSILON);
    assert!(!config.morph.auto_cycle);
    assert_eq!(config.colors.color_a, "#ff0000");
    // Defaults preserved
    assert_eq!(config.colors.color_b, "#0091ff");
    assert!((config.particles.size - 0.4).abs() < f64::EPSILON);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, morphcloud_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[morph]\nduration = 100.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.morph.duration - 100.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("morphcloud").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.colors.clear, "#160920");
    assert!((config.morph.interval - 4.0).abs() < f64::EPSILON);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::CloudConfig;

    let config: CloudConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("morphcloud"));
        assert!(path_str.ends_with("config.toml"));
    }
}
