//! Integration tests for anu-tables-config.
//!
//! These tests verify file round-trips and validation of loaded files.

use anu_tables_config::{
    ConfigError, FIRMWARE_PATTERNS, ResourceConfig, ValidationError, firmware_defaults,
    validate_config,
};
use tempfile::TempDir;

/// Saving and loading reproduces the firmware configuration exactly.
#[test]
fn test_save_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("anu.toml");

    let config = firmware_defaults();
    config.save(&path).expect("should save config");
    assert!(path.exists());

    let loaded = ResourceConfig::load(&path).expect("should load config");
    assert_eq!(loaded, config);
}

/// An override file replaces only the sections it names.
#[test]
fn test_override_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("override.toml");
    std::fs::write(
        &path,
        r#"
arpeggiator_patterns = ["oooo oooo oooo oooo"]

[clock]
master_hz = 16000000.0
timer_divider = 510.0
voice_divider = 16.0
drum_divider = 32.0

[[grooves]]
name = "straight"
template = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
"#,
    )
    .unwrap();

    let config = ResourceConfig::load(&path).unwrap();
    assert_eq!(config.clock.master_hz, 16_000_000.0);
    assert_eq!(config.grooves.len(), 1);
    assert_eq!(config.arpeggiator_patterns.len(), 1);
    assert_eq!(config.lfo, firmware_defaults().lfo);
    assert!(validate_config(&config).is_ok());

    let names = config.table_names();
    assert!(names.contains(&"groove_straight".to_string()));
    assert!(!names.contains(&"groove_swing".to_string()));
}

/// A loaded file with broken values reports every problem.
#[test]
fn test_loaded_file_validation() {
    let mut config = firmware_defaults();
    config.glide.gamma = f64::NAN;
    config.arpeggiator_patterns = FIRMWARE_PATTERNS
        .iter()
        .map(|p| p.replace(' ', "").replacen('o', "", 1))
        .collect();

    let err = validate_config(&config).unwrap_err();
    let ValidationError::Multiple(errors) = err else {
        panic!("expected multiple errors, got {err}");
    };
    assert_eq!(errors.len(), 1 + FIRMWARE_PATTERNS.len());
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = ResourceConfig::load(temp_dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn test_malformed_toml() {
    let result = ResourceConfig::from_toml("[lfo\nentries = 3");
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

/// The TOML text carries every section, so `init` output is a complete file.
#[test]
fn test_to_toml_lists_all_sections() {
    let text = firmware_defaults().to_toml().unwrap();
    for section in [
        "[clock]",
        "[lfo]",
        "[envelope]",
        "[glide]",
        "[drum_envelope]",
        "[dco.scale]",
        "[drum_pitch.scale]",
        "[shapes.sine]",
        "[[grooves]]",
        "[[samples]]",
    ] {
        assert!(text.contains(section), "missing {section}");
    }
}
