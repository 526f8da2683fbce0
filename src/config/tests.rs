//! Configuration tests
//!
//! The round-trip test guards the TOML template: every key the template
//! emits must parse back through `FileConfig`, so the generated config file
//! can never be one folio itself rejects at startup.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized template can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    // Merging the round-tripped file back must reproduce the defaults
    let merged = Config::from_file_config(parsed.unwrap());
    assert_eq!(merged.theme, config.theme);
    assert_eq!(merged.lazy_artwork, config.lazy_artwork);
    assert_eq!(merged.typing_speed_ms, config.typing_speed_ms);
    assert_eq!(merged.typing_delay_ms, config.typing_delay_ms);
    assert_eq!(merged.logging.level, config.logging.level);
    assert_eq!(merged.logging.file_rotation, config.logging.file_rotation);
}

// ─────────────────────────────────────────────────────────────────────────────
// Merge precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_keeps_defaults() {
    let config = Config::from_file_config(FileConfig::default());
    let defaults = Config::default();
    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.typing_speed_ms, 150);
    assert_eq!(config.typing_delay_ms, 1000);
    assert!(config.lazy_artwork);
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_partial_file_overrides_only_present_keys() {
    let file: FileConfig = toml::from_str(
        r#"
        theme = "Light"
        typing_speed_ms = 80
        "#,
    )
    .unwrap();

    let config = Config::from_file_config(file);
    assert_eq!(config.theme, "Light");
    assert_eq!(config.typing_speed_ms, 80);
    // Untouched keys keep their defaults
    assert_eq!(config.typing_delay_ms, 1000);
    assert!(config.lazy_artwork);
}

#[test]
fn test_logging_section_parses() {
    let file: FileConfig = toml::from_str(
        r#"
        [logging]
        level = "debug"
        file_enabled = true
        file_dir = "/tmp/folio-logs"
        file_rotation = "hourly"
        "#,
    )
    .unwrap();

    let config = Config::from_file_config(file);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(
        config.logging.file_dir,
        std::path::PathBuf::from("/tmp/folio-logs")
    );
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    // Prefix was not set, default survives
    assert_eq!(config.logging.file_prefix, "folio.log");
}

#[test]
fn test_unknown_rotation_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str(
        r#"
        [logging]
        file_rotation = "weekly"
        "#,
    );
    assert!(parsed.is_err(), "unknown rotation values must not parse");
}
