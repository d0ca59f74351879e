//! Configuration tests
//!
//! The round-trip test is a guard: when a field is added to `Config`, it
//! fails until `to_toml()` and `FileConfig` both know about it.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized template parses back as a FileConfig.
#[test]
fn config_template_round_trips() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config template should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn template_values_survive_round_trip() {
    let mut config = Config::default();
    config.api_url = "http://localhost:9090/api/".to_string();
    config.request_timeout_secs = 3;
    config.theme = "nord".to_string();
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();

    assert_eq!(parsed.api_url.as_deref(), Some("http://localhost:9090/api/"));
    assert_eq!(parsed.request_timeout_secs, Some(3));
    assert_eq!(parsed.theme.as_deref(), Some("nord"));

    let logging = parsed.logging.expect("logging section present");
    assert_eq!(logging.level.as_deref(), Some("debug"));
    assert_eq!(logging.file_enabled, Some(true));
    assert_eq!(logging.file_rotation.as_deref(), Some("hourly"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn defaults_match_shipped_behavior() {
    let config = Config::default();
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.request_timeout_secs, 10);
    assert!(config.enable_tui);
    assert!(!config.demo_mode);
    assert_eq!(config.theme, "dark");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn missing_file_sections_fall_back_to_defaults() {
    let parsed: FileConfig = toml::from_str("").unwrap();
    let logging = LoggingConfig::from_file(parsed.logging);
    assert_eq!(logging.level, "info");
    assert_eq!(logging.file_rotation, LogRotation::Daily);
    assert_eq!(logging.file_prefix, "rolodex");
}

// ─────────────────────────────────────────────────────────────────────────────
// Rotation parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn rotation_parses_known_values() {
    assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("DAILY"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
}

#[test]
fn rotation_defaults_to_daily_for_unknown() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse(""), LogRotation::Daily);
}
