//! Tests for loading settings from TOML.

use std::io::Write;
use std::time::Duration;
use strictly_confetti::AppConfig;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.game().computer_delay(), Duration::from_millis(500));
    assert_eq!(*config.game().seed(), None);
    assert_eq!(*config.display().fps(), 60);

    let celebration = config.celebration();
    assert_eq!(*celebration.bursts(), 3);
    assert_eq!(*celebration.particles_per_burst(), 60);
    assert_eq!(*celebration.rain_count(), 120);
    assert_eq!(*celebration.rain_start_y(), -20.0);
    assert_eq!(*celebration.burst().fade(), 0.015);
    assert_eq!(*celebration.rain().fade(), 0.004);
    assert_eq!(*celebration.rain().spread(), 0.25);
}

#[test]
fn test_partial_file_overrides_only_named_fields() {
    let config = AppConfig::from_toml(
        r#"
        [game]
        computer_delay_ms = 250
        seed = 9

        [celebration]
        rain_count = 10
        "#,
    )
    .expect("Valid config");

    assert_eq!(config.game().computer_delay(), Duration::from_millis(250));
    assert_eq!(*config.game().seed(), Some(9));
    assert_eq!(*config.celebration().rain_count(), 10);
    assert_eq!(*config.celebration().bursts(), 3);
    assert_eq!(*config.display().fps(), 60);
}

#[test]
fn test_empty_file_is_default() {
    let config = AppConfig::from_toml("").expect("Empty config is valid");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_toml_is_rejected() {
    let err = AppConfig::from_toml("[game\ncomputer_delay_ms = ").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_invalid_profile_is_rejected() {
    let err = AppConfig::from_toml(
        r#"
        [celebration.rain]
        size_min = 2.0
        size_max = 6.0
        speed_min = 0.5
        speed_max = 2.0
        heading = 1.5707963267948966
        spread = 0.25
        gravity = 0.05
        fade = 0.0
        "#,
    )
    .unwrap_err();
    assert!(err.message.contains("fade"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "[display]\nfps = 30").expect("Write config");

    let config = AppConfig::from_file(file.path()).expect("Config loads");
    assert_eq!(*config.display().fps(), 30);
    assert_eq!(config.display().frame_interval(), Duration::from_secs(1) / 30);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_seed_overrides_file_seed() {
    let config = AppConfig::from_toml("[game]\nseed = 1")
        .expect("Valid config")
        .with_seed(Some(2));
    assert_eq!(*config.game().seed(), Some(2));

    let config = config.with_seed(None);
    assert_eq!(*config.game().seed(), Some(2));
}
