//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use readpace_config::{ConfigError, ReadpaceConfig};
use readpace_core::enums::{BookFormat, QuantityView};

fn toml_figment() -> Figment {
    Figment::from(Serialized::defaults(ReadpaceConfig::default())).merge(Toml::file("config.toml"))
}

#[test]
fn loads_pace_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[pace]
tight_multiplier = 2.0
window_days = 21
min_reliable_days = 5
"#,
        )?;

        let config: ReadpaceConfig = toml_figment().extract()?;

        assert!((config.pace.tight_multiplier - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.pace.window_days, 21);
        assert_eq!(config.pace.min_reliable_days, 5);
        assert!((config.pace.policy().tight_multiplier - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.pace.history_window().window_days, 21);
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_format = "audio"
default_view = "remaining"
"#,
        )?;

        let config: ReadpaceConfig = toml_figment().extract()?;

        assert_eq!(config.general.default_format, BookFormat::Audio);
        assert_eq!(config.general.default_view, QuantityView::Remaining);
        // Untouched section keeps defaults
        assert_eq!(config.pace.window_days, 14);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_field_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[pace]
window_days = 7
"#,
        )?;

        let config: ReadpaceConfig = toml_figment().extract()?;

        assert_eq!(config.pace.window_days, 7);
        assert!((config.pace.tight_multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.pace.min_reliable_days, 3);
        Ok(())
    });
}

#[test]
fn invalid_multiplier_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[pace]
tight_multiplier = 0.5
"#,
        )?;

        let err = ReadpaceConfig::from_figment(&toml_figment()).expect_err("should reject");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "pace.tight_multiplier"));
        Ok(())
    });
}

#[test]
fn unknown_format_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_format = "scroll"
"#,
        )?;

        let err = ReadpaceConfig::from_figment(&toml_figment()).expect_err("should reject");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("READPACE_PACE__WINDOW_DAYS", "30");

        jail.create_file(
            "config.toml",
            r#"
[pace]
window_days = 10
min_reliable_days = 4
"#,
        )?;

        let config: ReadpaceConfig = toml_figment()
            .merge(Env::prefixed("READPACE_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.pace.window_days, 30);
        // TOML value not overridden by env should remain
        assert_eq!(config.pace.min_reliable_days, 4);
        Ok(())
    });
}

/// Typo'd env var keys are silently ignored by figment.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("READPACE_PACE__TIGHT_MULTIPLER", "9");

        let config: ReadpaceConfig = Figment::from(Serialized::defaults(ReadpaceConfig::default()))
            .merge(Env::prefixed("READPACE_").split("__"))
            .extract()?;

        assert!((config.pace.tight_multiplier - 1.5).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".readpace")?;
        jail.create_file(
            ".readpace/config.toml",
            r#"
[pace]
tight_multiplier = 1.25
"#,
        )?;

        let config = ReadpaceConfig::load().expect("config loads");
        assert!((config.pace.tight_multiplier - 1.25).abs() < f64::EPSILON);
        Ok(())
    });
}
