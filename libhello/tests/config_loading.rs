//! Config file loading and environment overrides

use std::fs;

use libhello::config::{resolve_config_path, Config, MIN_TICK_RATE_MS};
use libhello::error::{ConfigError, HelloError};
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    std::env::remove_var("HELLO_CONFIG");
    std::env::remove_var("NO_COLOR");
    std::env::remove_var("HELLO_TUI_NO_COLOR");
    std::env::remove_var("HELLO_TUI_TICK_MS");
}

#[test]
#[serial]
fn test_load_from_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[initial]
name = "Zee"
age = 7

[ui]
tick_rate_ms = 250
colors = false
"#,
    )
    .unwrap();

    let config = Config::load_from_path(&path).unwrap();

    assert_eq!(config.initial.name, "Zee");
    assert_eq!(config.initial.age, 7);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(!config.ui.colors);
}

#[test]
#[serial]
fn test_load_uses_hello_config_env() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[initial]\nage = 3\n").unwrap();

    std::env::set_var("HELLO_CONFIG", &path);
    let config = Config::load();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.initial_state().age, 3);
    assert_eq!(config.initial_state().name, "Arif");
}

#[test]
#[serial]
fn test_missing_file_falls_back_to_defaults() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();

    std::env::set_var("HELLO_CONFIG", temp_dir.path().join("absent.toml"));
    let config = Config::load();
    clear_env();

    assert_eq!(config.unwrap(), Config::default());
}

#[test]
#[serial]
fn test_invalid_toml_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[initial\nname = ").unwrap();

    let result = Config::load_from_path(&path);

    assert!(matches!(
        result,
        Err(HelloError::Config(ConfigError::ParseError(_)))
    ));
}

#[test]
#[serial]
fn test_resolve_config_path_expands_tilde() {
    clear_env();
    std::env::set_var("HELLO_CONFIG", "~/hello.toml");
    let path = resolve_config_path();
    clear_env();

    let path = path.unwrap();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("hello.toml"));
}

#[test]
#[serial]
fn test_no_color_env_disables_colors() {
    clear_env();
    std::env::set_var("NO_COLOR", "1");
    let config = Config::default().apply_env();
    clear_env();

    assert!(!config.ui.colors);
}

#[test]
#[serial]
fn test_hello_tui_no_color_env_disables_colors() {
    clear_env();
    std::env::set_var("HELLO_TUI_NO_COLOR", "1");
    let config = Config::default().apply_env();
    clear_env();

    assert!(!config.ui.colors);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    clear_env();
    std::env::set_var("HELLO_TUI_TICK_MS", "250");
    let config = Config::default().apply_env();
    clear_env();

    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_unparseable_tick_rate_is_ignored() {
    clear_env();
    std::env::set_var("HELLO_TUI_TICK_MS", "fast");
    let config = Config::default().apply_env();
    clear_env();

    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
#[serial]
fn test_zero_tick_rate_from_env_is_clamped() {
    clear_env();
    std::env::set_var("HELLO_TUI_TICK_MS", "0");
    let config = Config::default().apply_env();
    clear_env();

    assert_eq!(config.ui.tick_rate_ms, MIN_TICK_RATE_MS);
}

#[test]
#[serial]
fn test_zero_tick_rate_from_file_is_clamped() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let config = Config::load_from_path(&path).unwrap().apply_env();

    assert_eq!(config.ui.tick_rate_ms, 1);
}
