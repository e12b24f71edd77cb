//! Integration tests for ConfigManager and configuration file handling
//!
//! These tests verify:
//! - Configuration loading and saving
//! - Default configuration when classmap.yaml is absent
//! - CLI-relevant settings round-tripping through YAML

use camino::Utf8PathBuf;
use pf_classmap::models::{GeneratorConfig, UnreadablePolicy};
use pf_classmap::ConfigManager;
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    assert_eq!(manager.config_dir(), &config_path);
}

#[test]
fn test_config_manager_creates_missing_directory() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let nested = config_path.join("nested/config");

    let manager = ConfigManager::new(&nested).unwrap();
    assert!(manager.config_dir().exists());
}

#[test]
fn test_load_default_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    // Config file doesn't exist, should return defaults
    let config = manager.load_config().unwrap();

    assert_eq!(config.classmap_settings.css_version, 5);
    assert_eq!(
        config.classmap_settings.styles_dir,
        "node_modules/@patternfly/patternfly"
    );
    assert_eq!(config.classmap_settings.src_css_dir, "src/css");
    assert_eq!(
        config.classmap_settings.unreadable_files,
        UnreadablePolicy::Fail
    );
}

#[test]
fn test_save_and_reload_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let mut config = GeneratorConfig::default();
    config.classmap_settings.css_version = 6;
    config.classmap_settings.styles_dir = "vendor/patternfly".to_string();
    config.classmap_settings.unreadable_files = UnreadablePolicy::Skip;

    manager.save_config(&config).unwrap();
    let loaded = manager.load_config().unwrap();

    assert_eq!(loaded.classmap_settings.css_version, 6);
    assert_eq!(loaded.classmap_settings.styles_dir, "vendor/patternfly");
    assert_eq!(
        loaded.classmap_settings.unreadable_files,
        UnreadablePolicy::Skip
    );
}

#[test]
fn test_load_handwritten_yaml() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(
        config_path.join("classmap.yaml"),
        "Classmap_Settings:\n  CSS Version: 4\n  Unreadable Files: skip\n  Debug Mode: true\n",
    )
    .unwrap();

    let config = manager.load_config().unwrap();
    assert_eq!(config.classmap_settings.css_version, 4);
    assert_eq!(
        config.classmap_settings.unreadable_files,
        UnreadablePolicy::Skip
    );
    assert!(config.classmap_settings.debug_mode);
    // Unspecified fields fall back to defaults
    assert_eq!(config.classmap_settings.src_css_dir, "src/css");
}
