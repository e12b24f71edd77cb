use crate::models::GeneratorConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration manager for loading and saving the generator's YAML
/// configuration file (`classmap.yaml`).
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing `classmap.yaml`
    ///
    /// # Returns
    /// A new ConfigManager instance
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            config_path: config_dir.join("classmap.yaml"),
            config_dir,
        })
    }

    /// Load the generator configuration file.
    ///
    /// # Returns
    /// The loaded GeneratorConfig, or default if the file doesn't exist
    pub fn load_config(&self) -> Result<GeneratorConfig> {
        if !self.config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                self.config_path
            );
            return Ok(GeneratorConfig::default());
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        let config: GeneratorConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Save the generator configuration file.
    ///
    /// # Arguments
    /// * `config` - The GeneratorConfig to save
    pub fn save_config(&self, config: &GeneratorConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnreadablePolicy;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&config_path).unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_create_config_manager() {
        let (_manager, _temp_dir) = create_test_config_manager();
    }

    #[test]
    fn test_missing_config_returns_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = manager.load_config().unwrap();
        assert_eq!(config.classmap_settings.css_version, 5);
        assert_eq!(
            config.classmap_settings.unreadable_files,
            UnreadablePolicy::Fail
        );
    }

    #[test]
    fn test_load_save_config() {
        let (manager, _temp_dir) = create_test_config_manager();

        let mut config = GeneratorConfig::default();
        config.classmap_settings.css_version = 6;
        config.classmap_settings.unreadable_files = UnreadablePolicy::Skip;
        manager.save_config(&config).unwrap();

        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded.classmap_settings.css_version, 6);
        assert_eq!(
            loaded.classmap_settings.unreadable_files,
            UnreadablePolicy::Skip
        );
    }
}
