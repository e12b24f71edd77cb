use serde::{Deserialize, Serialize};

/// Generator configuration from classmap.yaml
///
/// Contains the CSS version tag, style-tree locations, and the policy for
/// unreadable stylesheet files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(rename = "Classmap_Settings")]
    pub classmap_settings: GeneratorSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Version tag appended to every emitted class name (e.g. 5 -> `-v5`).
    #[serde(rename = "CSS Version", default = "default_css_version")]
    pub css_version: u32,

    /// Root of the distributed style package. Resolved by the caller; the
    /// generator never locates installed packages itself.
    #[serde(rename = "Styles Dir", default = "default_styles_dir")]
    pub styles_dir: String,

    /// Local source tree scanned in addition to the distribution.
    #[serde(rename = "Source CSS Dir", default = "default_src_css_dir")]
    pub src_css_dir: String,

    /// What to do when a discovered stylesheet cannot be read.
    #[serde(rename = "Unreadable Files", default)]
    pub unreadable_files: UnreadablePolicy,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

/// Policy for a discovered stylesheet that cannot be read.
///
/// `Fail` aborts the whole run with the offending path; a partial index
/// silently missing a file would surface as downstream lookup failures
/// instead. `Skip` logs a warning and omits the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreadablePolicy {
    #[default]
    Fail,
    Skip,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            css_version: 5,
            styles_dir: default_styles_dir(),
            src_css_dir: default_src_css_dir(),
            unreadable_files: UnreadablePolicy::Fail,
            debug_mode: false,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            classmap_settings: GeneratorSettings::default(),
        }
    }
}

fn default_css_version() -> u32 {
    5
}

fn default_styles_dir() -> String {
    "node_modules/@patternfly/patternfly".to_string()
}

fn default_src_css_dir() -> String {
    "src/css".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.css_version, 5);
        assert_eq!(settings.styles_dir, "node_modules/@patternfly/patternfly");
        assert_eq!(settings.src_css_dir, "src/css");
        assert_eq!(settings.unreadable_files, UnreadablePolicy::Fail);
        assert!(!settings.debug_mode);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "Classmap_Settings:\n  CSS Version: 6\n";
        let config: GeneratorConfig = serde_yaml_ng::from_str(yaml).unwrap();

        assert_eq!(config.classmap_settings.css_version, 6);
        assert_eq!(config.classmap_settings.src_css_dir, "src/css");
        assert_eq!(
            config.classmap_settings.unreadable_files,
            UnreadablePolicy::Fail
        );
    }

    #[test]
    fn test_unreadable_policy_parses_lowercase() {
        let yaml = "Classmap_Settings:\n  Unreadable Files: skip\n";
        let config: GeneratorConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            config.classmap_settings.unreadable_files,
            UnreadablePolicy::Skip
        );
    }
}
