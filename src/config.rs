//! Configuration file support for progress-ring
//!
//! Loads settings from TOML at ~/.config/progress-ring/config.toml.
//! The `[indicator]` table is kept raw and validated by
//! [`ProgressOptions::from_toml`], so a wrong type is reported against the
//! option it belongs to.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_RADIUS, DEFAULT_THICKNESS, DEFAULT_VALUE};
use crate::error::ProgressError;
use crate::options::ProgressOptions;
use crate::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Construction options for the indicator
    pub indicator: toml::Table,

    /// Demo host behaviour
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Value change per arrow key press
    pub value_step: f64,

    /// Radius change per `+`/`-` press
    pub radius_step: f64,

    /// Thickness change per `[`/`]` press
    pub thickness_step: f64,

    /// Rotation per tick while animated (degrees)
    pub spin_step_degrees: f64,

    /// Redraw and animation tick (milliseconds)
    pub tick_ms: u64,

    /// Where `s` saves the SVG markup
    pub output: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            value_step: 5.0,
            radius_step: 5.0,
            thickness_step: 1.0,
            spin_step_degrees: 12.0,
            tick_ms: 100,
            output: PathBuf::from("progress.svg"),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or return defaults
    pub fn load() -> Self {
        let path = paths::config_file_path();

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Indicator options from the `[indicator]` table
    pub fn indicator_options(&self) -> Result<ProgressOptions, ProgressError> {
        ProgressOptions::from_toml(&self.indicator)
    }

    /// Example configuration with every option spelled out
    pub fn example() -> Self {
        let mut indicator = toml::Table::new();
        indicator.insert("value".into(), toml::Value::Float(DEFAULT_VALUE));
        indicator.insert("radius".into(), toml::Value::Float(DEFAULT_RADIUS));
        indicator.insert("thickness".into(), toml::Value::Float(DEFAULT_THICKNESS));
        indicator.insert("animated".into(), toml::Value::Boolean(false));
        indicator.insert("hidden".into(), toml::Value::Boolean(false));

        Self {
            indicator,
            demo: DemoConfig::default(),
        }
    }

    /// Generate example configuration content
    pub fn example_toml() -> String {
        toml::to_string_pretty(&Self::example()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.indicator.is_empty());
        assert_eq!(settings.demo.tick_ms, 100);
        assert_eq!(settings.demo.value_step, 5.0);
        assert_eq!(settings.indicator_options().unwrap(), ProgressOptions::default());
    }

    #[test]
    fn test_partial_config_parsing() {
        let toml_str = r#"
[indicator]
value = 20
hidden = true

[demo]
tick_ms = 50
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.demo.tick_ms, 50);
        // Other values should be defaults
        assert_eq!(settings.demo.radius_step, 5.0);

        let options = settings.indicator_options().unwrap();
        assert_eq!(options.value, Some(20.0));
        assert!(options.hidden);
        assert_eq!(options.radius, None);
    }

    #[test]
    fn test_indicator_type_errors_name_the_option() {
        let settings: Settings = toml::from_str("[indicator]\nradius = \"big\"\n").unwrap();
        let err = settings.indicator_options().unwrap_err();
        assert!(matches!(err, ProgressError::Validation { param: "radius", .. }));
    }

    #[test]
    fn test_example_toml_is_valid() {
        let example = Settings::example_toml();
        assert!(example.contains("[indicator]"));
        let parsed: Settings = toml::from_str(&example).unwrap();
        let options = parsed.indicator_options().unwrap();
        assert_eq!(options.value, Some(DEFAULT_VALUE));
        assert_eq!(options.thickness, Some(DEFAULT_THICKNESS));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("progress-ring-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        Settings::example().save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.demo.output, PathBuf::from("progress.svg"));
        assert_eq!(loaded.indicator.get("radius"), Some(&toml::Value::Float(45.0)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let err = Settings::load_from(Path::new("/nonexistent/progress-ring.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
