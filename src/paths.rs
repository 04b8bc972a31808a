//! Path resolution for progress-ring
//!
//! Centralized directory path resolution with consistent fallback strategies.

use std::path::PathBuf;

// =============================================================================
// Path Constants (relative to home directory)
// =============================================================================

/// Data directory relative to home
const DATA_SUBDIR: &str = ".local/share/progress-ring";

/// Configuration directory relative to home
const CONFIG_SUBDIR: &str = ".config/progress-ring";

/// Log filename prefix (the daily appender adds the date)
pub const LOG_FILE: &str = "progress-ring.log";

/// Settings filename
const CONFIG_FILE: &str = "config.toml";

// =============================================================================
// Fallback Paths
// =============================================================================

/// Fallback data directory when home is unavailable
const FALLBACK_DATA_DIR: &str = "/tmp/progress-ring";

/// Fallback settings file when home is unavailable
const FALLBACK_CONFIG_FILE: &str = "/tmp/progress-ring.toml";

// =============================================================================
// Path Resolution Functions
// =============================================================================

/// Get the data directory path
/// Falls back to /tmp/progress-ring if home directory is unavailable
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DATA_SUBDIR))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

/// Get the settings file path
/// Falls back to /tmp/progress-ring.toml if home directory is unavailable
pub fn config_file_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(CONFIG_SUBDIR).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_contains_crate_name() {
        let path = data_dir();
        assert!(path.to_string_lossy().contains("progress-ring"));
    }

    #[test]
    fn test_config_file_is_toml() {
        let path = config_file_path();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("toml"));
    }
}
