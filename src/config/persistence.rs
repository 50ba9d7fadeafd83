//! Configuration file persistence for cuecard
//!
//! Loads and saves the settings file in the platform config directory.
//! Loading never fails: anything unreadable degrades to defaults.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "cuecard";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Backup configuration file name (used during atomic writes)
const CONFIG_BACKUP_NAME: &str = "config.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\cuecard\`
/// - **macOS**: `~/Library/Application Support/cuecard/`
/// - **Linux**: `~/.config/cuecard/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the configuration file.
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load configuration from the default config file location.
///
/// A missing or empty file yields defaults. A corrupt file logs a warning and
/// also yields defaults.
pub fn load_config() -> Settings {
    get_config_file_path()
        .and_then(|path| load_config_from(&path))
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Load and sanitize settings from a specific file.
pub fn load_config_from(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        return Ok(Settings::default());
    }

    debug!("Loading config from: {}", config_path.display());

    let contents = fs::read_to_string(config_path).map_err(|e| Error::ConfigLoad {
        path: config_path.to_path_buf(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            config_path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!(
        "Configuration loaded successfully from {}",
        config_path.display()
    );
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save configuration to the default config file location.
///
/// # Errors
///
/// - `Error::ConfigDirNotFound`: Config directory cannot be determined
/// - `Error::ConfigSave`: Failed to write the config file
pub fn save_config(settings: &Settings) -> Result<()> {
    save_config_to(&get_config_dir()?, settings)
}

/// Save settings into `config_dir`, creating it if needed.
///
/// The JSON is written to a backup file first and then renamed over the
/// real file.
pub fn save_config_to(config_dir: &Path, settings: &Settings) -> Result<()> {
    if !config_dir.exists() {
        debug!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(config_dir).map_err(|e| Error::ConfigSave {
            path: config_dir.to_path_buf(),
            source: Box::new(e),
        })?;
    }

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let backup_path = config_dir.join(CONFIG_BACKUP_NAME);

    debug!("Saving config to: {}", config_path.display());

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    fs::rename(&backup_path, &config_path).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    info!(
        "Configuration saved successfully to {}",
        config_path.display()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::{Role, ScoreLabel};
    use crate::export::NumberingStyle;
    use tempfile::TempDir;

    /// Temporary config directory with helpers.
    struct TestEnv {
        temp_dir: TempDir,
    }

    impl TestEnv {
        fn new() -> Self {
            Self {
                temp_dir: TempDir::new().expect("Failed to create temp dir"),
            }
        }

        fn config_dir(&self) -> PathBuf {
            self.temp_dir.path().join(APP_NAME)
        }

        fn config_file(&self) -> PathBuf {
            self.config_dir().join(CONFIG_FILE_NAME)
        }

        fn write_config(&self, content: &str) {
            fs::create_dir_all(self.config_dir()).expect("Failed to create config dir");
            fs::write(self.config_file(), content).expect("Failed to write config");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Platform directory tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_get_config_file_path() {
        if let Ok(path) = get_config_file_path() {
            assert!(path.ends_with(Path::new(APP_NAME).join(CONFIG_FILE_NAME)));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let env = TestEnv::new();
        let settings = load_config_from(&env.config_file()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let env = TestEnv::new();
        env.write_config("   \n");
        let settings = load_config_from(&env.config_file()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_partial_config() {
        let env = TestEnv::new();
        env.write_config(r#"{"initial_score": "7.5"}"#);
        let settings = load_config_from(&env.config_file()).unwrap();
        assert_eq!(settings.initial_score, ScoreLabel::from("7.5"));
        assert_eq!(settings.numbering, NumberingStyle::ByCard);
    }

    #[test]
    fn test_load_sanitizes_values() {
        let env = TestEnv::new();
        env.write_config(r#"{"roles": ["Point", "Point"]}"#);
        let settings = load_config_from(&env.config_file()).unwrap();
        assert_eq!(settings.roles, vec![Role::Point]);
    }

    #[test]
    fn test_load_corrupted_config_returns_error() {
        let env = TestEnv::new();
        env.write_config("{ invalid json }");
        let result = load_config_from(&env.config_file());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));

        let fallback =
            result.unwrap_or_warn_default(Settings::default(), "Failed to load configuration");
        assert_eq!(fallback, Settings::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let env = TestEnv::new();
        env.write_config(r#"{"initial_score": "6", "theme": "dark"}"#);
        let settings = load_config_from(&env.config_file()).unwrap();
        assert_eq!(settings.initial_score, ScoreLabel::from("6"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_creates_directory_and_roundtrips() {
        let env = TestEnv::new();
        let original = Settings {
            initial_score: ScoreLabel::from("8"),
            roles: vec![Role::Point, Role::Conclusion],
            numbering: NumberingStyle::KeepPart2Labels,
            catalog_path: Some(PathBuf::from("cards.yaml")),
        };

        save_config_to(&env.config_dir(), &original).unwrap();

        assert!(env.config_file().exists());
        assert!(!env.config_dir().join(CONFIG_BACKUP_NAME).exists());
        let loaded = load_config_from(&env.config_file()).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_save_overwrites_existing() {
        let env = TestEnv::new();
        env.write_config(r#"{"initial_score": "5"}"#);

        save_config_to(&env.config_dir(), &Settings::default()).unwrap();

        let loaded = load_config_from(&env.config_file()).unwrap();
        assert_eq!(loaded.initial_score, ScoreLabel::default());
    }

    #[test]
    fn test_app_name_constant() {
        assert_eq!(APP_NAME, "cuecard");
    }
}
