use crate::error::{AppError, AppResult};
use config::{Config, Environment, File};
use engine::preferences::{FileStore, MemoryStore, PreferenceStore};
use engine::theme::DEFAULT_THEME_BASE_PATH;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod validation;

pub use validation::SettingsValidationError;

/// Settings file looked up in the working directory (any format the config crate reads)
pub const DEFAULT_SETTINGS_NAME: &str = "expositio";

const ENV_PREFIX: &str = "EXPOSITIO";

/// Settings of the command line tool itself, not of a presentation
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Settings {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    themes: ThemeSettings,
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// Where theme stylesheets live and where the chosen theme is remembered
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeSettings {
    base_path: Option<String>,
    preferences_file: Option<String>,
    persist: Option<bool>,
}

impl ThemeSettings {
    pub fn base_path(&self) -> &str {
        self.base_path.as_deref().unwrap_or(DEFAULT_THEME_BASE_PATH)
    }

    pub fn preferences_file(&self) -> Option<PathBuf> {
        self.preferences_file
            .as_deref()
            .map(PathBuf::from)
            .or_else(FileStore::default_location)
    }

    /// Whether the applied theme is written back to the preference file
    pub fn persist(&self) -> bool {
        self.persist.unwrap_or(true)
    }
}

impl Settings {
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn themes(&self) -> &ThemeSettings {
        &self.themes
    }

    /// Validate values the deserializer cannot check on its own
    pub fn validate(&self) -> Result<(), Vec<SettingsValidationError>> {
        let mut errors = Vec::new();

        let level = self.logging.level().to_lowercase();
        if !validation::LOG_LEVELS.contains(&level.as_str()) {
            errors.push(SettingsValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if let Some(file) = self.logging.file() {
            if file.trim().is_empty() {
                errors.push(SettingsValidationError::EmptyPath {
                    setting: "logging.file",
                });
            }
        }

        let base_path = self.themes.base_path();
        if !base_path.ends_with('/') {
            errors.push(SettingsValidationError::ThemeBasePath {
                configured: base_path.to_string(),
            });
        }

        if let Some(file) = &self.themes.preferences_file {
            if file.trim().is_empty() {
                errors.push(SettingsValidationError::EmptyPath {
                    setting: "themes.preferences_file",
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Preference store for the theme manager, per the `themes` settings
    pub fn preference_store(&self) -> Box<dyn PreferenceStore> {
        if !self.themes.persist() {
            return Box::new(MemoryStore::new());
        }
        match self.themes.preferences_file() {
            Some(path) => Box::new(FileStore::new(path)),
            None => {
                log::warn!("No configuration directory available; theme preference will not be saved");
                Box::new(MemoryStore::new())
            }
        }
    }
}

/// Load settings from `path` (required) or `./expositio.*` (optional), then
/// `EXPOSITIO__SECTION__KEY` environment variables.
pub fn load_settings(path: Option<&Path>) -> AppResult<Settings> {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_SETTINGS_NAME).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");

    let settings = Config::builder()
        .add_source(file_source)
        .add_source(env_source)
        .build()
        .map_err(|e| {
            AppError::Settings(format!("Settings loading failed: {e}. Please check your settings file."))
        })?
        .try_deserialize::<Settings>()
        .map_err(|e| AppError::Settings(format!("Failed to deserialize settings: {e}")))?;

    if let Err(errors) = settings.validate() {
        let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
        return Err(AppError::Settings(format!(
            "Settings validation failed:\n{}",
            messages.join("\n\n")
        )));
    }

    Ok(settings)
}
