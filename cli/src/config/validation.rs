/// Log levels accepted in `logging.level`
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Settings validation errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsValidationError {
    #[error("Invalid logging.level: {configured}")]
    LogLevel { configured: String },
    #[error("Invalid themes.base_path: {configured} (must end with '/')")]
    ThemeBasePath { configured: String },
    #[error("Empty path for {setting}")]
    EmptyPath { setting: &'static str },
}

impl SettingsValidationError {
    pub fn user_message(&self) -> String {
        match self {
            SettingsValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level '{configured}'!\n\n\
                    Valid levels: {}\n\n\
                    Please update level in the [logging] section of expositio.toml.",
                    LOG_LEVELS.join(", ")
                )
            }
            SettingsValidationError::ThemeBasePath { configured } => {
                format!(
                    "Theme base path '{configured}' must end with '/'!\n\n\
                    Theme stylesheets are looked up at <base_path><theme>/theme.css.\n\n\
                    Please update base_path in the [themes] section of expositio.toml."
                )
            }
            SettingsValidationError::EmptyPath { setting } => {
                format!(
                    "{setting} is set but empty!\n\n\
                    Remove the setting to use the default, or give a file path."
                )
            }
        }
    }
}
