use engine::errors::{ChartError, ConfigError, ThemeError};
use std::fmt::Display;

/// Errors surfaced to the user by the `expositio` command.
///
/// Engine errors are flattened into messages here; the variant decides the
/// heading printed before the message and the suggestion printed after it.
///
/// # Error Categories
///
/// - [`Settings`] - `expositio.toml` or `EXPOSITIO__*` variables are invalid
/// - [`Config`] - A presentation config file could not be read or parsed
/// - [`Theme`] - Theme lookup, registration or application failed
/// - [`Chart`] - Chart preset or chart data problems
/// - [`Io`] - Reading inputs or writing output failed
///
/// [`Settings`]: AppError::Settings
/// [`Config`]: AppError::Config
/// [`Theme`]: AppError::Theme
/// [`Chart`]: AppError::Chart
/// [`Io`]: AppError::Io
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Settings(String),
    Config(String),
    Theme(String),
    Chart(String),
    Io(String),
}

impl AppError {
    /// A hint printed under the error message
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            AppError::Settings(_) => Some(
                "Check expositio.toml and any EXPOSITIO__* environment variables.",
            ),
            AppError::Config(_) => {
                Some("Presentation configs must be .json or .toml files with camelCase keys.")
            }
            AppError::Theme(_) => Some("Run `expositio themes` to list the available themes."),
            AppError::Chart(_) => None,
            AppError::Io(_) => None,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Settings(msg) => write!(f, "Settings Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Chart(msg) => write!(f, "Chart Error: {msg}"),
            AppError::Io(msg) => write!(f, "I/O Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ThemeError> for AppError {
    fn from(err: ThemeError) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        AppError::Chart(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Settings(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Io(format!("Failed to serialize output: {err}"))
    }
}

/// Result type alias for command operations
pub type AppResult<T> = Result<T, AppError>;
