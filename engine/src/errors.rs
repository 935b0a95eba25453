use thiserror::Error;

/// Errors raised by the theme registry and the theme manager.
///
/// The variants map onto the failure classes a caller can act on:
///
/// ## Input Errors
/// - [`Validation`] - A descriptor was rejected at registration
/// - [`NotFound`] - Variant derivation referenced a missing base theme
/// - [`ThemeNotFound`] - `set_theme` was asked for an unknown theme; carries the
///   names that would have been accepted so a UI can offer a correction
/// - [`UnknownTheme`] - A preload batch named an unregistered theme
///
/// ## Application Errors
/// - [`SurfaceNotFound`] - The presentation root is missing from the surface
/// - [`Surface`] - The surface refused a mutation
/// - [`ThemeApplication`] - Wraps either of the above with the theme being applied
///
/// None of these are fatal for the process. Lookup and validation failures
/// leave all state untouched; application failures leave the manager on the
/// last theme that applied successfully.
///
/// # Examples
///
/// ```no_run
/// use engine::errors::ThemeError;
///
/// fn describe(error: &ThemeError) -> String {
///     match error {
///         ThemeError::ThemeNotFound { name, available } => {
///             format!("'{name}' is not a theme, try one of: {}", available.join(", "))
///         }
///         ThemeError::ThemeApplication { theme_name, .. } => {
///             format!("could not apply '{theme_name}', keeping the previous theme")
///         }
///         other => other.to_string(),
///     }
/// }
/// ```
///
/// [`Validation`]: ThemeError::Validation
/// [`NotFound`]: ThemeError::NotFound
/// [`ThemeNotFound`]: ThemeError::ThemeNotFound
/// [`UnknownTheme`]: ThemeError::UnknownTheme
/// [`SurfaceNotFound`]: ThemeError::SurfaceNotFound
/// [`Surface`]: ThemeError::Surface
/// [`ThemeApplication`]: ThemeError::ThemeApplication
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid theme '{name}': {reason}")]
    Validation { name: String, reason: String },

    #[error("Base theme \"{name}\" not found")]
    NotFound { name: String },

    #[error("Theme \"{name}\" not found (available: {})", .available.join(", "))]
    ThemeNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Presentation root '{selector}' not found on the rendering surface")]
    SurfaceNotFound { selector: String },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("Failed to apply theme \"{theme_name}\" (variant '{variant}'): {source}")]
    ThemeApplication {
        theme_name: String,
        variant: String,
        source: Box<ThemeError>,
    },

    #[error("Cannot preload unknown theme: {name}")]
    UnknownTheme { name: String },
}

impl ThemeError {
    /// Names offered as alternatives, when the error carries them.
    pub fn available_themes(&self) -> Option<&[String]> {
        match self {
            ThemeError::ThemeNotFound { available, .. } => Some(available),
            _ => None,
        }
    }

    /// Innermost error, unwrapping any `ThemeApplication` layers.
    pub fn root_cause(&self) -> &ThemeError {
        match self {
            ThemeError::ThemeApplication { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result alias for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Failures reported by a [`Surface`](crate::surface::Surface) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("Failed to update class list: {0}")]
    ClassList(String),

    #[error("Failed to attach stylesheet: {0}")]
    StyleAttach(String),

    #[error("Style resource #{0} is not attached")]
    UnknownStyle(u64),

    #[error("Failed to issue resource hint for '{href}': {reason}")]
    ResourceHint { href: String, reason: String },
}

/// Errors raised by preference stores.
///
/// Callers in the engine never propagate these; they are logged and the
/// operation that triggered the read or write carries on.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference storage is corrupt: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while reading a partial presentation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {format} configuration: {reason}")]
    Parse { format: &'static str, reason: String },

    #[error("Unsupported configuration format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// Errors raised by the chart adapter.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Unknown chart preset '{name}' (available: {})", .available.join(", "))]
    UnknownPreset {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("Invalid chart data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_not_found_lists_alternatives() {
        let error = ThemeError::ThemeNotFound {
            name: "neon".to_string(),
            available: vec!["starship".to_string(), "minimal".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "Theme \"neon\" not found (available: starship, minimal)"
        );
        assert_eq!(
            error.available_themes(),
            Some(&["starship".to_string(), "minimal".to_string()][..])
        );
    }

    #[test]
    fn test_root_cause_unwraps_application_error() {
        let error = ThemeError::ThemeApplication {
            theme_name: "corporate".to_string(),
            variant: "default".to_string(),
            source: Box::new(ThemeError::SurfaceNotFound {
                selector: ".reveal".to_string(),
            }),
        };

        assert!(matches!(
            error.root_cause(),
            ThemeError::SurfaceNotFound { selector } if selector == ".reveal"
        ));
        assert!(error.to_string().contains("corporate"));
        assert!(error.to_string().contains(".reveal"));
    }
}
