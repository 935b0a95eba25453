use super::presentation::PartialPresentationConfig;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// On-disk formats a partial presentation config can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }
}

impl PartialPresentationConfig {
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let parse_error = |reason: String| ConfigError::Parse {
            format: format.as_str(),
            reason,
        };

        match format {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Read and parse a `.json` or `.toml` override file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        log::debug!("Loading {} presentation config from {}", format.as_str(), path.display());
        Self::from_str_with_format(&content, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            assert_ok!(ConfigFormat::from_path(Path::new("deck.JSON"))),
            ConfigFormat::Json
        );
        assert_eq!(
            assert_ok!(ConfigFormat::from_path(Path::new("deck.toml"))),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("deck.yaml")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_toml_override_uses_camel_case_keys() {
        let content = r##"
            customCSS = ["print.css"]

            [theme]
            name = "minimal"

            [theme.customProperties]
            text-primary = "#ffffff"

            [reveal]
            slideNumber = false
            loop = true
        "##;

        let partial = assert_ok!(PartialPresentationConfig::from_str_with_format(
            content,
            ConfigFormat::Toml
        ));

        let theme = partial.theme.unwrap();
        assert_eq!(theme.name.as_deref(), Some("minimal"));
        assert_eq!(theme.custom_properties.unwrap()["text-primary"], "#ffffff");
        let reveal = partial.reveal.unwrap();
        assert_eq!(reveal.slide_number, Some(false));
        assert_eq!(reveal.loop_slides, Some(true));
        assert_eq!(partial.custom_css, Some(vec!["print.css".to_string()]));
    }

    #[test]
    fn test_parse_error_names_format() {
        let error = assert_err!(PartialPresentationConfig::from_str_with_format(
            "{ not json",
            ConfigFormat::Json
        ));
        assert!(error.to_string().starts_with("Failed to parse JSON configuration"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = PathBuf::from("/nonexistent/deck.json");
        let error = assert_err!(PartialPresentationConfig::from_path(&path));
        assert!(error.to_string().contains("/nonexistent/deck.json"));
    }

    #[test]
    fn test_from_path_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        fs::write(&path, r#"{ "features": { "charts": true } }"#).unwrap();

        let partial = assert_ok!(PartialPresentationConfig::from_path(&path));
        assert_eq!(partial.features.unwrap().charts, Some(true));
    }
}
