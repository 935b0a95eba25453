//! Implementation of each subcommand. Every command returns its output as a
//! string; `main` decides where it goes.

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::render::render_document;
use engine::chart::{ChartConfigManager, ChartData, ChartPreset};
use engine::config::{PartialPresentationConfig, PresentationConfig};
use engine::presentation::Presentation;
use engine::surface::DocumentSurface;
use engine::theme::{DEFAULT_VARIANT, ThemeManager, theme_preset, theme_preset_names};
use std::fs;
use std::path::{Path, PathBuf};

/// Options of `expositio render`
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub config: Option<PathBuf>,
    pub theme: Option<String>,
    /// Variant for `theme`; the registered theme's own variant when unset
    pub variant: Option<String>,
    pub preload_all: bool,
}

fn load_overrides(path: Option<&Path>) -> AppResult<PartialPresentationConfig> {
    match path {
        Some(path) => Ok(PartialPresentationConfig::from_path(path)?),
        None => Ok(PartialPresentationConfig::default()),
    }
}

/// `expositio resolve`: the merged configuration as pretty JSON
pub fn resolve(config_path: &Path) -> AppResult<String> {
    let overrides = load_overrides(Some(config_path))?;
    let config = PresentationConfig::from_partial(&overrides);
    Ok(serde_json::to_string_pretty(&config)?)
}

/// `expositio themes`: registered themes, the stored preference marked with `*`
pub fn list_themes(settings: &Settings) -> AppResult<String> {
    let manager = ThemeManager::new(DocumentSurface::new())
        .with_preferences(settings.preference_store());
    let stored = manager.stored_theme();

    let mut lines = vec!["Themes:".to_string()];
    for name in manager.available_themes() {
        let marker = if stored.as_deref() == Some(name.as_str()) {
            "*"
        } else {
            " "
        };
        lines.push(format!("{marker} {name}"));
    }

    lines.push(String::new());
    lines.push("Presets:".to_string());
    for preset in theme_preset_names() {
        if let Some(descriptor) = theme_preset(preset) {
            lines.push(format!(
                "  {preset} ({} / {})",
                descriptor.name, descriptor.variant
            ));
        }
    }
    Ok(lines.join("\n"))
}

/// Make a preset key usable as a theme name (`minimal-dark` and the like)
fn register_preset_if_needed(
    presentation: &mut Presentation<DocumentSurface>,
    name: &str,
) -> AppResult<()> {
    if presentation.themes().registry().contains(name) {
        return Ok(());
    }
    if let Some(preset) = theme_preset(name) {
        let mut descriptor = preset;
        descriptor.name = name.to_string();
        presentation.themes_mut().register_theme(descriptor)?;
        log::debug!("Registered preset '{name}' as a theme");
    }
    Ok(())
}

/// Presentation initialized and themed as `render` would leave it
pub async fn prepare(
    settings: &Settings,
    options: &RenderOptions,
) -> AppResult<Presentation<DocumentSurface>> {
    let overrides = load_overrides(options.config.as_deref())?;
    let base_path = settings.themes().base_path();

    let mut presentation = Presentation::new(DocumentSurface::new(), &overrides)?
        .with_preferences(settings.preference_store())
        .with_theme_base_path(base_path);
    presentation.initialize().await?;

    if let Some(theme) = &options.theme {
        register_preset_if_needed(&mut presentation, theme)?;
        let variant = match &options.variant {
            Some(variant) => variant.clone(),
            None => presentation
                .themes()
                .registry()
                .get(theme)
                .map(|registered| registered.variant.clone())
                .unwrap_or_else(|| DEFAULT_VARIANT.to_string()),
        };
        presentation.switch_theme_variant(theme, &variant).await?;
    }

    if options.preload_all {
        let names = presentation.themes().available_themes();
        presentation.themes_mut().preload_themes(names.as_slice())?;
    }

    Ok(presentation)
}

/// `expositio render`: the HTML shell for the presentation
pub async fn render(settings: &Settings, options: &RenderOptions) -> AppResult<String> {
    let presentation = prepare(settings, options).await?;
    render_document(&presentation, settings.themes().base_path())
}

/// `expositio chart`: Chart.js options, or a full chart spec when data is given
pub fn chart(preset: Option<&str>, data: Option<&Path>, kind: &str) -> AppResult<String> {
    let manager = match preset {
        Some(name) => ChartConfigManager::from_preset(name.parse::<ChartPreset>()?),
        None => ChartConfigManager::default(),
    };

    match data {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                AppError::Io(format!("Failed to read chart data '{}': {e}", path.display()))
            })?;
            let value = serde_json::from_str(&content)
                .map_err(|e| AppError::Chart(format!("Chart data is not valid JSON: {e}")))?;
            let spec = manager.chart_spec(kind, &ChartData::from_value(value)?);
            Ok(serde_json::to_string_pretty(&spec)?)
        }
        None => Ok(serde_json::to_string_pretty(&manager.options())?),
    }
}
