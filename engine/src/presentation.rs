//! Presentation bootstrap: one configured deck bound to a rendering surface.

use crate::chart::{ChartConfigManager, ChartJsOptions};
use crate::config::{Merge, PartialPresentationConfig, PresentationConfig};
use crate::errors::ThemeResult;
use crate::preferences::PreferenceStore;
use crate::surface::Surface;
use crate::theme::{DEFAULT_VARIANT, ThemeManager};
use serde_json::Value;

/// A presentation: merged configuration, the theme manager and chart defaults.
///
/// `initialize` applies the configured theme to the surface; everything that
/// the presentation framework needs is then available from
/// [`reveal_options`](Self::reveal_options) and
/// [`chart_options`](Self::chart_options).
pub struct Presentation<S: Surface> {
    config: PresentationConfig,
    themes: ThemeManager<S>,
    charts: ChartConfigManager,
    initialized: bool,
}

impl<S: Surface> Presentation<S> {
    /// Merge `overrides` onto the defaults and prepare a theme manager over `surface`.
    ///
    /// A configured theme that is not built in, or that carries custom
    /// properties, is registered under its own name.
    pub fn new(surface: S, overrides: &PartialPresentationConfig) -> ThemeResult<Self> {
        let config = PresentationConfig::from_partial(overrides);
        let mut themes = ThemeManager::with_initial_theme(surface, config.theme.clone());
        register_configured_theme(&mut themes, &config)?;

        log::debug!("Presentation '{}' created", config.template.title);
        Ok(Self {
            charts: ChartConfigManager::new(config.charts.clone()),
            config,
            themes,
            initialized: false,
        })
    }

    pub fn with_preferences(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.themes = self.themes.with_preferences(store);
        self
    }

    pub fn with_theme_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.themes = self.themes.with_theme_base_path(base_path);
        self
    }

    /// Apply the configured theme (when the theme system is enabled) and mark
    /// the presentation ready. Calling it twice only logs a warning.
    pub async fn initialize(&mut self) -> ThemeResult<()> {
        if self.initialized {
            log::warn!("Presentation already initialized");
            return Ok(());
        }

        log::info!("Starting presentation initialization");
        if self.config.features.theme_system {
            let theme = &self.config.theme;
            self.themes
                .set_theme_with_variant(&theme.name, &theme.variant)
                .await?;
        }
        if self.config.features.charts {
            log::debug!(
                "Chart defaults ready ({} palette colors)",
                self.config.charts.default_colors.len()
            );
        }

        self.initialized = true;
        log::info!("Presentation initialization complete");
        Ok(())
    }

    /// Options for `Reveal.initialize`
    pub fn reveal_options(&self) -> serde_json::Result<Value> {
        serde_json::to_value(&self.config.reveal)
    }

    /// Chart.js defaults, or `None` when charts are disabled
    pub fn chart_options(&self) -> Option<ChartJsOptions> {
        self.config.features.charts.then(|| self.charts.options())
    }

    /// Merge `overrides` onto the current configuration.
    ///
    /// The active theme is not re-applied; use [`switch_theme`](Self::switch_theme).
    pub fn update_config(&mut self, overrides: &PartialPresentationConfig) -> ThemeResult<()> {
        let config = self.config.merge(overrides);
        if overrides.theme.is_some() {
            register_configured_theme(&mut self.themes, &config)?;
        }
        if let Some(chart_overrides) = &overrides.charts {
            self.charts.update_config(chart_overrides);
        }
        self.config = config;
        log::info!("Configuration updated");
        Ok(())
    }

    pub async fn switch_theme(&mut self, name: &str) -> ThemeResult<()> {
        self.switch_theme_variant(name, DEFAULT_VARIANT).await
    }

    /// Switch theme and variant. A no-op, with a warning, when the theme
    /// system is disabled.
    pub async fn switch_theme_variant(&mut self, name: &str, variant: &str) -> ThemeResult<()> {
        if !self.config.features.theme_system {
            log::warn!("Theme system is disabled");
            return Ok(());
        }

        self.themes.set_theme_with_variant(name, variant).await?;
        self.config.theme = self.themes.current_theme();
        Ok(())
    }

    /// Switch to the next registered theme, wrapping around.
    /// Returns the theme now active.
    pub async fn cycle_theme(&mut self) -> ThemeResult<Option<String>> {
        let Some(next) = self.themes.next_theme() else {
            return Ok(None);
        };
        self.switch_theme(&next).await?;
        Ok(Some(self.config.theme.name.clone()))
    }

    /// Release theme resources. The presentation can be initialized again.
    pub fn destroy(&mut self) {
        if !self.initialized {
            return;
        }
        self.themes.destroy();
        self.initialized = false;
        log::info!("Presentation destroyed");
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn themes(&self) -> &ThemeManager<S> {
        &self.themes
    }

    pub fn themes_mut(&mut self) -> &mut ThemeManager<S> {
        &mut self.themes
    }

    pub fn charts(&self) -> &ChartConfigManager {
        &self.charts
    }
}

fn register_configured_theme<S: Surface>(
    themes: &mut ThemeManager<S>,
    config: &PresentationConfig,
) -> ThemeResult<()> {
    let theme = &config.theme;
    let known = themes.registry().contains(&theme.name);
    if !known || theme.has_custom_properties() {
        themes.register_theme(theme.clone())?;
    }
    Ok(())
}
