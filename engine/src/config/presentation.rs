use super::sections::{
    BrandingConfig, ChartConfig, CodeConfig, ExportConfig, FeatureFlags, PartialBrandingConfig,
    PartialChartConfig, PartialCodeConfig, PartialExportConfig, PartialFeatureFlags,
    PartialRevealConfig, PartialTemplateConfig, RevealConfig, TemplateConfig,
};
use super::{Merge, merge_json_maps};
use crate::theme::types::{PartialThemeDescriptor, ThemeDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Complete configuration of a presentation.
///
/// Keys outside the known schema are preserved in `extra` (here and in every
/// section) so plugins can read their own options from the same document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationConfig {
    pub template: TemplateConfig,
    pub theme: ThemeDescriptor,
    pub branding: BrandingConfig,
    pub features: FeatureFlags,
    pub export: ExportConfig,
    pub charts: ChartConfig,
    pub code: CodeConfig,
    pub reveal: RevealConfig,
    /// Stylesheet URLs appended after the theme
    #[serde(rename = "customCSS", alias = "customCss")]
    pub custom_css: Vec<String>,
    /// Script URLs loaded after reveal.js
    #[serde(rename = "customJS", alias = "customJs")]
    pub custom_js: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Override for [`PresentationConfig`]. This is what users write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPresentationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PartialTemplateConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<PartialThemeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<PartialBrandingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<PartialFeatureFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<PartialExportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<PartialChartConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<PartialCodeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal: Option<PartialRevealConfig>,
    #[serde(
        rename = "customCSS",
        alias = "customCss",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_css: Option<Vec<String>>,
    #[serde(
        rename = "customJS",
        alias = "customJs",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_js: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn merge_section<T: Merge + Clone>(base: &T, partial: &Option<T::Partial>) -> T {
    match partial {
        Some(partial) => base.merge(partial),
        None => base.clone(),
    }
}

impl Merge for PresentationConfig {
    type Partial = PartialPresentationConfig;

    fn merge(&self, partial: &Self::Partial) -> Self {
        Self {
            template: merge_section(&self.template, &partial.template),
            theme: merge_section(&self.theme, &partial.theme),
            branding: merge_section(&self.branding, &partial.branding),
            features: merge_section(&self.features, &partial.features),
            export: merge_section(&self.export, &partial.export),
            charts: merge_section(&self.charts, &partial.charts),
            code: merge_section(&self.code, &partial.code),
            reveal: merge_section(&self.reveal, &partial.reveal),
            custom_css: partial
                .custom_css
                .clone()
                .unwrap_or_else(|| self.custom_css.clone()),
            custom_js: partial
                .custom_js
                .clone()
                .unwrap_or_else(|| self.custom_js.clone()),
            extra: merge_json_maps(&self.extra, &partial.extra),
        }
    }
}

impl PresentationConfig {
    /// Defaults with `partial` applied
    pub fn from_partial(partial: &PartialPresentationConfig) -> Self {
        Self::default().merge(partial)
    }
}

impl PartialPresentationConfig {
    /// `true` when applying this override would change nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sections::{PartialAnimationConfig, Transition};
    use serde_json::json;

    #[test]
    fn test_empty_override_yields_defaults() {
        let config = PresentationConfig::from_partial(&PartialPresentationConfig::default());
        assert_eq!(config, PresentationConfig::default());
    }

    #[test]
    fn test_override_keeps_sibling_defaults() {
        let partial: PartialPresentationConfig = serde_json::from_value(json!({
            "template": { "title": "Quarterly Review" },
            "reveal": { "transition": "fade", "width": 1280 }
        }))
        .unwrap();

        let config = PresentationConfig::from_partial(&partial);

        assert_eq!(config.template.title, "Quarterly Review");
        assert_eq!(config.template.author, "Author Name");
        assert_eq!(config.reveal.transition, Transition::Fade);
        assert_eq!(config.reveal.width, 1280);
        assert_eq!(config.reveal.height, 700);
        assert!(config.reveal.controls);
    }

    #[test]
    fn test_theme_custom_properties_merge_key_wise() {
        let base = PresentationConfig {
            theme: ThemeDescriptor::new("corporate", "blue")
                .with_custom_properties([("primary-color", "#1e40af"), ("accent", "#ff0")]),
            ..Default::default()
        };
        let partial: PartialPresentationConfig = serde_json::from_value(json!({
            "theme": { "customProperties": { "accent": "#0f0" } }
        }))
        .unwrap();

        let merged = base.merge(&partial);

        assert_eq!(merged.theme.name, "corporate");
        assert_eq!(merged.theme.custom_properties["primary-color"], "#1e40af");
        assert_eq!(merged.theme.custom_properties["accent"], "#0f0");
    }

    #[test]
    fn test_unknown_keys_pass_through_and_merge() {
        let base: PresentationConfig = serde_json::from_value(json!({
            "plugins": { "menu": { "side": "left", "width": 300 } }
        }))
        .unwrap();
        let partial: PartialPresentationConfig = serde_json::from_value(json!({
            "plugins": { "menu": { "side": "right" } },
            "analytics": false
        }))
        .unwrap();

        let merged = base.merge(&partial);

        assert_eq!(
            merged.extra["plugins"],
            json!({ "menu": { "side": "right", "width": 300 } })
        );
        assert_eq!(merged.extra["analytics"], json!(false));
    }

    #[test]
    fn test_unknown_keys_inside_sections_reach_the_framework() {
        let partial: PartialPresentationConfig = serde_json::from_value(json!({
            "reveal": { "autoAnimate": true, "transition": "fade" },
            "charts": { "stacked": true, "animations": { "delay": 200 } }
        }))
        .unwrap();

        let config = PresentationConfig::from_partial(&partial);
        let reveal = serde_json::to_value(&config.reveal).unwrap();
        let charts = serde_json::to_value(&config.charts).unwrap();

        assert_eq!(reveal["autoAnimate"], json!(true));
        assert_eq!(reveal["transition"], "fade");
        assert_eq!(charts["stacked"], json!(true));
        assert_eq!(charts["animations"]["delay"], json!(200));
        assert_eq!(charts["animations"]["duration"], json!(750));
    }

    #[test]
    fn test_unknown_section_keys_merge_deeply() {
        let base: PresentationConfig = serde_json::from_value(json!({
            "reveal": { "menu": { "side": "left", "width": 300 } }
        }))
        .unwrap();
        let partial: PartialPresentationConfig = serde_json::from_value(json!({
            "reveal": { "menu": { "side": "right" }, "hashOneBasedIndex": true }
        }))
        .unwrap();

        let merged = base.merge(&partial);

        assert_eq!(
            merged.reveal.extra["menu"],
            json!({ "side": "right", "width": 300 })
        );
        assert_eq!(merged.reveal.extra["hashOneBasedIndex"], json!(true));
        assert!(merged.extra.is_empty());
    }

    #[test]
    fn test_explicit_null_clears_optional_field() {
        let base = PresentationConfig::from_partial(
            &serde_json::from_value(json!({
                "template": { "subtitle": "Draft", "date": "2024-05-01" }
            }))
            .unwrap(),
        );
        assert_eq!(base.template.subtitle.as_deref(), Some("Draft"));

        let partial: PartialPresentationConfig =
            serde_json::from_value(json!({ "template": { "subtitle": null } })).unwrap();
        let merged = base.merge(&partial);

        assert_eq!(merged.template.subtitle, None);
        assert_eq!(merged.template.date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_absent_optional_field_is_not_an_override() {
        let partial: PartialPresentationConfig =
            serde_json::from_value(json!({ "template": { "title": "Roadmap" } })).unwrap();

        let template = partial.template.as_ref().unwrap();
        assert_eq!(template.subtitle, None);

        let null_partial: PartialPresentationConfig =
            serde_json::from_value(json!({ "template": { "subtitle": null } })).unwrap();
        assert_eq!(null_partial.template.unwrap().subtitle, Some(None));
    }

    #[test]
    fn test_custom_assets_are_replaced() {
        let base = PresentationConfig {
            custom_css: vec!["a.css".to_string(), "b.css".to_string()],
            ..Default::default()
        };
        let partial: PartialPresentationConfig =
            serde_json::from_value(json!({ "customCSS": ["c.css"] })).unwrap();

        assert_eq!(base.merge(&partial).custom_css, vec!["c.css".to_string()]);
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let base = PresentationConfig::default();
        let partial = PartialPresentationConfig {
            charts: Some(PartialChartConfig {
                animations: Some(PartialAnimationConfig {
                    enabled: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let base_before = base.clone();
        let partial_before = partial.clone();

        let merged = base.merge(&partial);

        assert!(!merged.charts.animations.enabled);
        assert_eq!(base, base_before);
        assert_eq!(partial, partial_before);
    }

    #[test]
    fn test_serialized_config_uses_framework_keys() {
        let value = serde_json::to_value(PresentationConfig::default()).unwrap();

        assert!(value.get("customCSS").is_some());
        assert_eq!(value["features"]["themeSystem"], json!(true));
        assert_eq!(value["export"]["printOptions"]["pdfMaxPagesPerSlide"], json!(1));
    }
}
