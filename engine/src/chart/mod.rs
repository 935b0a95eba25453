//! # Chart Configuration Adapter
//!
//! Maps the deck's [`ChartConfig`] onto the option objects Chart.js expects and
//! fills in dataset colors from the configured palette. Nothing here creates
//! chart instances; the output is plain serializable data.

pub mod options;
pub mod presets;

use crate::config::{ChartConfig, Merge, PartialChartConfig};
use crate::errors::ChartError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use options::ChartJsOptions;
pub use presets::ChartPreset;

/// A dataset color: one value for the whole dataset or one per data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorValue>,
    /// Any other Chart.js dataset option, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `data` object of a chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Value>,
    pub datasets: Vec<Dataset>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartData {
    pub fn from_value(value: Value) -> Result<Self, ChartError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Everything a Chart.js constructor needs: `{ type, data, options }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartJsOptions,
}

/// Give every dataset without explicit colors the palette entry for its index.
///
/// Colors wrap around (`palette[index % len]`). An empty palette leaves the
/// datasets as they are.
pub fn apply_palette(datasets: &mut [Dataset], palette: &[String]) {
    if palette.is_empty() {
        return;
    }
    for (index, dataset) in datasets.iter_mut().enumerate() {
        let color = &palette[index % palette.len()];
        if dataset.background_color.is_none() {
            dataset.background_color = Some(ColorValue::Single(color.clone()));
        }
        if dataset.border_color.is_none() {
            dataset.border_color = Some(ColorValue::Single(color.clone()));
        }
    }
}

/// Build a complete chart description from `config`
pub fn chart_spec(config: &ChartConfig, kind: &str, data: &ChartData) -> ChartSpec {
    let mut data = data.clone();
    apply_palette(&mut data.datasets, &config.default_colors);

    ChartSpec {
        kind: kind.to_string(),
        data,
        options: ChartJsOptions::from(config),
    }
}

/// Holds the deck's chart configuration and hands out Chart.js options.
#[derive(Debug, Clone, Default)]
pub struct ChartConfigManager {
    config: ChartConfig,
}

impl ChartConfigManager {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn from_preset(preset: ChartPreset) -> Self {
        Self::new(preset.config())
    }

    pub fn config(&self) -> ChartConfig {
        self.config.clone()
    }

    /// Apply an override; nested `animations` and `plugins` merge field by field
    pub fn update_config(&mut self, overrides: &PartialChartConfig) -> ChartConfig {
        self.config = self.config.merge(overrides);
        log::debug!("Chart configuration updated");
        self.config()
    }

    pub fn options(&self) -> ChartJsOptions {
        ChartJsOptions::from(&self.config)
    }

    pub fn chart_spec(&self, kind: &str, data: &ChartData) -> ChartSpec {
        chart_spec(&self.config, kind, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartialAnimationConfig;
    use serde_json::json;

    fn three_datasets() -> ChartData {
        ChartData::from_value(json!({
            "labels": ["Q1", "Q2"],
            "datasets": [
                { "label": "a", "data": [1, 2] },
                { "label": "b", "data": [3, 4], "backgroundColor": "#123456" },
                { "label": "c", "data": [5, 6], "tension": 0.4 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_palette_fills_missing_colors_only() {
        let palette = vec!["#111111".to_string(), "#222222".to_string()];
        let mut data = three_datasets();

        apply_palette(&mut data.datasets, &palette);

        let colors: Vec<_> = data
            .datasets
            .iter()
            .map(|d| (d.background_color.clone(), d.border_color.clone()))
            .collect();
        let single = |c: &str| Some(ColorValue::Single(c.to_string()));
        assert_eq!(colors[0], (single("#111111"), single("#111111")));
        assert_eq!(colors[1], (single("#123456"), single("#222222")));
        assert_eq!(colors[2], (single("#111111"), single("#111111")));
    }

    #[test]
    fn test_empty_palette_leaves_datasets_alone() {
        let mut data = three_datasets();
        let before = data.clone();

        apply_palette(&mut data.datasets, &[]);

        assert_eq!(data, before);
    }

    #[test]
    fn test_chart_spec_serializes_with_type_key() {
        let manager = ChartConfigManager::default();
        let spec = manager.chart_spec("bar", &three_datasets());
        let value = serde_json::to_value(&spec).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"], json!(["Q1", "Q2"]));
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], "#4dd0e1");
        assert_eq!(value["data"]["datasets"][2]["tension"], json!(0.4));
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
    }

    #[test]
    fn test_update_config_merges_nested_sections() {
        let mut manager = ChartConfigManager::default();

        let updated = manager.update_config(&PartialChartConfig {
            animations: Some(PartialAnimationConfig {
                enabled: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert!(!updated.animations.enabled);
        assert_eq!(updated.animations.duration, 750);
        assert_eq!(manager.options().animation.duration, 0);
    }

    #[test]
    fn test_per_point_colors_round_trip() {
        let data = ChartData::from_value(json!({
            "datasets": [{ "data": [1, 2], "backgroundColor": ["#a", "#b"] }]
        }))
        .unwrap();

        assert_eq!(
            data.datasets[0].background_color,
            Some(ColorValue::PerPoint(vec!["#a".to_string(), "#b".to_string()]))
        );
    }
}
