//! Chart.js option objects built from [`ChartConfig`].

use crate::config::ChartConfig;
use serde::Serialize;

/// Legend placement used for every chart on the deck
pub const LEGEND_POSITION: &str = "bottom";

/// The `options` object handed to a Chart.js constructor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub animation: AnimationOptions,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationOptions {
    /// Milliseconds; 0 when animations are disabled
    pub duration: u32,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
    pub title: TitleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipOptions {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

impl From<&ChartConfig> for ChartJsOptions {
    fn from(config: &ChartConfig) -> Self {
        let animations = &config.animations;
        Self {
            responsive: config.responsive,
            maintain_aspect_ratio: config.maintain_aspect_ratio,
            animation: AnimationOptions {
                duration: if animations.enabled {
                    animations.duration
                } else {
                    0
                },
                easing: animations.easing.clone(),
            },
            plugins: PluginOptions {
                legend: LegendOptions {
                    display: config.plugins.legend,
                    position: LEGEND_POSITION,
                },
                tooltip: TooltipOptions {
                    enabled: config.plugins.tooltip,
                },
                title: TitleOptions {
                    display: config.plugins.title,
                },
            },
            scales: ScaleOptions {
                x: AxisOptions { begin_at_zero: true },
                y: AxisOptions { begin_at_zero: true },
            },
        }
    }
}
