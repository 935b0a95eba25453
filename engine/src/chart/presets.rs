use crate::config::{AnimationConfig, ChartConfig, ChartPlugins};
use crate::errors::ChartError;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// Named chart configurations for common situations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPreset {
    /// No animations, for large datasets or slow devices
    Performance,
    /// High-contrast palette, reduced motion, fixed aspect ratio
    Accessible,
    /// Slower animations and no tooltips while presenting
    Presentation,
}

const HIGH_CONTRAST_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

fn still_animations() -> AnimationConfig {
    AnimationConfig {
        enabled: false,
        duration: 0,
        easing: "linear".to_string(),
        ..Default::default()
    }
}

static PERFORMANCE: Lazy<ChartConfig> = Lazy::new(|| ChartConfig {
    animations: still_animations(),
    ..Default::default()
});

static ACCESSIBLE: Lazy<ChartConfig> = Lazy::new(|| ChartConfig {
    maintain_aspect_ratio: true,
    default_colors: HIGH_CONTRAST_COLORS.iter().map(|c| c.to_string()).collect(),
    animations: still_animations(),
    ..Default::default()
});

static PRESENTATION: Lazy<ChartConfig> = Lazy::new(|| ChartConfig {
    animations: AnimationConfig {
        duration: 1000,
        ..Default::default()
    },
    plugins: ChartPlugins {
        tooltip: false,
        ..Default::default()
    },
    ..Default::default()
});

impl ChartPreset {
    pub const ALL: [ChartPreset; 3] = [Self::Performance, Self::Accessible, Self::Presentation];

    pub fn name(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Accessible => "accessible",
            Self::Presentation => "presentation",
        }
    }

    /// The preset's complete chart configuration
    pub fn config(self) -> ChartConfig {
        match self {
            Self::Performance => PERFORMANCE.clone(),
            Self::Accessible => ACCESSIBLE.clone(),
            Self::Presentation => PRESENTATION.clone(),
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|preset| preset.name()).collect()
    }
}

impl fmt::Display for ChartPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartPreset {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChartError::UnknownPreset {
                name: s.to_string(),
                available: Self::names(),
            })
    }
}
