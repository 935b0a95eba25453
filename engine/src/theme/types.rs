use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Prefix of the class marker a theme puts on the presentation root
pub const THEME_CLASS_PREFIX: &str = "theme-";

/// Variant used when a caller does not ask for one
pub const DEFAULT_VARIANT: &str = "default";

config_section! {
    /// A named theme: the class marker it toggles plus optional CSS variables.
    ///
    /// Custom property names may be given in camelCase or kebab-case; they are
    /// emitted as `--kebab-case` declarations when the theme is applied.
    pub struct ThemeDescriptor / PartialThemeDescriptor {
        fields {
            name: String = "starship".to_string(),
            variant: String = DEFAULT_VARIANT.to_string(),
        }
        maps {
            custom_properties: BTreeMap<String, String>,
        }
    }
}

/// Overrides accepted by variant derivation. The `name` field is ignored.
pub type ThemeOverrides = PartialThemeDescriptor;

impl ThemeDescriptor {
    pub fn new(name: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variant: variant.into(),
            ..Default::default()
        }
    }

    pub fn with_custom_properties<K, V, I>(mut self, properties: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.custom_properties.extend(
            properties
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        self
    }

    pub fn has_custom_properties(&self) -> bool {
        !self.custom_properties.is_empty()
    }

    /// Class marker applied to the presentation root, e.g. `theme-corporate`
    pub fn class_name(&self) -> String {
        format!("{THEME_CLASS_PREFIX}{}", self.name)
    }
}

impl ThemeOverrides {
    /// Overrides that only touch custom properties
    pub fn from_custom_properties<K, V, I>(properties: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            custom_properties: Some(
                properties
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
            ..Default::default()
        }
    }
}

/// Themes every registry starts with
pub static BUILTIN_THEMES: Lazy<Vec<ThemeDescriptor>> = Lazy::new(|| {
    ["starship", "corporate", "academic", "minimal"]
        .into_iter()
        .map(|name| ThemeDescriptor::new(name, DEFAULT_VARIANT))
        .collect()
});

/// Ready-made descriptors keyed by preset name. Presets keep their base
/// theme name; the variant carries the flavour.
static THEME_PRESETS: Lazy<Vec<(&'static str, ThemeDescriptor)>> = Lazy::new(|| {
    vec![
        ("starship", ThemeDescriptor::new("starship", DEFAULT_VARIANT)),
        ("starship-dark", ThemeDescriptor::new("starship", "dark")),
        ("corporate", ThemeDescriptor::new("corporate", DEFAULT_VARIANT)),
        (
            "corporate-blue",
            ThemeDescriptor::new("corporate", "blue").with_custom_properties([
                ("primary-color", "#1e40af"),
                ("secondary-color", "#3b82f6"),
            ]),
        ),
        ("academic", ThemeDescriptor::new("academic", DEFAULT_VARIANT)),
        (
            "academic-traditional",
            ThemeDescriptor::new("academic", "traditional").with_custom_properties([
                ("primary-color", "#1e3a8a"),
                ("secondary-color", "#7c2d12"),
            ]),
        ),
        ("minimal", ThemeDescriptor::new("minimal", DEFAULT_VARIANT)),
        (
            "minimal-dark",
            ThemeDescriptor::new("minimal", "dark").with_custom_properties([
                ("background-primary", "#000000"),
                ("text-primary", "#ffffff"),
            ]),
        ),
    ]
});

/// Look up a preset descriptor by its key (`corporate-blue`, `minimal-dark`, ...)
pub fn theme_preset(key: &str) -> Option<ThemeDescriptor> {
    THEME_PRESETS
        .iter()
        .find(|(preset, _)| *preset == key)
        .map(|(_, descriptor)| descriptor.clone())
}

/// Keys of all presets, in declaration order
pub fn theme_preset_names() -> Vec<&'static str> {
    THEME_PRESETS.iter().map(|(preset, _)| *preset).collect()
}
