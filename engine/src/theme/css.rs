use crate::surface::StyleSheet;
use crate::theme::types::{THEME_CLASS_PREFIX, ThemeDescriptor};

/// Convert a property name to kebab-case: `primaryColor` becomes `primary-color`.
/// Names that are already kebab-case pass through unchanged.
pub fn to_kebab_case(name: &str) -> String {
    let name = name.trim_start_matches('-');
    let mut kebab = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if index > 0 && !kebab.ends_with('-') {
                kebab.push('-');
            }
            kebab.push(ch.to_ascii_lowercase());
        } else {
            kebab.push(ch);
        }
    }
    kebab
}

/// Selector a theme's custom properties are scoped to, e.g. `.reveal.theme-corporate`
pub fn theme_scope(root_selector: &str, theme_name: &str) -> String {
    format!("{root_selector}.{THEME_CLASS_PREFIX}{theme_name}")
}

/// Build the stylesheet carrying a theme's custom properties.
pub fn custom_property_sheet(root_selector: &str, theme: &ThemeDescriptor) -> StyleSheet {
    let declarations = theme
        .custom_properties
        .iter()
        .map(|(property, value)| format!("  --{}: {};", to_kebab_case(property), value))
        .collect::<Vec<_>>()
        .join("\n");

    StyleSheet {
        owner: theme.name.clone(),
        css: format!(
            "{} {{\n{}\n}}",
            theme_scope(root_selector, &theme.name),
            declarations
        ),
    }
}
