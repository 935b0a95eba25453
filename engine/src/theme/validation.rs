use crate::errors::ThemeError;
use crate::theme::types::ThemeDescriptor;
use crate::validation::Validator;

const MAX_THEME_NAME_LEN: usize = 50;
const MAX_VARIANT_NAME_LEN: usize = 30;

/// Validation errors specific to theme registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    InvalidThemeName { name: String, reason: String },
    InvalidVariantName { variant: String, reason: String },
    InvalidCustomProperty { property: String, reason: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidThemeName { name, reason } => {
                format!(
                    "Invalid theme name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Theme names become CSS classes; use letters, digits, hyphens and underscores."
                )
            }
            ThemeValidationError::InvalidVariantName { variant, reason } => {
                format!(
                    "Invalid variant name: '{variant}'\n\n\
                    Reason: {reason}\n\n\
                    Use letters, digits, hyphens and underscores."
                )
            }
            ThemeValidationError::InvalidCustomProperty { property, reason } => {
                format!(
                    "Invalid custom property: '{property}'\n\n\
                    Reason: {reason}"
                )
            }
        }
    }

    fn subject(&self) -> &str {
        match self {
            ThemeValidationError::InvalidThemeName { name, .. } => name,
            ThemeValidationError::InvalidVariantName { variant, .. } => variant,
            ThemeValidationError::InvalidCustomProperty { property, .. } => property,
        }
    }

    fn reason(&self) -> &str {
        match self {
            ThemeValidationError::InvalidThemeName { reason, .. }
            | ThemeValidationError::InvalidVariantName { reason, .. }
            | ThemeValidationError::InvalidCustomProperty { reason, .. } => reason,
        }
    }
}

impl From<ThemeValidationError> for ThemeError {
    fn from(error: ThemeValidationError) -> Self {
        ThemeError::Validation {
            name: error.subject().to_string(),
            reason: error.reason().to_string(),
        }
    }
}

/// Shared rules for identifiers that end up inside a CSS class name
fn check_identifier(input: &str, max_len: usize, label: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err(format!("{label} is required"));
    }

    if input.len() > max_len {
        return Err(format!("{label} too long (max {max_len} characters)"));
    }

    if !input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "{label} contains invalid characters (only alphanumeric, hyphens, and underscores allowed)"
        ));
    }

    if input.starts_with('-')
        || input.starts_with('_')
        || input.ends_with('-')
        || input.ends_with('_')
    {
        return Err(format!(
            "{label} cannot start or end with hyphens or underscores"
        ));
    }

    Ok(())
}

/// Validator for theme names
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        check_identifier(input, MAX_THEME_NAME_LEN, "Theme name").map_err(|reason| {
            ThemeValidationError::InvalidThemeName {
                name: input.to_string(),
                reason,
            }
        })
    }
}

/// Validator for variant names (same rules as theme names, shorter limit)
pub struct VariantNameValidator;

impl Validator<str> for VariantNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        check_identifier(input, MAX_VARIANT_NAME_LEN, "Variant name").map_err(|reason| {
            ThemeValidationError::InvalidVariantName {
                variant: input.to_string(),
                reason,
            }
        })
    }
}

/// Validator for a single custom property declaration.
///
/// Values are emitted verbatim into a stylesheet inside a `<style>` element.
/// A value may contain `;`, `<` or `>` inside quotes or parentheses (data URIs,
/// inline SVG); anything that would end the declaration, the rule block or
/// the element is rejected.
pub struct CustomPropertyValidator;

impl Validator<(&str, &str)> for CustomPropertyValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &(&str, &str)) -> Result<(), Self::Error> {
        let (property, value) = *input;
        let invalid = |reason: &str| ThemeValidationError::InvalidCustomProperty {
            property: property.to_string(),
            reason: reason.to_string(),
        };

        let name = property.trim_start_matches('-');
        if name.is_empty() {
            return Err(invalid("Property name cannot be empty"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid("Property name contains invalid characters"));
        }

        if value.trim().is_empty() {
            return Err(invalid("Value cannot be empty"));
        }
        if value.chars().any(char::is_control) {
            return Err(invalid("Value cannot contain control characters"));
        }
        if value.to_ascii_lowercase().contains("</style") {
            return Err(invalid("Value cannot close the style element"));
        }
        check_declaration_value(value).map_err(invalid)
    }
}

/// Walks a value tracking quotes and parentheses. `;` is only allowed inside
/// either, braces only inside quotes, and everything opened must be closed.
fn check_declaration_value(value: &str) -> Result<(), &'static str> {
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if let Some(open) = quote {
            match c {
                '\\' => {
                    chars.next();
                }
                c if c == open => quote = None,
                _ => {}
            }
            continue;
        }

        match c {
            '\\' => {
                chars.next();
            }
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or("Value has an unbalanced closing parenthesis")?;
            }
            ';' if depth == 0 => return Err("Value cannot end the declaration with ';'"),
            '{' | '}' => return Err("Value cannot contain unquoted braces"),
            _ => {}
        }
    }

    if quote.is_some() {
        return Err("Value has an unterminated string");
    }
    if depth > 0 {
        return Err("Value has an unclosed parenthesis");
    }
    Ok(())
}

/// Validator for complete descriptors at registration time
pub struct ThemeDescriptorValidator;

impl Validator<ThemeDescriptor> for ThemeDescriptorValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &ThemeDescriptor) -> Result<(), Self::Error> {
        ThemeNameValidator.validate(&input.name)?;
        VariantNameValidator.validate(&input.variant)?;

        for (property, value) in &input.custom_properties {
            CustomPropertyValidator.validate(&(property.as_str(), value.as_str()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_validator() {
        let validator = ThemeNameValidator;

        assert!(validator.validate("corporate").is_ok());
        assert!(validator.validate("academic-traditional").is_ok());
        assert!(validator.validate("theme_2").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("-leading").is_err());
        assert!(validator.validate("trailing_").is_err());
        assert!(validator.validate("with space").is_err());
        assert!(validator.validate("dot.name").is_err());
        assert!(validator.validate(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_variant_name_validator() {
        let validator = VariantNameValidator;

        assert!(validator.validate("dark").is_ok());
        assert!(validator.validate("").is_err());
        assert!(validator.validate(&"a".repeat(31)).is_err());
    }

    #[test]
    fn test_custom_property_validator() {
        let validator = CustomPropertyValidator;

        assert!(validator.validate(&("primary-color", "#1e40af")).is_ok());
        assert!(validator.validate(&("primaryColor", "rgb(0, 0, 0)")).is_ok());
        assert!(validator.validate(&("--accent", "var(--primary-color)")).is_ok());

        assert!(validator.validate(&("", "#fff")).is_err());
        assert!(validator.validate(&("color", "")).is_err());
        assert!(validator.validate(&("color", "red; } body { display: none")).is_err());
        assert!(validator.validate(&("color", "</style>")).is_err());
    }

    #[test]
    fn test_custom_property_accepts_data_uris() {
        let validator = CustomPropertyValidator;

        assert!(
            validator
                .validate(&("bg-image", "url(data:image/png;base64,AAAA)"))
                .is_ok()
        );
        assert!(
            validator
                .validate(&(
                    "bg-image",
                    r#"url("data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg'></svg>")"#
                ))
                .is_ok()
        );
        assert!(validator.validate(&("font", r#""Fira Code", monospace"#)).is_ok());
        assert!(validator.validate(&("content", r#""{ ; }""#)).is_ok());
    }

    #[test]
    fn test_custom_property_rejects_escapes_from_declaration() {
        let validator = CustomPropertyValidator;

        for value in [
            "url(a.png)); color: red",
            "red } .reveal { color: blue",
            r#""unterminated"#,
            "url(data:image/png;base64,AAAA",
            "url(\"x.png\") </STYLE><script>alert(1)</script>",
            "red\n}",
        ] {
            assert!(validator.validate(&("color", value)).is_err(), "{value}");
        }
    }

    #[test]
    fn test_empty_name_maps_to_theme_validation_error() {
        let error: ThemeError = ThemeNameValidator.validate("").unwrap_err().into();

        assert!(matches!(
            error,
            ThemeError::Validation { ref reason, .. } if reason == "Theme name is required"
        ));
    }
}
