use crate::config::Merge;
use crate::errors::{ThemeError, ThemeResult};
use crate::theme::types::{BUILTIN_THEMES, ThemeDescriptor, ThemeOverrides};
use crate::theme::validation::{ThemeDescriptorValidator, VariantNameValidator};
use crate::validation::Validator;
use std::collections::HashMap;

/// Named theme definitions, owned exclusively by the registry.
///
/// Names are unique. `list` reports them in insertion order; re-registering
/// a name replaces the descriptor but keeps its original position so UI
/// cycling stays stable.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    order: Vec<String>,
    themes: HashMap<String, ThemeDescriptor>,
}

impl ThemeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `starship`, `corporate`, `academic` and `minimal`
    pub fn with_builtin_themes() -> Self {
        let mut registry = Self::new();
        for theme in BUILTIN_THEMES.iter() {
            registry.insert(theme.clone());
        }
        registry
    }

    /// Register a theme. An existing theme of the same name is replaced.
    pub fn register(&mut self, descriptor: ThemeDescriptor) -> ThemeResult<()> {
        ThemeDescriptorValidator.validate(&descriptor)?;

        if self.themes.contains_key(&descriptor.name) {
            log::debug!("Replacing registered theme '{}'", descriptor.name);
        }
        self.insert(descriptor);
        Ok(())
    }

    /// Derive and register `{base_name}-{variant_name}` from an existing theme.
    ///
    /// Overrides are applied on top of the base descriptor (custom properties
    /// merge key by key); the derived theme's `variant` is `variant_name`.
    pub fn derive_variant(
        &mut self,
        base_name: &str,
        variant_name: &str,
        overrides: &ThemeOverrides,
    ) -> ThemeResult<&ThemeDescriptor> {
        let base = self
            .themes
            .get(base_name)
            .ok_or_else(|| ThemeError::NotFound {
                name: base_name.to_string(),
            })?;
        VariantNameValidator.validate(variant_name)?;

        let mut derived = base.merge(overrides);
        derived.name = format!("{base_name}-{variant_name}");
        derived.variant = variant_name.to_string();

        let name = derived.name.clone();
        self.register(derived)?;
        log::info!("Registered theme variant '{name}' derived from '{base_name}'");

        self.themes.get(&name).ok_or(ThemeError::NotFound { name })
    }

    /// Registered theme names in insertion order
    pub fn list(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn get(&self, name: &str) -> Option<&ThemeDescriptor> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn insert(&mut self, descriptor: ThemeDescriptor) {
        if !self.themes.contains_key(&descriptor.name) {
            self.order.push(descriptor.name.clone());
        }
        self.themes.insert(descriptor.name.clone(), descriptor);
    }
}
