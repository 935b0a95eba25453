use crate::errors::{ThemeError, ThemeResult};
use crate::preferences::{PreferenceStore, THEME_PREFERENCE_KEY};
use crate::surface::{StyleHandle, Surface, ThemeChanged};
use crate::theme::css::custom_property_sheet;
use crate::theme::registry::ThemeRegistry;
use crate::theme::types::{DEFAULT_VARIANT, THEME_CLASS_PREFIX, ThemeDescriptor, ThemeOverrides};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Where theme stylesheets are served from, used for preload hints
pub const DEFAULT_THEME_BASE_PATH: &str = "/themes/";

/// Lifecycle of the manager's hold on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManagerState {
    Uninitialized,
    /// A theme has been applied; holds the stylesheet we own, if any
    Ready { style: Option<StyleHandle> },
}

/// Applies themes from a [`ThemeRegistry`] to a rendering [`Surface`].
///
/// The manager owns its registry, the stylesheet it injects and, through the
/// surface, nothing else. Every switch either completes or leaves
/// [`current_theme`](Self::current_theme) on the last theme that applied
/// successfully.
pub struct ThemeManager<S: Surface> {
    registry: ThemeRegistry,
    surface: S,
    current: ThemeDescriptor,
    state: ManagerState,
    preferences: Option<Box<dyn PreferenceStore>>,
    theme_base_path: String,
}

impl<S: Surface> ThemeManager<S> {
    /// A manager over `surface` with the built-in themes and `starship` as the initial theme
    pub fn new(surface: S) -> Self {
        Self::with_initial_theme(surface, ThemeDescriptor::default())
    }

    pub fn with_initial_theme(surface: S, initial: ThemeDescriptor) -> Self {
        Self {
            registry: ThemeRegistry::with_builtin_themes(),
            surface,
            current: initial,
            state: ManagerState::Uninitialized,
            preferences: None,
            theme_base_path: DEFAULT_THEME_BASE_PATH.to_string(),
        }
    }

    pub fn with_registry(mut self, registry: ThemeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Persist the active theme name after each successful switch
    pub fn with_preferences(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.preferences = Some(Box::new(store));
        self
    }

    pub fn with_theme_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.theme_base_path = base_path.into();
        self
    }

    /// Switch to `name` with the default variant
    pub async fn set_theme(&mut self, name: &str) -> ThemeResult<()> {
        self.set_theme_with_variant(name, DEFAULT_VARIANT).await
    }

    /// Switch to `name`, recording `variant` on the active descriptor.
    ///
    /// Fails with [`ThemeError::ThemeNotFound`] before touching anything when
    /// the name is unknown, and with [`ThemeError::ThemeApplication`] when the
    /// surface could not be updated. In both cases the current theme is
    /// unchanged.
    pub async fn set_theme_with_variant(&mut self, name: &str, variant: &str) -> ThemeResult<()> {
        let Some(registered) = self.registry.get(name) else {
            return Err(ThemeError::ThemeNotFound {
                name: name.to_string(),
                available: self.registry.list(),
            });
        };

        let previous_theme = self.current.name.clone();
        let candidate = ThemeDescriptor {
            variant: variant.to_string(),
            ..registered.clone()
        };

        let style = self
            .apply_theme(&candidate)
            .await
            .map_err(|source| ThemeError::ThemeApplication {
                theme_name: name.to_string(),
                variant: variant.to_string(),
                source: Box::new(source),
            })?;

        self.current = candidate;
        self.state = ManagerState::Ready { style };
        log::info!("Switched to theme: {name} ({variant})");

        self.surface.publish(ThemeChanged {
            previous_theme,
            current_theme: name.to_string(),
        });
        self.store_preference(name);
        Ok(())
    }

    /// Push `candidate` onto the surface. Returns the stylesheet now owned.
    async fn apply_theme(&mut self, candidate: &ThemeDescriptor) -> ThemeResult<Option<StyleHandle>> {
        if !self.surface.has_root() {
            return Err(ThemeError::SurfaceNotFound {
                selector: self.surface.root_selector().to_string(),
            });
        }

        let snapshot = self.surface.root_classes();
        match self.mutate_surface(candidate).await {
            Ok(style) => Ok(style),
            Err(error) => {
                self.restore_classes(&snapshot);
                Err(error)
            }
        }
    }

    async fn mutate_surface(&mut self, candidate: &ThemeDescriptor) -> ThemeResult<Option<StyleHandle>> {
        // Markers applied outside this manager are cleared too.
        for class in self.surface.root_classes() {
            if class.starts_with(THEME_CLASS_PREFIX) {
                self.surface.remove_class(&class)?;
            }
        }
        self.surface.add_class(&candidate.class_name())?;

        let new_style = if candidate.has_custom_properties() {
            let sheet = custom_property_sheet(self.surface.root_selector(), candidate);
            Some(self.surface.attach_style(sheet).await?)
        } else {
            None
        };

        if let Some(old_style) = self.owned_style() {
            if let Err(error) = self.surface.detach_style(old_style) {
                if let Some(handle) = new_style {
                    if let Err(cleanup) = self.surface.detach_style(handle) {
                        log::warn!("Failed to release stylesheet after aborted switch: {cleanup}");
                    }
                }
                return Err(error.into());
            }
        }

        Ok(new_style)
    }

    fn restore_classes(&mut self, snapshot: &[String]) {
        let current = self.surface.root_classes();
        for class in current.iter().filter(|class| !snapshot.contains(class)) {
            if let Err(e) = self.surface.remove_class(class) {
                log::warn!("Failed to roll back class '{class}': {e}");
            }
        }
        for class in snapshot.iter().filter(|class| !current.contains(class)) {
            if let Err(e) = self.surface.add_class(class) {
                log::warn!("Failed to restore class '{class}': {e}");
            }
        }
    }

    fn owned_style(&self) -> Option<StyleHandle> {
        match self.state {
            ManagerState::Ready { style } => style,
            ManagerState::Uninitialized => None,
        }
    }

    fn store_preference(&mut self, name: &str) {
        if let Some(store) = self.preferences.as_mut() {
            if let Err(e) = store.set(THEME_PREFERENCE_KEY, name) {
                log::warn!("Could not save theme preference: {e}");
            }
        }
    }

    /// Theme name saved by a previous session, if any
    pub fn stored_theme(&self) -> Option<String> {
        let store = self.preferences.as_ref()?;
        match store.get(THEME_PREFERENCE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not retrieve theme preference: {e}");
                None
            }
        }
    }

    /// Copy of the active descriptor
    pub fn current_theme(&self) -> ThemeDescriptor {
        self.current.clone()
    }

    pub fn available_themes(&self) -> Vec<String> {
        self.registry.list()
    }

    /// Theme that follows the current one in registry order, wrapping around
    pub fn next_theme(&self) -> Option<String> {
        let themes = self.registry.list();
        if themes.is_empty() {
            return None;
        }
        let next = match themes.iter().position(|name| *name == self.current.name) {
            Some(index) => (index + 1) % themes.len(),
            None => 0,
        };
        themes.into_iter().nth(next)
    }

    pub fn register_theme(&mut self, descriptor: ThemeDescriptor) -> ThemeResult<()> {
        self.registry.register(descriptor)
    }

    /// Derive `{base_name}-{variant_name}` and register it
    pub fn create_theme_variant(
        &mut self,
        base_name: &str,
        variant_name: &str,
        overrides: &ThemeOverrides,
    ) -> ThemeResult<ThemeDescriptor> {
        self.registry
            .derive_variant(base_name, variant_name, overrides)
            .cloned()
    }

    /// Issue preload hints for a batch of themes.
    ///
    /// Every name is checked before any hint goes out; one unknown name fails
    /// the whole batch. Hint failures are logged and skipped.
    pub fn preload_themes<N: AsRef<str>>(&mut self, names: &[N]) -> ThemeResult<()> {
        if let Some(unknown) = names
            .iter()
            .map(AsRef::as_ref)
            .find(|name| !self.registry.contains(name))
        {
            return Err(ThemeError::UnknownTheme {
                name: unknown.to_string(),
            });
        }

        for name in names.iter().map(AsRef::as_ref) {
            let href = format!("{}{name}/theme.css", self.theme_base_path);
            if let Err(e) = self.surface.preload_style(name, &href) {
                log::warn!("Failed to preload theme {name}: {e}");
            }
        }
        Ok(())
    }

    /// Release the owned stylesheet and tagged theme links
    pub fn destroy(&mut self) {
        if let Some(style) = self.owned_style() {
            if let Err(e) = self.surface.detach_style(style) {
                log::warn!("Failed to release theme stylesheet: {e}");
            }
        }
        let removed = self.surface.remove_theme_links();
        self.state = ManagerState::Uninitialized;
        log::debug!("Theme manager destroyed ({removed} theme links removed)");
    }

    /// Whether a theme has been applied since construction or the last `destroy`
    pub fn is_ready(&self) -> bool {
        matches!(self.state, ManagerState::Ready { .. })
    }

    /// Handle of the stylesheet currently owned, if any
    pub fn active_style(&self) -> Option<StyleHandle> {
        self.owned_style()
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// A [`ThemeManager`] shared between tasks.
///
/// Switches are queued on an async mutex, so two callers can never interleave
/// their surface mutations.
pub struct SharedThemeManager<S: Surface> {
    inner: Arc<Mutex<ThemeManager<S>>>,
}

impl<S: Surface> Clone for SharedThemeManager<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Surface> SharedThemeManager<S> {
    pub fn new(manager: ThemeManager<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub async fn set_theme(&self, name: &str, variant: &str) -> ThemeResult<()> {
        let mut manager = self.inner.lock().await;
        manager.set_theme_with_variant(name, variant).await
    }

    pub async fn current_theme(&self) -> ThemeDescriptor {
        self.inner.lock().await.current_theme()
    }

    /// Exclusive access for anything not covered above
    pub async fn lock(&self) -> MutexGuard<'_, ThemeManager<S>> {
        self.inner.lock().await
    }
}
