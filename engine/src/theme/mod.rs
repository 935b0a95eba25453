//! # Theme System Module
//!
//! Named visual themes for a presentation. A theme is a class marker
//! (`theme-{name}`) toggled on the presentation root plus an optional set of
//! CSS custom properties injected as a stylesheet scoped to that marker.
//!
//! ## Architecture
//!
//! - **[`ThemeDescriptor`]** - Name, variant and custom properties of a theme
//! - **[`ThemeRegistry`]** - Owns every known descriptor, in registration order
//! - **[`ThemeManager`]** - Applies a registered theme to a [`Surface`](crate::surface::Surface)
//!   and keeps track of the stylesheet it owns
//! - **[`SharedThemeManager`]** - A manager shared between tasks; switches queue up
//! - **Theme Validation** - Name and custom property checks run on registration
//!
//! ## Built-in Themes
//!
//! `starship` (the default), `corporate`, `academic` and `minimal` are
//! registered by every manager. Ready-made flavours such as `corporate-blue`
//! or `minimal-dark` are available through [`theme_preset`].
//!
//! ## Basic Usage
//!
//! ```no_run
//! use engine::surface::DocumentSurface;
//! use engine::theme::{ThemeManager, ThemeOverrides};
//!
//! # async fn run() -> engine::ThemeResult<()> {
//! let mut manager = ThemeManager::new(DocumentSurface::new());
//!
//! manager.create_theme_variant(
//!     "corporate",
//!     "blue",
//!     &ThemeOverrides::from_custom_properties([("primaryColor", "#1e40af")]),
//! )?;
//! manager.set_theme("corporate-blue").await?;
//!
//! assert_eq!(manager.current_theme().name, "corporate-blue");
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Semantics
//!
//! Unknown names are rejected before the surface is touched. When the surface
//! fails midway through a switch, the root's classes are restored and the
//! error is wrapped in [`ThemeError::ThemeApplication`](crate::ThemeError::ThemeApplication);
//! the current theme stays the last one that applied cleanly.

pub mod css;
pub mod manager;
pub mod registry;
pub mod types;
pub mod validation;

pub use manager::{DEFAULT_THEME_BASE_PATH, SharedThemeManager, ThemeManager};
pub use registry::ThemeRegistry;
pub use types::{
    BUILTIN_THEMES, DEFAULT_VARIANT, PartialThemeDescriptor, THEME_CLASS_PREFIX, ThemeDescriptor,
    ThemeOverrides, theme_preset, theme_preset_names,
};
pub use validation::ThemeValidationError;
