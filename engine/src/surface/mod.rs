//! # Rendering Surface
//!
//! The theme manager never touches a DOM directly. It talks to a [`Surface`]:
//! a small capability interface over the presentation root element, the
//! document head and the document-level event bus. A browser binding would
//! implement it on top of `web-sys`; [`DocumentSurface`] is a headless
//! in-memory implementation used by tests and by the HTML renderer of the CLI.
//!
//! Contract for implementors:
//! - `has_root` must be answerable without mutating anything; it is the only
//!   check performed before a theme switch starts changing the surface.
//! - Class operations are idempotent (adding a present class or removing an
//!   absent one is not an error).
//! - Stylesheets returned by `attach_style` stay attached until
//!   `detach_style` is called with their handle.

pub mod document;

use crate::errors::SurfaceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use document::{DocumentSurface, HeadNode, LinkNode};

/// Selector of the presentation root element
pub const DEFAULT_ROOT_SELECTOR: &str = ".reveal";

/// A stylesheet fragment created by the theme manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSheet {
    /// Theme that owns the sheet, exposed as `data-theme-custom`
    pub owner: String,
    pub css: String,
}

/// Opaque reference to an attached stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleHandle(pub u64);

/// Payload of the `theme-changed` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChanged {
    pub previous_theme: String,
    pub current_theme: String,
}

impl ThemeChanged {
    /// Event name on the document-level bus
    pub const EVENT_NAME: &'static str = "theme-changed";
}

#[async_trait]
pub trait Surface: Send {
    /// Selector locating the presentation root, e.g. `.reveal`
    fn root_selector(&self) -> &str;

    fn has_root(&self) -> bool;

    /// Current classes of the root element; empty when there is no root
    fn root_classes(&self) -> Vec<String>;

    fn add_class(&mut self, class: &str) -> Result<(), SurfaceError>;

    fn remove_class(&mut self, class: &str) -> Result<(), SurfaceError>;

    /// Attach a stylesheet to the document so it takes effect immediately
    async fn attach_style(&mut self, sheet: StyleSheet) -> Result<StyleHandle, SurfaceError>;

    fn detach_style(&mut self, handle: StyleHandle) -> Result<(), SurfaceError>;

    /// Issue a non-blocking preload hint for a theme stylesheet
    fn preload_style(&mut self, theme: &str, href: &str) -> Result<(), SurfaceError>;

    /// Remove every link tagged with a `data-theme` attribute; returns how many were removed
    fn remove_theme_links(&mut self) -> usize;

    /// Publish a theme change on the document-level event bus
    fn publish(&mut self, event: ThemeChanged);
}
