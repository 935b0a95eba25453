//! # Expositio Engine
//!
//! Core library behind the Expositio presentation front end. It owns the
//! configuration model, the theme system and the chart defaults that are
//! handed to reveal.js and Chart.js, without depending on either of them.
//!
//! ## Modules
//!
//! - [`config`] - Presentation configuration schema and the deep merge
//! - [`theme`] - Theme descriptors, registry and the theme manager
//! - [`surface`] - Capability interface over the rendering surface, plus a headless document
//! - [`chart`] - Chart.js option mapping and palette substitution
//! - [`preferences`] - Key-value persistence for user preferences
//! - [`presentation`] - Bootstrap that ties configuration, theme and charts together
//! - [`errors`] - Error types shared across the engine
//! - [`validation`] - Validation trait used by registries and settings

#[macro_use]
mod macros;

pub mod chart;
pub mod config;
pub mod errors;
pub mod preferences;
pub mod presentation;
pub mod surface;
pub mod theme;
pub mod validation;

pub use errors::{
    ChartError, ConfigError, PreferenceError, SurfaceError, ThemeError, ThemeResult,
};
pub use validation::Validator;
