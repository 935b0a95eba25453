//! # Expositio CLI
//!
//! Command line front end over the `engine` crate: resolves presentation
//! configs, lists themes, renders the reveal.js bootstrap page and prints
//! Chart.js options.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod render;
