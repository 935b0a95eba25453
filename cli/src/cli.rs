//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Merge presentation configs, apply themes and render the reveal.js bootstrap shell.
#[derive(Debug, Parser)]
#[command(name = "expositio", version)]
pub struct Args {
    /// Settings file (default: ./expositio.toml when present)
    #[arg(short = 's', long = "settings", global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the presentation config merged onto the defaults, as JSON
    Resolve {
        /// Partial presentation config (.json or .toml)
        #[arg(short = 'c', long = "config")]
        config: PathBuf,
    },

    /// List registered themes and presets
    Themes,

    /// Render the HTML shell for a presentation
    Render {
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,

        /// Theme to apply instead of the configured one
        #[arg(short = 't', long = "theme")]
        theme: Option<String>,

        /// Variant of the theme (default: the theme's own variant)
        #[arg(long = "variant", requires = "theme")]
        variant: Option<String>,

        /// Emit preload hints for every registered theme
        #[arg(long = "preload-all")]
        preload_all: bool,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },

    /// Print Chart.js options, or a full chart spec when data is given
    Chart {
        /// performance, accessible or presentation
        #[arg(short = 'p', long = "preset")]
        preset: Option<String>,

        /// Chart data as JSON (`{ "labels": [...], "datasets": [...] }`)
        #[arg(short = 'd', long = "data")]
        data: Option<PathBuf>,

        #[arg(short = 'k', long = "kind", default_value = "bar")]
        kind: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_parses_theme_and_variant() {
        let args = Args::parse_from([
            "expositio", "render", "--theme", "corporate", "--variant", "blue", "--preload-all",
        ]);
        match args.command {
            Command::Render {
                theme,
                variant,
                preload_all,
                ..
            } => {
                assert_eq!(theme.as_deref(), Some("corporate"));
                assert_eq!(variant.as_deref(), Some("blue"));
                assert!(preload_all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn variant_is_unset_unless_given() {
        let args = Args::parse_from(["expositio", "render", "--theme", "minimal-dark"]);
        match args.command {
            Command::Render { variant, .. } => assert_eq!(variant, None),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn variant_requires_theme() {
        let result = Args::try_parse_from(["expositio", "render", "--variant", "blue"]);
        assert!(result.is_err());
    }

    #[test]
    fn settings_flag_is_global() {
        let args = Args::parse_from(["expositio", "themes", "--settings", "custom.toml"]);
        assert_eq!(args.settings, Some(PathBuf::from("custom.toml")));
        assert!(matches!(args.command, Command::Themes));
    }
}
