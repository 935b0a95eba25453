use claims::{assert_err, assert_ok};
use expositio::commands::{self, RenderOptions};
use expositio::config::{Settings, load_settings};
use expositio::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Settings that keep preferences inside a temporary directory
mod render_helpers {
    use super::*;

    pub fn workspace() -> (TempDir, Settings) {
        let dir = tempfile::tempdir().unwrap();
        let preferences = dir.path().join("preferences.json");
        let settings_path = dir.path().join("expositio.toml");
        fs::write(
            &settings_path,
            format!(
                "[themes]\nbase_path = \"/static/themes/\"\npreferences_file = '{}'\n",
                preferences.display()
            ),
        )
        .unwrap();
        let settings = load_settings(Some(&settings_path)).unwrap();
        (dir, settings)
    }

    pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

use render_helpers::*;

#[tokio::test]
async fn render_applies_configured_theme_and_custom_properties() {
    let (dir, settings) = workspace();
    let config = write_config(
        dir.path(),
        "deck.toml",
        r##"
        customCSS = ["deck.css"]

        [template]
        title = "Launch <Review>"

        [theme]
        name = "acme"

        [theme.customProperties]
        primaryColor = "#ff6600"
        "##,
    );

    let html = assert_ok!(
        commands::render(
            &settings,
            &RenderOptions {
                config: Some(config),
                ..Default::default()
            }
        )
        .await
    );

    assert!(html.contains("<div class=\"reveal theme-acme\">"));
    assert!(html.contains("<title>Launch &lt;Review&gt;</title>"));
    assert!(html.contains("<style data-theme-custom=\"acme\">"));
    assert!(html.contains(".reveal.theme-acme {"));
    assert!(html.contains("--primary-color: #ff6600;"));
    assert!(html.contains("href=\"/static/themes/acme/theme.css\""));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"deck.css\">"));
    assert!(html.contains("Reveal.initialize({"));
    assert!(!html.contains("expositioChartDefaults"));
}

#[tokio::test]
async fn render_theme_flag_overrides_config_and_is_remembered() {
    let (_dir, settings) = workspace();

    let html = assert_ok!(
        commands::render(
            &settings,
            &RenderOptions {
                theme: Some("corporate".to_string()),
                variant: Some("default".to_string()),
                ..Default::default()
            }
        )
        .await
    );

    assert!(html.contains("<div class=\"reveal theme-corporate\">"));
    assert!(!html.contains("theme-starship"));

    let listing = assert_ok!(commands::list_themes(&settings));
    assert!(listing.contains("* corporate"));
    assert!(listing.contains("  starship"));
}

#[tokio::test]
async fn render_without_persistence_leaves_no_preference_file() {
    let dir = tempfile::tempdir().unwrap();
    let preferences = dir.path().join("preferences.json");
    let settings_path = dir.path().join("expositio.toml");
    fs::write(
        &settings_path,
        format!(
            "[themes]\npersist = false\npreferences_file = '{}'\n",
            preferences.display()
        ),
    )
    .unwrap();
    let settings = assert_ok!(load_settings(Some(&settings_path)));

    assert_ok!(
        commands::render(
            &settings,
            &RenderOptions {
                theme: Some("academic".to_string()),
                ..Default::default()
            }
        )
        .await
    );

    assert!(!preferences.exists());
}

#[tokio::test]
async fn render_accepts_preset_names() {
    let (_dir, settings) = workspace();

    let html = assert_ok!(
        commands::render(
            &settings,
            &RenderOptions {
                theme: Some("minimal-dark".to_string()),
                ..Default::default()
            }
        )
        .await
    );

    assert!(html.contains("theme-minimal-dark"));
    assert!(html.contains("--background-primary: #000000;"));
}

#[tokio::test]
async fn render_preset_keeps_its_variant_unless_overridden() {
    let (_dir, settings) = workspace();
    let preset = RenderOptions {
        theme: Some("minimal-dark".to_string()),
        ..Default::default()
    };

    let presentation = assert_ok!(commands::prepare(&settings, &preset).await);
    assert_eq!(presentation.themes().current_theme().variant, "dark");
    assert_eq!(presentation.config().theme.variant, "dark");

    let explicit = RenderOptions {
        variant: Some("print".to_string()),
        ..preset
    };
    let presentation = assert_ok!(commands::prepare(&settings, &explicit).await);
    assert_eq!(presentation.themes().current_theme().variant, "print");
}

#[tokio::test]
async fn render_unknown_theme_fails_with_alternatives() {
    let (_dir, settings) = workspace();

    let error = assert_err!(
        commands::render(
            &settings,
            &RenderOptions {
                theme: Some("neon".to_string()),
                variant: Some("default".to_string()),
                ..Default::default()
            }
        )
        .await
    );

    match error {
        AppError::Theme(message) => {
            assert!(message.contains("neon"));
            assert!(message.contains("starship, corporate, academic, minimal"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn render_preload_all_emits_hints() {
    let (_dir, settings) = workspace();

    let html = assert_ok!(
        commands::render(
            &settings,
            &RenderOptions {
                preload_all: true,
                ..Default::default()
            }
        )
        .await
    );

    for theme in ["starship", "corporate", "academic", "minimal"] {
        assert!(html.contains(&format!(
            "<link rel=\"preload\" href=\"/static/themes/{theme}/theme.css\" as=\"style\" data-theme=\"{theme}\">"
        )));
    }
}

#[tokio::test]
async fn render_includes_chart_defaults_when_enabled() {
    let (dir, settings) = workspace();
    let config = write_config(
        dir.path(),
        "deck.json",
        r#"{ "features": { "charts": true }, "charts": { "plugins": { "tooltip": false } } }"#,
    );

    let html = assert_ok!(
        commands::render(
            &settings,
            &RenderOptions {
                config: Some(config),
                ..Default::default()
            }
        )
        .await
    );

    assert!(html.contains("window.expositioChartDefaults = {"));
    assert!(html.contains("\"enabled\": false"));
}

#[test]
fn resolve_prints_merged_config() {
    let (dir, _settings) = workspace();
    let config = write_config(
        dir.path(),
        "deck.json",
        r#"{ "reveal": { "transition": "zoom" }, "menu": { "side": "left" } }"#,
    );

    let output = assert_ok!(commands::resolve(&config));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["reveal"]["transition"], "zoom");
    assert_eq!(value["reveal"]["width"], 960);
    assert_eq!(value["menu"]["side"], "left");
    assert_eq!(value["theme"]["name"], "starship");
}

#[test]
fn chart_with_data_fills_palette() {
    let (dir, _settings) = workspace();
    let data = write_config(
        dir.path(),
        "data.json",
        r#"{ "labels": ["a"], "datasets": [{ "data": [1] }, { "data": [2] }] }"#,
    );

    let output = assert_ok!(commands::chart(Some("accessible"), Some(&data), "pie"));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["type"], "pie");
    assert_eq!(value["data"]["datasets"][0]["backgroundColor"], "#1f77b4");
    assert_eq!(value["data"]["datasets"][1]["borderColor"], "#ff7f0e");
    assert_eq!(value["options"]["maintainAspectRatio"], true);
}
