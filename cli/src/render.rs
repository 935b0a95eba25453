//! HTML bootstrap shell for a themed presentation.

use crate::error::AppResult;
use engine::config::TextDirection;
use engine::surface::{DocumentSurface, HeadNode, Surface};
use engine::presentation::Presentation;
use std::fmt::Write;

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// JSON that is safe to inline in a `<script>` element
fn script_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?.replace("</", "<\\/"))
}

/// Render the page that boots reveal.js with the presentation's options.
///
/// The root element carries the classes of the surface's presentation root,
/// so the active theme marker is already in place on first paint.
pub fn render_document(
    presentation: &Presentation<DocumentSurface>,
    theme_base_path: &str,
) -> AppResult<String> {
    let config = presentation.config();
    let surface = presentation.themes().surface();
    let theme = presentation.themes().current_theme();
    let template = &config.template;
    let direction = match template.direction {
        TextDirection::Ltr => "ltr",
        TextDirection::Rtl => "rtl",
    };

    let mut html = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(
        html,
        "<html lang=\"{}\" dir=\"{direction}\">",
        escape_html(&template.language)
    );
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "  <meta charset=\"utf-8\">");
    let _ = writeln!(html, "  <title>{}</title>", escape_html(&template.title));
    let _ = writeln!(
        html,
        "  <meta name=\"description\" content=\"{}\">",
        escape_html(&template.description)
    );
    let _ = writeln!(
        html,
        "  <meta name=\"author\" content=\"{}\">",
        escape_html(&template.author)
    );
    let _ = writeln!(
        html,
        "  <link rel=\"stylesheet\" href=\"{}{}/theme.css\" data-theme=\"{}\">",
        escape_html(theme_base_path),
        escape_html(&theme.name),
        escape_html(&theme.name)
    );

    for node in surface.head() {
        match node {
            HeadNode::Style { sheet, .. } => {
                let _ = writeln!(
                    html,
                    "  <style data-theme-custom=\"{}\">\n{}\n  </style>",
                    escape_html(&sheet.owner),
                    sheet.css
                );
            }
            HeadNode::Link(link) => {
                let as_attr = link
                    .as_type
                    .as_deref()
                    .map(|as_type| format!(" as=\"{}\"", escape_html(as_type)))
                    .unwrap_or_default();
                let theme_attr = link
                    .data_theme
                    .as_deref()
                    .map(|theme| format!(" data-theme=\"{}\"", escape_html(theme)))
                    .unwrap_or_default();
                let _ = writeln!(
                    html,
                    "  <link rel=\"{}\" href=\"{}\"{as_attr}{theme_attr}>",
                    escape_html(&link.rel),
                    escape_html(&link.href)
                );
            }
        }
    }

    for href in &config.custom_css {
        let _ = writeln!(html, "  <link rel=\"stylesheet\" href=\"{}\">", escape_html(href));
    }
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(
        html,
        "  <div class=\"{}\">",
        escape_html(&surface.root_classes().join(" "))
    );
    let _ = writeln!(html, "    <div class=\"slides\"></div>");
    let _ = writeln!(html, "  </div>");

    for src in &config.custom_js {
        let _ = writeln!(html, "  <script src=\"{}\"></script>", escape_html(src));
    }

    let _ = writeln!(html, "  <script>");
    let _ = writeln!(
        html,
        "    Reveal.initialize({});",
        script_json(&presentation.reveal_options()?)?
    );
    if let Some(chart_options) = presentation.chart_options() {
        let _ = writeln!(
            html,
            "    window.expositioChartDefaults = {};",
            script_json(&chart_options)?
        );
    }
    let _ = writeln!(html, "  </script>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");

    Ok(html)
}
