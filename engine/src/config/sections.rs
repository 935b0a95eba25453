use serde::{Deserialize, Serialize};

/// Text direction of the presentation content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Slide and background transition styles understood by reveal.js
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    None,
    Fade,
    #[default]
    Slide,
    Convex,
    Concave,
    Zoom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionSpeed {
    #[default]
    Default,
    Fast,
    Slow,
}

config_section! {
    /// Presentation metadata shown on the title slide and in the document head
    pub struct TemplateConfig / PartialTemplateConfig {
        fields {
            title: String = "My Presentation".to_string(),
            author: String = "Author Name".to_string(),
            description: String = "A professional presentation".to_string(),
            language: String = "en".to_string(),
            direction: TextDirection = TextDirection::Ltr,
        }
        nullable {
            subtitle: String,
            author_title: String,
            author_contact: String,
            date: String,
        }
    }
}

config_section! {
    /// Optional branding assets
    pub struct BrandingConfig / PartialBrandingConfig {
        fields {}
        nullable {
            logo: String,
            logo_alt: String,
            brand_name: String,
            tagline: String,
            company_name: String,
            company_website: String,
            footer_logo: String,
            footer_logo_alt: String,
        }
    }
}

config_section! {
    /// Feature toggles consulted during bootstrap
    pub struct FeatureFlags / PartialFeatureFlags {
        fields {
            navigation: bool = true,
            progress: bool = true,
            slide_numbers: bool = true,
            speaker_notes: bool = false,
            overview: bool = true,
            zoom: bool = true,
            /// Enables theme application and the theme cycling shortcut
            theme_system: bool = true,
            /// Enables Chart.js option generation
            charts: bool = false,
            code_highlighting: bool = true,
            fragments: bool = true,
            touch: bool = true,
            keyboard: bool = true,
            history: bool = true,
            hash: bool = true,
            accessibility: bool = true,
            performance_monitoring: bool = false,
        }
    }
}

config_section! {
    pub struct PrintOptions / PartialPrintOptions {
        fields {
            show_notes: bool = false,
            show_progress: bool = false,
            pdf_max_pages_per_slide: u32 = 1,
        }
    }
}

config_section! {
    /// Export targets
    pub struct ExportConfig / PartialExportConfig {
        fields {
            pdf: bool = true,
            html: bool = true,
            pptx: bool = false,
        }
        sections {
            print_options: PrintOptions => PartialPrintOptions,
        }
    }
}

config_section! {
    pub struct AnimationConfig / PartialAnimationConfig {
        fields {
            enabled: bool = true,
            /// Milliseconds
            duration: u32 = 750,
            easing: String = "easeInOutQuart".to_string(),
        }
    }
}

config_section! {
    /// Visibility of the Chart.js plugins we configure
    pub struct ChartPlugins / PartialChartPlugins {
        fields {
            legend: bool = true,
            tooltip: bool = true,
            title: bool = true,
        }
    }
}

config_section! {
    /// Chart defaults applied to every chart on the deck
    pub struct ChartConfig / PartialChartConfig {
        fields {
            responsive: bool = true,
            maintain_aspect_ratio: bool = false,
            /// Palette used for datasets that do not set their own colors
            default_colors: Vec<String> = vec![
                "#4dd0e1".to_string(),
                "#00bcd4".to_string(),
                "#0097a7".to_string(),
                "#00695c".to_string(),
                "#004d40".to_string(),
            ],
        }
        sections {
            animations: AnimationConfig => PartialAnimationConfig,
            plugins: ChartPlugins => PartialChartPlugins,
        }
    }
}

config_section! {
    /// Code highlighting options
    pub struct CodeConfig / PartialCodeConfig {
        fields {
            highlight_on_load: bool = true,
            line_numbers: bool = true,
            theme: String = "github".to_string(),
            languages: Vec<String> = [
                "javascript",
                "typescript",
                "html",
                "css",
                "python",
                "java",
                "cpp",
                "go",
                "rust",
            ]
            .iter()
            .map(|language| language.to_string())
            .collect(),
            copy_button: bool = true,
            wrap_lines: bool = false,
        }
    }
}

config_section! {
    /// Options forwarded to `Reveal.initialize`
    pub struct RevealConfig / PartialRevealConfig {
        fields {
            width: u32 = 960,
            height: u32 = 700,
            margin: f64 = 0.04,
            min_scale: f64 = 0.2,
            max_scale: f64 = 2.0,
            controls: bool = true,
            progress: bool = true,
            slide_number: bool = true,
            history: bool = true,
            keyboard: bool = true,
            overview: bool = true,
            center: bool = true,
            touch: bool = true,
            #[serde(rename = "loop")]
            loop_slides: bool = false,
            rtl: bool = false,
            shuffle: bool = false,
            fragments: bool = true,
            embedded: bool = false,
            help: bool = true,
            show_notes: bool = false,
            /// Milliseconds between automatic slide advances, 0 disables
            auto_slide: u32 = 0,
            auto_slide_stoppable: bool = true,
            mouse_wheel: bool = false,
            hide_address_bar: bool = true,
            preview_links: bool = false,
            transition: Transition = Transition::Slide,
            transition_speed: TransitionSpeed = TransitionSpeed::Default,
            background_transition: Transition = Transition::Fade,
            view_distance: u32 = 3,
            display: String = "block".to_string(),
        }
        nullable {
            auto_play_media: bool,
        }
    }
}
