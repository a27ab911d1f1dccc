//! School Profile - render institutional profile pages
//!
//! This library reads a school's profile record, resolves which sections are
//! shown and which colors apply, and renders the page with one of four
//! layout templates.
//!
//! # Example
//!
//! ```rust
//! use school_profile::render;
//!
//! let html = render(r#"{"name": "Riverside School", "profile": {"mission": "Curiosity first"}}"#).unwrap();
//! assert!(html.contains("Riverside School"));
//! assert!(html.contains("Curiosity first"));
//! ```

pub mod error;
pub mod profile;
pub mod renderer;
pub mod template;
pub mod theme;
pub mod view;

pub use error::ProfileError;
pub use profile::{parse, ProfileRecord, Section};
pub use renderer::{render_html, HtmlConfig};
pub use template::{LayoutVariant, TemplateKind, TemplateRegistry};
pub use theme::Theme;
pub use view::ProfileView;

use thiserror::Error;
use tracing::debug;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input is not a readable profile record
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Theme palette for color fallbacks
    pub theme: Theme,
    /// Template to use instead of the one the record names
    pub template: Option<TemplateKind>,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the theme palette
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Force a template regardless of the record's choice
    pub fn with_template(mut self, template: TemplateKind) -> Self {
        self.template = Some(template);
        self
    }

    /// The template a record will be rendered with
    pub fn template_for(&self, record: &ProfileRecord) -> TemplateKind {
        self.template
            .unwrap_or_else(|| TemplateKind::resolve(record.profile.layout.template.as_deref()))
    }
}

/// Render a JSON profile record with default configuration
///
/// # Example
///
/// ```rust
/// use school_profile::render;
///
/// let html = render(r#"{"name": "Oak Hill", "profile": {"layout": {"template": "minimal"}}}"#).unwrap();
/// assert!(html.contains("sp-minimal"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a JSON profile record with custom configuration
///
/// # Example
///
/// ```rust
/// use school_profile::{render_with_config, HtmlConfig, RenderConfig, TemplateKind};
///
/// let config = RenderConfig::new()
///     .with_template(TemplateKind::Classic)
///     .with_html(HtmlConfig::default().with_standalone(false));
///
/// let html = render_with_config(r#"{"name": "Oak Hill"}"#, config).unwrap();
/// assert!(html.contains("sp-classic"));
/// assert!(!html.contains("<!DOCTYPE html>"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let record = parse(source)?;
    Ok(render_profile(&record, &config))
}

/// Render an already parsed record with the built-in layouts
pub fn render_profile(record: &ProfileRecord, config: &RenderConfig) -> String {
    render_profile_with(record, config, &TemplateRegistry::default())
}

/// Render an already parsed record with a custom template registry
pub fn render_profile_with(
    record: &ProfileRecord,
    config: &RenderConfig,
    registry: &TemplateRegistry,
) -> String {
    let template = config.template_for(record);
    debug!(
        school = %record.name,
        requested = ?record.profile.layout.template,
        %template,
        "resolved template"
    );
    let view = ProfileView::resolve(record, template, &config.theme);
    render_html(&view, registry, &config.html, &config.theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(template: TemplateKind) -> RenderConfig {
        RenderConfig::new()
            .with_template(template)
            .with_html(HtmlConfig::default().with_standalone(false))
    }

    const FULL: &str = r##"{
        "name": "Lakeside School",
        "brandColor": "#112233",
        "profile": {
            "established": "1954-09-01",
            "mission": "Learn together",
            "vision": "A school for everyone",
            "goals": ["Excellence", {"description": "Teamwork"}],
            "principalMessage": "Welcome!",
            "facilities": [{"name": "Library", "description": "20,000 books"}],
            "achievements": [{"year": 2020, "title": "A", "description": "d"}],
            "admissionInfo": {"isOpen": true, "startDate": "2025-01-06", "endDate": "2025-02-28"}
        }
    }"##;

    #[test]
    fn test_render_simple_record() {
        let html = render(r#"{"name": "Lakeside School"}"#).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Lakeside School</title>"));
        assert!(html.contains("sp-modern"));
    }

    #[test]
    fn test_record_template_is_used() {
        let html = render(r#"{"name": "A", "profile": {"layout": {"template": "creative"}}}"#).unwrap();
        assert!(html.contains("sp-creative"));
    }

    #[test]
    fn test_override_beats_record_template() {
        let config = RenderConfig::new().with_template(TemplateKind::Minimal);
        let html = render_with_config(
            r#"{"name": "A", "profile": {"layout": {"template": "classic"}}}"#,
            config,
        )
        .unwrap();
        assert!(html.contains("sp-minimal"));
        assert!(!html.contains("sp-classic"));
    }

    #[test]
    fn test_invalid_json_error() {
        let result = render("{ not json");
        assert!(matches!(result, Err(RenderError::Profile(_))));
    }

    #[test]
    fn test_every_template_renders_all_sections() {
        let record = parse(FULL).unwrap();
        for kind in TemplateKind::ALL {
            let html = render_profile(&record, &fragment(kind));
            for section in Section::ALL {
                assert!(
                    html.contains(&format!(r#"data-section="{}""#, section)),
                    "{} is missing {}",
                    kind,
                    section
                );
            }
            assert!(html.contains("Excellence"), "{}", kind);
            assert!(html.contains("Teamwork"), "{}", kind);
            assert!(html.contains("Est. 1954"), "{}", kind);
            assert!(html.contains("1/6/2025 \u{2013} 2/28/2025"), "{}", kind);
        }
    }

    #[test]
    fn test_brand_color_reaches_every_template() {
        let record = parse(FULL).unwrap();
        for kind in TemplateKind::ALL {
            let html = render_profile(&record, &fragment(kind));
            assert!(html.contains("--primary: #112233;"), "{}", kind);
            assert!(html.contains("#112233\""), "{}", kind);
            assert!(!html.contains("#2563eb"), "{}", kind);
        }
    }

    #[test]
    fn test_html_in_record_is_escaped() {
        let html = render(r#"{"name": "<script>alert(1)</script>"}"#).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_brand_color_cannot_close_style_block() {
        let html = render(
            r#"{"name": "A", "brandColor": "red}</style><script>alert(1)</script><style>"}"#,
        )
        .unwrap();
        assert!(!html.contains("<script>"));
        assert_eq!(html.matches("</style>").count(), 1);
        assert!(html.contains("--primary: #2563eb;"));
    }

    #[test]
    fn test_partial_theme_keeps_base_tokens() {
        let theme = Theme::from_str("[colors]\nprimary = \"#000000\"\n").unwrap();
        let config = RenderConfig::new().with_theme(theme);
        let html = render_with_config(r#"{"name": "A"}"#, config).unwrap();
        assert!(html.contains("var(--text-inverse)"));
        assert!(html.contains("--text-inverse: #ffffff;"));
        assert!(html.contains("--primary: #000000;"));
    }
}
