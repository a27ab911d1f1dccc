//! HTML generation for profile pages

use crate::template::TemplateRegistry;
use crate::theme::Theme;
use crate::view::{ProfileView, ResolvedColors};

use super::HtmlConfig;

/// Class prefix the built-in stylesheets are written with
const BUILTIN_PREFIX: &str = ".sp-";

/// Build an HTML document incrementally
pub struct HtmlBuilder {
    config: HtmlConfig,
    styles: Vec<String>,
    body: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        let indent = if config.standalone { 2 } else { 0 };
        Self {
            config,
            styles: vec![],
            body: vec![],
            indent,
        }
    }

    /// Add CSS custom properties for the resolved colors and theme tokens
    pub fn add_palette(&mut self, colors: &ResolvedColors, theme: &Theme) {
        let palette = theme.palette();

        let mut css = String::from(":root {\n");
        css.push_str(&format!("  --primary: {};\n", colors.primary));
        css.push_str(&format!("  --secondary: {};\n", colors.secondary));
        css.push_str(&format!("  --accent: {};\n", colors.accent));
        for (token, value) in palette
            .iter()
            .filter(|(token, _)| !matches!(token.as_str(), "primary" | "secondary" | "accent"))
        {
            css.push_str(&format!("  --{}: {};\n", token, value));
        }
        css.push('}');
        self.styles.push(css);
    }

    /// Add a stylesheet written against the default `sp-` class prefix
    pub fn add_css(&mut self, css: &str) {
        let prefix = format!(".{}", self.prefix());
        self.styles.push(css.trim().replace(BUILTIN_PREFIX, &prefix));
    }

    pub(crate) fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_attr(&self, classes: &[&str]) -> String {
        if classes.is_empty() {
            return String::new();
        }
        let prefix = self.prefix();
        let list = classes
            .iter()
            .map(|c| format!("{}{}", prefix, c))
            .collect::<Vec<_>>()
            .join(" ");
        format!(r#" class="{}""#, list)
    }

    /// Open an element with classes only
    pub fn start_element(&mut self, tag: &str, classes: &[&str]) {
        self.start_element_with(tag, None, classes, &[]);
    }

    /// Open an element with optional id, classes and extra attributes
    pub fn start_element_with(
        &mut self,
        tag: &str,
        id: Option<&str>,
        classes: &[&str],
        attrs: &[(&str, &str)],
    ) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_html(i)))
            .unwrap_or_default();
        let extra = attr_list(attrs);

        self.body.push(format!(
            "{}<{}{}{}{}>",
            self.indent_str(),
            tag,
            id_attr,
            self.class_attr(classes),
            extra
        ));
        self.indent += 1;
    }

    /// Open a `<section>` for a logical profile section
    pub fn start_section(&mut self, name: &str, classes: &[&str]) {
        let mut all = vec!["section"];
        all.extend_from_slice(classes);
        self.start_element_with("section", Some(name), &all, &[("data-section", name)]);
    }

    /// Close a `<section>`
    pub fn end_section(&mut self) {
        self.end_element("section");
    }

    /// Close an element
    pub fn end_element(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.body.push(format!("{}</{}>", self.indent_str(), tag));
    }

    /// Add an element containing escaped text
    pub fn add_text(&mut self, tag: &str, classes: &[&str], text: &str) {
        self.add_text_with(tag, classes, &[], text);
    }

    /// Add an element containing escaped text, with extra attributes
    pub fn add_text_with(&mut self, tag: &str, classes: &[&str], attrs: &[(&str, &str)], text: &str) {
        let extra = attr_list(attrs);
        self.body.push(format!(
            "{}<{}{}{}>{}</{}>",
            self.indent_str(),
            tag,
            self.class_attr(classes),
            extra,
            escape_html(text),
            tag
        ));
    }

    /// Add an element whose text is drawn in a specific color
    pub fn add_colored_text(&mut self, tag: &str, classes: &[&str], color: &str, text: &str) {
        let style = format!("color: {}", color);
        self.add_text_with(tag, classes, &[("style", style.as_str())], text);
    }

    /// Add multi-paragraph text, one `<p>` per blank-line separated block
    pub fn add_paragraphs(&mut self, classes: &[&str], text: &str) {
        for para in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            self.add_text("p", classes, para);
        }
    }

    /// Add a void element such as `<hr>`
    pub fn add_void(&mut self, tag: &str, classes: &[&str], attrs: &[(&str, &str)]) {
        let extra = attr_list(attrs);
        self.body.push(format!(
            "{}<{}{}{}>",
            self.indent_str(),
            tag,
            self.class_attr(classes),
            extra
        ));
    }

    /// Add an image reference; loading is left to the host
    pub fn add_image(&mut self, src: &str, alt: &str, classes: &[&str]) {
        self.body.push(format!(
            r#"{}<img{} src="{}" alt="{}" loading="lazy">"#,
            self.indent_str(),
            self.class_attr(classes),
            escape_html(src),
            escape_html(alt)
        ));
    }

    /// Build the final HTML string
    pub fn build(self, title: &str) -> String {
        let nl = self.newline();
        let pad = |n: usize| {
            if self.config.pretty_print {
                "  ".repeat(n)
            } else {
                String::new()
            }
        };

        let mut html = String::new();

        let style_block = |html: &mut String, depth: usize| {
            if self.styles.is_empty() {
                return;
            }
            html.push_str(&pad(depth));
            html.push_str("<style>");
            html.push_str(nl);
            for style in &self.styles {
                for line in style.lines() {
                    html.push_str(&pad(depth + 1));
                    html.push_str(line);
                    html.push_str(nl);
                }
            }
            html.push_str(&pad(depth));
            html.push_str("</style>");
            html.push_str(nl);
        };

        if self.config.standalone {
            html.push_str("<!DOCTYPE html>");
            html.push_str(nl);
            html.push_str(&format!(r#"<html lang="{}">"#, escape_html(&self.config.lang)));
            html.push_str(nl);
            html.push_str(&pad(1));
            html.push_str("<head>");
            html.push_str(nl);
            html.push_str(&pad(2));
            html.push_str(r#"<meta charset="utf-8">"#);
            html.push_str(nl);
            html.push_str(&pad(2));
            html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
            html.push_str(nl);
            html.push_str(&pad(2));
            html.push_str(&format!("<title>{}</title>", escape_html(title)));
            html.push_str(nl);
            style_block(&mut html, 2);
            html.push_str(&pad(1));
            html.push_str("</head>");
            html.push_str(nl);
            html.push_str(&pad(1));
            html.push_str("<body>");
            html.push_str(nl);
        } else {
            style_block(&mut html, 0);
        }

        for line in &self.body {
            html.push_str(line);
            html.push_str(nl);
        }

        if self.config.standalone {
            html.push_str(&pad(1));
            html.push_str("</body>");
            html.push_str(nl);
            html.push_str("</html>");
        }

        html
    }
}

/// Render a resolved view to an HTML string
pub fn render_html(
    view: &ProfileView<'_>,
    registry: &TemplateRegistry,
    config: &HtmlConfig,
    theme: &Theme,
) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    builder.add_palette(&view.colors, theme);
    registry.render(view, &mut builder);
    builder.build(view.name)
}

/// Format extra attributes, each with a leading space
fn attr_list(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {}="{}""#, k, escape_html(v)))
        .collect()
}

/// Escape special HTML characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
