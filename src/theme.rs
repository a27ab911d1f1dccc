//! Theme palettes for profile pages
//!
//! A theme maps color tokens to concrete values and carries the
//! secondary/accent fallbacks each template uses when a school does not
//! override them. Themes are TOML files; a built-in palette is always
//! available as the last resort.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::template::TemplateKind;
use crate::view::format::css_color;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Fallback colors for a single template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateColors {
    pub secondary: String,
    pub accent: String,
}

/// A theme mapping color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
    /// Per-template fallbacks, keyed by template name
    templates: HashMap<String, TomlTemplateColors>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    #[serde(default)]
    templates: HashMap<String, TomlTemplateColors>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TomlTemplateColors {
    secondary: Option<String>,
    accent: Option<String>,
}

/// Last resort for tokens the built-in palette does not define
const FALLBACK_COLOR: &str = "#1f2937";

/// Default palette - blue primary with per-template secondary/accent pairs
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
primary = "#2563eb"
text = "#1f2937"
text-muted = "#6b7280"
text-inverse = "#ffffff"
background = "#ffffff"
surface = "#f9fafb"
border = "#e5e7eb"

[templates.modern]
secondary = "#1e293b"
accent = "#f59e0b"

[templates.classic]
secondary = "#7c2d12"
accent = "#b8860b"

[templates.minimal]
secondary = "#374151"
accent = "#9ca3af"

[templates.creative]
secondary = "#7c3aed"
accent = "#ec4899"
"##;

impl Theme {
    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load theme from TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            templates: parsed.templates,
        })
    }

    /// Resolve a color token to a concrete value
    ///
    /// Returns None if the token is not defined in this theme.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token with fallback to the default palette
    ///
    /// Values that cannot be emitted as CSS are skipped like missing ones.
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = css_color(self.resolve(token)) {
            return color.to_string();
        }
        Self::default()
            .resolve(token)
            .unwrap_or(FALLBACK_COLOR)
            .to_string()
    }

    /// All color tokens, this theme's values layered over the built-in palette
    ///
    /// Token names are limited to `[A-Za-z0-9_-]` and values must pass
    /// [`css_color`]; anything else keeps the built-in value or is dropped.
    pub fn palette(&self) -> BTreeMap<String, String> {
        let mut merged: BTreeMap<String, String> = Self::default().colors.into_iter().collect();
        for (token, value) in &self.colors {
            let valid_name = !token.is_empty()
                && token
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if let (true, Some(color)) = (valid_name, css_color(Some(value))) {
                merged.insert(token.clone(), color.to_string());
            }
        }
        merged
    }

    /// Secondary/accent fallbacks for a template
    ///
    /// Missing entries fall back to the default palette's entry for the same
    /// template, so a theme file may override a single color.
    pub fn template_colors(&self, kind: TemplateKind) -> TemplateColors {
        let own = self.templates.get(kind.as_str());
        let default = Self::default();
        let builtin = default.templates.get(kind.as_str()).cloned().unwrap_or_default();

        let pick = |own: Option<&String>, builtin: Option<String>, token: &str| {
            css_color(own.map(String::as_str))
                .map(str::to_string)
                .or(builtin)
                .unwrap_or_else(|| self.resolve_or_default(token))
        };

        TemplateColors {
            secondary: pick(
                own.and_then(|t| t.secondary.as_ref()),
                builtin.secondary,
                "text",
            ),
            accent: pick(own.and_then(|t| t.accent.as_ref()), builtin.accent, "primary"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        match Self::from_str(DEFAULT_PALETTE) {
            Ok(theme) => theme,
            Err(e) => unreachable!("built-in palette is valid TOML: {}", e),
        }
    }
}
