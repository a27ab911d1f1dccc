//! Template names and the fallback rule for unknown ones

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::TemplateError;

/// One of the four visual arrangements a profile can choose
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Modern,
        TemplateKind::Classic,
        TemplateKind::Minimal,
        TemplateKind::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Creative => "creative",
        }
    }

    /// Match a template name, falling back to `Modern` for anything unknown
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!(template = name, "unknown template, using modern");
            TemplateKind::Modern
        })
    }

    /// Resolve an optional template name; absent means `Modern`
    pub fn resolve(name: Option<&str>) -> Self {
        name.map(Self::from_name).unwrap_or_default()
    }
}

impl FromStr for TemplateKind {
    type Err = TemplateError;

    /// Strict, case-insensitive parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TemplateKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TemplateError::Unknown {
                name: wanted.to_string(),
            })
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(TemplateKind::from_name("classic"), TemplateKind::Classic);
        assert_eq!(TemplateKind::from_name(" Minimal "), TemplateKind::Minimal);
        assert_eq!(TemplateKind::from_name("CREATIVE"), TemplateKind::Creative);
    }

    #[test]
    fn test_unknown_falls_back_to_modern() {
        assert_eq!(TemplateKind::from_name("brutalist"), TemplateKind::Modern);
        assert_eq!(TemplateKind::from_name(""), TemplateKind::Modern);
        assert_eq!(TemplateKind::resolve(None), TemplateKind::Modern);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "brutalist".parse::<TemplateKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown template: brutalist");
    }
}
