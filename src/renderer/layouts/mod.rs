//! The four built-in layout variants

mod classic;
mod creative;
mod minimal;
mod modern;

pub use classic::ClassicLayout;
pub use creative::CreativeLayout;
pub use minimal::MinimalLayout;
pub use modern::ModernLayout;

/// `url(...)` value for an inline style, or None if the URL would need
/// escaping inside CSS
pub(crate) fn css_url(url: &str) -> Option<String> {
    let unsafe_char = |c: char| matches!(c, '"' | '\'' | '(' | ')' | '\\' | ';') || c.is_whitespace();
    if url.chars().any(unsafe_char) {
        None
    } else {
        Some(format!("url({})", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_url() {
        assert_eq!(
            css_url("https://cdn.example.org/hero.jpg").as_deref(),
            Some("url(https://cdn.example.org/hero.jpg)")
        );
        assert_eq!(css_url("x.jpg);color:red"), None);
        assert_eq!(css_url("my photo.jpg"), None);
    }
}
