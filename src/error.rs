//! Error types for reading profile records

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile error at {span:?}: {message}")]
    Syntax { span: Span, message: String },
}

impl ProfileError {
    /// Build a syntax error from a serde_json failure, locating it in `source`
    pub fn from_json(err: &serde_json::Error, source: &str) -> Self {
        let start = line_col_to_offset(source, err.line(), err.column());
        let end = next_char_boundary(source, start);

        ProfileError::Syntax {
            span: start..end,
            message: strip_position_suffix(&err.to_string()),
        }
    }

    /// The span of source text this error points at
    pub fn span(&self) -> &Span {
        match self {
            ProfileError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ProfileError::Syntax { span, message } => {
                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message("invalid profile record")
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);

                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
///
/// Line 0 means the error has no position (e.g. premature end of input);
/// those point at the end of the source.
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return source.len();
    }

    let mut offset = 0;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let col = column.saturating_sub(1).min(text.len());
            return floor_char_boundary(source, offset + col);
        }
        offset += text.len();
    }
    source.len()
}

fn floor_char_boundary(source: &str, mut idx: usize) -> usize {
    idx = idx.min(source.len());
    while !source.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn next_char_boundary(source: &str, start: usize) -> usize {
    source[start..]
        .chars()
        .next()
        .map(|c| start + c.len_utf8())
        .unwrap_or(start)
}

/// serde_json appends " at line X column Y"; the span already carries that
fn strip_position_suffix(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_to_offset() {
        let source = "{\n  \"name\": 1\n}";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 3), 4);
        assert_eq!(line_col_to_offset(source, 0, 0), source.len());
    }

    #[test]
    fn test_strip_position_suffix() {
        assert_eq!(
            strip_position_suffix("expected value at line 1 column 2"),
            "expected value"
        );
        assert_eq!(strip_position_suffix("no position"), "no position");
    }

    #[test]
    fn test_from_json_points_into_source() {
        let source = "{\"name\": }";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let err = ProfileError::from_json(&err, source);
        assert!(err.span().start >= 8 && err.span().end <= source.len());
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_format_includes_filename_and_message() {
        let source = "{\"name\": }";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let formatted = ProfileError::from_json(&err, source).format(source, "school.json");
        assert!(formatted.contains("school.json"));
        assert!(formatted.contains("expected value"));
    }
}
