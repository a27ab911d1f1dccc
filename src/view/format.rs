//! Text and date formatting shared by every layout

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::profile::{DateValue, Goal};

/// Label shown for a structured goal with no usable text
pub const GOAL_FALLBACK_LABEL: &str = "Goal";

/// Display text for a goal: the string itself, or the first non-blank of
/// `title`, `text`, `description`
pub fn goal_text(goal: &Goal) -> String {
    match goal {
        Goal::Text(text) => text.trim().to_string(),
        Goal::Detailed(details) => [&details.title, &details.text, &details.description]
            .into_iter()
            .find_map(|field| non_blank(field.as_deref()))
            .unwrap_or(GOAL_FALLBACK_LABEL)
            .to_string(),
    }
}

/// Choose the singular or plural form for a count
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Heading for the goals section
pub fn goals_heading(count: usize) -> &'static str {
    pluralize(count, "Our Goal", "Our Goals")
}

/// Parse the date formats records use: RFC 3339, a naive datetime, or a
/// plain `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Short en-US date, e.g. `1/6/2025`
pub fn format_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format("%-m/%-d/%Y").to_string())
}

/// Year the school was established, if the value can be read
pub fn established_year(value: &DateValue) -> Option<i32> {
    let year = match value {
        DateValue::Year(year) => i32::try_from(*year).ok(),
        DateValue::Text(text) => {
            let text = text.trim();
            if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
                text.parse().ok()
            } else {
                parse_date(text).map(|d| d.year())
            }
        }
    }?;
    (1..=9999).contains(&year).then_some(year)
}

/// Admission window, e.g. `1/6/2025 – 2/28/2025`
///
/// Unparseable dates are treated as absent.
pub fn admission_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = start.and_then(format_date);
    let end = end.and_then(format_date);
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{} \u{2013} {}", s, e)),
        (Some(s), None) => Some(format!("From {}", s)),
        (None, Some(e)) => Some(format!("Until {}", e)),
        (None, None) => None,
    }
}

/// Trimmed text, or None when blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// A color value that can be placed in a `<style>` block or a `style`
/// attribute, or None when it is blank or could end the declaration
pub fn css_color(value: Option<&str>) -> Option<&str> {
    let breaks_out = |c: char| {
        matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\'' | '\\') || c.is_control()
    };
    non_blank(value).filter(|v| !v.chars().any(breaks_out))
}
