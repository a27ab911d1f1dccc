//! Profile records supplied by the data layer

pub mod record;

pub use record::*;

use crate::error::ProfileError;

/// Parse a JSON profile record
pub fn parse(source: &str) -> Result<ProfileRecord, ProfileError> {
    serde_json::from_str(source).map_err(|e| ProfileError::from_json(&e, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_record() {
        let record = parse(r#"{"name": "Hillside Academy"}"#).unwrap();
        assert_eq!(record.name, "Hillside Academy");
        assert!(record.profile.goals.is_empty());
        assert!(record.profile.layout.template.is_none());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let record = parse(r#"{"name": "A", "slug": "a", "profile": {"rating": 5}}"#).unwrap();
        assert_eq!(record.name, "A");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse("{\"name\": \"A\",\n  oops}").unwrap_err();
        assert!(err.span().start >= 14);
        assert!(err.to_string().contains("key must be a string"));
    }
}
