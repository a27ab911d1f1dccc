//! Integration tests for reading profile records

use school_profile::profile::{DateValue, Goal, YearLabel};
use school_profile::{parse, ProfileView, Section, TemplateKind, Theme};

const LAKESIDE: &str = include_str!("fixtures/lakeside.json");

#[test]
fn test_parse_full_record() {
    let record = parse(LAKESIDE).expect("Should parse");
    assert_eq!(record.name, "Lakeside Community School");
    assert_eq!(record.brand_color.as_deref(), Some("#0f766e"));
    assert_eq!(
        record.profile.established,
        Some(DateValue::Text("1954-09-01T00:00:00Z".to_string()))
    );
    assert_eq!(record.profile.goals.len(), 5);
    assert_eq!(record.profile.facilities.len(), 3);
    assert_eq!(
        record.profile.achievements[1].year,
        Some(YearLabel::Text("2021-2022".to_string()))
    );
    assert_eq!(record.profile.layout.template.as_deref(), Some("classic"));
    assert_eq!(
        record.profile.layout.theme.accent_color.as_deref(),
        Some("#eab308")
    );
}

#[test]
fn test_goal_shapes() {
    let record = parse(LAKESIDE).expect("Should parse");
    assert!(matches!(&record.profile.goals[0], Goal::Text(t) if t == "Academic excellence"));
    assert!(matches!(&record.profile.goals[4], Goal::Detailed(_)));
}

#[test]
fn test_view_of_full_record() {
    let record = parse(LAKESIDE).expect("Should parse");
    let kind = TemplateKind::resolve(record.profile.layout.template.as_deref());
    let view = ProfileView::resolve(&record, kind, &Theme::default());

    assert_eq!(view.template, TemplateKind::Classic);
    assert_eq!(view.established_year, Some(1954));
    assert_eq!(
        view.goals,
        vec![
            "Academic excellence",
            "Community service",
            "Digital literacy for all",
            "Teamwork",
            "Goal",
        ]
    );
    assert_eq!(view.goals_heading(), "Our Goals");
    assert_eq!(view.facilities.len(), 2);
    assert_eq!(view.colors.primary, "#0f766e");
    assert_eq!(view.colors.accent, "#eab308");
    assert_eq!(view.colors.secondary, "#7c2d12");

    let admission = view.admission.as_ref().expect("admission is open");
    assert_eq!(admission.date_range.as_deref(), Some("1/6/2025 \u{2013} 2/28/2025"));
    assert_eq!(admission.requirements, vec!["Birth certificate", "Previous report card"]);

    assert_eq!(view.visible_sections(), Section::ALL.to_vec());
}

#[test]
fn test_parse_error_is_formatted_with_source() {
    let source = "{\n  \"name\": \"A\",\n  \"profile\": {\"goals\": 7}\n}";
    let err = parse(source).unwrap_err();
    let report = err.format(source, "broken.json");
    assert!(report.contains("broken.json"));
    assert!(report.contains("invalid profile record"));
}

#[test]
fn test_wrong_type_is_an_error() {
    assert!(parse(r#"{"name": "A", "profile": {"goals": 7}}"#).is_err());
    assert!(parse(r#"[1, 2, 3]"#).is_err());
}
