//! Resolved view of a profile record
//!
//! `ProfileView` is the one place that decides which sections are shown,
//! which colors are used and how values are formatted. Layout variants only
//! arrange what the view gives them.

pub mod format;

use std::collections::HashSet;

use tracing::debug;

use crate::profile::{Achievement, Facility, ProfileRecord, Section, SectionFlags};
use crate::template::TemplateKind;
use crate::theme::Theme;

use self::format::{
    admission_range, css_color, established_year, goal_text, goals_heading, non_blank,
};

/// Primary/secondary/accent colors after overrides and fallbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl ResolvedColors {
    /// Theme override first, then the record's brand color, then the palette
    /// default for the primary color. Secondary and accent fall back to the
    /// template's palette entry. Values that could break out of a CSS
    /// declaration are treated as absent.
    pub fn resolve(record: &ProfileRecord, template: TemplateKind, theme: &Theme) -> Self {
        let overrides = &record.profile.layout.theme;
        let fallbacks = theme.template_colors(template);

        let primary = css_color(overrides.primary_color.as_deref())
            .or_else(|| css_color(record.brand_color.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| theme.resolve_or_default("primary"));
        let secondary = css_color(overrides.secondary_color.as_deref())
            .map(str::to_string)
            .unwrap_or(fallbacks.secondary);
        let accent = css_color(overrides.accent_color.as_deref())
            .map(str::to_string)
            .unwrap_or(fallbacks.accent);

        Self {
            primary,
            secondary,
            accent,
        }
    }
}

/// A section is shown unless its flag is explicitly false and only when it
/// has data to show
pub fn is_section_visible(flags: &SectionFlags, section: Section, has_data: bool) -> bool {
    flags.get(section) != Some(false) && has_data
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrincipalView<'a> {
    pub message: &'a str,
    pub image: Option<&'a str>,
    pub name: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityView<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
}

/// An achievement with its 1-based position
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementView<'a> {
    pub index: usize,
    pub year: Option<String>,
    pub title: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionView<'a> {
    pub date_range: Option<String>,
    pub process: Option<&'a str>,
    pub requirements: Vec<&'a str>,
}

/// Everything a layout needs, already filtered and formatted.
///
/// Hidden sections are `None` or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView<'a> {
    pub template: TemplateKind,
    pub name: &'a str,
    pub logo_url: Option<&'a str>,
    pub header_image: Option<&'a str>,
    pub established_year: Option<i32>,
    pub colors: ResolvedColors,
    pub mission: Option<&'a str>,
    pub vision: Option<&'a str>,
    pub goals: Vec<String>,
    pub principal: Option<PrincipalView<'a>>,
    pub facilities: Vec<FacilityView<'a>>,
    pub achievements: Vec<AchievementView<'a>>,
    pub admission: Option<AdmissionView<'a>>,
    visible: HashSet<Section>,
}

impl<'a> ProfileView<'a> {
    /// Resolve a record for the given template
    pub fn resolve(record: &'a ProfileRecord, template: TemplateKind, theme: &Theme) -> Self {
        let profile = &record.profile;
        let flags = &profile.layout.sections;
        let mut visible = HashSet::new();

        let mut gate = |section: Section, has_data: bool| {
            let shown = is_section_visible(flags, section, has_data);
            if shown {
                visible.insert(section);
            } else {
                debug!(%section, has_data, flag = ?flags.get(section), "section hidden");
            }
            shown
        };

        let mission = non_blank(profile.mission.as_deref());
        let mission = if gate(Section::Mission, mission.is_some()) {
            mission
        } else {
            None
        };

        let vision = non_blank(profile.vision.as_deref());
        let vision = if gate(Section::Vision, vision.is_some()) {
            vision
        } else {
            None
        };

        let goals: Vec<String> = profile
            .goals
            .iter()
            .map(goal_text)
            .filter(|text| !text.is_empty())
            .collect();
        let goals = if gate(Section::Goals, !goals.is_empty()) {
            goals
        } else {
            Vec::new()
        };

        let principal = non_blank(profile.principal_message.as_deref()).map(|message| {
            PrincipalView {
                message,
                image: non_blank(profile.principal_image.as_deref()),
                name: non_blank(profile.principal_name.as_deref()),
            }
        });
        let principal = if gate(Section::PrincipalMessage, principal.is_some()) {
            principal
        } else {
            None
        };

        let facilities: Vec<FacilityView<'a>> =
            profile.facilities.iter().filter_map(facility_view).collect();
        let facilities = if gate(Section::Facilities, !facilities.is_empty()) {
            facilities
        } else {
            Vec::new()
        };

        let achievements: Vec<AchievementView<'a>> = profile
            .achievements
            .iter()
            .filter(|a| !is_empty_achievement(a))
            .enumerate()
            .map(|(i, a)| AchievementView {
                index: i + 1,
                year: a.year.as_ref().map(|y| y.to_string()).filter(|y| !y.is_empty()),
                title: a.title.trim(),
                description: non_blank(a.description.as_deref()),
            })
            .collect();
        let achievements = if gate(Section::Achievements, !achievements.is_empty()) {
            achievements
        } else {
            Vec::new()
        };

        let admission = profile
            .admission_info
            .as_ref()
            .filter(|info| info.is_open)
            .map(|info| AdmissionView {
                date_range: admission_range(info.start_date.as_deref(), info.end_date.as_deref()),
                process: non_blank(info.process.as_deref()),
                requirements: info
                    .requirements
                    .iter()
                    .filter_map(|r| non_blank(Some(r.as_str())))
                    .collect(),
            });
        let admission = if gate(Section::Admission, admission.is_some()) {
            admission
        } else {
            None
        };

        Self {
            template,
            name: record.name.trim(),
            logo_url: non_blank(record.logo_url.as_deref()),
            header_image: non_blank(profile.header_image.as_deref()),
            established_year: profile.established.as_ref().and_then(established_year),
            colors: ResolvedColors::resolve(record, template, theme),
            mission,
            vision,
            goals,
            principal,
            facilities,
            achievements,
            admission,
            visible,
        }
    }

    /// Whether a section will be rendered
    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.contains(&section)
    }

    /// Visible sections in canonical order
    pub fn visible_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.visible.contains(s))
            .collect()
    }

    /// Heading for the goals section, pluralized by goal count
    pub fn goals_heading(&self) -> &'static str {
        goals_heading(self.goals.len())
    }

    /// Initials shown when the school has no logo
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphanumeric())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

fn facility_view(facility: &Facility) -> Option<FacilityView<'_>> {
    let name = facility.name.trim();
    let description = non_blank(facility.description.as_deref());
    if name.is_empty() && description.is_none() {
        return None;
    }
    Some(FacilityView {
        name,
        description,
        image: non_blank(facility.image.as_deref()),
    })
}

fn is_empty_achievement(achievement: &Achievement) -> bool {
    achievement.year.is_none()
        && achievement.title.trim().is_empty()
        && non_blank(achievement.description.as_deref()).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::parse;
    use pretty_assertions::assert_eq;

    fn view_of(json: &str) -> (ProfileRecord, Theme) {
        (parse(json).expect("valid record"), Theme::default())
    }

    #[test]
    fn test_absent_flag_shows_section_with_data() {
        let (record, theme) = view_of(r#"{"name": "A", "profile": {"mission": "Learn"}}"#);
        let view = ProfileView::resolve(&record, TemplateKind::Modern, &theme);
        assert_eq!(view.mission, Some("Learn"));
        assert!(view.is_visible(Section::Mission));
    }

    #[test]
    fn test_false_flag_hides_section() {
        let (record, theme) = view_of(
            r#"{"name": "A", "profile": {"mission": "Learn",
                "layout": {"sections": {"mission": {"show": false}}}}}"#,
        );
        let view = ProfileView::resolve(&record, TemplateKind::Classic, &theme);
        assert_eq!(view.mission, None);
        assert!(!view.is_visible(Section::Mission));
    }

    #[test]
    fn test_true_flag_without_data_hides_section() {
        let (record, theme) = view_of(
            r#"{"name": "A", "profile": {"vision": "   ", "goals": [],
                "layout": {"sections": {"showVision": true, "showGoals": true}}}}"#,
        );
        let view = ProfileView::resolve(&record, TemplateKind::Modern, &theme);
        assert!(view.visible_sections().is_empty());
    }

    #[test]
    fn test_closed_admission_is_hidden() {
        let (record, theme) = view_of(
            r#"{"name": "A", "profile": {"admissionInfo": {"isOpen": false,
                "process": "Apply online"}}}"#,
        );
        let view = ProfileView::resolve(&record, TemplateKind::Modern, &theme);
        assert_eq!(view.admission, None);
    }

    #[test]
    fn test_achievements_numbered_in_order() {
        let (record, theme) = view_of(
            r#"{"name": "A", "profile": {"achievements": [
                {"year": 2021, "title": "Later"},
                {},
                {"year": "2019", "title": "Earlier", "description": "d"}]}}"#,
        );
        let view = ProfileView::resolve(&record, TemplateKind::Modern, &theme);
        let labels: Vec<(usize, Option<&str>, &str)> = view
            .achievements
            .iter()
            .map(|a| (a.index, a.year.as_deref(), a.title))
            .collect();
        assert_eq!(
            labels,
            vec![(1, Some("2021"), "Later"), (2, Some("2019"), "Earlier")]
        );
    }

    #[test]
    fn test_brand_color_is_primary_without_override() {
        let (record, theme) = view_of(r##"{"name": "A", "brandColor": "#112233"}"##);
        let colors = ResolvedColors::resolve(&record, TemplateKind::Minimal, &theme);
        assert_eq!(colors.primary, "#112233");
        assert_eq!(colors.secondary, "#374151");
    }

    #[test]
    fn test_theme_override_beats_brand_color() {
        let (record, theme) = view_of(
            r##"{"name": "A", "brandColor": "#112233", "profile": {"layout":
                {"theme": {"primaryColor": "#445566", "accentColor": "#778899"}}}}"##,
        );
        let colors = ResolvedColors::resolve(&record, TemplateKind::Creative, &theme);
        assert_eq!(
            colors,
            ResolvedColors {
                primary: "#445566".to_string(),
                secondary: "#7c3aed".to_string(),
                accent: "#778899".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_brand_color_uses_palette() {
        let (record, theme) = view_of(r#"{"name": "A", "brandColor": ""}"#);
        let colors = ResolvedColors::resolve(&record, TemplateKind::Modern, &theme);
        assert_eq!(colors.primary, "#2563eb");
    }

    #[test]
    fn test_initials() {
        let (record, theme) = view_of(r#"{"name": "st. mary's high school"}"#);
        let view = ProfileView::resolve(&record, TemplateKind::Modern, &theme);
        assert_eq!(view.initials(), "SM");
    }

    #[test]
    fn test_unsafe_colors_fall_back() {
        let (record, theme) = view_of(
            r##"{"name": "A", "brandColor": "red}</style><script>alert(1)</script>",
                "profile": {"layout": {"theme": {"accentColor": "#fff;x:y"}}}}"##,
        );
        let colors = ResolvedColors::resolve(&record, TemplateKind::Modern, &theme);
        assert_eq!(colors.primary, "#2563eb");
        assert_eq!(colors.accent, "#f59e0b");
    }
}
