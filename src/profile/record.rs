//! Profile record types as supplied by the data layer
//!
//! The record is JSON with camelCase keys. Every optional field may be
//! absent or `null`; sequences treat `null` as empty.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level record describing one school
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    pub logo_url: Option<String>,
    /// Fallback primary color when the layout theme has no override
    pub brand_color: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub profile: SchoolProfile,
}

/// The descriptive part of the record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolProfile {
    pub established: Option<DateValue>,
    pub header_image: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub principal_message: Option<String>,
    pub principal_image: Option<String>,
    pub principal_name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub goals: Vec<Goal>,
    #[serde(default, deserialize_with = "null_default")]
    pub facilities: Vec<Facility>,
    #[serde(default, deserialize_with = "null_default")]
    pub achievements: Vec<Achievement>,
    pub admission_info: Option<AdmissionInfo>,
    #[serde(default, deserialize_with = "null_default")]
    pub layout: LayoutSettings,
}

/// A date as it appears in records: an ISO string or a bare year
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Year(i64),
    Text(String),
}

/// A goal is either plain text or a structured entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Goal {
    Text(String),
    Detailed(GoalDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GoalDetails {
    pub title: Option<String>,
    pub text: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Facility {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Achievement {
    pub year: Option<YearLabel>,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    pub description: Option<String>,
}

/// Achievement years are free-form: `2020` and `"2019-2020"` are both used
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearLabel {
    Number(i64),
    Text(String),
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearLabel::Number(n) => write!(f, "{}", n),
            YearLabel::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionInfo {
    #[serde(default, deserialize_with = "null_default")]
    pub is_open: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub process: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub requirements: Vec<String>,
}

/// Presentation settings chosen by the school
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    pub template: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub sections: SectionFlags,
    #[serde(default, alias = "globalTheme", deserialize_with = "null_default")]
    pub theme: ThemeOverrides,
}

/// Color overrides; `theme` and `globalTheme` both land here
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverrides {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
}

/// Logical content blocks of a profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Mission,
    Vision,
    Goals,
    PrincipalMessage,
    Facilities,
    Achievements,
    Admission,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Mission,
        Section::Vision,
        Section::Goals,
        Section::PrincipalMessage,
        Section::Facilities,
        Section::Achievements,
        Section::Admission,
    ];

    /// Stable name used for element ids and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Mission => "mission",
            Section::Vision => "vision",
            Section::Goals => "goals",
            Section::PrincipalMessage => "principal-message",
            Section::Facilities => "facilities",
            Section::Achievements => "achievements",
            Section::Admission => "admission",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested form of a visibility flag: `"mission": { "show": false }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SectionToggle {
    pub show: Option<bool>,
}

/// Per-section visibility flags.
///
/// Accepts both the flat `showMission: false` spelling and the nested
/// `mission: { show: false }` spelling. The flat flag wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFlags {
    show_mission: Option<bool>,
    show_vision: Option<bool>,
    show_goals: Option<bool>,
    show_principal_message: Option<bool>,
    show_facilities: Option<bool>,
    show_achievements: Option<bool>,
    #[serde(alias = "showAdmission")]
    show_admission_info: Option<bool>,

    mission: Option<SectionToggle>,
    vision: Option<SectionToggle>,
    goals: Option<SectionToggle>,
    principal_message: Option<SectionToggle>,
    facilities: Option<SectionToggle>,
    achievements: Option<SectionToggle>,
    #[serde(alias = "admission")]
    admission_info: Option<SectionToggle>,
}

impl SectionFlags {
    /// The explicit flag for a section, if the record sets one
    pub fn get(&self, section: Section) -> Option<bool> {
        let (flat, nested) = match section {
            Section::Mission => (self.show_mission, self.mission),
            Section::Vision => (self.show_vision, self.vision),
            Section::Goals => (self.show_goals, self.goals),
            Section::PrincipalMessage => (self.show_principal_message, self.principal_message),
            Section::Facilities => (self.show_facilities, self.facilities),
            Section::Achievements => (self.show_achievements, self.achievements),
            Section::Admission => (self.show_admission_info, self.admission_info),
        };
        flat.or_else(|| nested.and_then(|t| t.show))
    }
}
