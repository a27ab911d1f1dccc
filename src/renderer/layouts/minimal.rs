//! Minimal layout: one plain column, no imagery beyond the logo

use crate::profile::Section;
use crate::renderer::{sections, HtmlBuilder};
use crate::template::{LayoutVariant, TemplateKind};
use crate::view::ProfileView;

const STYLESHEET: &str = r#"
.sp-minimal { font-family: -apple-system, "Helvetica Neue", sans-serif; color: var(--text); max-width: 680px; margin: 0 auto; padding: 3rem 1.5rem; line-height: 1.6; }
.sp-minimal .sp-masthead { display: flex; align-items: center; gap: 1rem; margin-bottom: 3rem; }
.sp-minimal .sp-logo, .sp-minimal .sp-logo-initials { width: 48px; height: 48px; object-fit: contain; display: inline-flex; align-items: center; justify-content: center; color: var(--text-inverse); }
.sp-minimal h1 { font-size: 1.75rem; font-weight: 500; margin: 0; }
.sp-minimal .sp-established { color: var(--text-muted); margin: 0; }
.sp-minimal .sp-section { margin-bottom: 2.5rem; }
.sp-minimal .sp-heading { font-size: 0.85rem; letter-spacing: 0.1em; text-transform: uppercase; color: var(--secondary); }
.sp-minimal .sp-goals, .sp-minimal .sp-requirements { padding-left: 1.25rem; }
.sp-minimal .sp-facility-name, .sp-minimal .sp-achievement-title { font-size: 1rem; margin: 0; }
.sp-minimal .sp-achievement { margin-bottom: 1rem; }
.sp-minimal .sp-achievement-index { color: var(--text-muted); margin-right: 0.5rem; }
.sp-minimal .sp-achievement-year { margin-right: 0.5rem; }
.sp-minimal .sp-admission-status { color: var(--text-inverse); padding: 0.1rem 0.5rem; font-size: 0.85rem; }
"#;

/// Text-first single column page
pub struct MinimalLayout;

impl LayoutVariant for MinimalLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Minimal
    }

    fn stylesheet(&self) -> &'static str {
        STYLESHEET
    }

    fn render(&self, view: &ProfileView<'_>, out: &mut HtmlBuilder) {
        let primary = view.colors.primary.as_str();

        out.start_element("div", &["page", "minimal"]);

        out.start_element("header", &["masthead"]);
        sections::logo(out, view, &["logo"]);
        out.start_element("div", &[]);
        out.add_text("h1", &["school-name"], view.name);
        sections::established(out, view, &["established"]);
        out.end_element("div");
        out.end_element("header");

        for section in view.visible_sections() {
            out.start_section(section.as_str(), &[]);
            match section {
                Section::Mission => {
                    heading(out, "Mission");
                    if let Some(mission) = view.mission {
                        out.add_paragraphs(&["statement"], mission);
                    }
                }
                Section::Vision => {
                    heading(out, "Vision");
                    if let Some(vision) = view.vision {
                        out.add_paragraphs(&["statement"], vision);
                    }
                }
                Section::Goals => {
                    heading(out, view.goals_heading());
                    sections::goal_list(out, &view.goals, false, primary);
                }
                Section::PrincipalMessage => {
                    heading(out, "Principal's Message");
                    if let Some(principal) = &view.principal {
                        sections::principal_message(out, principal, false);
                    }
                }
                Section::Facilities => {
                    heading(out, "Facilities");
                    for facility in &view.facilities {
                        sections::facility_card(out, facility, false);
                    }
                }
                Section::Achievements => {
                    heading(out, "Achievements");
                    for entry in &view.achievements {
                        sections::achievement(out, entry, primary);
                    }
                }
                Section::Admission => {
                    heading(out, "Admissions");
                    if let Some(admission) = &view.admission {
                        sections::admission_details(out, admission, primary);
                    }
                }
            }
            out.end_section();
        }

        out.end_element("div");
    }
}

fn heading(out: &mut HtmlBuilder, text: &str) {
    out.add_text("h2", &["heading"], text);
}
