//! Classic layout: centered crest header, main column with a sidebar

use crate::profile::Section;
use crate::renderer::{sections, HtmlBuilder};
use crate::template::{LayoutVariant, TemplateKind};
use crate::view::ProfileView;

const STYLESHEET: &str = r#"
.sp-classic { font-family: Georgia, "Times New Roman", serif; color: var(--text); background: var(--background); margin: 0; }
.sp-classic .sp-crest { text-align: center; padding: 3rem 1rem 1.5rem; }
.sp-classic .sp-crest h1 { font-size: 2.25rem; letter-spacing: 0.05em; text-transform: uppercase; margin: 1rem 0 0.25rem; }
.sp-classic .sp-logo, .sp-classic .sp-logo-initials { width: 110px; height: 110px; object-fit: contain; display: inline-flex; align-items: center; justify-content: center; font-size: 2.25rem; color: var(--text-inverse); }
.sp-classic .sp-established { font-style: italic; color: var(--text-muted); }
.sp-classic .sp-rule { width: 160px; border: 0; border-top: 3px double; margin: 1.5rem auto 0; }
.sp-classic .sp-columns { max-width: 1000px; margin: 0 auto; padding: 2rem 1rem; display: grid; grid-template-columns: 2fr 1fr; gap: 3rem; }
.sp-classic .sp-section { margin-bottom: 2.5rem; }
.sp-classic .sp-heading { border-bottom: 1px solid var(--border); padding-bottom: 0.5rem; font-variant: small-caps; }
.sp-classic .sp-goals li { margin-bottom: 0.5rem; }
.sp-classic .sp-goal-number { display: none; }
.sp-classic .sp-principal-quote { font-style: italic; border-left: 3px solid var(--secondary); margin: 0; padding-left: 1.25rem; }
.sp-classic .sp-principal-image { float: right; width: 140px; margin: 0 0 1rem 1rem; border: 1px solid var(--border); }
.sp-classic .sp-achievement { display: grid; grid-template-columns: 2.5rem 4rem 1fr; gap: 0.5rem; align-items: baseline; }
.sp-classic .sp-achievement-description { grid-column: 3; margin: 0 0 1rem; }
.sp-classic .sp-sidebar .sp-section { background: var(--surface); border: 1px solid var(--border); padding: 1.25rem; }
.sp-classic .sp-admission-status { color: var(--text-inverse); padding: 0.2rem 0.6rem; }
.sp-classic .sp-facility-name { font-size: 1rem; margin-bottom: 0.25rem; }
"#;

/// Traditional two-column page
pub struct ClassicLayout;

impl LayoutVariant for ClassicLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Classic
    }

    fn stylesheet(&self) -> &'static str {
        STYLESHEET
    }

    fn render(&self, view: &ProfileView<'_>, out: &mut HtmlBuilder) {
        let primary = view.colors.primary.as_str();

        out.start_element("div", &["page", "classic"]);

        out.start_element("header", &["crest"]);
        sections::logo(out, view, &["logo"]);
        out.add_colored_text("h1", &["school-name"], primary, view.name);
        sections::established(out, view, &["established"]);
        let rule = format!("border-color: {}", view.colors.accent);
        out.add_void("hr", &["rule"], &[("style", rule.as_str())]);
        out.end_element("header");

        out.start_element("div", &["columns"]);
        out.start_element("main", &["main-column"]);

        if let Some(mission) = view.mission {
            out.start_section(Section::Mission.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], primary, "Mission");
            out.add_paragraphs(&["statement"], mission);
            out.end_section();
        }

        if let Some(vision) = view.vision {
            out.start_section(Section::Vision.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], primary, "Vision");
            out.add_paragraphs(&["statement"], vision);
            out.end_section();
        }

        if let Some(principal) = &view.principal {
            out.start_section(Section::PrincipalMessage.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], primary, "From the Principal");
            sections::principal_message(out, principal, true);
            out.end_section();
        }

        if !view.goals.is_empty() {
            out.start_section(Section::Goals.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], primary, view.goals_heading());
            sections::goal_list(out, &view.goals, true, primary);
            out.end_section();
        }

        if !view.achievements.is_empty() {
            out.start_section(Section::Achievements.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], primary, "Honours & Achievements");
            for entry in &view.achievements {
                sections::achievement(out, entry, &view.colors.secondary);
            }
            out.end_section();
        }

        out.end_element("main");

        if view.admission.is_some() || !view.facilities.is_empty() {
            out.start_element("aside", &["sidebar"]);

            if let Some(admission) = &view.admission {
                out.start_section(Section::Admission.as_str(), &[]);
                out.add_colored_text("h2", &["heading"], primary, "Admissions");
                sections::admission_details(out, admission, primary);
                out.end_section();
            }

            if !view.facilities.is_empty() {
                out.start_section(Section::Facilities.as_str(), &[]);
                out.add_colored_text("h2", &["heading"], primary, "Facilities");
                for facility in &view.facilities {
                    sections::facility_card(out, facility, false);
                }
                out.end_section();
            }

            out.end_element("aside");
        }

        out.end_element("div");
        out.end_element("div");
    }
}
