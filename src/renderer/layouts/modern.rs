//! Modern layout: hero header, card grid, timeline

use crate::profile::Section;
use crate::renderer::{sections, HtmlBuilder};
use crate::template::{LayoutVariant, TemplateKind};
use crate::view::ProfileView;

use super::css_url;

const STYLESHEET: &str = r#"
.sp-modern { font-family: system-ui, sans-serif; color: var(--text); background: var(--surface); margin: 0; }
.sp-modern .sp-hero { color: var(--text-inverse); padding: 4rem 2rem; text-align: center; background-size: cover; background-position: center; }
.sp-modern .sp-hero h1 { font-size: 2.5rem; margin: 1rem 0 0.25rem; }
.sp-modern .sp-logo, .sp-modern .sp-logo-initials { width: 96px; height: 96px; border-radius: 50%; object-fit: cover; display: inline-flex; align-items: center; justify-content: center; font-size: 2rem; color: var(--text-inverse); }
.sp-modern .sp-content { max-width: 1100px; margin: 0 auto; padding: 2rem; display: grid; gap: 2rem; }
.sp-modern .sp-pair { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.sp-modern .sp-card { background: var(--background); border-radius: 12px; padding: 1.5rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); }
.sp-modern .sp-goals { list-style: none; padding: 0; display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; }
.sp-modern .sp-goal { border-left: 4px solid var(--accent); padding: 0.75rem 1rem; background: var(--surface); }
.sp-modern .sp-facility-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
.sp-modern .sp-facility-image { width: 100%; height: 160px; object-fit: cover; border-radius: 8px; }
.sp-modern .sp-timeline { border-left: 2px solid var(--secondary); padding-left: 1.5rem; }
.sp-modern .sp-achievement { position: relative; margin-bottom: 1.5rem; }
.sp-modern .sp-achievement-index { position: absolute; left: -2.4rem; width: 1.6rem; height: 1.6rem; border-radius: 50%; background: var(--secondary); color: var(--text-inverse); text-align: center; font-size: 0.8rem; line-height: 1.6rem; }
.sp-modern .sp-admission-banner { color: var(--text-inverse); border-radius: 12px; padding: 2rem; }
.sp-modern .sp-admission-status { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 999px; font-weight: 600; }
.sp-modern .sp-principal { display: flex; gap: 1.5rem; align-items: flex-start; }
.sp-modern .sp-principal-image { width: 120px; height: 120px; border-radius: 50%; object-fit: cover; }
"#;

/// Hero header over the header image, cards for every section
pub struct ModernLayout;

impl LayoutVariant for ModernLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Modern
    }

    fn stylesheet(&self) -> &'static str {
        STYLESHEET
    }

    fn render(&self, view: &ProfileView<'_>, out: &mut HtmlBuilder) {
        out.start_element("div", &["page", "modern"]);
        hero(view, out);

        out.start_element("main", &["content"]);

        if view.mission.is_some() || view.vision.is_some() {
            out.start_element("div", &["pair"]);
            if let Some(mission) = view.mission {
                statement(out, Section::Mission, "Our Mission", mission, &view.colors.primary);
            }
            if let Some(vision) = view.vision {
                statement(out, Section::Vision, "Our Vision", vision, &view.colors.primary);
            }
            out.end_element("div");
        }

        if !view.goals.is_empty() {
            out.start_section(Section::Goals.as_str(), &["card"]);
            out.add_colored_text("h2", &["heading"], &view.colors.primary, view.goals_heading());
            sections::goal_list(out, &view.goals, false, &view.colors.accent);
            out.end_section();
        }

        if let Some(principal) = &view.principal {
            out.start_section(Section::PrincipalMessage.as_str(), &["card"]);
            out.add_colored_text("h2", &["heading"], &view.colors.primary, "Principal's Message");
            out.start_element("div", &["principal"]);
            sections::principal_message(out, principal, true);
            out.end_element("div");
            out.end_section();
        }

        if !view.facilities.is_empty() {
            out.start_section(Section::Facilities.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], &view.colors.primary, "Our Facilities");
            out.start_element("div", &["facility-grid"]);
            for facility in &view.facilities {
                out.start_element("div", &["card"]);
                sections::facility_card(out, facility, true);
                out.end_element("div");
            }
            out.end_element("div");
            out.end_section();
        }

        if !view.achievements.is_empty() {
            out.start_section(Section::Achievements.as_str(), &["card"]);
            out.add_colored_text("h2", &["heading"], &view.colors.primary, "Achievements");
            out.start_element("div", &["timeline"]);
            for entry in &view.achievements {
                sections::achievement(out, entry, &view.colors.primary);
            }
            out.end_element("div");
            out.end_section();
        }

        if let Some(admission) = &view.admission {
            let style = format!(
                "background: linear-gradient(135deg, {}, {})",
                view.colors.primary, view.colors.secondary
            );
            out.start_element_with(
                "section",
                Some(Section::Admission.as_str()),
                &["section", "admission-banner"],
                &[("data-section", Section::Admission.as_str()), ("style", style.as_str())],
            );
            out.add_text("h2", &["heading"], "Admissions");
            sections::admission_details(out, admission, &view.colors.accent);
            out.end_section();
        }

        out.end_element("main");
        out.end_element("div");
    }
}

fn hero(view: &ProfileView<'_>, out: &mut HtmlBuilder) {
    let mut style = format!("background-color: {}", view.colors.primary);
    if let Some(url) = view.header_image.and_then(css_url) {
        style.push_str(&format!("; background-image: {}", url));
    }
    out.start_element_with("header", None, &["hero"], &[("style", style.as_str())]);
    sections::logo(out, view, &["logo"]);
    out.add_text("h1", &["school-name"], view.name);
    sections::established(out, view, &["established"]);
    out.end_element("header");
}

fn statement(out: &mut HtmlBuilder, section: Section, heading: &str, text: &str, color: &str) {
    out.start_section(section.as_str(), &["card"]);
    out.add_colored_text("h2", &["heading"], color, heading);
    out.add_paragraphs(&["statement"], text);
    out.end_section();
}
