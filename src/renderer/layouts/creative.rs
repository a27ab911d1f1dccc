//! Creative layout: color blocks, admissions call-to-action up front

use crate::profile::Section;
use crate::renderer::{sections, HtmlBuilder};
use crate::template::{LayoutVariant, TemplateKind};
use crate::view::ProfileView;

use super::css_url;

const STYLESHEET: &str = r#"
.sp-creative { font-family: "Trebuchet MS", "Segoe UI", sans-serif; color: var(--text); background: var(--background); margin: 0; }
.sp-creative .sp-splash { color: var(--text-inverse); padding: 5rem 2rem 6rem; clip-path: polygon(0 0, 100% 0, 100% 85%, 0 100%); }
.sp-creative .sp-splash-image { background-size: cover; background-position: center; }
.sp-creative .sp-splash h1 { font-size: 3rem; margin: 1rem 0 0; transform: rotate(-1deg); }
.sp-creative .sp-logo, .sp-creative .sp-logo-initials { width: 88px; height: 88px; border-radius: 24px; object-fit: cover; display: inline-flex; align-items: center; justify-content: center; font-size: 2rem; color: var(--text-inverse); border: 4px solid var(--text-inverse); }
.sp-creative .sp-cta { max-width: 900px; margin: -3rem auto 2rem; padding: 1.5rem 2rem; border-radius: 20px; color: var(--text-inverse); position: relative; }
.sp-creative .sp-body { max-width: 1100px; margin: 0 auto; padding: 1rem 2rem 4rem; display: grid; gap: 2.5rem; }
.sp-creative .sp-block { border-radius: 20px; padding: 2rem; color: var(--text-inverse); }
.sp-creative .sp-blocks { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 1.5rem; }
.sp-creative .sp-goals { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1rem; }
.sp-creative .sp-goal { display: flex; align-items: center; gap: 0.75rem; background: var(--surface); border-radius: 999px; padding: 0.5rem 1.25rem 0.5rem 0.5rem; }
.sp-creative .sp-goal-number { width: 2rem; height: 2rem; border-radius: 50%; color: var(--text-inverse); display: inline-flex; align-items: center; justify-content: center; font-weight: 700; }
.sp-creative .sp-facility-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
.sp-creative .sp-facility { border-radius: 16px; overflow: hidden; background: var(--surface); }
.sp-creative .sp-facility-image { width: 100%; height: 140px; object-fit: cover; }
.sp-creative .sp-facility-name, .sp-creative .sp-facility-description { padding: 0 1rem; }
.sp-creative .sp-badges { display: flex; flex-wrap: wrap; gap: 1rem; }
.sp-creative .sp-achievement { border: 3px solid var(--accent); border-radius: 16px; padding: 1rem 1.25rem; min-width: 200px; flex: 1; }
.sp-creative .sp-achievement-index { float: right; font-weight: 700; color: var(--accent); }
.sp-creative .sp-achievement-year { font-size: 1.5rem; font-weight: 800; }
.sp-creative .sp-admission-status { padding: 0.3rem 0.9rem; border-radius: 999px; font-weight: 700; }
.sp-creative .sp-principal { display: grid; grid-template-columns: 160px 1fr; gap: 2rem; align-items: center; }
.sp-creative .sp-principal-image { width: 160px; height: 160px; border-radius: 32px; object-fit: cover; transform: rotate(3deg); }
"#;

const SCRIM_START: &str = "rgba(0, 0, 0, 0.55)";
const SCRIM_END: &str = "rgba(0, 0, 0, 0.15)";

/// Bold, colorful page
pub struct CreativeLayout;

impl LayoutVariant for CreativeLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Creative
    }

    fn stylesheet(&self) -> &'static str {
        STYLESHEET
    }

    fn render(&self, view: &ProfileView<'_>, out: &mut HtmlBuilder) {
        let colors = &view.colors;

        out.start_element("div", &["page", "creative"]);
        splash(view, out);

        if let Some(admission) = &view.admission {
            let style = format!("background-color: {}", colors.secondary);
            out.start_element_with(
                "section",
                Some(Section::Admission.as_str()),
                &["section", "cta"],
                &[("data-section", Section::Admission.as_str()), ("style", style.as_str())],
            );
            out.add_text("h2", &["heading"], "Join Us!");
            sections::admission_details(out, admission, &colors.accent);
            out.end_section();
        }

        out.start_element("main", &["body"]);

        if view.mission.is_some() || view.vision.is_some() {
            out.start_element("div", &["blocks"]);
            if let Some(mission) = view.mission {
                block(out, Section::Mission, "Mission", mission, &colors.primary);
            }
            if let Some(vision) = view.vision {
                block(out, Section::Vision, "Vision", vision, &colors.secondary);
            }
            out.end_element("div");
        }

        if !view.goals.is_empty() {
            out.start_section(Section::Goals.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], &colors.primary, view.goals_heading());
            sections::goal_list(out, &view.goals, true, &colors.accent);
            out.end_section();
        }

        if let Some(principal) = &view.principal {
            out.start_section(Section::PrincipalMessage.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], &colors.primary, "A Word from Our Principal");
            out.start_element("div", &["principal"]);
            sections::principal_message(out, principal, true);
            out.end_element("div");
            out.end_section();
        }

        if !view.facilities.is_empty() {
            out.start_section(Section::Facilities.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], &colors.primary, "Where We Learn");
            out.start_element("div", &["facility-grid"]);
            for facility in &view.facilities {
                sections::facility_card(out, facility, true);
            }
            out.end_element("div");
            out.end_section();
        }

        if !view.achievements.is_empty() {
            out.start_section(Section::Achievements.as_str(), &[]);
            out.add_colored_text("h2", &["heading"], &colors.primary, "Proud Moments");
            out.start_element("div", &["badges"]);
            for entry in &view.achievements {
                sections::achievement(out, entry, &colors.primary);
            }
            out.end_element("div");
            out.end_section();
        }

        out.end_element("main");
        out.end_element("div");
    }
}

fn splash(view: &ProfileView<'_>, out: &mut HtmlBuilder) {
    let mut classes = vec!["splash"];
    // First background layer paints on top: scrim, then photo
    let style = match view.header_image.and_then(css_url) {
        Some(url) => {
            classes.push("splash-image");
            format!(
                "background-color: {}; background-image: linear-gradient(135deg, {}, {}), {}",
                view.colors.primary, SCRIM_START, SCRIM_END, url
            )
        }
        None => format!(
            "background: linear-gradient(135deg, {}, {})",
            view.colors.primary, view.colors.secondary
        ),
    };
    out.start_element_with("header", None, &classes, &[("style", style.as_str())]);
    sections::logo(out, view, &["logo"]);
    out.add_text("h1", &["school-name"], view.name);
    sections::established(out, view, &["established"]);
    out.end_element("header");
}

fn block(out: &mut HtmlBuilder, section: Section, heading: &str, text: &str, color: &str) {
    let style = format!("background-color: {}", color);
    out.start_element_with(
        "section",
        Some(section.as_str()),
        &["section", "block"],
        &[("data-section", section.as_str()), ("style", style.as_str())],
    );
    out.add_text("h2", &["heading"], heading);
    out.add_paragraphs(&["statement"], text);
    out.end_section();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::parse;
    use crate::renderer::HtmlConfig;
    use crate::theme::Theme;

    fn splash_style(json: &str) -> String {
        let record = parse(json).unwrap();
        let view = ProfileView::resolve(&record, TemplateKind::Creative, &Theme::default());
        let mut out = HtmlBuilder::new(HtmlConfig::default().with_standalone(false));
        splash(&view, &mut out);
        let html = out.build("t");
        let start = html.find("style=\"").unwrap() + "style=\"".len();
        let len = html[start..].find('"').unwrap();
        html[start..start + len].to_string()
    }

    #[test]
    fn test_splash_image_sits_under_translucent_scrim() {
        let style = splash_style(
            r##"{"name": "A", "brandColor": "#112233",
                "profile": {"headerImage": "https://cdn.example.org/hero.jpg"}}"##,
        );
        let scrim = style.find(SCRIM_START).unwrap();
        let image = style.find("url(https://cdn.example.org/hero.jpg)").unwrap();
        assert!(scrim < image);
        assert!(style.starts_with("background-color: #112233;"));
    }

    #[test]
    fn test_splash_without_image_uses_brand_gradient() {
        let style = splash_style(r##"{"name": "A", "brandColor": "#112233"}"##);
        assert_eq!(style, "background: linear-gradient(135deg, #112233, #7c3aed)");
    }
}
