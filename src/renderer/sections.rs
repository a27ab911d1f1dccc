//! Section fragments shared by the layout variants
//!
//! Variants decide order, wrappers and headings; the markup of individual
//! entries (a goal, a facility card, an achievement) is the same everywhere.

use crate::view::{AchievementView, AdmissionView, FacilityView, PrincipalView, ProfileView};

use super::HtmlBuilder;

/// School logo, or an initials badge on the primary color when there is none
pub fn logo(out: &mut HtmlBuilder, view: &ProfileView<'_>, classes: &[&str]) {
    match view.logo_url {
        Some(url) => out.add_image(url, &format!("{} logo", view.name), classes),
        None => {
            let style = format!("background-color: {}", view.colors.primary);
            let mut all = vec!["logo-initials"];
            all.extend_from_slice(classes);
            out.add_text_with("span", &all, &[("style", style.as_str())], &view.initials());
        }
    }
}

/// "Est. 1987" line, when the year is known
pub fn established(out: &mut HtmlBuilder, view: &ProfileView<'_>, classes: &[&str]) {
    if let Some(year) = view.established_year {
        out.add_text("p", classes, &format!("Est. {}", year));
    }
}

/// Goal list; numbered lists get an explicit 1-based badge per item
pub fn goal_list(out: &mut HtmlBuilder, goals: &[String], numbered: bool, color: &str) {
    let tag = if numbered { "ol" } else { "ul" };
    out.start_element(tag, &["goals"]);
    for (i, goal) in goals.iter().enumerate() {
        out.start_element("li", &["goal"]);
        if numbered {
            let style = format!("background-color: {}", color);
            out.add_text_with(
                "span",
                &["goal-number"],
                &[("style", style.as_str())],
                &(i + 1).to_string(),
            );
        }
        out.add_text("span", &["goal-text"], goal);
        out.end_element("li");
    }
    out.end_element(tag);
}

/// One facility card
pub fn facility_card(out: &mut HtmlBuilder, facility: &FacilityView<'_>, with_image: bool) {
    out.start_element("article", &["facility"]);
    if with_image {
        if let Some(image) = facility.image {
            out.add_image(image, facility.name, &["facility-image"]);
        }
    }
    if !facility.name.is_empty() {
        out.add_text("h3", &["facility-name"], facility.name);
    }
    if let Some(description) = facility.description {
        out.add_text("p", &["facility-description"], description);
    }
    out.end_element("article");
}

/// One achievement block with its index label and year
pub fn achievement(out: &mut HtmlBuilder, achievement: &AchievementView<'_>, color: &str) {
    let index = achievement.index.to_string();
    out.start_element_with(
        "article",
        None,
        &["achievement"],
        &[("data-achievement", index.as_str())],
    );
    out.add_text("span", &["achievement-index"], &index);
    if let Some(year) = &achievement.year {
        out.add_colored_text("span", &["achievement-year"], color, year);
    }
    if !achievement.title.is_empty() {
        out.add_text("h3", &["achievement-title"], achievement.title);
    }
    if let Some(description) = achievement.description {
        out.add_text("p", &["achievement-description"], description);
    }
    out.end_element("article");
}

/// Admission status, window, process and requirements
pub fn admission_details(out: &mut HtmlBuilder, admission: &AdmissionView<'_>, color: &str) {
    let style = format!("background-color: {}", color);
    out.add_text_with(
        "span",
        &["admission-status"],
        &[("style", style.as_str())],
        "Admissions Open",
    );
    if let Some(range) = &admission.date_range {
        out.add_text("p", &["admission-dates"], range);
    }
    if let Some(process) = admission.process {
        out.add_text("h3", &["admission-subheading"], "Admission Process");
        out.add_paragraphs(&["admission-process"], process);
    }
    if !admission.requirements.is_empty() {
        out.add_text("h3", &["admission-subheading"], "Requirements");
        out.start_element("ul", &["requirements"]);
        for requirement in &admission.requirements {
            out.add_text("li", &["requirement"], requirement);
        }
        out.end_element("ul");
    }
}

/// Principal's message, optionally with portrait
pub fn principal_message(out: &mut HtmlBuilder, principal: &PrincipalView<'_>, with_image: bool) {
    if with_image {
        if let Some(image) = principal.image {
            let alt = principal.name.unwrap_or("Principal");
            out.add_image(image, alt, &["principal-image"]);
        }
    }
    out.start_element("blockquote", &["principal-quote"]);
    out.add_paragraphs(&["principal-text"], principal.message);
    out.end_element("blockquote");
    if let Some(name) = principal.name {
        out.add_text("p", &["principal-name"], name);
    }
}
