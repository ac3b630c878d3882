//! Preview view model.
//!
//! [`compute`] flattens a [`Resume`] into display-ready strings: dates are
//! formatted, the template id is resolved, font size and spacing are turned
//! into concrete values. Template renderers only read this struct and never
//! look at the resume directly.

use crate::app::modes::BuilderTab;
use crate::domain::Resume;
use crate::ui::format::{degree_title, entry_gap, font_px, format_month_year, format_period, line_height};
use crate::ui::templates::Template;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewViewModel {
    pub template: Template,

    /// `"First Last"`, possibly empty.
    pub full_name: String,

    /// Non-empty contact fields in order: email, phone, location.
    pub contacts: Vec<String>,

    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<String>,

    /// Resume accent color, verbatim.
    pub accent: String,
    pub font_family: String,
    pub font_px: u8,
    pub line_height: f64,

    /// Blank lines between entries.
    pub entry_gap: usize,

    pub footer: FooterInfo,
}

impl PreviewViewModel {
    /// True when there is nothing but style to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
            && self.contacts.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub position: String,
    pub company: String,
    /// `"Jan 2020 - Jan 2023"` or shorter, see [`format_period`].
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationItem {
    /// `"Degree in Field"`.
    pub title: String,
    pub institution: String,
    pub graduated: String,
}

/// Status line under the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub tab: String,
    pub hint: String,
}

/// Builds the view model for one resume snapshot.
#[must_use]
pub fn compute(resume: &Resume, tab: BuilderTab) -> PreviewViewModel {
    let _span = tracing::debug_span!(
        "compute_viewmodel",
        template = %resume.selected_template,
        experience = resume.experience.len(),
        education = resume.education.len()
    )
    .entered();

    let info = &resume.personal_info;
    let contacts = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|c| !c.is_empty())
        .cloned()
        .collect();

    let experience = resume
        .experience
        .iter()
        .map(|e| ExperienceItem {
            position: e.position.clone(),
            company: e.company.clone(),
            period: format_period(&e.start_date, &e.end_date),
            description: e.description.clone(),
        })
        .collect();

    let education = resume
        .education
        .iter()
        .map(|e| EducationItem {
            title: degree_title(&e.degree, &e.field),
            institution: e.institution.clone(),
            graduated: format_month_year(&e.graduation_date),
        })
        .collect();

    let style = &resume.style_customizations;

    PreviewViewModel {
        template: Template::resolve(&resume.selected_template),
        full_name: info.full_name(),
        contacts,
        experience,
        education,
        skills: resume.skills.clone(),
        accent: style.primary_color.clone(),
        font_family: style.font_family.stack().to_string(),
        font_px: font_px(&style.font_size),
        line_height: line_height(style.spacing),
        entry_gap: entry_gap(style.spacing),
        footer: compute_footer(tab),
    }
}

fn compute_footer(tab: BuilderTab) -> FooterInfo {
    let hint = match tab {
        BuilderTab::PersonalInfo => "Fill in your name and contact details.",
        BuilderTab::Experience => "Add positions; company and position are required.",
        BuilderTab::Education => "Add degrees; institution and degree are required.",
        BuilderTab::Skills => "Add skills that are relevant to the position you're applying for.",
        BuilderTab::Style => "Pick a color, font, size and spacing.",
    };

    FooterInfo {
        tab: tab.label().to_string(),
        hint: hint.to_string(),
    }
}
