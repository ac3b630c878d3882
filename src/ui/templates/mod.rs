//! Resume templates.
//!
//! Each template is a renderer that lays out the same [`PreviewViewModel`]
//! differently. Layout never depends on anything outside the view model, so
//! switching templates is just a change of `selectedTemplate`.
//!
//! # Templates
//!
//! - [`modern`]: accent name with contacts on the right, skills as chips
//! - [`classic`]: centered name, underlined uppercase headings
//! - [`creative`]: accent banner header
//! - [`minimalist`]: letter-spaced headings, no color beyond headings
//! - [`executive`]: thick rule, skills in three columns
//! - [`professional`]: pipe-separated contacts, bold position with italic company
//!
//! Sections with no entries are omitted in every template.

mod classic;
mod creative;
mod executive;
mod minimalist;
mod modern;
mod professional;

use crate::domain::resume::DEFAULT_TEMPLATE;
use crate::ui::canvas::{Canvas, Style};
use crate::ui::viewmodel::PreviewViewModel;

/// Known resume layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Modern,
    Classic,
    Creative,
    Minimalist,
    Executive,
    Professional,
}

impl Template {
    /// Gallery order.
    pub const ALL: [Self; 6] = [
        Self::Modern,
        Self::Classic,
        Self::Creative,
        Self::Minimalist,
        Self::Executive,
        Self::Professional,
    ];

    /// Looks up a template id, falling back to Modern for anything unknown.
    ///
    /// ```rust
    /// use cvforge::ui::Template;
    ///
    /// assert_eq!(Template::resolve("classic"), Template::Classic);
    /// assert_eq!(Template::resolve("baroque"), Template::Modern);
    /// ```
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == id)
            .unwrap_or_else(|| {
                if id != DEFAULT_TEMPLATE {
                    tracing::debug!(template = id, "unknown template, using modern");
                }
                Self::Modern
            })
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Creative => "creative",
            Self::Minimalist => "minimalist",
            Self::Executive => "executive",
            Self::Professional => "professional",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Classic => "Classic",
            Self::Creative => "Creative",
            Self::Minimalist => "Minimalist",
            Self::Executive => "Executive",
            Self::Professional => "Professional",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Modern => {
                "A clean, professional template with a sidebar for skills and contact information."
            }
            Self::Classic => {
                "A traditional resume layout that works well for all industries and experience levels."
            }
            Self::Creative => "Stand out with this bold template, perfect for creative professionals.",
            Self::Minimalist => "A simple, clean design that lets your experience speak for itself.",
            Self::Executive => "A sophisticated template designed for senior-level professionals.",
            Self::Professional => "A well-structured template ideal for traditional industries.",
        }
    }

    /// Draws the resume body onto `canvas`.
    pub fn render(self, vm: &PreviewViewModel, canvas: &mut Canvas<'_>) {
        let _span = tracing::debug_span!("render_template", template = self.id()).entered();

        match self {
            Self::Modern => modern::render(vm, canvas),
            Self::Classic => classic::render(vm, canvas),
            Self::Creative => creative::render(vm, canvas),
            Self::Minimalist => minimalist::render(vm, canvas),
            Self::Executive => executive::render(vm, canvas),
            Self::Professional => professional::render(vm, canvas),
        }
    }
}

/// Gap before every entry but the first.
fn entry_break(canvas: &mut Canvas<'_>, vm: &PreviewViewModel, index: usize) {
    if index > 0 {
        canvas.gap(vm.entry_gap);
    }
}

/// Skills as painted items ready for [`Canvas::flow`].
fn skill_items(canvas: &Canvas<'_>, skills: &[String], style: Style, pad: bool) -> Vec<(String, usize)> {
    skills
        .iter()
        .map(|skill| {
            let text = if pad { format!(" {skill} ") } else { skill.clone() };
            let visible = text.chars().count();
            (canvas.paint(style, &text), visible)
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::modes::BuilderTab;
    use crate::domain::Resume;
    use crate::ui::canvas::Canvas;
    use crate::ui::theme::Theme;
    use crate::ui::viewmodel::{self, PreviewViewModel};

    use super::Template;

    pub fn sample_vm() -> PreviewViewModel {
        viewmodel::compute(&Resume::sample(), BuilderTab::default())
    }

    /// Renders without color at width 80.
    pub fn render_plain(template: Template, vm: &PreviewViewModel) -> String {
        let theme = Theme::default();
        let mut canvas = Canvas::new(80, false, &vm.accent, &theme);
        template.render(vm, &mut canvas);
        canvas.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{render_plain, sample_vm};
    use super::*;
    use crate::app::modes::BuilderTab;
    use crate::domain::Resume;
    use crate::ui::viewmodel;

    #[test]
    fn test_resolve_known_and_unknown() {
        for template in Template::ALL {
            assert_eq!(Template::resolve(template.id()), template);
        }
        assert_eq!(Template::resolve(""), Template::Modern);
        assert_eq!(Template::resolve("Classic"), Template::Modern);
    }

    #[test]
    fn test_every_template_shows_sample_content() {
        let vm = sample_vm();
        for template in Template::ALL {
            let out = render_plain(template, &vm);
            assert!(out.contains("John"), "{template:?} missing name");
            assert!(out.contains("Tech Corp"), "{template:?} missing company");
            assert!(out.contains("University of Technology"), "{template:?} missing school");
            assert!(out.contains("JavaScript"), "{template:?} missing skills");
            assert!(!out.contains('\u{1b}'), "{template:?} emitted escapes");
        }
    }

    #[test]
    fn test_blank_resume_omits_sections() {
        let vm = viewmodel::compute(&Resume::blank(), BuilderTab::default());
        for template in Template::ALL {
            let out = render_plain(template, &vm).to_lowercase();
            assert!(!out.contains("experience"), "{template:?} rendered empty section");
            assert!(!out.contains("skills"), "{template:?} rendered empty section");
        }
    }

    #[test]
    fn test_lines_fit_canvas_width() {
        let vm = sample_vm();
        for template in Template::ALL {
            let out = render_plain(template, &vm);
            for line in out.lines() {
                assert!(line.chars().count() <= 80, "{template:?}: {line}");
            }
        }
    }
}
