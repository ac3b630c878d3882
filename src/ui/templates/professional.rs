//! Professional: bold name, pipe-separated contacts, uppercase headings over
//! an accent underline the width of the heading.

use super::entry_break;
use crate::ui::canvas::{Canvas, Style};
use crate::ui::viewmodel::PreviewViewModel;

pub(super) fn render(vm: &PreviewViewModel, canvas: &mut Canvas<'_>) {
    canvas.line(Style::Bold, &vm.full_name);
    if !vm.contacts.is_empty() {
        canvas.line(Style::Muted, &vm.contacts.join(" | "));
    }

    if !vm.experience.is_empty() {
        heading(canvas, "PROFESSIONAL EXPERIENCE");
        for (i, exp) in vm.experience.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Bold, &exp.position), (Style::Muted, &exp.period));
            canvas.line(Style::Italic, &exp.company);
            canvas.wrapped(Style::Plain, &exp.description, 0);
        }
    }

    if !vm.education.is_empty() {
        heading(canvas, "EDUCATION");
        for (i, edu) in vm.education.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Bold, &edu.title), (Style::Muted, &edu.graduated));
            canvas.line(Style::Italic, &edu.institution);
        }
    }

    if !vm.skills.is_empty() {
        heading(canvas, "SKILLS");
        canvas.wrapped(Style::Plain, &vm.skills.join(" • "), 0);
    }
}

fn heading(canvas: &mut Canvas<'_>, title: &str) {
    canvas.blank();
    canvas.line(Style::Bold, title);
    let underline = "▔".repeat(title.chars().count());
    canvas.line(Style::Accent, &underline);
}
