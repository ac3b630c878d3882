//! Executive: accent name over a double rule, with skills listed as core
//! competencies in three columns.

use super::entry_break;
use crate::ui::canvas::{truncate, Canvas, Style};
use crate::ui::viewmodel::PreviewViewModel;

const SKILL_COLUMNS: usize = 3;

pub(super) fn render(vm: &PreviewViewModel, canvas: &mut Canvas<'_>) {
    canvas.line(Style::AccentBold, &vm.full_name);
    if !vm.contacts.is_empty() {
        canvas.line(Style::Muted, &vm.contacts.join("  "));
    }
    canvas.rule('═');

    if !vm.experience.is_empty() {
        heading(canvas, "EXECUTIVE EXPERIENCE");
        for (i, exp) in vm.experience.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Bold, &exp.position), (Style::Muted, &exp.period));
            canvas.line(Style::Plain, &exp.company);
            canvas.wrapped(Style::Plain, &exp.description, 0);
        }
    }

    if !vm.education.is_empty() {
        heading(canvas, "EDUCATION");
        for (i, edu) in vm.education.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Bold, &edu.title), (Style::Muted, &edu.graduated));
            canvas.line(Style::Plain, &edu.institution);
        }
    }

    if !vm.skills.is_empty() {
        heading(canvas, "CORE COMPETENCIES");
        skill_columns(canvas, &vm.skills);
    }
}

fn heading(canvas: &mut Canvas<'_>, title: &str) {
    canvas.blank();
    canvas.line(Style::AccentBold, title);
}

/// Row-major grid of `• skill` cells.
fn skill_columns(canvas: &mut Canvas<'_>, skills: &[String]) {
    let cell = canvas.width() / SKILL_COLUMNS;

    for row in skills.chunks(SKILL_COLUMNS) {
        let mut line = String::new();
        for skill in row {
            let text = truncate(&format!("• {skill}"), cell.saturating_sub(1));
            let pad = cell.saturating_sub(text.chars().count());
            line.push_str(&canvas.paint(Style::Plain, &text));
            line.push_str(&" ".repeat(pad));
        }
        canvas.raw(&line);
    }
}
