//! Modern: accent name on the left, contacts stacked on the right, an accent
//! rule, then sections with accent headings. Skills are drawn as chips.

use super::{entry_break, skill_items};
use crate::ui::canvas::{Canvas, Style};
use crate::ui::viewmodel::PreviewViewModel;

pub(super) fn render(vm: &PreviewViewModel, canvas: &mut Canvas<'_>) {
    let mut contacts = vm.contacts.iter();
    let first = contacts.next().map_or("", String::as_str);
    canvas.spread((Style::AccentBold, &vm.full_name), (Style::Muted, first));
    for contact in contacts {
        canvas.right(Style::Muted, contact);
    }
    canvas.rule('━');

    if !vm.experience.is_empty() {
        canvas.blank();
        canvas.line(Style::AccentBold, "Professional Experience");
        for (i, exp) in vm.experience.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Bold, &exp.position), (Style::Muted, &exp.period));
            canvas.line(Style::Plain, &exp.company);
            canvas.wrapped(Style::Muted, &exp.description, 0);
        }
    }

    if !vm.education.is_empty() {
        canvas.blank();
        canvas.line(Style::AccentBold, "Education");
        for (i, edu) in vm.education.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Bold, &edu.title), (Style::Muted, &edu.graduated));
            canvas.line(Style::Plain, &edu.institution);
        }
    }

    if !vm.skills.is_empty() {
        canvas.blank();
        canvas.line(Style::AccentBold, "Skills");
        let chips = skill_items(canvas, &vm.skills, Style::Banner, true);
        canvas.flow(&chips, " ");
    }
}
