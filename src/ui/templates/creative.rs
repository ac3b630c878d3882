//! Creative: the header is a full-width accent banner.

use super::{entry_break, skill_items};
use crate::ui::canvas::{Canvas, Style};
use crate::ui::viewmodel::PreviewViewModel;

pub(super) fn render(vm: &PreviewViewModel, canvas: &mut Canvas<'_>) {
    canvas.banner(&vm.full_name);
    if !vm.contacts.is_empty() {
        canvas.banner(&vm.contacts.join("  ·  "));
    }

    if !vm.experience.is_empty() {
        canvas.blank();
        canvas.line(Style::AccentBold, "Work Experience");
        for (i, exp) in vm.experience.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.line(Style::Bold, &exp.position);
            canvas.spread((Style::Accent, &exp.company), (Style::Muted, &exp.period));
            canvas.wrapped(Style::Plain, &exp.description, 2);
        }
    }

    if !vm.education.is_empty() {
        canvas.blank();
        canvas.line(Style::AccentBold, "Education");
        for (i, edu) in vm.education.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.line(Style::Bold, &edu.title);
            canvas.spread((Style::Accent, &edu.institution), (Style::Muted, &edu.graduated));
        }
    }

    if !vm.skills.is_empty() {
        canvas.blank();
        canvas.line(Style::AccentBold, "Skills");
        let items = skill_items(canvas, &vm.skills, Style::Accent, false);
        canvas.flow(&items, "  ");
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{render_plain, sample_vm};
    use super::super::Template;

    #[test]
    fn test_banner_and_indented_description() {
        let out = render_plain(Template::Creative, &sample_vm());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim(), "John Doe");
        assert_eq!(lines[0].chars().count(), 80);
        assert!(out.contains("Work Experience"));
        assert!(out.contains("\n  Led development team"));
    }
}
