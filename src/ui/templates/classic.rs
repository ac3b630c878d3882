//! Classic: centered header, uppercase headings underlined in the accent, and
//! entries that lead with the employer rather than the role.

use super::entry_break;
use crate::ui::canvas::{Canvas, Style};
use crate::ui::viewmodel::PreviewViewModel;

pub(super) fn render(vm: &PreviewViewModel, canvas: &mut Canvas<'_>) {
    canvas.centered(Style::Bold, &vm.full_name);
    if !vm.contacts.is_empty() {
        canvas.centered(Style::Muted, &vm.contacts.join(" • "));
    }

    if !vm.experience.is_empty() {
        heading(canvas, "EXPERIENCE");
        for (i, exp) in vm.experience.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Bold, &exp.company), (Style::Muted, &exp.period));
            canvas.line(Style::Italic, &exp.position);
            canvas.wrapped(Style::Plain, &exp.description, 0);
        }
    }

    if !vm.education.is_empty() {
        heading(canvas, "EDUCATION");
        for (i, edu) in vm.education.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Bold, &edu.institution), (Style::Muted, &edu.graduated));
            canvas.line(Style::Plain, &edu.title);
        }
    }

    if !vm.skills.is_empty() {
        heading(canvas, "SKILLS");
        canvas.wrapped(Style::Plain, &vm.skills.join(", "), 0);
    }
}

fn heading(canvas: &mut Canvas<'_>, title: &str) {
    canvas.blank();
    canvas.line(Style::AccentBold, title);
    canvas.rule('─');
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{render_plain, sample_vm};
    use super::super::Template;

    #[test]
    fn test_centered_header_and_company_first() {
        let out = render_plain(Template::Classic, &sample_vm());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim(), "John Doe");
        assert!(lines[0].starts_with(' '));
        assert!(lines[1].contains("john@example.com • +1 234 567 890 • New York, NY"));

        let company = out.find("Tech Corp").unwrap();
        let position = out.find("Senior Developer").unwrap();
        assert!(company < position);
        assert!(out.contains("JavaScript, React, TypeScript"));
    }
}
