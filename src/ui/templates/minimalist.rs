//! Minimalist: plain name, letter-spaced headings, and no weight anywhere
//! except the headings.

use super::entry_break;
use crate::ui::canvas::{Canvas, Style};
use crate::ui::viewmodel::PreviewViewModel;

pub(super) fn render(vm: &PreviewViewModel, canvas: &mut Canvas<'_>) {
    canvas.line(Style::Plain, &vm.full_name);
    if !vm.contacts.is_empty() {
        canvas.line(Style::Muted, &vm.contacts.join("   "));
    }

    if !vm.experience.is_empty() {
        heading(canvas, "EXPERIENCE");
        for (i, exp) in vm.experience.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Plain, &exp.position), (Style::Muted, &exp.period));
            canvas.line(Style::Muted, &exp.company);
            canvas.wrapped(Style::Plain, &exp.description, 0);
        }
    }

    if !vm.education.is_empty() {
        heading(canvas, "EDUCATION");
        for (i, edu) in vm.education.iter().enumerate() {
            entry_break(canvas, vm, i);
            canvas.spread((Style::Plain, &edu.title), (Style::Muted, &edu.graduated));
            canvas.line(Style::Muted, &edu.institution);
        }
    }

    if !vm.skills.is_empty() {
        heading(canvas, "SKILLS");
        canvas.wrapped(Style::Plain, &vm.skills.join(" • "), 0);
    }
}

fn heading(canvas: &mut Canvas<'_>, title: &str) {
    canvas.blank();
    canvas.line(Style::Accent, &letter_spaced(title));
}

/// `"SKILLS"` becomes `"S K I L L S"`.
fn letter_spaced(text: &str) -> String {
    let chars: Vec<String> = text.chars().map(String::from).collect();
    chars.join(" ")
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{render_plain, sample_vm};
    use super::super::Template;
    use super::letter_spaced;

    #[test]
    fn test_letter_spacing() {
        assert_eq!(letter_spaced("SKILLS"), "S K I L L S");
        assert_eq!(letter_spaced(""), "");
    }

    #[test]
    fn test_layout() {
        let out = render_plain(Template::Minimalist, &sample_vm());
        assert!(out.starts_with("John Doe\n"));
        assert!(out.contains("john@example.com   +1 234 567 890"));
        assert!(out.contains("E X P E R I E N C E"));
        assert!(out.contains("JavaScript • React"));
    }
}
