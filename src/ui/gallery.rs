//! Template gallery listing.
//!
//! Shown when the user browses templates. The currently applied template is
//! marked; an unknown stored id marks Modern, matching what the preview shows.

use crate::ui::canvas::{Canvas, Style};
use crate::ui::templates::Template;
use crate::ui::PreviewSettings;

/// Renders the gallery with `selected` marked.
#[must_use]
pub fn render_gallery(selected: Template, accent: &str, settings: &PreviewSettings) -> String {
    let mut canvas = Canvas::new(settings.width, settings.color, accent, &settings.theme);

    canvas.line(Style::Bold, "Choose a Template");
    canvas.line(
        Style::Muted,
        "Select a template that best represents your professional style",
    );

    for template in Template::ALL {
        canvas.blank();
        let marker = if template == selected { "● " } else { "○ " };
        let title = format!("{marker}{}", template.name());
        let style = if template == selected { Style::AccentBold } else { Style::Bold };
        canvas.spread((style, &title), (Style::Muted, template.id()));
        canvas.wrapped(Style::Plain, template.description(), 2);
    }

    canvas.finish()
}
