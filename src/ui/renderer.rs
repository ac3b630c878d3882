//! Top-level rendering coordinator.
//!
//! Produces the full preview as a string: a status line describing the
//! applied style, the template body (or an empty-state hint), and the footer
//! for the active builder tab. The caller decides where the string goes.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `PreviewViewModel`
//! 2. **Template Rendering**: Delegate the body to the resolved [`Template`]
//!
//! # Example
//!
//! ```rust
//! use cvforge::app::AppState;
//! use cvforge::ui::render;
//!
//! let state = AppState::default();
//! let preview = render(&state);
//! assert!(preview.contains("Modern"));
//! ```
//!
//! [`Template`]: crate::ui::Template

use crate::app::AppState;
use crate::ui::canvas::{Canvas, Style};
use crate::ui::viewmodel::PreviewViewModel;
use crate::ui::PreviewSettings;

const EMPTY_HINT: &str = "Your resume is empty. Load the sample or start filling in the forms.";

/// Renders the preview for the current state.
#[must_use]
pub fn render(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.preview)
}

/// Renders a pre-computed view model.
///
/// Empty resumes still get the status line and footer so the applied style
/// stays visible.
#[must_use]
pub fn render_viewmodel(vm: &PreviewViewModel, settings: &PreviewSettings) -> String {
    let _span = tracing::debug_span!(
        "render",
        template = vm.template.id(),
        width = settings.width,
        color = settings.color
    )
    .entered();

    let mut canvas = Canvas::new(settings.width, settings.color, &vm.accent, &settings.theme);

    canvas.line(Style::Muted, &status_line(vm));
    separator(&mut canvas);

    if vm.is_empty() {
        canvas.blank();
        canvas.centered(Style::Muted, EMPTY_HINT);
        canvas.blank();
    } else {
        vm.template.render(vm, &mut canvas);
    }

    separator(&mut canvas);
    canvas.line(
        Style::Muted,
        &format!("[{}] {}", vm.footer.tab, vm.footer.hint),
    );

    canvas.finish()
}

/// `"Modern · Inter · 12px · line height 1.50"`.
fn status_line(vm: &PreviewViewModel) -> String {
    let family = vm
        .font_family
        .split(',')
        .next()
        .unwrap_or_default()
        .trim();

    format!(
        "{} · {} · {}px · line height {:.2}",
        vm.template.name(),
        family,
        vm.font_px,
        vm.line_height
    )
}

fn separator(canvas: &mut Canvas<'_>) {
    let line = "─".repeat(canvas.width());
    canvas.line(Style::Border, &line);
}
