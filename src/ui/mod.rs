//! Preview rendering layer.
//!
//! This module turns application state into the live resume preview: a
//! string of ANSI-styled (or plain) lines laid out by one of the six
//! templates.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → PreviewViewModel → Template::render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready snapshot of the resume
//! - [`format`]: Date, font size, and spacing formatting
//! - [`renderer`]: Top-level rendering coordinator
//! - [`templates`]: The six resume layouts
//! - [`gallery`]: Template catalogue listing
//! - [`canvas`]: Fixed-width line builder shared by all layouts
//! - [`theme`]: Chrome colors and ANSI escape sequence generation

pub mod canvas;
pub mod format;
pub mod gallery;
pub mod renderer;
pub mod templates;
pub mod theme;
pub mod viewmodel;

pub use gallery::render_gallery;
pub use renderer::{render, render_viewmodel};
pub use templates::Template;
pub use theme::Theme;
pub use viewmodel::{EducationItem, ExperienceItem, FooterInfo, PreviewViewModel};

/// Default preview width in columns.
pub const DEFAULT_WIDTH: usize = 80;

/// Where and how the preview is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSettings {
    /// Line width in columns. Values under 20 are raised to 20.
    pub width: usize,
    /// Emit ANSI escapes.
    pub color: bool,
    pub theme: Theme,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: true,
            theme: Theme::default(),
        }
    }
}
