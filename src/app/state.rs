//! Application state container.
//!
//! [`AppState`] bundles the resume store with the transient UI state that is
//! not part of the resume: form buffers, the active builder tab, and preview
//! settings. The event handler mutates it; the renderer reads it.

use super::forms::FormBuffers;
use super::modes::BuilderTab;
use super::store::ResumeStore;
use crate::ui::viewmodel::{self, PreviewViewModel};
use crate::ui::PreviewSettings;

/// Everything the builder page holds for one session.
#[derive(Debug, Default)]
pub struct AppState {
    /// The single source of truth for resume content and style.
    pub store: ResumeStore,

    /// What the user is typing but has not committed yet.
    pub forms: FormBuffers,

    /// Which form is shown. Drives the preview footer hint.
    pub active_tab: BuilderTab,

    /// Terminal width and color support for the preview.
    pub preview: PreviewSettings,
}

impl AppState {
    #[must_use]
    pub fn new(store: ResumeStore, preview: PreviewSettings) -> Self {
        Self {
            store,
            forms: FormBuffers::default(),
            active_tab: BuilderTab::default(),
            preview,
        }
    }

    /// Computes the preview view model from the latest resume snapshot.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PreviewViewModel {
        viewmodel::compute(self.store.resume(), self.active_tab)
    }
}
