//! Event handling and state transition logic.
//!
//! Events are what the builder page's controls produce: field edits, button
//! presses, template picks. [`handle_event`] maps each one onto form-buffer
//! updates and store operations, and reports whether the preview must be
//! re-rendered plus any [`Action`]s for the front end.
//!
//! Events deserialize from JSON with a `type` tag, so a front end can feed
//! them as a line-delimited stream:
//!
//! ```json
//! {"type": "edit_personal", "firstName": "Ada"}
//! {"type": "edit_experience_draft", "company": "Acme", "position": "Engineer"}
//! {"type": "submit_experience"}
//! {"type": "select_template", "template": "classic"}
//! ```
//!
//! # Example
//!
//! ```rust
//! use cvforge::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::LoadSample);
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! ```

use serde::Deserialize;

use super::actions::Action;
use super::forms::{spacing_from_slider, remove_skill};
use super::modes::BuilderTab;
use super::state::AppState;
use crate::domain::{
    EducationPatch, ExperiencePatch, FontFamily, FontSize, PersonalInfoPatch, StylePatch,
};
use crate::ui::templates::Template;

/// Input from the builder page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Edits one or more personal info fields.
    EditPersonal(PersonalInfoPatch),

    /// Edits the unsaved "add experience" form.
    EditExperienceDraft(ExperiencePatch),
    /// Commits the experience draft if company and position are set.
    SubmitExperience,
    /// Edits a saved experience entry in place.
    EditExperience { id: String, patch: ExperiencePatch },
    RemoveExperience { id: String },

    EditEducationDraft(EducationPatch),
    /// Commits the education draft if institution and degree are set.
    SubmitEducation,
    EditEducation { id: String, patch: EducationPatch },
    RemoveEducation { id: String },

    /// Replaces the pending text of the skill input.
    SetSkillInput { text: String },
    /// Adds the pending skill if it is new and non-blank.
    AddSkill,
    RemoveSkill { skill: String },

    SelectTemplate { template: String },
    BrowseTemplates,

    SetPrimaryColor { color: String },
    SetFontFamily { font: FontFamily },
    SetFontSize { size: FontSize },
    /// Raw slider position; clamped and snapped before it reaches the store.
    SetSpacing { value: f64 },

    SwitchTab { tab: BuilderTab },
    NextTab,
    PreviousTab,

    LoadSample,
    Reset,
    DownloadPdf,
    Login,
}

/// Processes an event and returns `(needs_render, actions)`.
///
/// Store operations never fail, so neither does this.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::EditPersonal(patch) => {
            state.store.update_personal_info(patch);
            (true, vec![])
        }

        Event::EditExperienceDraft(patch) => {
            state.forms.experience.edit(patch);
            (false, vec![])
        }
        Event::SubmitExperience => {
            let Some(entry) = state.forms.experience.submit() else {
                tracing::debug!("experience draft incomplete, ignoring submit");
                return (false, vec![]);
            };
            let id = state.store.add_experience(entry);
            tracing::debug!(id = %id, "experience added");
            (true, vec![])
        }
        Event::EditExperience { id, patch } => {
            state.store.update_experience(id, patch);
            (true, vec![])
        }
        Event::RemoveExperience { id } => {
            state.store.remove_experience(id);
            (true, vec![])
        }

        Event::EditEducationDraft(patch) => {
            state.forms.education.edit(patch);
            (false, vec![])
        }
        Event::SubmitEducation => {
            let Some(entry) = state.forms.education.submit() else {
                tracing::debug!("education draft incomplete, ignoring submit");
                return (false, vec![]);
            };
            let id = state.store.add_education(entry);
            tracing::debug!(id = %id, "education added");
            (true, vec![])
        }
        Event::EditEducation { id, patch } => {
            state.store.update_education(id, patch);
            (true, vec![])
        }
        Event::RemoveEducation { id } => {
            state.store.remove_education(id);
            (true, vec![])
        }

        Event::SetSkillInput { text } => {
            state.forms.skill.text.clone_from(text);
            (false, vec![])
        }
        Event::AddSkill => {
            let Some(skills) = state.forms.skill.add_skill(&state.store.resume().skills) else {
                tracing::debug!(text = %state.forms.skill.text, "skill blank or already present");
                return (false, vec![]);
            };
            state.store.update_skills(skills);
            (true, vec![])
        }
        Event::RemoveSkill { skill } => {
            let skills = remove_skill(&state.store.resume().skills, skill);
            state.store.update_skills(skills);
            (true, vec![])
        }

        Event::SelectTemplate { template } => {
            state.store.update_template(template);
            let resolved = Template::resolve(template);
            (
                true,
                vec![Action::notify(
                    "Template Selected",
                    format!("{} template is now applied to your resume.", resolved.name()),
                )],
            )
        }
        Event::BrowseTemplates => (false, vec![Action::ShowTemplates]),

        Event::SetPrimaryColor { color } => {
            state.store.update_style_customizations(&StylePatch {
                primary_color: Some(color.clone()),
                ..StylePatch::default()
            });
            (true, vec![])
        }
        Event::SetFontFamily { font } => {
            state.store.update_style_customizations(&StylePatch {
                font_family: Some(font.clone()),
                ..StylePatch::default()
            });
            (true, vec![])
        }
        Event::SetFontSize { size } => {
            state.store.update_style_customizations(&StylePatch {
                font_size: Some(size.clone()),
                ..StylePatch::default()
            });
            (true, vec![])
        }
        Event::SetSpacing { value } => {
            let spacing = spacing_from_slider(*value);
            tracing::debug!(raw = value, spacing, "spacing slider moved");
            state.store.update_style_customizations(&StylePatch {
                spacing: Some(spacing),
                ..StylePatch::default()
            });
            (true, vec![])
        }

        Event::SwitchTab { tab } => {
            state.active_tab = *tab;
            (true, vec![])
        }
        Event::NextTab => {
            state.active_tab = state.active_tab.next();
            (true, vec![])
        }
        Event::PreviousTab => {
            state.active_tab = state.active_tab.previous();
            (true, vec![])
        }

        Event::LoadSample => {
            state.store.load_dummy_resume();
            (
                true,
                vec![Action::notify(
                    "Sample Resume Loaded",
                    "A sample resume has been loaded for you to edit.",
                )],
            )
        }
        Event::Reset => {
            state.store.reset_resume();
            state.forms.clear();
            (
                true,
                vec![Action::notify(
                    "Resume Reset",
                    "Your resume has been reset to blank.",
                )],
            )
        }
        Event::DownloadPdf => (
            false,
            vec![Action::notify(
                "Download Feature",
                "PDF download functionality will be implemented in the next version.",
            )],
        ),
        Event::Login => (
            false,
            vec![Action::notify(
                "Login Feature",
                "Login functionality will be implemented in the next version.",
            )],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_decode_from_json() {
        let event: Event =
            serde_json::from_str(r#"{"type": "edit_personal", "firstName": "Ada"}"#).unwrap();
        assert_eq!(
            event,
            Event::EditPersonal(PersonalInfoPatch {
                first_name: Some("Ada".to_string()),
                ..PersonalInfoPatch::default()
            })
        );

        let event: Event = serde_json::from_str(
            r#"{"type": "edit_experience", "id": "42", "patch": {"description": "x"}}"#,
        )
        .unwrap();
        assert!(matches!(event, Event::EditExperience { ref id, .. } if id == "42"));

        let event: Event =
            serde_json::from_str(r#"{"type": "set_font_size", "size": "large"}"#).unwrap();
        assert_eq!(event, Event::SetFontSize { size: FontSize::Large });

        let event: Event =
            serde_json::from_str(r#"{"type": "switch_tab", "tab": "skills"}"#).unwrap();
        assert_eq!(event, Event::SwitchTab { tab: BuilderTab::Skills });
    }

    #[test]
    fn test_draft_edits_do_not_render() {
        let mut state = AppState::default();
        let (render, actions) = handle_event(
            &mut state,
            &Event::EditExperienceDraft(ExperiencePatch {
                company: Some("Acme".to_string()),
                ..ExperiencePatch::default()
            }),
        );
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.store.revision(), 0);
    }

    #[test]
    fn test_incomplete_submit_is_ignored() {
        let mut state = AppState::default();
        let (render, _) = handle_event(&mut state, &Event::SubmitEducation);
        assert!(!render);
        assert!(state.store.resume().education.is_empty());
    }

    #[test]
    fn test_unknown_template_notifies_fallback_name() {
        let mut state = AppState::default();
        let (_, actions) = handle_event(
            &mut state,
            &Event::SelectTemplate {
                template: "baroque".to_string(),
            },
        );
        assert_eq!(state.store.resume().selected_template, "baroque");
        assert_eq!(
            actions,
            vec![Action::notify(
                "Template Selected",
                "Modern template is now applied to your resume."
            )]
        );
    }

    #[test]
    fn test_stub_buttons_only_notify() {
        let mut state = AppState::default();
        for event in [Event::DownloadPdf, Event::Login] {
            let (render, actions) = handle_event(&mut state, &event);
            assert!(!render);
            assert_eq!(actions.len(), 1);
        }
        assert_eq!(state.store.revision(), 0);
    }
}
