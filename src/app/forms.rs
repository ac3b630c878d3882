//! Transient form-input buffers.
//!
//! These hold what the user is typing before it is committed to the store:
//! the pending skill text and the "add new" experience and education drafts.
//! They never touch the store directly; the event handler turns a successful
//! submission into a store operation.

use crate::domain::style::{MAX_SPACING, MIN_SPACING, SPACING_STEP};
use crate::domain::{EducationPatch, ExperiencePatch, NewEducation, NewExperience};

/// All form buffers of the builder page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBuffers {
    pub skill: SkillDraft,
    pub experience: ExperienceDraft,
    pub education: EducationDraft,
}

impl FormBuffers {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Pending text of the "add skill" input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillDraft {
    pub text: String,
}

impl SkillDraft {
    /// Builds the next skill list if the pending text is a new, non-blank
    /// skill. Clears the buffer on success; leaves it untouched otherwise.
    pub fn add_skill(&mut self, current: &[String]) -> Option<Vec<String>> {
        let skill = self.text.trim();
        if skill.is_empty() || current.iter().any(|s| s == skill) {
            return None;
        }

        let mut next = current.to_vec();
        next.push(skill.to_string());
        self.text.clear();
        Some(next)
    }
}

/// Every skill except `skill`, order preserved.
#[must_use]
pub fn remove_skill(current: &[String], skill: &str) -> Vec<String> {
    current.iter().filter(|s| *s != skill).cloned().collect()
}

/// Unsaved "add experience" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub fields: NewExperience,
}

impl ExperienceDraft {
    pub fn edit(&mut self, patch: &ExperiencePatch) {
        self.fields.merge(patch);
    }

    /// Takes the draft if company and position are filled in.
    pub fn submit(&mut self) -> Option<NewExperience> {
        if self.fields.company.is_empty() || self.fields.position.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.fields))
    }
}

/// Unsaved "add education" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDraft {
    pub fields: NewEducation,
}

impl EducationDraft {
    pub fn edit(&mut self, patch: &EducationPatch) {
        self.fields.merge(patch);
    }

    /// Takes the draft if institution and degree are filled in.
    pub fn submit(&mut self) -> Option<NewEducation> {
        if self.fields.institution.is_empty() || self.fields.degree.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.fields))
    }
}

/// Maps a raw slider position onto a valid spacing value: clamped to the
/// slider range and snapped to its step. Non-finite input yields the lower
/// bound.
#[must_use]
pub fn spacing_from_slider(value: f64) -> f64 {
    if !value.is_finite() {
        return MIN_SPACING;
    }
    let snapped = (value.clamp(MIN_SPACING, MAX_SPACING) / SPACING_STEP).round() * SPACING_STEP;
    // Snapping can drift a hair outside the range in floating point.
    (snapped * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateInput;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_skill_is_trimmed_and_buffer_cleared() {
        let mut draft = SkillDraft {
            text: "  Rust  ".to_string(),
        };
        let next = draft.add_skill(&skills(&["Go"])).unwrap();
        assert_eq!(next, skills(&["Go", "Rust"]));
        assert!(draft.text.is_empty());
    }

    #[test]
    fn test_duplicate_and_blank_skills_rejected() {
        let mut draft = SkillDraft {
            text: " Go ".to_string(),
        };
        assert!(draft.add_skill(&skills(&["Go"])).is_none());
        assert_eq!(draft.text, " Go ");

        let mut blank = SkillDraft {
            text: "   ".to_string(),
        };
        assert!(blank.add_skill(&[]).is_none());
    }

    #[test]
    fn test_remove_skill_preserves_order() {
        let next = remove_skill(&skills(&["A", "B", "C"]), "B");
        assert_eq!(next, skills(&["A", "C"]));
    }

    #[test]
    fn test_experience_draft_requires_company_and_position() {
        let mut draft = ExperienceDraft::default();
        draft.edit(&ExperiencePatch {
            company: Some("Acme".to_string()),
            start_date: Some(DateInput::from("2020-01-01")),
            ..ExperiencePatch::default()
        });
        assert!(draft.submit().is_none());

        draft.edit(&ExperiencePatch {
            position: Some("Engineer".to_string()),
            ..ExperiencePatch::default()
        });
        let submitted = draft.submit().unwrap();
        assert_eq!(submitted.company, "Acme");
        assert_eq!(draft.fields, NewExperience::default());
    }

    #[test]
    fn test_education_draft_requires_institution_and_degree() {
        let mut draft = EducationDraft::default();
        draft.edit(&EducationPatch {
            institution: Some("State College".to_string()),
            ..EducationPatch::default()
        });
        assert!(draft.submit().is_none());

        draft.edit(&EducationPatch {
            degree: Some("BSc".to_string()),
            ..EducationPatch::default()
        });
        assert!(draft.submit().is_some());
    }

    #[test]
    fn test_slider_clamps_and_snaps() {
        assert!((spacing_from_slider(0.1) - 0.5).abs() < 1e-9);
        assert!((spacing_from_slider(3.7) - 2.0).abs() < 1e-9);
        assert!((spacing_from_slider(1.23) - 1.2).abs() < 1e-9);
        assert!((spacing_from_slider(f64::NAN) - 0.5).abs() < 1e-9);
    }
}
