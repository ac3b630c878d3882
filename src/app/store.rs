//! The resume state store.
//!
//! [`ResumeStore`] owns exactly one [`Resume`] and exposes the only sanctioned
//! ways to change it. Every operation is total: unknown ids are ignored,
//! unknown template or style values are stored verbatim, and nothing returns an
//! error.
//!
//! # Observation
//!
//! Each operation call is one transition. After every call the store bumps its
//! [`revision`](ResumeStore::revision) and runs the registered observers with
//! the new snapshot, inline and in registration order. Readers that prefer to
//! poll can compare revisions instead.
//!
//! # Example
//!
//! ```rust
//! use cvforge::app::ResumeStore;
//! use cvforge::domain::{NewExperience, PersonalInfoPatch};
//!
//! let mut store = ResumeStore::new();
//! store.update_personal_info(&PersonalInfoPatch {
//!     first_name: Some("Ada".to_string()),
//!     ..Default::default()
//! });
//! let id = store.add_experience(NewExperience {
//!     company: "Acme".to_string(),
//!     position: "Engineer".to_string(),
//!     ..Default::default()
//! });
//! store.remove_experience(&id);
//! assert_eq!(store.revision(), 3);
//! ```

use std::fmt;

use crate::domain::{
    EducationPatch, ExperiencePatch, NewEducation, NewExperience, PersonalInfoPatch, Resume,
    StylePatch,
};

/// Handle returned by [`ResumeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(&Resume)>;

/// Millisecond wall clock used for entry ids.
pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Owner of the single live [`Resume`].
pub struct ResumeStore {
    resume: Resume,
    revision: u64,
    last_issued_id: i64,
    clock: Clock,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: usize,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResumeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeStore")
            .field("resume", &self.resume)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl ResumeStore {
    /// Creates a store holding a blank resume.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(system_clock)
    }

    /// Creates a store that draws entry ids from `clock`.
    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            resume: Resume::blank(),
            revision: 0,
            last_issued_id: 0,
            clock,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub const fn resume(&self) -> &Resume {
        &self.resume
    }

    /// Number of transitions applied since creation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers an observer run after every transition.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Resume) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn update_personal_info(&mut self, patch: &PersonalInfoPatch) {
        let _span = tracing::debug_span!("update_personal_info").entered();
        self.resume.personal_info.merge(patch);
        self.commit("update_personal_info");
    }

    /// Appends an entry with a fresh id and returns that id.
    pub fn add_experience(&mut self, entry: NewExperience) -> String {
        let _span = tracing::debug_span!("add_experience", company = %entry.company).entered();
        let id = self.issue_id(|resume, id| resume.experience.iter().any(|e| e.id == id));
        self.resume.experience.push(entry.into_entry(id.clone()));
        self.commit("add_experience");
        id
    }

    pub fn update_experience(&mut self, id: &str, patch: &ExperiencePatch) {
        let _span = tracing::debug_span!("update_experience", id = %id).entered();
        match self.resume.experience.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.merge(patch),
            None => tracing::debug!("no experience entry with this id"),
        }
        self.commit("update_experience");
    }

    pub fn remove_experience(&mut self, id: &str) {
        let _span = tracing::debug_span!("remove_experience", id = %id).entered();
        self.resume.experience.retain(|e| e.id != id);
        self.commit("remove_experience");
    }

    /// Appends an entry with a fresh id and returns that id.
    pub fn add_education(&mut self, entry: NewEducation) -> String {
        let _span =
            tracing::debug_span!("add_education", institution = %entry.institution).entered();
        let id = self.issue_id(|resume, id| resume.education.iter().any(|e| e.id == id));
        self.resume.education.push(entry.into_entry(id.clone()));
        self.commit("add_education");
        id
    }

    pub fn update_education(&mut self, id: &str, patch: &EducationPatch) {
        let _span = tracing::debug_span!("update_education", id = %id).entered();
        match self.resume.education.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.merge(patch),
            None => tracing::debug!("no education entry with this id"),
        }
        self.commit("update_education");
    }

    pub fn remove_education(&mut self, id: &str) {
        let _span = tracing::debug_span!("remove_education", id = %id).entered();
        self.resume.education.retain(|e| e.id != id);
        self.commit("remove_education");
    }

    /// Replaces the skill list verbatim. Callers trim and deduplicate.
    pub fn update_skills(&mut self, skills: Vec<String>) {
        let _span = tracing::debug_span!("update_skills", count = skills.len()).entered();
        self.resume.skills = skills;
        self.commit("update_skills");
    }

    /// Stores any template id; unknown ids are resolved at render time.
    pub fn update_template(&mut self, template: &str) {
        let _span = tracing::debug_span!("update_template", template = %template).entered();
        template.clone_into(&mut self.resume.selected_template);
        self.commit("update_template");
    }

    /// Shallow-merges style fields. Spacing is not clamped here.
    pub fn update_style_customizations(&mut self, patch: &StylePatch) {
        let _span = tracing::debug_span!("update_style_customizations").entered();
        self.resume.style_customizations.merge(patch);
        self.commit("update_style_customizations");
    }

    /// Discards every edit and returns to the blank shape.
    pub fn reset_resume(&mut self) {
        let _span = tracing::debug_span!("reset_resume").entered();
        self.resume = Resume::blank();
        self.commit("reset_resume");
    }

    /// Replaces the resume with the built-in sample.
    pub fn load_dummy_resume(&mut self) {
        let _span = tracing::debug_span!("load_dummy_resume").entered();
        self.resume = Resume::sample();
        self.commit("load_dummy_resume");
    }

    /// Issues an id from the clock, bumped past anything issued before and
    /// past any id already present in the target collection.
    fn issue_id(&mut self, taken: impl Fn(&Resume, &str) -> bool) -> String {
        let mut candidate = (self.clock)().max(self.last_issued_id.saturating_add(1));
        while taken(&self.resume, candidate.to_string().as_str()) {
            candidate = candidate.saturating_add(1);
        }
        self.last_issued_id = candidate;
        candidate.to_string()
    }

    fn commit(&mut self, operation: &'static str) {
        self.revision += 1;
        tracing::debug!(operation, revision = self.revision, "resume updated");

        let resume = &self.resume;
        for (_, observer) in &mut self.observers {
            observer(resume);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn frozen_clock() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn test_ids_unique_under_frozen_clock() {
        let mut store = ResumeStore::with_clock(frozen_clock);
        let ids: Vec<String> = (0..5)
            .map(|_| store.add_experience(NewExperience::default()))
            .collect();

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut store = ResumeStore::with_clock(frozen_clock);
        let first = store.add_education(NewEducation::default());
        store.remove_education(&first);
        let second = store.add_education(NewEducation::default());
        assert_ne!(first, second);
    }

    #[test]
    fn test_observers_see_every_transition() {
        let mut store = ResumeStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = store.subscribe(move |resume| {
            sink.borrow_mut().push(resume.selected_template.clone());
        });

        store.update_template("classic");
        store.remove_experience("missing");
        store.update_template("creative");

        assert_eq!(*seen.borrow(), vec!["classic", "classic", "creative"]);
        assert_eq!(store.revision(), 3);

        assert!(store.unsubscribe(sub));
        store.reset_resume();
        assert_eq!(seen.borrow().len(), 3);
        assert!(!store.unsubscribe(sub));
    }

    #[test]
    fn test_load_then_reset() {
        let mut store = ResumeStore::new();
        store.load_dummy_resume();
        assert_eq!(store.resume().personal_info.first_name, "John");
        store.reset_resume();
        assert_eq!(*store.resume(), Resume::blank());
    }
}
