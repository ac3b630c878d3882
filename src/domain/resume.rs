//! The resume aggregate and its partial updates.
//!
//! A [`Resume`] is plain data. Each nested record has a matching `*Patch`
//! type whose `Option` fields describe a shallow merge: `Some` overwrites,
//! `None` leaves the field alone. Applying the same patch twice gives the same
//! result as applying it once.

use serde::{Deserialize, Serialize};

use super::date::{DateInput, EntryDate};
use super::style::StyleCustomizations;

/// Template id of a blank resume.
pub const DEFAULT_TEMPLATE: &str = "modern";

/// Contact details shown in the resume header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl PersonalInfo {
    pub fn merge(&mut self, patch: &PersonalInfoPatch) {
        merge_field(&mut self.first_name, patch.first_name.as_ref());
        merge_field(&mut self.last_name, patch.last_name.as_ref());
        merge_field(&mut self.email, patch.email.as_ref());
        merge_field(&mut self.phone, patch.phone.as_ref());
        merge_field(&mut self.location, patch.location.as_ref());
    }

    /// `"First Last"`, trimmed so a missing half leaves no stray space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// One position held, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: EntryDate,
    pub end_date: EntryDate,
    pub description: String,
}

impl ExperienceEntry {
    pub fn merge(&mut self, patch: &ExperiencePatch) {
        merge_field(&mut self.company, patch.company.as_ref());
        merge_field(&mut self.position, patch.position.as_ref());
        if let Some(start) = &patch.start_date {
            self.start_date = start.normalize();
        }
        if let Some(end) = &patch.end_date {
            self.end_date = end.normalize();
        }
        merge_field(&mut self.description, patch.description.as_ref());
    }
}

/// Experience fields supplied on creation; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub start_date: DateInput,
    pub end_date: DateInput,
    pub description: String,
}

impl NewExperience {
    #[must_use]
    pub fn into_entry(self, id: String) -> ExperienceEntry {
        ExperienceEntry {
            id,
            company: self.company,
            position: self.position,
            start_date: self.start_date.normalize(),
            end_date: self.end_date.normalize(),
            description: self.description,
        }
    }

    /// Applies a patch to an unsaved draft.
    pub fn merge(&mut self, patch: &ExperiencePatch) {
        merge_field(&mut self.company, patch.company.as_ref());
        merge_field(&mut self.position, patch.position.as_ref());
        if let Some(start) = &patch.start_date {
            self.start_date = start.clone();
        }
        if let Some(end) = &patch.end_date {
            self.end_date = end.clone();
        }
        merge_field(&mut self.description, patch.description.as_ref());
    }
}

/// Partial experience update. A date key set to `null` clears that date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    #[serde(deserialize_with = "crate::domain::date::clearable")]
    pub start_date: Option<DateInput>,
    #[serde(deserialize_with = "crate::domain::date::clearable")]
    pub end_date: Option<DateInput>,
    pub description: Option<String>,
}

/// One degree or qualification, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: EntryDate,
}

impl EducationEntry {
    pub fn merge(&mut self, patch: &EducationPatch) {
        merge_field(&mut self.institution, patch.institution.as_ref());
        merge_field(&mut self.degree, patch.degree.as_ref());
        merge_field(&mut self.field, patch.field.as_ref());
        if let Some(graduated) = &patch.graduation_date {
            self.graduation_date = graduated.normalize();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEducation {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: DateInput,
}

impl NewEducation {
    #[must_use]
    pub fn into_entry(self, id: String) -> EducationEntry {
        EducationEntry {
            id,
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            graduation_date: self.graduation_date.normalize(),
        }
    }

    pub fn merge(&mut self, patch: &EducationPatch) {
        merge_field(&mut self.institution, patch.institution.as_ref());
        merge_field(&mut self.degree, patch.degree.as_ref());
        merge_field(&mut self.field, patch.field.as_ref());
        if let Some(graduated) = &patch.graduation_date {
            self.graduation_date = graduated.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    #[serde(deserialize_with = "crate::domain::date::clearable")]
    pub graduation_date: Option<DateInput>,
}

/// The single aggregate describing one resume and its presentation choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub user_id: String,
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    /// Any string is accepted; renderers fall back to `modern`.
    pub selected_template: String,
    pub style_customizations: StyleCustomizations,
}

impl Default for Resume {
    fn default() -> Self {
        Self::blank()
    }
}

impl Resume {
    /// The empty shape every session starts from.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            personal_info: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            selected_template: DEFAULT_TEMPLATE.to_string(),
            style_customizations: StyleCustomizations::default(),
        }
    }

    /// A fully populated example used to demo the templates.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            id: "1".to_string(),
            user_id: "user123".to_string(),
            personal_info: PersonalInfo {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "+1 234 567 890".to_string(),
                location: "New York, NY".to_string(),
            },
            experience: vec![
                ExperienceEntry {
                    id: "exp1".to_string(),
                    company: "Tech Corp".to_string(),
                    position: "Senior Developer".to_string(),
                    start_date: EntryDate::ymd(2020, 1, 1),
                    end_date: EntryDate::ymd(2023, 1, 1),
                    description: "Led development team of 5 engineers working on front-end web \
                        applications. Implemented new React-based architecture that improved \
                        performance by 35%. Mentored junior developers and established code \
                        review practices."
                        .to_string(),
                },
                ExperienceEntry {
                    id: "exp2".to_string(),
                    company: "Digital Solutions Inc".to_string(),
                    position: "Web Developer".to_string(),
                    start_date: EntryDate::ymd(2017, 3, 15),
                    end_date: EntryDate::ymd(2019, 12, 31),
                    description: "Developed responsive web applications using JavaScript, HTML, \
                        and CSS. Collaborated with designers to implement UI/UX improvements. \
                        Participated in Agile development processes."
                        .to_string(),
                },
            ],
            education: vec![
                EducationEntry {
                    id: "edu1".to_string(),
                    institution: "University of Technology".to_string(),
                    degree: "Master's".to_string(),
                    field: "Computer Science".to_string(),
                    graduation_date: EntryDate::ymd(2017, 5, 15),
                },
                EducationEntry {
                    id: "edu2".to_string(),
                    institution: "State College".to_string(),
                    degree: "Bachelor's".to_string(),
                    field: "Software Engineering".to_string(),
                    graduation_date: EntryDate::ymd(2015, 5, 20),
                },
            ],
            skills: [
                "JavaScript",
                "React",
                "TypeScript",
                "Node.js",
                "CSS",
                "HTML",
                "Git",
                "Agile",
                "UI/UX",
                "RESTful APIs",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            selected_template: DEFAULT_TEMPLATE.to_string(),
            style_customizations: StyleCustomizations::default(),
        }
    }
}

fn merge_field(target: &mut String, value: Option<&String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_merge_is_shallow_and_idempotent() {
        let mut info = PersonalInfo {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..PersonalInfo::default()
        };
        let patch = PersonalInfoPatch {
            last_name: Some("Lovelace".to_string()),
            ..PersonalInfoPatch::default()
        };

        info.merge(&patch);
        let once = info.clone();
        info.merge(&patch);

        assert_eq!(info, once);
        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.last_name, "Lovelace");
        assert_eq!(info.email, "ada@example.com");
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let info = PersonalInfo {
            last_name: "Doe".to_string(),
            ..PersonalInfo::default()
        };
        assert_eq!(info.full_name(), "Doe");
        assert_eq!(PersonalInfo::default().full_name(), "");
    }

    #[test]
    fn test_experience_patch_normalizes_dates() {
        let mut entry = NewExperience {
            company: "Acme".to_string(),
            ..NewExperience::default()
        }
        .into_entry("1".to_string());

        entry.merge(&ExperiencePatch {
            start_date: Some(DateInput::from("2020-01-01")),
            end_date: Some(DateInput::from("")),
            ..ExperiencePatch::default()
        });

        assert_eq!(entry.start_date, EntryDate::ymd(2020, 1, 1));
        assert!(entry.end_date.is_empty());
        assert_eq!(entry.company, "Acme");
    }

    #[test]
    fn test_patch_accepts_partial_json() {
        let patch: ExperiencePatch =
            serde_json::from_str(r#"{"description": "x"}"#).unwrap();
        assert_eq!(patch.description.as_deref(), Some("x"));
        assert!(patch.company.is_none());
    }

    #[test]
    fn test_sample_has_unique_ids() {
        let sample = Resume::sample();
        assert_eq!(sample.experience.len(), 2);
        assert_eq!(sample.education.len(), 2);
        assert_eq!(sample.skills.len(), 10);
        assert_ne!(sample.experience[0].id, sample.experience[1].id);
    }
}
