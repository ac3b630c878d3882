//! Builder tab state.
//!
//! The builder page shows one form at a time. [`BuilderTab`] tracks which one
//! is active; it has no effect on the resume itself, only on which form the
//! front end presents and which hint line the preview footer shows.

use serde::{Deserialize, Serialize};

/// The form currently shown on the builder page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuilderTab {
    #[default]
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Style,
}

impl BuilderTab {
    /// Tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::PersonalInfo,
        Self::Experience,
        Self::Education,
        Self::Skills,
        Self::Style,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Style => "Style",
        }
    }

    /// The following tab, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The preceding tab, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_wrap_both_ways() {
        assert_eq!(BuilderTab::Style.next(), BuilderTab::PersonalInfo);
        assert_eq!(BuilderTab::PersonalInfo.previous(), BuilderTab::Style);
        assert_eq!(BuilderTab::Experience.next(), BuilderTab::Education);
    }

    #[test]
    fn test_kebab_case_names() {
        let tab: BuilderTab = serde_json::from_str("\"personal-info\"").unwrap();
        assert_eq!(tab, BuilderTab::PersonalInfo);
    }
}
