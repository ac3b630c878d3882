//! Domain layer: the resume model and its value types.
//!
//! Nothing in here knows about events, terminals, or rendering. The types are
//! plain data with merge helpers; the store in [`crate::app::store`] is the
//! only place that mutates a live [`Resume`].
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`date`]: Dual-representation date input and its canonical form
//! - [`resume`]: The `Resume` aggregate, entries, and partial updates
//! - [`style`]: Style customizations, font enums, and TOML presets

pub mod date;
pub mod error;
pub mod resume;
pub mod style;

pub use date::{DateInput, EntryDate};
pub use error::{CvforgeError, Result};
pub use resume::{
    EducationEntry, EducationPatch, ExperienceEntry, ExperiencePatch, NewEducation,
    NewExperience, PersonalInfo, PersonalInfoPatch, Resume,
};
pub use style::{FontFamily, FontSize, StyleCustomizations, StylePatch, StylePreset};
