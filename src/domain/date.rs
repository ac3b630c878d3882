//! Date values for experience and education entries.
//!
//! Entry dates arrive in two shapes: a structured calendar date, or the raw
//! text of a date input field (usually `YYYY-MM-DD`, sometimes empty while the
//! user is still typing). [`DateInput`] accepts either on write. The store
//! normalizes every input into an [`EntryDate`] so readers only ever see one
//! canonical form.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A date as supplied by a caller: structured, or raw field text.
///
/// Deserializes untagged, so `"2020-01-01"` becomes [`DateInput::Date`] and
/// anything that is not a plain ISO date (including `""`) is kept as
/// [`DateInput::Raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Raw(String),
}

impl Default for DateInput {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for DateInput {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl DateInput {
    /// Normalizes the input into the canonical stored form.
    ///
    /// Raw text that is empty or cannot be parsed yields an empty date rather
    /// than an error.
    #[must_use]
    pub fn normalize(&self) -> EntryDate {
        match self {
            Self::Date(date) => EntryDate::from(*date),
            Self::Raw(raw) => EntryDate(parse_raw(raw)),
        }
    }
}

/// Deserializes a patch date where an explicit `null` clears the field.
///
/// Used together with `#[serde(default)]`: an absent key stays `None` and
/// leaves the stored date alone, while `null` becomes an empty raw input.
pub(crate) fn clearable<'de, D>(deserializer: D) -> Result<Option<DateInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateInput>::deserialize(deserializer).map(|date| Some(date.unwrap_or_default()))
}

/// Canonical stored date: a calendar date, or empty.
///
/// Serializes as an ISO `YYYY-MM-DD` string, or `null` when empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryDate(Option<NaiveDate>);

impl EntryDate {
    /// An empty date.
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn get(&self) -> Option<NaiveDate> {
        self.0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Builds a date from year, month and day, empty if the triple is invalid.
    #[must_use]
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day))
    }

    /// ISO text suitable for a date input field, `""` when empty.
    #[must_use]
    pub fn to_input_value(&self) -> String {
        self.0
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        Self(Some(date))
    }
}

/// Parses raw date text in the shapes a date field or a serialized timestamp
/// produce. Returns `None` for blank or unrecognized input.
fn parse_raw(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    // Month inputs (`YYYY-MM`) carry no day; anchor them on the first.
    let date = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok();
    if date.is_none() {
        tracing::debug!(raw = %raw, "unparseable date input, storing empty date");
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_string_normalizes() {
        let date = DateInput::from("2020-01-01").normalize();
        assert_eq!(date, EntryDate::ymd(2020, 1, 1));
    }

    #[test]
    fn test_structured_and_raw_agree() {
        let structured = DateInput::Date(NaiveDate::from_ymd_opt(2017, 3, 15).unwrap());
        let raw = DateInput::from("2017-03-15");
        assert_eq!(structured.normalize(), raw.normalize());
    }

    #[test]
    fn test_empty_and_garbage_are_empty() {
        assert!(DateInput::from("").normalize().is_empty());
        assert!(DateInput::from("   ").normalize().is_empty());
        assert!(DateInput::from("not a date").normalize().is_empty());
        assert!(DateInput::from("2021-13-40").normalize().is_empty());
    }

    #[test]
    fn test_timestamp_and_month_inputs() {
        assert_eq!(
            DateInput::from("2023-01-01T00:00:00.000Z").normalize(),
            EntryDate::ymd(2023, 1, 1)
        );
        assert_eq!(
            DateInput::from("2019-12").normalize(),
            EntryDate::ymd(2019, 12, 1)
        );
    }

    #[test]
    fn test_untagged_deserialization() {
        let date: DateInput = serde_json::from_str("\"2020-01-01\"").unwrap();
        assert!(matches!(date, DateInput::Date(_)));

        let raw: DateInput = serde_json::from_str("\"\"").unwrap();
        assert_eq!(raw, DateInput::Raw(String::new()));
    }

    #[test]
    fn test_null_patch_date_clears() {
        #[derive(Deserialize)]
        struct Patch {
            #[serde(default, deserialize_with = "clearable")]
            date: Option<DateInput>,
        }

        let cleared: Patch = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert_eq!(cleared.date, Some(DateInput::default()));

        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.date, None);

        let set: Patch = serde_json::from_str(r#"{"date": "2020-01-01"}"#).unwrap();
        assert!(matches!(set.date, Some(DateInput::Date(_))));
    }

    #[test]
    fn test_input_value_round_trip() {
        assert_eq!(EntryDate::ymd(2015, 5, 20).to_input_value(), "2015-05-20");
        assert_eq!(EntryDate::empty().to_input_value(), "");
    }
}
