//! Display formatting shared by every template.
//!
//! All helpers are total. An empty or unparseable date renders as `""`, an
//! unrecognized font size falls back to the large size.

use crate::domain::{DateInput, EntryDate, FontSize};

/// Pixel size used when the stored font size is not one of the known values.
pub const FALLBACK_FONT_PX: u8 = 14;

/// Base line height before the spacing multiplier.
pub const BASE_LINE_HEIGHT: f64 = 1.5;

/// `"Jan 2020"`, or `""` for an empty date.
#[must_use]
pub fn format_month_year(date: &EntryDate) -> String {
    date.get()
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// Formats either date representation the same way.
///
/// # Example
///
/// ```rust
/// use cvforge::domain::DateInput;
/// use cvforge::ui::format::format_date_input;
///
/// assert_eq!(format_date_input(&DateInput::from("2020-01-01")), "Jan 2020");
/// assert_eq!(format_date_input(&DateInput::from("")), "");
/// ```
#[must_use]
pub fn format_date_input(date: &DateInput) -> String {
    format_month_year(&date.normalize())
}

/// `"Jan 2020 - Jan 2023"`. Missing ends are dropped with their dash; two
/// empty dates give `""`.
#[must_use]
pub fn format_period(start: &EntryDate, end: &EntryDate) -> String {
    match (format_month_year(start), format_month_year(end)) {
        (s, e) if s.is_empty() && e.is_empty() => String::new(),
        (s, e) if e.is_empty() => s,
        (s, e) if s.is_empty() => e,
        (s, e) => format!("{s} - {e}"),
    }
}

#[must_use]
pub fn font_px(size: &FontSize) -> u8 {
    size.px().unwrap_or(FALLBACK_FONT_PX)
}

#[must_use]
pub fn line_height(spacing: f64) -> f64 {
    BASE_LINE_HEIGHT * spacing
}

/// Blank lines between entries for a spacing multiplier.
#[must_use]
pub fn entry_gap(spacing: f64) -> usize {
    if spacing < 0.75 {
        0
    } else if spacing < 1.5 {
        1
    } else {
        2
    }
}

/// `"Master's in Computer Science"`, degrading to whichever half is present.
#[must_use]
pub fn degree_title(degree: &str, field: &str) -> String {
    match (degree.is_empty(), field.is_empty()) {
        (false, false) => format!("{degree} in {field}"),
        (false, true) => degree.to_string(),
        (true, false) => field.to_string(),
        (true, true) => String::new(),
    }
}
