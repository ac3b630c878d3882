//! cvforge: a resume builder state store with live terminal previews.
//!
//! cvforge keeps one resume in memory and provides:
//! - Partial-merge updates for personal info, experience, education, skills,
//!   template and style, each producing a new snapshot
//! - Observers notified after every state transition
//! - A blank resume and a fully populated sample resume
//! - Six preview templates rendered to ANSI-styled text
//! - Style presets loaded from TOML files

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Event Stream Front End (main.rs)                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Resume store and observers                       │  ← Business logic
//! │  - Form buffers                                     │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐       ┌─────────────────────────┐
//! │ UI Layer (ui/)        │       │ Domain Layer (domain/)  │
//! │ - View model          │       │ - Resume model          │
//! │ - Templates           │       │ - Dates, style, presets │
//! │ - Theming             │       │ - Error types           │
//! └───────────────────────┘       └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber on stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Resume, style, dates, errors)
//! - [`ui`]: Preview rendering with templates and theme support
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! The binary takes `key=value` arguments, optionally backed by a TOML file:
//!
//! ```text
//! cvforge template=classic width=100 sample=true style_file=ocean.toml
//! cvforge config=cvforge.toml trace_level=debug
//! ```
//!
//! # Examples
//!
//! ```rust
//! use cvforge::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     load_sample: true,
//!     ..Config::default()
//! };
//! let mut state = initialize(&config);
//! assert_eq!(state.store.resume().personal_info.first_name, "John");
//!
//! let (render, actions) = handle_event(&mut state, &Event::Reset);
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! assert!(state.store.resume().experience.is_empty());
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, BuilderTab, Event, ResumeStore};
pub use domain::{CvforgeError, Resume, Result};
pub use ui::{PreviewSettings, Theme};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use domain::StylePreset;

/// Front end configuration.
///
/// Values come from `key=value` arguments ([`Config::from_args`]) or a TOML
/// file ([`Config::from_file`]), with arguments layered over the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Template applied at startup. Unknown ids are stored as given and
    /// render as Modern.
    pub template: Option<String>,

    /// Path to a TOML style preset applied at startup.
    pub style_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG`
    /// takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Preview width in columns. Default: 80
    pub preview_width: usize,

    /// Emit ANSI colors. Default: true
    pub color: bool,

    /// Start from the sample resume instead of a blank one.
    pub load_sample: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: None,
            style_file: None,
            trace_level: None,
            preview_width: ui::DEFAULT_WIDTH,
            color: true,
            load_sample: false,
        }
    }
}

impl Config {
    /// Parses configuration from `key=value` pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `template`, `style_file`, `trace_level`: taken verbatim, blank ignored
    /// - `width`: `usize` (falls back to 80 on parse error)
    /// - `color`, `sample`: `true`/`false`/`1`/`0`/`yes`/`no` (falls back to
    ///   the default on anything else)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cvforge::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("width".to_string(), "120".to_string());
    /// map.insert("color".to_string(), "no".to_string());
    ///
    /// let config = Config::from_args(&map);
    /// assert_eq!(config.preview_width, 120);
    /// assert!(!config.color);
    /// ```
    #[must_use]
    pub fn from_args(args: &BTreeMap<String, String>) -> Self {
        Self::default().with_args(args)
    }

    /// Layers `key=value` pairs over `self`.
    #[must_use]
    pub fn with_args(self, args: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            args.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let preview_width = args
            .get("width")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(self.preview_width);

        Self {
            template: text("template").or(self.template),
            style_file: text("style_file").or(self.style_file),
            trace_level: text("trace_level").or(self.trace_level),
            preview_width,
            color: args.get("color").and_then(|s| parse_flag(s)).unwrap_or(self.color),
            load_sample: args
                .get("sample")
                .and_then(|s| parse_flag(s))
                .unwrap_or(self.load_sample),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// ```toml
    /// template = "executive"
    /// style_file = "presets/ocean.toml"
    /// preview_width = 100
    /// load_sample = true
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CvforgeError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CvforgeError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| CvforgeError::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    #[must_use]
    pub fn preview_settings(&self) -> PreviewSettings {
        PreviewSettings {
            width: self.preview_width,
            color: self.color,
            ..PreviewSettings::default()
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builds the initial application state from configuration.
///
/// The resume starts blank, or as the sample when `load_sample` is set. The
/// configured template and style preset are then applied through the store,
/// so they count as ordinary transitions. A preset that fails to load is
/// logged and skipped; startup never fails on it.
///
/// # Example
///
/// ```rust
/// use cvforge::{initialize, Config};
///
/// let config = Config {
///     template: Some("minimalist".to_string()),
///     ..Config::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.store.resume().selected_template, "minimalist");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing cvforge");

    let mut store = ResumeStore::new();

    if config.load_sample {
        store.load_dummy_resume();
    }

    if let Some(template) = &config.template {
        store.update_template(template);
    }

    if let Some(style_file) = &config.style_file {
        match StylePreset::from_file(style_file) {
            Ok(preset) => {
                tracing::debug!(style_file = %style_file, preset = ?preset.name, "applying style preset");
                store.update_style_customizations(&preset.to_patch());
            }
            Err(e) => {
                tracing::warn!(style_file = %style_file, error = %e, "failed to load style preset, using defaults");
            }
        }
    }

    AppState::new(store, config.preview_settings())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_from_args_falls_back_on_bad_values() {
        let config = Config::from_args(&args(&[("width", "wide"), ("color", "maybe"), ("template", "  ")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_args_layer_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "template = \"classic\"\npreview_width = 100\nload_sample = true").unwrap();

        let config = Config::from_file(file.path())
            .unwrap()
            .with_args(&args(&[("template", "creative")]));

        assert_eq!(config.template.as_deref(), Some("creative"));
        assert_eq!(config.preview_width, 100);
        assert!(config.load_sample);
        assert!(config.color);
    }

    #[test]
    fn test_from_file_errors() {
        let err = Config::from_file("/nonexistent/cvforge.toml").unwrap_err();
        assert!(matches!(err, CvforgeError::Config(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = true").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CvforgeError::Config(_)));
    }

    #[test]
    fn test_initialize_applies_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "primary_color = \"#0ea5e9\"\nspacing = 1.5").unwrap();

        let config = Config {
            style_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        let style = &state.store.resume().style_customizations;
        assert_eq!(style.primary_color, "#0ea5e9");
        assert!((style.spacing - 1.5).abs() < f64::EPSILON);
        assert_eq!(state.store.revision(), 1);
    }

    #[test]
    fn test_initialize_survives_missing_preset() {
        let config = Config {
            style_file: Some("/nonexistent/preset.toml".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.store.resume(), &Resume::blank());
    }
}
