//! Terminal colors and ANSI escape sequence generation.
//!
//! Two palettes meet in the preview. The resume's own accent comes from
//! `styleCustomizations.primaryColor` and is whatever string the user picked.
//! The chrome around it (body text, muted text, rules, notifications) uses the
//! fixed [`Theme`] below.
//!
//! # Example
//!
//! ```rust
//! use cvforge::ui::Theme;
//!
//! let accent = Theme::fg("#9b87f5");
//! println!("{accent}{}Heading{}", Theme::bold(), Theme::reset());
//! ```

/// Colors for everything that is not the resume accent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Body text.
    pub text_normal: String,
    /// Secondary text: dates, companies, footer.
    pub text_dim: String,
    /// Separator lines that do not use the accent.
    pub border: String,
    /// Text drawn on top of an accent background (chips, banners).
    pub on_accent: String,
    /// Notification title color.
    pub notice_fg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_normal: "#cdd6f4".to_string(),
            text_dim: "#7f849c".to_string(),
            border: "#45475a".to_string(),
            on_accent: "#ffffff".to_string(),
            notice_fg: "#f9e2af".to_string(),
        }
    }
}

impl Theme {
    /// Converts a hex color to an RGB tuple.
    ///
    /// Accepts `#rrggbb`, `rrggbb` and the short `#rgb` form. Anything else,
    /// including named CSS colors, yields white: the accent is stored
    /// verbatim and rendering must never fail on it.
    #[must_use]
    pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return (255, 255, 255),
        };

        if !expanded.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).unwrap_or(255)
        };

        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}
