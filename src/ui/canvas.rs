//! Line-oriented drawing surface for template renderers.
//!
//! [`Canvas`] accumulates styled lines into a `String` of fixed width. It
//! knows the resume accent and the chrome [`Theme`], and it drops every
//! escape sequence when color is disabled so the same renderer produces plain
//! text for pipes and tests.
//!
//! Widths are measured in `char`s, not bytes.

use crate::ui::theme::Theme;

/// How a span of text is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Bold,
    Italic,
    Muted,
    /// Neutral separator rules.
    Border,
    Accent,
    AccentBold,
    /// Chrome-colored text on an accent background.
    Banner,
}

#[derive(Debug)]
pub struct Canvas<'a> {
    out: String,
    width: usize,
    color: bool,
    accent: &'a str,
    theme: &'a Theme,
}

impl<'a> Canvas<'a> {
    #[must_use]
    pub fn new(width: usize, color: bool, accent: &'a str, theme: &'a Theme) -> Self {
        Self {
            out: String::new(),
            width: width.max(20),
            color,
            accent,
            theme,
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Wraps `text` in the escape sequences for `style`.
    #[must_use]
    pub fn paint(&self, style: Style, text: &str) -> String {
        if !self.color || text.is_empty() {
            return text.to_string();
        }

        let codes = match style {
            Style::Plain => Theme::fg(&self.theme.text_normal),
            Style::Bold => format!("{}{}", Theme::bold(), Theme::fg(&self.theme.text_normal)),
            Style::Italic => format!("{}{}", Theme::italic(), Theme::fg(&self.theme.text_normal)),
            Style::Muted => Theme::fg(&self.theme.text_dim),
            Style::Border => Theme::fg(&self.theme.border),
            Style::Accent => Theme::fg(self.accent),
            Style::AccentBold => format!("{}{}", Theme::bold(), Theme::fg(self.accent)),
            Style::Banner => format!(
                "{}{}{}",
                Theme::bold(),
                Theme::fg(&self.theme.on_accent),
                Theme::bg(self.accent)
            ),
        };

        format!("{codes}{text}{}", Theme::reset())
    }

    /// Appends an already painted line.
    pub fn raw(&mut self, line: &str) {
        self.out.push_str(line.trim_end());
        self.out.push('\n');
    }

    pub fn line(&mut self, style: Style, text: &str) {
        let painted = self.paint(style, &truncate(text, self.width));
        self.raw(&painted);
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn gap(&mut self, lines: usize) {
        for _ in 0..lines {
            self.blank();
        }
    }

    /// Centers `text`; left padding gets the smaller half.
    pub fn centered(&mut self, style: Style, text: &str) {
        let text = truncate(text, self.width);
        let padding = self.width.saturating_sub(text.chars().count()) / 2;
        let painted = self.paint(style, &text);
        self.raw(&format!("{}{painted}", " ".repeat(padding)));
    }

    pub fn right(&mut self, style: Style, text: &str) {
        let text = truncate(text, self.width);
        let padding = self.width.saturating_sub(text.chars().count());
        let painted = self.paint(style, &text);
        self.raw(&format!("{}{painted}", " ".repeat(padding)));
    }

    /// `left` flush left and `right` flush right on one line. Falls back to two
    /// lines when they do not fit together.
    pub fn spread(&mut self, left: (Style, &str), right: (Style, &str)) {
        let left_len = left.1.chars().count();
        let right_len = right.1.chars().count();

        if right_len == 0 {
            self.line(left.0, left.1);
            return;
        }

        if left_len + right_len + 2 > self.width {
            self.line(left.0, left.1);
            self.right(right.0, right.1);
            return;
        }

        let padding = self.width - left_len - right_len;
        let line = format!(
            "{}{}{}",
            self.paint(left.0, left.1),
            " ".repeat(padding),
            self.paint(right.0, right.1)
        );
        self.raw(&line);
    }

    /// A full-width rule in the accent color.
    pub fn rule(&mut self, ch: char) {
        let rule: String = std::iter::repeat(ch).take(self.width).collect();
        let painted = self.paint(Style::Accent, &rule);
        self.raw(&painted);
    }

    /// A full-width line painted as a banner, text indented by one column.
    pub fn banner(&mut self, text: &str) {
        let text = truncate(&format!(" {text}"), self.width);
        let fill = self.width.saturating_sub(text.chars().count());
        let painted = self.paint(Style::Banner, &format!("{text}{}", " ".repeat(fill)));
        self.out.push_str(&painted);
        self.out.push('\n');
    }

    /// Word-wraps `text` to the canvas width minus `indent`.
    pub fn wrapped(&mut self, style: Style, text: &str, indent: usize) {
        let prefix = " ".repeat(indent);
        for line in wrap(text, self.width.saturating_sub(indent)) {
            let painted = self.paint(style, &line);
            self.raw(&format!("{prefix}{painted}"));
        }
    }

    /// Lays out pre-painted items left to right with `sep` between them,
    /// starting a new line when the next item does not fit.
    pub fn flow(&mut self, items: &[(String, usize)], sep: &str) {
        let sep_len = sep.chars().count();
        let mut line = String::new();
        let mut used = 0;

        for (painted, visible) in items {
            if used > 0 && used + sep_len + visible > self.width {
                self.raw(&line);
                line.clear();
                used = 0;
            }
            if used > 0 {
                line.push_str(sep);
                used += sep_len;
            }
            line.push_str(painted);
            used += visible;
        }

        if used > 0 {
            self.raw(&line);
        }
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Cuts `text` to `max` chars, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let head: String = text.chars().take(keep).collect();
    format!("{head}...")
}

/// Greedy word wrap. Words longer than `width` are split hard.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();

        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }

        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
