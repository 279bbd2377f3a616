//! Styles for the todoz terminal client.
//!
//! Templates only ever name a style semantically (`id`, `completed`, `time`, ...).
//! What that looks like is decided here, once, in [`TODOZ_THEME`].
//!
//! Unknown names are rendered with a `(!?)` prefix so template typos show up
//! instead of silently losing their styling.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const TITLE: &str = "title";
    pub const ID: &str = "id";
    pub const TEXT: &str = "text";
    pub const COMPLETED: &str = "completed";
    pub const EDITING: &str = "editing";
    pub const MARKER_OPEN: &str = "marker_open";
    pub const MARKER_DONE: &str = "marker_done";
    pub const ACTION: &str = "action";
    pub const TIME: &str = "time";
    pub const MUTED: &str = "muted";
    pub const HEADING: &str = "heading";

    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies the named style, or returns `text` untouched when color is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(_) if !use_color => text.to_string(),
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{}{}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static TODOZ_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold().underlined())
        .add(names::ID, Style::new().yellow())
        .add(names::TEXT, Style::new())
        .add(names::COMPLETED, Style::new().strikethrough().red())
        .add(names::EDITING, Style::new().cyan().italic())
        .add(names::MARKER_OPEN, Style::new().dim())
        .add(names::MARKER_DONE, Style::new().green())
        .add(names::ACTION, Style::new().blue())
        .add(names::TIME, Style::new().color256(246).italic())
        .add(names::MUTED, Style::new().dim())
        .add(names::HEADING, Style::new().bold())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_color_disabled() {
        assert_eq!(TODOZ_THEME.apply(names::ID, "#1", false), "#1");
    }

    #[test]
    fn ansi_when_color_enabled() {
        let styled = TODOZ_THEME.apply(names::ERROR, "boom", true);
        assert!(styled.contains("boom"));
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn unknown_style_is_flagged() {
        let out = TODOZ_THEME.apply("typo", "hello", false);
        assert_eq!(out, "(!?)hello");
    }

    #[test]
    fn every_name_is_registered() {
        for name in [
            names::TITLE,
            names::ID,
            names::TEXT,
            names::COMPLETED,
            names::EDITING,
            names::MARKER_OPEN,
            names::MARKER_DONE,
            names::ACTION,
            names::TIME,
            names::MUTED,
            names::HEADING,
            names::INFO,
            names::SUCCESS,
            names::ERROR,
        ] {
            let out = TODOZ_THEME.apply(name, "x", false);
            assert_eq!(out, "x", "missing style {}", name);
        }
    }
}
