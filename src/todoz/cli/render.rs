//! # Rendering Module
//!
//! Turns [`ViewModel`]s and [`CmdMessage`]s into terminal text through minijinja
//! templates and the `style` filter backed by [`TODOZ_THEME`].
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they need
//! Unicode-aware processing. Templates handle presentation:
//! - Style selection through style names computed here (`marker_style`, `text_style`)
//! - Line structure and the empty-list placeholder

use super::styles::{names, TODOZ_THEME};
use super::templates::{HELP_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE};
use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use serde::Serialize;
use todoz::api::{CmdMessage, MessageLevel};
use todoz::error::Result;
use todoz::view::{RowAction, RowView, ViewModel};
use unicode_width::UnicodeWidthStr;

pub const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 4;
const MARKER_WIDTH: usize = 3;
const ACTION_WIDTH: usize = 6;
const MIN_TEXT_WIDTH: usize = 8;

#[derive(Serialize)]
struct RowLineData {
    marker: String,
    marker_style: &'static str,
    id: String,
    text: String,
    text_style: &'static str,
    padding: String,
    action: String,
    age: String,
}

#[derive(Serialize)]
struct ListData {
    title: String,
    empty: bool,
    rows: Vec<RowLineData>,
    input: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct HelpEntry {
    usage: &'static str,
    padding: String,
    about: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    entries: Vec<HelpEntry>,
}

/// Session verbs shown by `help`.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("add <text>", "add a task (a)"),
    ("input <text>", "type into the add form without submitting (i)"),
    ("submit", "add whatever is in the form"),
    ("toggle <id>...", "flip completed (t, x)"),
    ("edit <id>", "start editing a task (e)"),
    ("draft [text]", "replace the text being edited (d)"),
    ("save <id>", "save the edit (s)"),
    ("delete <id>...", "remove tasks (rm, del)"),
    ("list", "show the list (ls)"),
    ("help", "show this help (?)"),
    ("quit", "leave the session (q, exit)"),
];

pub struct Renderer {
    env: Environment<'static>,
    line_width: usize,
}

impl Renderer {
    pub fn new(use_color: bool, line_width: usize) -> Result<Self> {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| {
            TODOZ_THEME.apply(&name, &value.to_string(), use_color)
        });
        env.add_template("list", LIST_TEMPLATE)?;
        env.add_template("messages", MESSAGES_TEMPLATE)?;
        env.add_template("help", HELP_TEMPLATE)?;
        Ok(Self { env, line_width })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.env.get_template(name)?.render(data)?)
    }

    pub fn list(&self, view: &ViewModel) -> Result<String> {
        let rows = view
            .rows
            .iter()
            .map(|row| self.row_line(row, Utc::now()))
            .collect();
        let data = ListData {
            title: view.title.clone(),
            empty: view.empty,
            rows,
            input: view.input.clone(),
        };
        self.render("list", &data)
    }

    fn row_line(&self, row: &RowView, now: DateTime<Utc>) -> RowLineData {
        let (marker, marker_style) = if row.completed {
            ("[x]", names::MARKER_DONE)
        } else {
            ("[ ]", names::MARKER_OPEN)
        };
        let text_style = if row.editing {
            names::EDITING
        } else if row.completed {
            names::COMPLETED
        } else {
            names::TEXT
        };
        let action = match row.action {
            RowAction::Edit => "[edit]",
            RowAction::Save => "[save]",
        };

        // "  [ ] #1   <text><pad> [edit] <age>"
        let fixed = 2 + MARKER_WIDTH + 1 + ID_WIDTH + 1 + 1 + ACTION_WIDTH + 1 + TIME_WIDTH;
        let available = self.line_width.saturating_sub(fixed).max(MIN_TEXT_WIDTH);
        let text = truncate_to_width(&row.text, available);
        let padding = " ".repeat(available.saturating_sub(text.width()));

        RowLineData {
            marker: marker.to_string(),
            marker_style,
            id: format!("{:<width$}", row.id.to_string(), width = ID_WIDTH),
            text,
            text_style,
            padding,
            action: action.to_string(),
            age: format_time_ago(row.created_at, now),
        }
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String> {
        if messages.is_empty() {
            return Ok(String::new());
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: match msg.level {
                        MessageLevel::Info => names::INFO,
                        MessageLevel::Success => names::SUCCESS,
                        MessageLevel::Error => names::ERROR,
                    },
                })
                .collect(),
        };
        self.render("messages", &data)
    }

    pub fn help(&self) -> Result<String> {
        let usage_width = HELP_ENTRIES
            .iter()
            .map(|(usage, _)| usage.width())
            .max()
            .unwrap_or(0)
            + 2;
        let data = HelpData {
            entries: HELP_ENTRIES
                .iter()
                .map(|&(usage, about)| HelpEntry {
                    usage,
                    padding: " ".repeat(usage_width - usage.width()),
                    about,
                })
                .collect(),
        };
        self.render("help", &data)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
