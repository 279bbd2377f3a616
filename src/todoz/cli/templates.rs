//! Minijinja templates for terminal output, embedded at compile time.
//!
//! Each template ends every line it emits with an explicit newline, so callers
//! `print!` the result as-is. Layout math (widths, truncation, padding) happens in
//! `render.rs`; templates only pick styles by name.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
