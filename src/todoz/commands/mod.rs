//! # Command Layer
//!
//! One module per user action. Each function takes the store, performs the
//! action and returns a [`CmdResult`] describing what happened. Nothing here
//! prints or reads from a terminal.
//!
//! Actions that do not apply (blank text, unknown id, no edit in progress) come
//! back as an empty `CmdResult`; they are logged at debug level and never
//! surface as errors.

use crate::model::Todo;
use crate::view::ViewModel;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<Todo>,
    pub view: Option<ViewModel>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: ViewModel) -> Self {
        self.view = Some(view);
        self
    }

    /// Whether the action changed anything.
    pub fn applied(&self) -> bool {
        !self.affected_todos.is_empty()
    }
}
