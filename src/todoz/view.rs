//! Stateless projection of store state into a UI tree.
//!
//! Front ends render a [`ViewModel`]; they never look at the store directly.

use crate::model::{EditState, Todo, TodoId};
use crate::store::TodoStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const LIST_TITLE: &str = "My ToDo List";

/// The per-row button that is not delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    Edit,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: TodoId,
    /// The draft for the row in edit mode, the todo's text otherwise.
    pub text: String,
    pub completed: bool,
    pub editing: bool,
    pub action: RowAction,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub title: String,
    pub input: String,
    pub rows: Vec<RowView>,
    pub empty: bool,
}

pub fn build(store: &TodoStore) -> ViewModel {
    render_tree(store.todos(), store.editing(), store.input())
}

pub fn render_tree(todos: &[Todo], editing: Option<&EditState>, input: &str) -> ViewModel {
    let rows: Vec<RowView> = todos
        .iter()
        .map(|todo| {
            let draft = editing.filter(|e| e.id == todo.id).map(|e| e.draft.clone());
            let is_editing = draft.is_some();
            RowView {
                id: todo.id,
                text: draft.unwrap_or_else(|| todo.text.clone()),
                completed: todo.completed,
                editing: is_editing,
                action: if is_editing {
                    RowAction::Save
                } else {
                    RowAction::Edit
                },
                created_at: todo.created_at,
            }
        })
        .collect();

    ViewModel {
        title: LIST_TITLE.to_string(),
        input: input.to_string(),
        empty: rows.is_empty(),
        rows,
    }
}
