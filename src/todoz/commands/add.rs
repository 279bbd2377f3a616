use crate::commands::{CmdMessage, CmdResult};
use crate::model::Todo;
use crate::store::TodoStore;

pub fn run(store: &mut TodoStore, text: &str) -> CmdResult {
    added(store.add(text).cloned())
}

/// Replaces the add-form buffer without submitting it.
pub fn set_input(store: &mut TodoStore, text: &str) -> CmdResult {
    store.set_input(text);
    CmdResult::default()
}

pub fn submit(store: &mut TodoStore) -> CmdResult {
    added(store.submit().cloned())
}

fn added(todo: Option<Todo>) -> CmdResult {
    let mut result = CmdResult::default();
    match todo {
        Some(todo) => {
            result.add_message(CmdMessage::success(format!(
                "Added {}: {}",
                todo.id, todo.text
            )));
            result.affected_todos.push(todo);
        }
        None => log::debug!("ignoring blank todo text"),
    }
    result
}
