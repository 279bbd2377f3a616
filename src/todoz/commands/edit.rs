use crate::commands::{CmdMessage, CmdResult};
use crate::model::TodoId;
use crate::store::TodoStore;

/// Puts `id` in edit mode, seeding the draft with its current text.
pub fn start(store: &mut TodoStore, id: TodoId) -> CmdResult {
    let mut result = CmdResult::default();
    let Some(todo) = store.get(id).cloned() else {
        log::debug!("edit: no todo {}", id);
        return result;
    };

    if let Some(previous) = store.editing().map(|e| e.id).filter(|&p| p != id) {
        log::debug!("edit: discarding draft for {}", previous);
    }
    store.start_edit(id, todo.text.clone());
    result.add_message(CmdMessage::info(format!("Editing {}: {}", todo.id, todo.text)));
    result.affected_todos.push(todo);
    result
}

pub fn update_draft(store: &mut TodoStore, text: &str) -> CmdResult {
    if !store.update_draft(text) {
        log::debug!("draft: nothing is being edited");
    }
    CmdResult::default()
}

pub fn save(store: &mut TodoStore, id: TodoId) -> CmdResult {
    let mut result = CmdResult::default();
    match store.save_edit(id).cloned() {
        Some(todo) => {
            result.add_message(CmdMessage::success(format!(
                "Saved {}: {}",
                todo.id, todo.text
            )));
            result.affected_todos.push(todo);
        }
        None => log::debug!("save: nothing to save for {}", id),
    }
    result
}
