use crate::commands::{CmdMessage, CmdResult};
use crate::model::TodoId;
use crate::store::TodoStore;

pub fn run(store: &mut TodoStore, ids: &[TodoId]) -> CmdResult {
    let mut result = CmdResult::default();

    for &id in ids {
        let was_editing = store.is_editing(id);
        let Some(todo) = store.delete(id) else {
            log::debug!("delete: no todo {}", id);
            continue;
        };
        if was_editing {
            log::debug!("delete: left edit mode for {}", id);
        }
        result.add_message(CmdMessage::success(format!(
            "Deleted {}: {}",
            todo.id, todo.text
        )));
        result.affected_todos.push(todo);
    }

    result
}
