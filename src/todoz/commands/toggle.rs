use crate::commands::{CmdMessage, CmdResult};
use crate::model::TodoId;
use crate::store::TodoStore;

pub fn run(store: &mut TodoStore, ids: &[TodoId]) -> CmdResult {
    let mut result = CmdResult::default();

    for &id in ids {
        let Some(todo) = store.toggle_complete(id).cloned() else {
            log::debug!("toggle: no todo {}", id);
            continue;
        };
        let verb = if todo.completed { "Completed" } else { "Reopened" };
        result.add_message(CmdMessage::success(format!(
            "{} {}: {}",
            verb, todo.id, todo.text
        )));
        result.affected_todos.push(todo);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn marks_todo_completed() {
        let mut f = StoreFixture::new().with_todo("A");
        let ids = f.ids();
        let result = run(&mut f.store, &ids);

        assert!(f.store.todos()[0].completed);
        assert!(result.messages[0].content.starts_with("Completed"));
    }

    #[test]
    fn toggling_twice_restores() {
        let mut f = StoreFixture::new().with_todo("A");
        let ids = f.ids();
        run(&mut f.store, &ids);
        let result = run(&mut f.store, &ids);

        assert!(!f.store.todos()[0].completed);
        assert!(result.messages[0].content.starts_with("Reopened"));
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let mut f = StoreFixture::new().with_todos(2);
        let first = f.ids()[0];
        let result = run(&mut f.store, &[TodoId(77), first]);

        assert_eq!(result.affected_todos.len(), 1);
        assert_eq!(result.affected_todos[0].id, first);
        assert!(!f.store.todos()[1].completed);
    }
}
