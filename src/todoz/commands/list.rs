use crate::commands::CmdResult;
use crate::store::TodoStore;
use crate::view;

pub fn run(store: &TodoStore) -> CmdResult {
    CmdResult::default().with_view(view::build(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn returns_view_of_all_todos() {
        let f = StoreFixture::new().with_todos(3);
        let result = run(&f.store);

        let view = result.view.unwrap();
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[2].text, "Task 3");
        assert!(result.messages.is_empty());
    }
}
