//! # Todo Store
//!
//! [`TodoStore`] is the one owner of mutable session state: the ordered list of
//! todos, the edit-mode reference and the add-form input buffer. Its fields are
//! private; everything above it reads through accessors and mutates through the
//! operations below.
//!
//! ## No-op Policy
//!
//! None of the operations fail. Unknown ids and blank text leave the store as it
//! was. Mutating operations report whether they applied (`bool` or `Option`) so
//! callers can describe the outcome, but a `None` is never an error.
//!
//! ## Edit Mode
//!
//! At most one todo is in edit mode. For each todo:
//!
//! ```text
//!            start_edit                 save_edit (non-blank draft)
//! Viewing ───────────────▶ Editing ─────────────────────────────▶ Viewing
//!                           │  ▲            delete
//!                           └──┘ ───────────────────────────────▶ (gone)
//!          update_draft, save_edit (blank draft)
//! ```
//!
//! Starting an edit on another todo moves edit mode there; the previous draft is
//! discarded.

use crate::model::{is_blank, EditState, IdSequence, Todo, TodoId};

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    editing: Option<EditState>,
    input: String,
    ids: IdSequence,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == id)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the add-form buffer (the user typing into the form).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Appends a new incomplete todo. Blank text is ignored. On success the
    /// input buffer is cleared.
    pub fn add(&mut self, text: &str) -> Option<&Todo> {
        if is_blank(text) {
            return None;
        }
        let todo = Todo::new(self.ids.next_id(), text.to_string());
        self.todos.push(todo);
        self.input.clear();
        self.todos.last()
    }

    /// Adds whatever is in the input buffer. A blank buffer is kept as-is.
    pub fn submit(&mut self) -> Option<&Todo> {
        let text = std::mem::take(&mut self.input);
        if is_blank(&text) {
            self.input = text;
            return None;
        }
        self.add(&text)
    }

    pub fn toggle_complete(&mut self, id: TodoId) -> Option<&Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.completed = !todo.completed;
        Some(&*todo)
    }

    /// Removes the todo and, if it was being edited, leaves edit mode.
    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id == id)?;
        if self.is_editing(id) {
            self.editing = None;
        }
        Some(self.todos.remove(pos))
    }

    /// Enters edit mode for `id` with `current_text` as the initial draft,
    /// replacing any edit already in progress.
    pub fn start_edit(&mut self, id: TodoId, current_text: impl Into<String>) {
        self.editing = Some(EditState {
            id,
            draft: current_text.into(),
        });
    }

    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        match self.editing.as_mut() {
            Some(edit) => {
                edit.draft = text.into();
                true
            }
            None => false,
        }
    }

    /// Commits the draft to `id` and leaves edit mode.
    ///
    /// A blank draft is rejected and edit mode stays active. Otherwise edit mode
    /// ends even when `id` matches no todo, in which case nothing is written.
    pub fn save_edit(&mut self, id: TodoId) -> Option<&Todo> {
        match &self.editing {
            Some(edit) if !is_blank(&edit.draft) => {}
            _ => return None,
        }
        let edit = self.editing.take()?;
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.text = edit.draft;
        Some(&*todo)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: TodoStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: TodoStore::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(&format!("Task {}", i + 1));
            }
            self
        }

        pub fn with_todo(mut self, text: &str) -> Self {
            self.store.add(text);
            self
        }

        pub fn with_completed_todo(mut self, text: &str) -> Self {
            let id = self.store.add(text).map(|t| t.id);
            if let Some(id) = id {
                self.store.toggle_complete(id);
            }
            self
        }

        /// Puts the last added todo in edit mode with `draft`.
        pub fn editing_last(mut self, draft: &str) -> Self {
            if let Some(id) = self.store.todos().last().map(|t| t.id) {
                self.store.start_edit(id, draft);
            }
            self
        }

        pub fn ids(&self) -> Vec<TodoId> {
            self.store.todos().iter().map(|t| t.id).collect()
        }
    }
}
