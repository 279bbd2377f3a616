//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every todo operation, whatever the front end.
//!
//! It:
//! - **Owns** the one [`TodoStore`] of the session
//! - **Normalizes inputs** (user-typed id strings such as `3` or `#3` become [`TodoId`]s)
//! - **Dispatches** typed [`Action`]s to `commands/*.rs`
//!
//! It does not print, does not hold business logic, and does not format output.
//! The only error it reports is an id string that cannot be parsed; a well-formed
//! id that matches nothing goes through to the command layer and becomes a no-op.

use crate::commands;
use crate::error::Result;
use crate::model::{Todo, TodoId};
use crate::store::TodoStore;
use crate::view::{self, ViewModel};

/// One user event, already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Input(String),
    Submit,
    Toggle(Vec<TodoId>),
    Delete(Vec<TodoId>),
    StartEdit(TodoId),
    UpdateDraft(String),
    SaveEdit(TodoId),
    List,
}

impl Action {
    /// Actions that can change what the list looks like.
    pub fn mutates(&self) -> bool {
        !matches!(self, Action::List)
    }
}

#[derive(Debug, Default)]
pub struct TodozApi {
    store: TodoStore,
}

impl TodozApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) -> commands::CmdResult {
        log::debug!("dispatch {:?}", action);
        match action {
            Action::Add(text) => commands::add::run(&mut self.store, &text),
            Action::Input(text) => commands::add::set_input(&mut self.store, &text),
            Action::Submit => commands::add::submit(&mut self.store),
            Action::Toggle(ids) => commands::toggle::run(&mut self.store, &ids),
            Action::Delete(ids) => commands::delete::run(&mut self.store, &ids),
            Action::StartEdit(id) => commands::edit::start(&mut self.store, id),
            Action::UpdateDraft(text) => commands::edit::update_draft(&mut self.store, &text),
            Action::SaveEdit(id) => commands::edit::save(&mut self.store, id),
            Action::List => commands::list::run(&self.store),
        }
    }

    pub fn add_todo(&mut self, text: &str) -> commands::CmdResult {
        commands::add::run(&mut self.store, text)
    }

    pub fn toggle_todos<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        Ok(commands::toggle::run(&mut self.store, &ids))
    }

    pub fn delete_todos<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        Ok(commands::delete::run(&mut self.store, &ids))
    }

    pub fn start_edit(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = id.parse()?;
        Ok(commands::edit::start(&mut self.store, id))
    }

    pub fn update_draft(&mut self, text: &str) -> commands::CmdResult {
        commands::edit::update_draft(&mut self.store, text)
    }

    pub fn save_edit(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = id.parse()?;
        Ok(commands::edit::save(&mut self.store, id))
    }

    pub fn view(&self) -> ViewModel {
        view::build(&self.store)
    }

    pub fn todos(&self) -> &[Todo] {
        self.store.todos()
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }
}

pub fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<TodoId>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodozError;

    #[test]
    fn dispatch_routes_add_and_list() {
        let mut api = TodozApi::new();
        let added = api.dispatch(Action::Add("Buy milk".into()));
        assert!(added.applied());

        let listed = api.dispatch(Action::List);
        assert_eq!(listed.view.unwrap().rows[0].text, "Buy milk");
    }

    #[test]
    fn dispatch_routes_edit_flow() {
        let mut api = TodozApi::new();
        api.dispatch(Action::Add("X".into()));
        let id = api.todos()[0].id;

        api.dispatch(Action::StartEdit(id));
        api.dispatch(Action::UpdateDraft("Y".into()));
        let saved = api.dispatch(Action::SaveEdit(id));

        assert!(saved.applied());
        assert_eq!(api.todos()[0].text, "Y");
    }

    #[test]
    fn dispatch_routes_form_input() {
        let mut api = TodozApi::new();
        api.dispatch(Action::Input("typed".into()));
        assert_eq!(api.view().input, "typed");
        api.dispatch(Action::Submit);
        assert_eq!(api.todos()[0].text, "typed");
    }

    #[test]
    fn string_ids_are_normalized() {
        let mut api = TodozApi::new();
        api.add_todo("A");
        api.add_todo("B");

        let result = api.toggle_todos(&["#1", "2"]).unwrap();
        assert_eq!(result.affected_todos.len(), 2);
    }

    #[test]
    fn malformed_id_is_an_error() {
        let mut api = TodozApi::new();
        api.add_todo("A");
        let err = api.delete_todos(&["one"]).unwrap_err();
        assert!(matches!(err, TodozError::InvalidId(_)));
        assert_eq!(api.todos().len(), 1);
    }

    #[test]
    fn unknown_but_valid_id_is_noop() {
        let mut api = TodozApi::new();
        api.add_todo("A");
        let result = api.delete_todos(&["9"]).unwrap();
        assert!(!result.applied());
        assert_eq!(api.todos().len(), 1);
    }

    #[test]
    fn list_is_the_only_non_mutating_action() {
        assert!(!Action::List.mutates());
        assert!(Action::Submit.mutates());
        assert!(Action::UpdateDraft(String::new()).mutates());
    }
}
