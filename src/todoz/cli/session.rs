//! # Session
//!
//! The terminal stand-in for the form-and-list UI: every input line is one user
//! event. A line is parsed into a [`SessionCommand`], actions go through
//! [`TodozApi::dispatch`], and the result is rendered back.
//!
//! ```text
//! add Buy milk        # submit the add form
//! toggle 1            # click the checkbox of #1
//! edit 1              # click edit on #1
//! draft Buy oat milk  # type into the edit field
//! save 1              # click save on #1
//! delete 1            # click delete on #1
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. A line that does not
//! parse, or is not valid UTF-8, is reported on the error stream and the
//! session goes on.

use super::render::Renderer;
use std::io::{BufRead, Write};
use todoz::api::{parse_ids, Action, CmdMessage, TodozApi};
use todoz::error::{Result, TodozError};
use todoz::model::TodoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Action(Action),
    Help,
    Quit,
}

/// Parses one session line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim_start();
    if line.trim_end().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    // Only the separator after the verb is consumed; text keeps its spacing.
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };
    let text = rest.trim_end_matches(['\r', '\n']);

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => SessionCommand::Action(Action::Add(text.to_string())),
        "input" | "i" => SessionCommand::Action(Action::Input(text.to_string())),
        "submit" => SessionCommand::Action(Action::Submit),
        "toggle" | "t" | "x" => SessionCommand::Action(Action::Toggle(ids_arg(verb, rest)?)),
        "delete" | "rm" | "del" => SessionCommand::Action(Action::Delete(ids_arg(verb, rest)?)),
        "edit" | "e" => SessionCommand::Action(Action::StartEdit(single_id_arg(verb, rest)?)),
        "draft" | "d" => SessionCommand::Action(Action::UpdateDraft(text.to_string())),
        "save" | "s" => SessionCommand::Action(Action::SaveEdit(single_id_arg(verb, rest)?)),
        "list" | "ls" => SessionCommand::Action(Action::List),
        "help" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        _ => return Err(TodozError::UnknownCommand(verb.to_string())),
    };
    Ok(Some(command))
}

fn ids_arg(verb: &str, rest: &str) -> Result<Vec<TodoId>> {
    let words: Vec<&str> = rest.split_whitespace().collect();
    if words.is_empty() {
        return Err(TodozError::Usage(format!("{} <id>...", verb)));
    }
    parse_ids(&words)
}

fn single_id_arg(verb: &str, rest: &str) -> Result<TodoId> {
    let words: Vec<&str> = rest.split_whitespace().collect();
    match words.as_slice() {
        [id] => id.parse(),
        _ => Err(TodozError::Usage(format!("{} <id>", verb))),
    }
}

pub struct Session<'r> {
    api: TodozApi,
    renderer: &'r Renderer,
    prompt: String,
    interactive: bool,
}

impl<'r> Session<'r> {
    pub fn new(api: TodozApi, renderer: &'r Renderer) -> Self {
        Self {
            api,
            renderer,
            prompt: String::new(),
            interactive: false,
        }
    }

    /// Shows `prompt` before each line and re-renders the list after every
    /// action that can change it.
    pub fn interactive(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self.interactive = true;
        self
    }

    pub fn into_api(self) -> TodozApi {
        self.api
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        if self.interactive {
            write!(out, "{}", self.renderer.list(&self.api.view())?)?;
            self.show_prompt(out)?;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) => parse_line(line),
                Err(e) => Err(TodozError::from(e)),
            };
            match parsed {
                Ok(None) => {}
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(SessionCommand::Help)) => write!(out, "{}", self.renderer.help()?)?,
                Ok(Some(SessionCommand::Action(action))) => self.apply(action, out)?,
                Err(e) => {
                    log::debug!("rejected line {:?}", String::from_utf8_lossy(&buf));
                    let message = CmdMessage::error(format!("Error: {}", e));
                    write!(err, "{}", self.renderer.messages(&[message])?)?;
                }
            }
            self.show_prompt(out)?;
        }
        Ok(())
    }

    fn apply<W: Write>(&mut self, action: Action, out: &mut W) -> Result<()> {
        let mutates = action.mutates();
        let result = self.api.dispatch(action);
        write!(out, "{}", self.renderer.messages(&result.messages)?)?;

        if let Some(view) = &result.view {
            write!(out, "{}", self.renderer.list(view)?)?;
        } else if self.interactive && mutates {
            write!(out, "{}", self.renderer.list(&self.api.view())?)?;
        }
        Ok(())
    }

    fn show_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.interactive {
            write!(out, "{}", self.prompt)?;
            out.flush()?;
        }
        Ok(())
    }
}
