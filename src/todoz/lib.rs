//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic to-do list library**: a single in-memory list of tasks
//! that can be added, completed, edited and deleted. The terminal session in `cli/`
//! is one client of it; nothing below the API knows a terminal exists.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and session lines, renders output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's TodoStore                             │
//! │  - Normalizes inputs (id strings → TodoId), dispatches      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One action per module, returns CmdResult                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs) + View (view.rs)                          │
//! │  - TodoStore: ordered todos, edit mode, form input          │
//! │  - view::build: stateless state → ViewModel projection      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Failures in the Core
//!
//! Blank text and unknown ids are silent no-ops all the way up to the API. The
//! only errors in the library come from parsing user input and from config I/O.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and the [`api::Action`] event type
//! - [`commands`]: One module per user action
//! - [`store`]: [`store::TodoStore`], the single owner of session state
//! - [`view`]: Stateless projection into a [`view::ViewModel`]
//! - [`model`]: `TodoId`, `Todo`, `EditState`
//! - [`config`]: Front-end configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
