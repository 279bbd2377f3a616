//! # CLI Layer
//!
//! This is **one possible UI client** for todoz, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Commands
//!
//! - `todoz` / `todoz session`: reads one action per line from stdin. When stdin is
//!   a terminal it shows the configured prompt and redraws the list after every
//!   change; piped input just gets the per-action messages.
//! - `todoz run [FILE|-]`: replays a script of session lines and prints the final
//!   list, or the final todos as JSON with `--json`.
//! - `todoz config [KEY] [VALUE]`: shows or sets `prompt`, `color`, `line-width`.
//!
//! Todos live only as long as the process; nothing but the config is written.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context setup and per-command handlers
//! - `session.rs`: line grammar and the read/dispatch/render loop
//! - `render.rs` + `templates.rs` + `styles.rs`: terminal output

mod commands;
mod render;
mod session;
mod setup;
mod styles;
mod templates;

pub use commands::run;
