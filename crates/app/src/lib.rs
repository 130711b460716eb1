//! `faraway-app` — the presentation layer around the packing list.
//!
//! Everything here calls into `faraway-packing`; none of it owns list rules.
//! User actions become [`Action`] messages, a [`Dispatcher`] turns each one
//! into the next [`AppState`] snapshot, and a line-oriented [`Session`] hosts
//! the whole thing on a terminal.

pub mod action;
pub mod config;
pub mod confirm;
pub mod dispatcher;
pub mod form;
pub mod input;
pub mod render;
pub mod session;
pub mod state;

pub use action::{Action, NewItem};
pub use config::AppConfig;
pub use confirm::{CLEAR_PROMPT, Confirm, request_clear};
pub use dispatcher::Dispatcher;
pub use form::NewItemForm;
pub use input::{Input, InputError};
pub use session::Session;
pub use state::AppState;
