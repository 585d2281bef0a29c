//! Terminal UI for the beescore portal client.
//!
//! Elm-style architecture:
//! - `state` holds all mutable UI state (routes, forms, task lifecycle)
//! - `update` is the pure reducer: `(state, event) -> effects`
//! - `effects` are I/O commands the runtime executes (HTTP, storage, timers)
//! - `runtime` owns the terminal and the inbox channel for async results

pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod task;
pub mod terminal;
pub mod update;

pub use runtime::TuiRuntime;
