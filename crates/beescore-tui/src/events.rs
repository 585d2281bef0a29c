//! UI events consumed by the reducer.

use beescore_core::auth::{LoginResponse, SignupResponse};
use crossterm::event::Event;

use crate::state::Route;
use crate::task::{TaskId, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Raw terminal input.
    Terminal(Event),
    /// Submission / navigation task lifecycle events.
    Auth(AuthUiEvent),
}

/// Events produced by the async submission and redirect handlers.
///
/// `Finished` errors carry the already-mapped display text, so the reducer
/// never sees transport details.
#[derive(Debug)]
pub enum AuthUiEvent {
    LoginStarted(TaskStarted),
    LoginFinished {
        id: TaskId,
        result: Result<LoginResponse, String>,
    },
    SignupStarted(TaskStarted),
    SignupFinished {
        id: TaskId,
        result: Result<SignupResponse, String>,
    },
    RedirectStarted(TaskStarted),
    RedirectElapsed {
        id: TaskId,
        route: Route,
    },
}
