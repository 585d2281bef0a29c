//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; navigation and other pure state
//! changes happen inside the reducer itself.

use std::time::Duration;

use beescore_core::auth::{LoginRequest, SignupRequest};
use beescore_core::session::SessionRecord;
use tokio_util::sync::CancellationToken;

use crate::state::Route;
use crate::task::{TaskId, TaskKind};

#[derive(Debug)]
pub enum UiEffect {
    /// Spawn the login exchange (exactly one HTTP POST).
    SubmitLogin { task: TaskId, input: LoginRequest },

    /// Spawn the sign-up exchange (exactly one HTTP POST).
    SubmitSignup { task: TaskId, input: SignupRequest },

    /// Write the login session triple to persistent storage.
    PersistSession { record: SessionRecord },

    /// Write the sign-up user id to persistent storage.
    PersistUserId { uid: String },

    /// Schedule the delayed post-sign-up navigation.
    ///
    /// Cancellable: tearing down the form cancels the pending transition
    /// instead of leaving a dangling timer.
    ScheduleRedirect {
        task: TaskId,
        route: Route,
        delay: Duration,
    },

    /// Cancel a running task via its token.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
