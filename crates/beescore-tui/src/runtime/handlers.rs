//! Effect handlers: pure async functions returning `UiEvent`.
//!
//! Handlers perform the I/O for an effect and map errors to the display text
//! the reducer shows. They never touch state; the runtime spawns them and
//! sends their result to the inbox.

use std::sync::Arc;
use std::time::Duration;

use beescore_core::auth::{
    AuthClient, LoginRequest, SignupRequest, login_error_message, signup_error_message,
};

use crate::events::{AuthUiEvent, UiEvent};
use crate::state::Route;
use crate::task::TaskId;

/// Runs the login exchange and maps the outcome to display text.
pub async fn login_submit(client: Arc<AuthClient>, input: LoginRequest, id: TaskId) -> UiEvent {
    let result = match client.login(&input).await {
        Ok(response) => Ok(response),
        Err(error) => {
            tracing::debug!(error = %error, "admin login failed");
            Err(login_error_message(&error))
        }
    };
    UiEvent::Auth(AuthUiEvent::LoginFinished { id, result })
}

/// Runs the sign-up exchange and maps the outcome to display text.
pub async fn signup_submit(client: Arc<AuthClient>, input: SignupRequest, id: TaskId) -> UiEvent {
    let result = match client.signup(&input).await {
        Ok(response) => Ok(response),
        Err(error) => {
            tracing::debug!(error = %error, "admin sign-up failed");
            Err(signup_error_message(&error))
        }
    };
    UiEvent::Auth(AuthUiEvent::SignupFinished { id, result })
}

/// Waits out the redirect delay, then reports it as elapsed.
///
/// Cancellation happens outside: the runtime races this future against the
/// task's cancellation token, so a cancelled redirect never produces an event.
pub async fn redirect_after(delay: Duration, route: Route, id: TaskId) -> UiEvent {
    tokio::time::sleep(delay).await;
    UiEvent::Auth(AuthUiEvent::RedirectElapsed { id, route })
}
