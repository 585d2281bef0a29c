//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Per-submission state machine: Idle → Submitting → {Success, Failure} →
//! Idle, re-enterable. The `submitting` flag on each form is the only gate
//! against double-submission; completions for stale task ids are dropped.

use beescore_core::auth::{LoginRequest, SignupRequest};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::state::{AppState, Notice, Route};
use crate::task::{TaskId, TaskKind};

/// Notice shown when submit is pressed with an empty field.
pub const REQUIRED_FIELDS_TEXT: &str = "All fields are required.";

/// Role-select entries, in display order.
pub const ROLE_ROUTES: [Route; 2] = [Route::Login, Route::Signup];

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(term_event) => handle_terminal_event(app, &term_event),
        UiEvent::Auth(auth_event) => handle_auth_event(app, auth_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: &Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return vec![];
    };
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Ctrl+C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return quit(app);
    }

    match app.route {
        Route::Landing => handle_landing_key(app, key),
        Route::RoleSelect => handle_role_select_key(app, key),
        Route::Login => handle_login_key(app, key),
        Route::Signup => handle_signup_key(app, key),
        Route::Dashboard => handle_dashboard_key(app, key),
    }
}

fn handle_landing_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter => {
            app.route = Route::RoleSelect;
            vec![]
        }
        KeyCode::Esc | KeyCode::Char('q') => quit(app),
        _ => vec![],
    }
}

fn handle_role_select_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up => {
            app.role_selected = app.role_selected.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if app.role_selected < ROLE_ROUTES.len() - 1 {
                app.role_selected += 1;
            }
            vec![]
        }
        KeyCode::Enter => {
            app.route = ROLE_ROUTES[app.role_selected];
            vec![]
        }
        KeyCode::Char('l') => {
            app.route = Route::Login;
            vec![]
        }
        KeyCode::Char('s') => {
            app.route = Route::Signup;
            vec![]
        }
        KeyCode::Esc => {
            app.route = Route::Landing;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_login_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            // Leaving the form abandons any in-flight exchange.
            let effects = cancel_task(app, TaskKind::Login);
            app.login.submitting = false;
            app.route = Route::RoleSelect;
            effects
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.login.focus_next();
            vec![]
        }
        KeyCode::Enter => submit_login(app),
        KeyCode::Backspace => {
            app.login.focused_value_mut().pop();
            vec![]
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login.focused_value_mut().push(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_signup_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            // Leaving the form abandons the in-flight exchange and the
            // pending redirect; neither may touch the form afterwards.
            let mut effects = cancel_task(app, TaskKind::Signup);
            effects.extend(cancel_task(app, TaskKind::Redirect));
            app.signup.submitting = false;
            app.route = Route::RoleSelect;
            effects
        }
        KeyCode::Tab | KeyCode::Down => {
            app.signup.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.signup.focus_prev();
            vec![]
        }
        KeyCode::Enter => submit_signup(app),
        KeyCode::Backspace => {
            app.signup.focused_value_mut().pop();
            vec![]
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.signup.focused_value_mut().push(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_dashboard_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            app.route = Route::Landing;
            vec![]
        }
        KeyCode::Char('q') => quit(app),
        _ => vec![],
    }
}

fn submit_login(app: &mut AppState) -> Vec<UiEffect> {
    if app.login.submitting {
        return vec![];
    }
    if !app.login.is_complete() {
        app.login.notice = Notice::Error(REQUIRED_FIELDS_TEXT.to_string());
        return vec![];
    }

    // Outcome resets at the start of every submission.
    app.login.notice = Notice::None;
    app.login.submitting = true;
    let task = app.task_seq.next_id();
    vec![UiEffect::SubmitLogin {
        task,
        input: LoginRequest {
            business_email: app.login.business_email.clone(),
            password: app.login.password.clone(),
        },
    }]
}

fn submit_signup(app: &mut AppState) -> Vec<UiEffect> {
    if app.signup.submitting {
        return vec![];
    }
    if !app.signup.is_complete() {
        app.signup.notice = Notice::Error(REQUIRED_FIELDS_TEXT.to_string());
        return vec![];
    }

    app.signup.notice = Notice::None;
    app.signup.submitting = true;
    let task = app.task_seq.next_id();
    vec![UiEffect::SubmitSignup {
        task,
        input: SignupRequest {
            companymail: app.signup.companymail.clone(),
            employee_name: app.signup.employee_name.clone(),
            contact_number: app.signup.contact_number.clone(),
        },
    }]
}

fn handle_auth_event(app: &mut AppState, event: AuthUiEvent) -> Vec<UiEffect> {
    match event {
        AuthUiEvent::LoginStarted(started) => {
            app.tasks.login.on_started(&started);
            vec![]
        }
        AuthUiEvent::LoginFinished { id, result } => handle_login_finished(app, id, result),
        AuthUiEvent::SignupStarted(started) => {
            app.tasks.signup.on_started(&started);
            vec![]
        }
        AuthUiEvent::SignupFinished { id, result } => handle_signup_finished(app, id, result),
        AuthUiEvent::RedirectStarted(started) => {
            app.tasks.redirect.on_started(&started);
            vec![]
        }
        AuthUiEvent::RedirectElapsed { id, route } => {
            if !app.tasks.redirect.finish_if_active(id) {
                return vec![];
            }
            app.route = route;
            // Carry the sign-up payload into the login view.
            if let Some(signup) = app.pending_signup.take()
                && let Some(mail) = signup.companymail
            {
                app.login.business_email = mail;
            }
            vec![]
        }
    }
}

fn handle_login_finished(
    app: &mut AppState,
    id: TaskId,
    result: Result<beescore_core::auth::LoginResponse, String>,
) -> Vec<UiEffect> {
    if !app.tasks.login.finish_if_active(id) {
        // Stale or cancelled exchange; the form was torn down.
        return vec![];
    }
    app.login.submitting = false;

    match result {
        Ok(response) => {
            let record = response.session_record();
            app.login.notice = Notice::Success(response.success_message());
            app.dashboard = Some(crate::state::DashboardState::from_login(&response));
            app.route = Route::Dashboard;
            vec![UiEffect::PersistSession { record }]
        }
        Err(message) => {
            app.login.notice = Notice::Error(message);
            vec![]
        }
    }
}

fn handle_signup_finished(
    app: &mut AppState,
    id: TaskId,
    result: Result<beescore_core::auth::SignupResponse, String>,
) -> Vec<UiEffect> {
    if !app.tasks.signup.finish_if_active(id) {
        return vec![];
    }
    app.signup.submitting = false;

    match result {
        Ok(response) => {
            let uid = response.uid.clone();
            // Input resets immediately, well before the redirect fires.
            app.signup.reset_input();
            app.signup.notice = Notice::Success(response.success_message());
            app.pending_signup = Some(response);

            let task = app.task_seq.next_id();
            vec![
                UiEffect::PersistUserId { uid },
                UiEffect::ScheduleRedirect {
                    task,
                    route: Route::Login,
                    delay: app.config.redirect_delay(),
                },
            ]
        }
        Err(message) => {
            app.signup.notice = Notice::Error(message);
            vec![]
        }
    }
}

/// Cancels a running task of the given kind, returning the cancel effect.
fn cancel_task(app: &mut AppState, kind: TaskKind) -> Vec<UiEffect> {
    let state = app.tasks.state_mut(kind);
    if !state.is_running() {
        return vec![];
    }
    let token = state.cancel.clone();
    state.clear();
    vec![UiEffect::CancelTask { kind, token }]
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = vec![];
    for kind in TaskKind::ALL {
        effects.extend(cancel_task(app, kind));
    }
    app.should_quit = true;
    effects
}
