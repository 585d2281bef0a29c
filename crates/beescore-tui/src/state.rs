//! Application state for the portal TUI.
//!
//! ```text
//! AppState
//! ├── route: Route                 (current screen)
//! ├── login: LoginForm             (credential input + outcome)
//! ├── signup: SignupForm           (credential input + outcome)
//! ├── dashboard: Option<DashboardState> (post-login payload)
//! ├── tasks / task_seq             (async task lifecycle)
//! └── should_quit
//! ```

use beescore_core::auth::{LoginResponse, SignupResponse};
use beescore_core::config::Config;
use beescore_core::session::mask_token;

use crate::task::{TaskSeq, Tasks};

/// Navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    RoleSelect,
    Login,
    Signup,
    Dashboard,
}

/// Outcome message for the last submission attempt.
///
/// A single slot: holding error and success text at the same time is
/// unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Notice {
    #[default]
    None,
    Error(String),
    Success(String),
}

impl Notice {
    pub fn error_text(&self) -> Option<&str> {
        match self {
            Notice::Error(text) => Some(text),
            _ => None,
        }
    }

    pub fn success_text(&self) -> Option<&str> {
        match self {
            Notice::Success(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    BusinessEmail,
    Password,
}

/// Login form: credential input, focus, outcome, in-flight flag.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub business_email: String,
    pub password: String,
    pub focus: LoginField,
    pub notice: Notice,
    pub submitting: bool,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        !self.business_email.is_empty() && !self.password.is_empty()
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::BusinessEmail => &mut self.business_email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::BusinessEmail => LoginField::Password,
            LoginField::Password => LoginField::BusinessEmail,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Companymail,
    EmployeeName,
    ContactNumber,
}

/// Sign-up form: credential input, focus, outcome, in-flight flag.
#[derive(Debug, Default)]
pub struct SignupForm {
    pub companymail: String,
    pub employee_name: String,
    pub contact_number: String,
    pub focus: SignupField,
    pub notice: Notice,
    pub submitting: bool,
}

impl SignupForm {
    pub fn is_complete(&self) -> bool {
        !self.companymail.is_empty()
            && !self.employee_name.is_empty()
            && !self.contact_number.is_empty()
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            SignupField::Companymail => &mut self.companymail,
            SignupField::EmployeeName => &mut self.employee_name,
            SignupField::ContactNumber => &mut self.contact_number,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SignupField::Companymail => SignupField::EmployeeName,
            SignupField::EmployeeName => SignupField::ContactNumber,
            SignupField::ContactNumber => SignupField::Companymail,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            SignupField::Companymail => SignupField::ContactNumber,
            SignupField::EmployeeName => SignupField::Companymail,
            SignupField::ContactNumber => SignupField::EmployeeName,
        };
    }

    /// Clears the credential input back to its initial empty state.
    pub fn reset_input(&mut self) {
        self.companymail.clear();
        self.employee_name.clear();
        self.contact_number.clear();
        self.focus = SignupField::Companymail;
    }
}

/// Payload carried into the dashboard after a successful login.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub business_email: String,
    pub business_name: Option<String>,
    pub contact_number: Option<String>,
    pub token_masked: String,
    pub message: String,
}

impl DashboardState {
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            business_email: response.business_email.clone(),
            business_name: response.business_name.clone(),
            contact_number: response.contact_number.clone(),
            token_masked: mask_token(&response.token),
            message: response.success_message(),
        }
    }
}

/// Top-level TUI state.
pub struct AppState {
    pub config: Config,
    pub route: Route,
    pub role_selected: usize,
    pub login: LoginForm,
    pub signup: SignupForm,
    pub dashboard: Option<DashboardState>,
    /// Sign-up payload carried into the login view by the delayed redirect.
    pub pending_signup: Option<SignupResponse>,
    pub tasks: Tasks,
    pub task_seq: TaskSeq,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            route: Route::Landing,
            role_selected: 0,
            login: LoginForm::default(),
            signup: SignupForm::default(),
            dashboard: None,
            pending_signup: None,
            tasks: Tasks::default(),
            task_seq: TaskSeq::default(),
            should_quit: false,
        }
    }
}
