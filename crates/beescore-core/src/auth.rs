//! Admin authentication client for the compliance portal backend.
//!
//! Issues single-shot JSON exchanges against `/admin-login` and `/admin-signup`.
//! No retries, no request timeout beyond the transport default, and every
//! failure maps to exactly one `AuthError` variant.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::session::SessionRecord;

/// Login endpoint path on the authentication service.
pub const LOGIN_PATH: &str = "/admin-login";
/// Sign-up endpoint path on the authentication service.
pub const SIGNUP_PATH: &str = "/admin-signup";

/// Generic failure text shown when the transport or response shape is unusable.
pub const GENERIC_FAILURE_TEXT: &str = "Something went wrong. Please try again.";
/// Text shown by the sign-up flow when the response body is not JSON.
pub const INVALID_JSON_TEXT: &str = "Server returned invalid JSON response";
/// Fallback success text when the login response omits `message`.
pub const LOGIN_SUCCESS_TEXT: &str = "Login successful.";
/// Fallback success text when the sign-up response omits `message`.
pub const SIGNUP_SUCCESS_TEXT: &str = "Account created successfully.";

/// Failure classes for one submission exchange.
///
/// The taxonomy is total: every failed `login`/`signup` call resolves to
/// exactly one of these.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Network-level failure: the request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The response body was not valid JSON, or a success body was missing
    /// required fields.
    #[error("server returned an invalid response body")]
    InvalidResponse,
    /// The server answered with a non-success status.
    ///
    /// `message` is the body's `error` field when present, otherwise a
    /// status-coded fallback.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

/// Maps a login failure to the text displayed on the login form.
pub fn login_error_message(error: &AuthError) -> String {
    match error {
        AuthError::Transport(_) | AuthError::InvalidResponse => GENERIC_FAILURE_TEXT.to_string(),
        AuthError::Rejected { message, .. } => message.clone(),
    }
}

/// Maps a sign-up failure to the text displayed on the sign-up form.
///
/// Unlike login, a non-JSON body gets its own fixed message here.
pub fn signup_error_message(error: &AuthError) -> String {
    match error {
        AuthError::Transport(_) => GENERIC_FAILURE_TEXT.to_string(),
        AuthError::InvalidResponse => INVALID_JSON_TEXT.to_string(),
        AuthError::Rejected { message, .. } => message.clone(),
    }
}

/// Request body for `POST /admin-login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub business_email: String,
    pub password: String,
}

/// Success body from `POST /admin-login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub uid: String,
    pub business_email: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Returns the session triple to persist for this login.
    pub fn session_record(&self) -> SessionRecord {
        SessionRecord {
            token: self.token.clone(),
            uid: self.uid.clone(),
            business_email: self.business_email.clone(),
        }
    }

    /// Returns the server message, or the fixed success text if absent.
    pub fn success_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| LOGIN_SUCCESS_TEXT.to_string())
    }
}

/// Request body for `POST /admin-signup`.
///
/// Field renames pin the exact JSON keys the service expects, including the
/// irregular `Employeename` casing.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub companymail: String,
    #[serde(rename = "Employeename")]
    pub employee_name: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
}

/// Success body from `POST /admin-signup`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub uid: String,
    #[serde(rename = "Employeename", default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub companymail: Option<String>,
    #[serde(rename = "contactNumber", default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SignupResponse {
    /// Returns the server message, or the fixed success text if absent.
    pub fn success_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| SIGNUP_SUCCESS_TEXT.to_string())
    }
}

/// Body shape of rejection responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the external authentication service.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AuthClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client from a base URL string.
    ///
    /// # Errors
    /// Returns an error if the URL is malformed.
    pub fn from_base_url(base_url: &str) -> anyhow::Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid API base URL {base_url:?}: {e}"))?;
        Ok(Self::new(url))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Submits admin login credentials.
    ///
    /// Issues exactly one `POST /admin-login` with a JSON body.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        self.exchange(LOGIN_PATH, request).await
    }

    /// Submits an admin sign-up request.
    ///
    /// Issues exactly one `POST /admin-signup` with a JSON body.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, AuthError> {
        self.exchange(SIGNUP_PATH, request).await
    }

    async fn exchange<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, AuthError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(AuthError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(AuthError::Transport)?;
        tracing::debug!(%status, endpoint = path, "auth exchange resolved");

        // Both paths require a JSON body; a non-JSON body is invalid
        // regardless of status.
        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| AuthError::InvalidResponse)?;

        if !status.is_success() {
            let message = serde_json::from_value::<ErrorBody>(json)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("Request failed (HTTP {status})"));
            return Err(AuthError::Rejected { status, message });
        }

        serde_json::from_value(json).map_err(|_| AuthError::InvalidResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(status: u16, message: &str) -> AuthError {
        AuthError::Rejected {
            status: StatusCode::from_u16(status).unwrap(),
            message: message.to_string(),
        }
    }

    /// Test: login request serializes with the exact wire keys.
    #[test]
    fn test_login_request_wire_keys() {
        let request = LoginRequest {
            business_email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"businessEmail": "a@b.com", "password": "secret"})
        );
    }

    /// Test: sign-up request serializes with the exact wire keys, including
    /// the irregular `Employeename` casing.
    #[test]
    fn test_signup_request_wire_keys() {
        let request = SignupRequest {
            companymail: "c@d.com".to_string(),
            employee_name: "Thandi".to_string(),
            contact_number: "0821234567".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "companymail": "c@d.com",
                "Employeename": "Thandi",
                "contactNumber": "0821234567"
            })
        );
    }

    /// Test: minimal login success body parses; optional fields default.
    #[test]
    fn test_login_response_minimal_body() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token":"t1","uid":"u1","businessEmail":"a@b.com","message":"ok"}"#,
        )
        .unwrap();
        assert_eq!(response.token, "t1");
        assert_eq!(response.uid, "u1");
        assert_eq!(response.business_email, "a@b.com");
        assert!(response.business_name.is_none());
        assert_eq!(response.success_message(), "ok");
    }

    /// Test: session record carries the exact response values.
    #[test]
    fn test_login_response_session_record() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"t1","uid":"u1","businessEmail":"a@b.com"}"#).unwrap();
        let record = response.session_record();
        assert_eq!(record.token, "t1");
        assert_eq!(record.uid, "u1");
        assert_eq!(record.business_email, "a@b.com");
        assert_eq!(response.success_message(), LOGIN_SUCCESS_TEXT);
    }

    /// Test: login error mapping collapses transport and parse failures to
    /// the generic text, and passes server messages through verbatim.
    #[test]
    fn test_login_error_mapping() {
        assert_eq!(
            login_error_message(&AuthError::InvalidResponse),
            GENERIC_FAILURE_TEXT
        );
        assert_eq!(
            login_error_message(&rejected(401, "Invalid credentials")),
            "Invalid credentials"
        );
    }

    /// Test: sign-up error mapping distinguishes the non-JSON case.
    #[test]
    fn test_signup_error_mapping() {
        assert_eq!(
            signup_error_message(&AuthError::InvalidResponse),
            INVALID_JSON_TEXT
        );
        assert_eq!(
            signup_error_message(&rejected(409, "Email already registered")),
            "Email already registered"
        );
    }

    /// Test: endpoint joining tolerates a trailing slash on the base URL.
    #[test]
    fn test_endpoint_join() {
        let with_slash = AuthClient::from_base_url("http://localhost:5000/").unwrap();
        let without = AuthClient::from_base_url("http://localhost:5000").unwrap();
        assert_eq!(
            with_slash.endpoint(LOGIN_PATH),
            "http://localhost:5000/admin-login"
        );
        assert_eq!(
            without.endpoint(SIGNUP_PATH),
            "http://localhost:5000/admin-signup"
        );
    }

    /// Test: malformed base URLs are rejected at construction.
    #[test]
    fn test_invalid_base_url() {
        assert!(AuthClient::from_base_url("not a url").is_err());
    }
}
