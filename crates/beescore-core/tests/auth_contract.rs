//! HTTP contract tests for the auth client against a mock backend.

use beescore_core::auth::{
    AuthClient, AuthError, GENERIC_FAILURE_TEXT, INVALID_JSON_TEXT, LoginRequest, SignupRequest,
    login_error_message, signup_error_message,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_request() -> LoginRequest {
    LoginRequest {
        business_email: "admin@acme.co.za".to_string(),
        password: "hunter2".to_string(),
    }
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        companymail: "hr@acme.co.za".to_string(),
        employee_name: "Sipho".to_string(),
        contact_number: "0821234567".to_string(),
    }
}

async fn client(server: &MockServer) -> AuthClient {
    AuthClient::from_base_url(&server.uri()).unwrap()
}

#[tokio::test]
async fn login_issues_exactly_one_post_with_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin-login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "businessEmail": "admin@acme.co.za",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "uid": "u1",
            "businessEmail": "admin@acme.co.za",
            "message": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).await.login(&login_request()).await.unwrap();
    assert_eq!(response.token, "t1");
    assert_eq!(response.uid, "u1");
    assert_eq!(response.success_message(), "ok");

    server.verify().await;
}

#[tokio::test]
async fn login_rejection_surfaces_server_error_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin-login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client(&server)
        .await
        .login(&login_request())
        .await
        .unwrap_err();

    match &error {
        AuthError::Rejected { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(login_error_message(&error), "Invalid credentials");
}

#[tokio::test]
async fn login_rejection_without_error_field_uses_status_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin-login"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let error = client(&server)
        .await
        .login(&login_request())
        .await
        .unwrap_err();

    match &error {
        AuthError::Rejected { message, .. } => {
            assert!(message.starts_with("Request failed (HTTP 500"), "{message}");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_invalid_response_for_both_flows() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin-login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin-signup"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client(&server).await;

    let login_error = client.login(&login_request()).await.unwrap_err();
    assert!(matches!(login_error, AuthError::InvalidResponse));
    assert_eq!(login_error_message(&login_error), GENERIC_FAILURE_TEXT);

    let signup_error = client.signup(&signup_request()).await.unwrap_err();
    assert!(matches!(signup_error, AuthError::InvalidResponse));
    assert_eq!(signup_error_message(&signup_error), INVALID_JSON_TEXT);
}

#[tokio::test]
async fn success_body_missing_required_fields_is_invalid_response() {
    let server = MockServer::start().await;

    // 2xx but no token/uid: not a usable login response.
    Mock::given(method("POST"))
        .and(path("/admin-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let error = client(&server)
        .await
        .login(&login_request())
        .await
        .unwrap_err();
    assert!(matches!(error, AuthError::InvalidResponse));
}

#[tokio::test]
async fn signup_issues_exactly_one_post_with_exact_wire_keys() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin-signup"))
        .and(body_json(json!({
            "companymail": "hr@acme.co.za",
            "Employeename": "Sipho",
            "contactNumber": "0821234567"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uid": "u9",
            "Employeename": "Sipho",
            "companymail": "hr@acme.co.za",
            "contactNumber": "0821234567",
            "message": "Account created"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .signup(&signup_request())
        .await
        .unwrap();
    assert_eq!(response.uid, "u9");
    assert_eq!(response.success_message(), "Account created");

    server.verify().await;
}

#[tokio::test]
async fn transport_failure_maps_to_generic_text() {
    // Connect to a port nothing is listening on.
    let client = AuthClient::from_base_url("http://127.0.0.1:1").unwrap();

    let error = client.login(&login_request()).await.unwrap_err();
    assert!(matches!(error, AuthError::Transport(_)));
    assert_eq!(login_error_message(&error), GENERIC_FAILURE_TEXT);
    assert_eq!(signup_error_message(&error), GENERIC_FAILURE_TEXT);
}
