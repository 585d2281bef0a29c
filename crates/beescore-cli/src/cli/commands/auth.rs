//! Headless login / sign-up / logout commands.
//!
//! Failure text matches what the TUI forms display, so scripted and
//! interactive use see the same outcomes.

use anyhow::{Context, Result, bail};
use beescore_core::auth::{
    AuthClient, LoginRequest, SignupRequest, login_error_message, signup_error_message,
};
use beescore_core::session::{self, FileSessionStore, SessionStore, mask_token};

pub fn login(api_base_url: &str, email: String, password: String) -> Result<()> {
    let client = AuthClient::from_base_url(api_base_url)?;
    let request = LoginRequest {
        business_email: email,
        password,
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    match runtime.block_on(client.login(&request)) {
        Ok(response) => {
            let mut store = FileSessionStore::new();
            response
                .session_record()
                .persist(&mut store)
                .context("Failed to persist session")?;
            tracing::info!(
                uid = %response.uid,
                token = %mask_token(&response.token),
                "admin login succeeded"
            );
            println!("{}", response.success_message());
            Ok(())
        }
        Err(error) => bail!("{}", login_error_message(&error)),
    }
}

pub fn signup(api_base_url: &str, email: String, name: String, contact: String) -> Result<()> {
    let client = AuthClient::from_base_url(api_base_url)?;
    let request = SignupRequest {
        companymail: email,
        employee_name: name,
        contact_number: contact,
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    match runtime.block_on(client.signup(&request)) {
        Ok(response) => {
            let mut store = FileSessionStore::new();
            store
                .set(session::KEY_USER_ID, &response.uid)
                .context("Failed to persist user id")?;
            tracing::info!(uid = %response.uid, "admin sign-up succeeded");
            println!("{}", response.success_message());
            Ok(())
        }
        Err(error) => bail!("{}", signup_error_message(&error)),
    }
}

pub fn logout() -> Result<()> {
    let mut store = FileSessionStore::new();
    store.clear().context("Failed to clear session")?;
    println!("Session cleared.");
    Ok(())
}
