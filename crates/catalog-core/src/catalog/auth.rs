//! Sign-in, registration and token restore over the [`SessionContext`].

use log::{info, warn};

use crate::backend::SharedBackend;
use crate::domain::{AuthResponse, Credentials, Registration, User};
use crate::error::{ClientError, ClientResult};
use crate::session::SessionContext;

fn require(value: &str, what: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(format!("{what} is required")));
    }
    Ok(())
}

fn adopt(session: &SessionContext, response: AuthResponse) -> ClientResult<User> {
    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ClientError::Decode("Invalid response from server".to_string()))?;
    session.set(token);
    info!("Signed in as {}", response.user.email);
    Ok(response.user)
}

pub async fn sign_in(
    backend: &SharedBackend,
    session: &SessionContext,
    credentials: &Credentials,
) -> ClientResult<User> {
    require(&credentials.email, "Email")?;
    require(&credentials.password, "Password")?;
    let response = backend.login(credentials).await?;
    adopt(session, response)
}

pub async fn register(
    backend: &SharedBackend,
    session: &SessionContext,
    registration: &Registration,
) -> ClientResult<User> {
    require(&registration.username, "Username")?;
    require(&registration.email, "Email")?;
    require(&registration.password, "Password")?;
    let response = backend.register(registration).await?;
    adopt(session, response)
}

/// Verify a token restored from storage. Any failure drops the token.
pub async fn restore(backend: &SharedBackend, session: &SessionContext) -> Option<User> {
    if !session.is_authenticated() {
        return None;
    }
    match backend.current_user().await {
        Ok(response) => Some(response.user),
        Err(e) => {
            warn!("Stored session rejected: {e}");
            if session.is_authenticated() {
                session.clear();
            }
            None
        }
    }
}

pub fn sign_out(session: &SessionContext) {
    info!("Signing out");
    session.clear();
}
