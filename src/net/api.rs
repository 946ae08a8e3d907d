//! REST operations against the remote auth API.
//!
//! ERROR HANDLING
//! ==============
//! Each operation is a single network call through the transport chokepoint
//! in `net::http`, so expired credentials are already recovered (refresh and
//! replay) before a failure reaches this layer. Remaining failures surface as
//! `ApiError` with the remote status and message intact; nothing is
//! swallowed here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{self, ApiError, Method, RawResponse};
use super::types::{LoginRequest, RegisterRequest, ResetPasswordRequest, UserProfile, UserResponse, UserUpdate};
use crate::util::token_store;

/// `POST /auth/recover_password` carries the address as a query parameter.
pub(crate) fn recover_password_path(email: &str) -> String {
    format!("/auth/recover_password?email={email}")
}

/// Create a new account.
///
/// # Errors
///
/// `ApiError::Api` with the backend message (e.g. "Email already register").
pub async fn register(user: &RegisterRequest) -> Result<UserProfile, ApiError> {
    let payload = serde_json::json!({ "user": user });
    let response = http::request(Method::Post, "/auth/register", Some(&payload)).await?.into_result()?;
    response.json()
}

/// Exchange credentials for a profile and a bearer token.
///
/// The returned token is persisted to the credential store as part of the
/// success path, before the caller observes the result.
///
/// # Errors
///
/// `ApiError::Api` with the backend message on rejected credentials.
pub async fn login(credentials: &LoginRequest) -> Result<UserResponse, ApiError> {
    let response = http::request(Method::Post, "/auth/login", Some(credentials)).await?.into_result()?;
    let parsed: UserResponse = response.json()?;
    token_store::save(&parsed.token);
    Ok(parsed)
}

/// End the server-side session.
///
/// The stored token is cleared whether or not the server call succeeds; a
/// client that asked to log out holds no credentials afterwards.
///
/// # Errors
///
/// Propagates the transport error so callers can log it.
pub async fn logout() -> Result<(), ApiError> {
    let result = http::request::<()>(Method::Post, "/auth/logout", None).await.and_then(RawResponse::into_result);
    token_store::clear();
    result.map(|_| ())
}

/// Fetch the current account's profile snapshot.
///
/// # Errors
///
/// `ApiError::AuthExpired` when the token is dead and the silent refresh
/// failed; `ApiError::Api` otherwise.
pub async fn get_profile() -> Result<UserProfile, ApiError> {
    let response = http::request::<()>(Method::Get, "/auth/profile", None).await?.into_result()?;
    response.json()
}

/// Update mutable profile fields, returning the fresh snapshot.
///
/// # Errors
///
/// Same failure surface as [`get_profile`].
pub async fn update_profile(data: &UserUpdate) -> Result<UserProfile, ApiError> {
    let payload = serde_json::json!({ "data": data });
    let response = http::request(Method::Put, "/auth/profile", Some(&payload)).await?.into_result()?;
    response.json()
}

/// Ask the backend to email a password-recovery link.
///
/// # Errors
///
/// `ApiError::Api` when the address is unknown to the backend.
pub async fn recover_password(email: &str) -> Result<(), ApiError> {
    let path = recover_password_path(email);
    http::request::<()>(Method::Post, &path, None).await?.into_result()?;
    Ok(())
}

/// Set a new password using the token from the recovery email.
///
/// # Errors
///
/// `ApiError::Api` when the token is unknown or the confirmation mismatches.
pub async fn reset_password(data: &ResetPasswordRequest) -> Result<(), ApiError> {
    http::request(Method::Post, "/auth/reset", Some(data)).await?.into_result()?;
    Ok(())
}
