//! HTTP transport for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound request is minted here: the stored bearer token is attached
//! on the way out, and an expired-credential response triggers the silent
//! refresh-and-replay policy in `net::retry` before the caller ever sees a
//! failure. Real network calls exist only in hydrate builds; native builds
//! (tests, SSR) get `ApiError::Unavailable` so the pure recovery machinery
//! stays testable off-browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::net::retry::SilentRefresh;

/// Remote API root. The static bundle is served separately from the backend.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "http://localhost:8000/api";

/// Absolute URL for an API path like `/auth/login`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// HTTP verbs used by the auth API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Status and body of a completed HTTP exchange, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx success range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Promote a non-2xx response into the error it represents.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(ApiError::Api { status: self.status, message: failure_message(&self) })
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Failure surfaced by the transport layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status that is not a recovered
    /// auth failure. Message is the remote error text, verbatim.
    #[error("request failed ({status}): {message}")]
    Api { status: u16, message: String },
    /// The silent token refresh itself failed. Terminal: the caller holds no
    /// usable credentials. Carries the original failure that triggered the
    /// refresh.
    #[error("session expired ({status}): {message}")]
    AuthExpired { status: u16, message: String },
    /// The response body did not parse as the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Operation invoked outside a browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Extract the error text from a JSON error body.
///
/// The backend reports errors as `{"message": ...}` or `{"detail": ...}`
/// depending on the handler; both are accepted.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    object
        .get("message")
        .or_else(|| object.get("detail"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

/// Error text for a failed exchange, falling back to the bare status.
pub(crate) fn failure_message(response: &RawResponse) -> String {
    error_message(&response.body).unwrap_or_else(|| format!("request failed with status {}", response.status))
}

/// Whether a response signals expired or missing credentials.
///
/// The backend signals this either as HTTP 401 or as an error body whose
/// message carries a "not logged in" marker; both trigger the silent refresh.
pub(crate) fn is_auth_failure(response: &RawResponse) -> bool {
    if response.ok() {
        return false;
    }
    response.status == 401 || error_message(&response.body).is_some_and(|m| m.contains("not logged in"))
}

/// Issue one HTTP exchange with the current bearer token attached.
#[cfg(feature = "hydrate")]
async fn dispatch<B: Serialize>(method: Method, path: &str, body: Option<&B>) -> Result<RawResponse, ApiError> {
    use gloo_net::http::Request;

    let url = endpoint(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };
    // The refresh endpoint authenticates via cookie, so cookies ride along on
    // every call.
    builder = builder.credentials(web_sys::RequestCredentials::Include);
    if let Some(token) = crate::util::token_store::load() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let response = match body {
        Some(payload) => builder
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(RawResponse { status, body: text })
}

/// Obtain a fresh bearer token and persist it.
///
/// `POST /auth/refresh` answers with the new token as a JSON string; it is
/// written to the credential store before the caller replays anything.
#[cfg(feature = "hydrate")]
async fn refresh_session() -> Result<(), ApiError> {
    let response = dispatch::<serde_json::Value>(Method::Post, "/auth/refresh", None).await?.into_result()?;
    let token: String = response.json()?;
    crate::util::token_store::save(&token);
    Ok(())
}

/// Send a request through the silent-refresh policy.
///
/// This is the single chokepoint all API operations go through: bearer
/// attachment, expired-credential detection, and the at-most-one replay all
/// happen here.
///
/// # Errors
///
/// `ApiError::Network` for transport failures, `ApiError::AuthExpired` when
/// the refresh itself fails. Non-2xx responses are returned as `Ok` so the
/// operation layer can surface the remote message via [`RawResponse::into_result`].
pub(crate) async fn request<B: Serialize>(method: Method, path: &str, body: Option<&B>) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        SilentRefresh::new().run(|| dispatch(method, path, body), refresh_session).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        SilentRefresh::new()
            .run(|| async { Err(ApiError::Unavailable) }, || async { Err(ApiError::Unavailable) })
            .await
    }
}
