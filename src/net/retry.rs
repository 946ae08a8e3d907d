//! Silent refresh-and-replay policy for expired credentials.
//!
//! DESIGN
//! ======
//! The per-request lifecycle is a two-state machine: a request starts FRESH;
//! an expired-credential response moves it to RETRYING (refresh, then one
//! replay); whatever the replay returns is TERMINAL. The refresh call itself
//! is never retried, and a request is never replayed twice, so a caller
//! observes at most two network round trips plus one refresh per logical
//! request.
//!
//! The policy is a plain value over caller-supplied futures, so the whole
//! machine is exercisable in native tests without a network stack.

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

use std::future::Future;

use crate::net::http::{ApiError, RawResponse, failure_message, is_auth_failure};

/// Replay policy: how many replays a logical request may consume and what
/// counts as an expired-credential response.
pub(crate) struct SilentRefresh<P = fn(&RawResponse) -> bool> {
    max_replays: u8,
    trigger: P,
}

impl SilentRefresh {
    /// The production policy: one replay, triggered by [`is_auth_failure`].
    pub(crate) fn new() -> Self {
        Self { max_replays: 1, trigger: is_auth_failure }
    }
}

impl<P: Fn(&RawResponse) -> bool> SilentRefresh<P> {
    #[cfg(test)]
    pub(crate) fn with_policy(max_replays: u8, trigger: P) -> Self {
        Self { max_replays, trigger }
    }

    /// Drive one logical request through the machine.
    ///
    /// `send` issues the request with whatever token is currently stored and
    /// may be called up to twice; `refresh` renews the stored token and is
    /// called at most once. The replay is issued strictly after the refresh
    /// response has been observed.
    ///
    /// # Errors
    ///
    /// Propagates `send` transport errors as-is. When the trigger fires and
    /// `refresh` fails, returns [`ApiError::AuthExpired`] carrying the
    /// original failure's status and message.
    pub(crate) async fn run<S, SFut, R, RFut>(&self, mut send: S, refresh: R) -> Result<RawResponse, ApiError>
    where
        S: FnMut() -> SFut,
        SFut: Future<Output = Result<RawResponse, ApiError>>,
        R: FnOnce() -> RFut,
        RFut: Future<Output = Result<(), ApiError>>,
    {
        let first = send().await?;
        if self.max_replays == 0 || !(self.trigger)(&first) {
            return Ok(first);
        }

        match refresh().await {
            // Replay exactly once with the renewed token. If the replay fails
            // auth again the caller sees that failure; no second refresh.
            Ok(()) => send().await,
            Err(_) => Err(ApiError::AuthExpired {
                status: first.status,
                message: failure_message(&first),
            }),
        }
    }
}
