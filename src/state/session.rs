//! Session state: who is currently authenticated.
//!
//! DESIGN
//! ======
//! The session value is derived from, but decoupled from, the stored token:
//! the token proves identity to the backend, the session is the in-memory
//! profile snapshot the UI renders from. A single pure reducer is the only
//! writer; `SessionContext` holds the value and hands read access to any
//! consumer via Leptos context, so there is no hidden global.
//!
//! Session-affecting network calls are stamped with a generation from
//! `GenerationClock` when they start. A completion that lost the race to a
//! newer dispatch is silently dropped, which closes the stale-LOGOUT-after-
//! fresh-LOGIN ordering hazard between concurrent in-flight calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;

/// The current authentication state. `user: None` means logged out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
}

/// State transitions accepted by the reducer.
///
/// Every variant carries the full next session as payload, mirroring the
/// wire-side convention that profile snapshots replace wholesale. `Logout`
/// is expected to carry `Session::default()`.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    /// Interactive sign-in completed.
    Login(Session),
    /// Sign-out, interactive or forced by a dead token.
    Logout(Session),
    /// Silent profile (re)fetch completed.
    SetUser(Session),
}

/// Pure state transition: `(current, action) -> next`.
///
/// Deterministic and side-effect free. Unknown action types are
/// unrepresentable: the enum is closed, so the match is exhaustive by
/// construction.
pub fn reduce(current: Session, action: &SessionAction) -> Session {
    let mut next = current;
    match action {
        SessionAction::Login(payload) | SessionAction::Logout(payload) | SessionAction::SetUser(payload) => {
            next.user = payload.user.clone();
        }
    }
    next
}

/// Monotonic stamps for session-affecting requests.
///
/// `issue` hands out a stamp when a call starts; `admit` accepts a completion
/// only if no newer completion has been applied since.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationClock {
    issued: u64,
    applied: u64,
}

impl GenerationClock {
    /// Stamp the start of a session-affecting call.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a completion stamped `generation` may still be applied.
    /// Accepting advances the applied watermark.
    pub fn admit(&mut self, generation: u64) -> bool {
        if generation < self.applied {
            return false;
        }
        self.applied = generation;
        true
    }
}

/// Process-wide session holder, provided once at the application root.
///
/// Copyable handle over signals: cheap to pass into closures and effects.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Session>,
    clock: RwSignal<GenerationClock>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(Session::default()),
            clock: RwSignal::new(GenerationClock::default()),
        }
    }

    /// The latest session value. Reactive when read inside a tracking scope.
    pub fn current(&self) -> Session {
        self.state.get()
    }

    /// Stamp the start of a session-affecting call. Pass the stamp to
    /// [`Self::dispatch_at`] when the call completes.
    pub fn begin(&self) -> u64 {
        let mut clock = self.clock.get_untracked();
        let generation = clock.issue();
        self.clock.set(clock);
        generation
    }

    /// Apply an action stamped at `generation`. Returns `false` (and leaves
    /// the session untouched) when a newer completion has already been
    /// applied. Subscribers are notified before this returns.
    pub fn dispatch_at(&self, generation: u64, action: SessionAction) -> bool {
        let mut clock = self.clock.get_untracked();
        if !clock.admit(generation) {
            return false;
        }
        self.clock.set(clock);
        self.state.update(|session| *session = reduce(std::mem::take(session), &action));
        true
    }

    /// Stamp and apply an action now. For synchronous, user-initiated
    /// transitions that must win over anything still in flight.
    pub fn dispatch(&self, action: SessionAction) {
        let generation = self.begin();
        self.dispatch_at(generation, action);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the session context provided by the application root.
///
/// # Panics
///
/// Panics when called outside a subtree that called
/// `provide_context(SessionContext::new())`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
