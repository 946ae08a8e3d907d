//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport chokepoint (bearer attachment + silent refresh),
//! `retry` holds the refresh-and-replay policy, `api` exposes the typed
//! operations, and `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod retry;
pub mod types;
