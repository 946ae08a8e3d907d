//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused
//! models. `session` is the authoritative authentication state; `ui` holds
//! presentation chrome.

pub mod session;
pub mod ui;
