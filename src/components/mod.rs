//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers; the pages own
//! route-level orchestration.

pub mod auth_bootstrap;
pub mod layout;
