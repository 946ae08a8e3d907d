//! Durable storage for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrapper over the single localStorage entry the session lifecycle
//! keys off. The token is opaque here: no parsing, no validation. Storage
//! absence (or a non-browser build) reads as "no token", never as an error.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a bearer token, replacing any previous one.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Delete the stored token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
