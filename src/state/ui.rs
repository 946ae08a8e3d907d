//! UI chrome state shared across pages.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Cross-page presentation state, provided as a signal at the app root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the dark theme is active.
    pub dark_mode: bool,
}
