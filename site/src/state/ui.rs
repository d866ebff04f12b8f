//! Local UI chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Presentation state owned by the root `App` and shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the `.dark-mode` variable set is active.
    pub dark_mode: bool,
}
