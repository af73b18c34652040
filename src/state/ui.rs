//! Header chrome state (navigation drawer visibility).
//!
//! DESIGN
//! ======
//! The drawer flag and the home form are independent two-state
//! machines; keeping them in separate models means neither view can
//! observe or disturb the other.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the page header.
///
/// Owned by `Header` in a local `RwSignal` and replaced wholesale on
/// every open/close transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the navigation drawer is open.
    pub drawer_open: bool,
}
