use super::*;

#[test]
fn ui_state_default_drawer_closed() {
    let state = UiState::default();
    assert!(!state.drawer_open);
}

#[test]
fn open_then_dismiss_returns_to_closed() {
    let mut state = UiState::default();
    state.drawer_open = true;
    assert!(state.drawer_open);
    state.drawer_open = false;
    assert!(!state.drawer_open);
}
