use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    assert!(!UiState::default().menu_open);
}

#[test]
fn toggle_menu_flips_and_close_resets() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// DashboardTab
// =============================================================

#[test]
fn dashboard_tab_default_is_events() {
    assert_eq!(DashboardTab::default(), DashboardTab::Events);
}

#[test]
fn dashboard_tab_variants_are_distinct() {
    assert_ne!(DashboardTab::Events, DashboardTab::Board);
    assert_ne!(DashboardTab::Events, DashboardTab::Links);
    assert_ne!(DashboardTab::Board, DashboardTab::Links);
}

#[test]
fn dashboard_tab_labels() {
    let labels: Vec<_> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Events", "Message Board", "Resources"]);
}
