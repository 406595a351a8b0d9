//! Integration tests for the selection screen and stage transitions

use flagquiz::app::{AppState, SelectScreen, StateManager};
use flagquiz::catalog::Catalog;
use flagquiz::game::PracticeSet;

#[test]
fn test_select_screen_integration() {
    let catalog = Catalog::builtin();
    let mut screen = SelectScreen::new(catalog.len());

    // Test initial state
    assert_eq!(screen.selected_index(), 0);
    assert_eq!(catalog.entries()[screen.selected_index()].code, "fr");

    // Test navigation
    screen.select_next();
    assert_eq!(catalog.entries()[screen.selected_index()].code, "de");

    // Test wrap around going up from the first entry
    screen.select_previous();
    screen.select_previous();
    assert_eq!(screen.selected_index(), catalog.len() - 1);
}

#[test]
fn test_toggle_drives_practice_membership() {
    let catalog = Catalog::builtin();
    let mut practice = PracticeSet::all_of(&catalog);
    let screen = SelectScreen::new(catalog.len());

    let code = &catalog.entries()[screen.selected_index()].code;
    assert!(practice.contains(code));
    practice.toggle(code);
    assert!(!practice.contains(code));
    practice.toggle(code);
    assert!(practice.contains(code));
}

#[test]
fn test_state_manager_integration() {
    let mut state_manager = StateManager::new();

    // Test initial stage
    assert_eq!(state_manager.current_state(), AppState::Select);

    // Select -> Play -> Results -> Select is the only cycle
    state_manager.transition_to(AppState::Play);
    assert_eq!(state_manager.current_state(), AppState::Play);

    state_manager.transition_to(AppState::Results);
    assert_eq!(state_manager.current_state(), AppState::Results);

    state_manager.transition_to(AppState::Select);
    assert_eq!(state_manager.current_state(), AppState::Select);
    assert!(!state_manager.should_quit());
}

#[test]
fn test_validation_lifecycle() {
    let catalog = Catalog::builtin();
    let mut screen = SelectScreen::new(catalog.len());

    screen.set_validation("Select at least one flag to begin!".to_string());
    assert!(screen.validation().is_some());

    // Toggling a flag clears the message in the app; the screen itself
    // just stores and clears it
    screen.clear_validation();
    assert!(screen.validation().is_none());
}
