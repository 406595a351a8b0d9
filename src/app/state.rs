//! Application state management
//!
//! Handles stage transitions and keyboard event mapping for the TUI.
//! Control flows strictly Select -> Play -> Results -> (replay) Select.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Practice set selection
    #[default]
    Select,
    /// Guessing flags one at a time
    Play,
    /// Final score and missed answers
    Results,
}

/// Navigation actions triggered by keyboard input on list-driven screens.
/// The play screen reads raw key events instead, since printable keys
/// belong to the guess text there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move between actions (arrow left/right)
    Left,
    Right,
    /// Toggle membership of the highlighted entry (Space)
    Toggle,
    /// Select everything (a)
    SelectAll,
    /// Confirm (Enter)
    Confirm,
    /// Go back (Esc)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Tracks the current stage and the quit flag
#[derive(Debug, Default)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the selection stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current application stage
    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new stage
    pub fn transition_to(&mut self, new_state: AppState) {
        self.current_state = new_state;
    }

    /// Convert a keyboard event to a navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            KeyCode::Char(' ') => NavigationAction::Toggle,
            KeyCode::Char('a') | KeyCode::Char('A') => NavigationAction::SelectAll,
            KeyCode::Enter => NavigationAction::Confirm,
            KeyCode::Esc => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(state_manager.current_state(), AppState::Select);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_stage_transitions() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Play);
        assert_eq!(state_manager.current_state(), AppState::Play);

        state_manager.transition_to(AppState::Results);
        assert_eq!(state_manager.current_state(), AppState::Results);

        state_manager.transition_to(AppState::Select);
        assert_eq!(state_manager.current_state(), AppState::Select);
    }

    #[test]
    fn test_quit_handling() {
        let mut state_manager = StateManager::new();
        state_manager.quit();
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            NavigationAction::Down
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            NavigationAction::Toggle
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            NavigationAction::SelectAll
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Confirm
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            NavigationAction::None
        );
    }
}
