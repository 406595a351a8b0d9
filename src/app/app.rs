//! Main application controller
//!
//! Manages the TUI, stage transitions, and the screen rendering loop.
//! All game state is owned here and mutated sequentially in response to
//! key events and the deferred feedback-advance tick.

use crate::{
    app::{
        screens::{PlayScreen, ResultAction, ResultsScreen, SelectScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::Tui,
    },
    catalog::Catalog,
    config::{PracticeStore, QuizConfig},
    game::{timer, GameRound, PracticeSet},
    QuizError, Result,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Stage state manager
    state_manager: StateManager,
    /// Application config
    config: QuizConfig,
    /// The fixed flag universe
    catalog: Catalog,
    /// User-selected flags, persisted on every change
    practice: PracticeSet,
    /// Preference store; `None` when no data directory is available
    store: Option<PracticeStore>,
    /// The round being played, `Some` during Play and Results
    round: Option<GameRound>,
    /// Screen components
    select_screen: SelectScreen,
    play_screen: PlayScreen,
    results_screen: ResultsScreen,
    /// Deferred feedback-advance plumbing; channel is recreated per round
    advance_tx: Option<mpsc::Sender<usize>>,
    advance_rx: Option<mpsc::Receiver<usize>>,
    advance_task: Option<JoinHandle<()>>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = QuizConfig::load()?;
        let catalog = Catalog::builtin();
        let store = PracticeStore::new().ok();

        // Last-selected practice set, or the full catalog when nothing
        // valid was stored
        let practice = store
            .as_ref()
            .and_then(|s| s.load())
            .and_then(|codes| PracticeSet::from_stored(codes, &catalog))
            .unwrap_or_else(|| PracticeSet::all_of(&catalog));

        let select_screen = SelectScreen::new(catalog.len());

        Ok(Self {
            tui: Tui::new().map_err(|e| QuizError::TuiError(e.to_string()))?,
            state_manager: StateManager::new(),
            config,
            catalog,
            practice,
            store,
            round: None,
            select_screen,
            play_screen: PlayScreen::new(),
            results_screen: ResultsScreen::new(),
            advance_tx: None,
            advance_rx: None,
            advance_task: None,
        })
    }

    /// Initialize the TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| QuizError::TuiError(e.to_string()))
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui
            .restore()
            .map_err(|e| QuizError::TuiError(e.to_string()))
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            if let Some(rx) = &mut self.advance_rx {
                if let Ok(index) = rx.try_recv() {
                    self.on_advance_due(index);
                }
            }
            self.draw()?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        self.tui.draw(|f| match self.state_manager.current_state() {
            AppState::Select => self.select_screen.render(f, &self.catalog, &self.practice),
            AppState::Play => {
                if let Some(round) = &self.round {
                    self.play_screen.render(f, round);
                }
            }
            AppState::Results => {
                if let Some(round) = &self.round {
                    self.results_screen.render(f, round);
                }
            }
        })
    }

    /// Handle keyboard events for the current stage
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self
            .tui
            .poll_event()
            .map_err(|e| QuizError::TuiError(e.to_string()))?
        {
            match self.state_manager.current_state() {
                AppState::Select => self.handle_select_keys(key),
                AppState::Play => self.handle_play_keys(key),
                AppState::Results => self.handle_results_keys(key),
            }
        }
        Ok(())
    }

    fn handle_select_keys(&mut self, key: KeyEvent) {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Up => self.select_screen.select_previous(),
            NavigationAction::Down => self.select_screen.select_next(),
            NavigationAction::Toggle => {
                let index = self.select_screen.selected_index();
                if let Some(entry) = self.catalog.entries().get(index) {
                    let code = entry.code.clone();
                    self.practice.toggle(&code);
                    self.select_screen.clear_validation();
                    self.persist_practice();
                }
            }
            NavigationAction::SelectAll => {
                self.practice.select_all(&self.catalog);
                self.select_screen.clear_validation();
                self.persist_practice();
            }
            NavigationAction::Confirm => self.start_game(),
            NavigationAction::Quit | NavigationAction::Back => self.state_manager.quit(),
            _ => {}
        }
    }

    /// Play-stage keys are raw: printable characters belong to the guess
    fn handle_play_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state_manager.quit();
            }
            KeyCode::Esc => self.abandon_round(),
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Backspace => {
                if let Some(round) = &mut self.round {
                    round.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(round) = &mut self.round {
                    round.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_results_keys(&mut self, key: KeyEvent) {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Left => self.results_screen.select_previous_action(),
            NavigationAction::Right => self.results_screen.select_next_action(),
            NavigationAction::Confirm => match self.results_screen.selected_action() {
                ResultAction::PlayAgain => self.play_again(),
                ResultAction::Quit => self.state_manager.quit(),
            },
            NavigationAction::Back => self.play_again(),
            NavigationAction::Quit => self.state_manager.quit(),
            _ => {}
        }
    }

    /// Start a round over the current practice set, or surface the
    /// empty-selection validation message without leaving Select
    fn start_game(&mut self) {
        match GameRound::new(&self.catalog, &self.practice, self.config.shuffle_seed) {
            Ok(round) => {
                self.cancel_advance();
                let (tx, rx) = mpsc::channel(4);
                self.advance_tx = Some(tx);
                self.advance_rx = Some(rx);
                self.round = Some(round);
                self.select_screen.clear_validation();
                self.state_manager.transition_to(AppState::Play);
            }
            Err(QuizError::GameError(message)) => {
                self.select_screen.set_validation(format!("{}!", message));
            }
            Err(_) => {}
        }
    }

    fn submit_guess(&mut self) {
        let Some(round) = &mut self.round else {
            return;
        };
        if round.submit_guess().is_some() {
            let index = round.current_index();
            self.schedule_advance(index);
        }
    }

    /// Spawn the deferred advance for the entry at `index`. Any previous
    /// timer is aborted so rapid input cannot double-advance the round.
    fn schedule_advance(&mut self, index: usize) {
        if let Some(task) = self.advance_task.take() {
            task.abort();
        }
        if let Some(tx) = &self.advance_tx {
            self.advance_task = Some(timer::advance_after(
                self.config.feedback_delay,
                index,
                tx.clone(),
            ));
        }
    }

    /// The feedback delay elapsed for the entry at `index`
    fn on_advance_due(&mut self, index: usize) {
        if self.state_manager.current_state() != AppState::Play {
            return;
        }
        let Some(round) = &mut self.round else {
            return;
        };
        if round.advance_from(index) {
            self.advance_task = None;
            if round.is_finished() {
                self.results_screen.reset();
                self.state_manager.transition_to(AppState::Results);
            }
        }
    }

    /// Abort any pending advance and drop the round's channel
    fn cancel_advance(&mut self) {
        if let Some(task) = self.advance_task.take() {
            task.abort();
        }
        self.advance_tx = None;
        self.advance_rx = None;
    }

    /// Leave the play stage without finishing the round
    fn abandon_round(&mut self) {
        self.cancel_advance();
        self.round = None;
        self.state_manager.transition_to(AppState::Select);
    }

    /// Return to selection for another round; the practice set is kept
    fn play_again(&mut self) {
        self.cancel_advance();
        self.round = None;
        self.state_manager.transition_to(AppState::Select);
    }

    /// Persist the practice set. Failures are non-fatal: the selection
    /// still applies for this session.
    fn persist_practice(&mut self) {
        if let Some(store) = &self.store {
            store.save(self.practice.codes()).ok();
        }
    }
}
