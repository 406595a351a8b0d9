//! Results screen implementation
//!
//! Displays the final score and the review of missed answers, with
//! options to play again or quit.

use crate::game::GameRound;
use crate::util::flag_glyph;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Available actions on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    PlayAgain,
    Quit,
}

impl ResultAction {
    /// Get all available actions
    pub fn all() -> Vec<Self> {
        vec![Self::PlayAgain, Self::Quit]
    }

    /// Get display text for the action
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::PlayAgain => "Play Again",
            Self::Quit => "Quit",
        }
    }
}

/// Results screen component
#[derive(Debug)]
pub struct ResultsScreen {
    selected_action: ResultAction,
}

impl ResultsScreen {
    /// Create a new results screen
    pub fn new() -> Self {
        Self {
            selected_action: ResultAction::PlayAgain,
        }
    }

    /// Reset to the default action (called when a round finishes)
    pub fn reset(&mut self) {
        self.selected_action = ResultAction::PlayAgain;
    }

    /// Get the selected action
    pub fn selected_action(&self) -> ResultAction {
        self.selected_action
    }

    /// Select the next action
    pub fn select_next_action(&mut self) {
        let actions = ResultAction::all();
        let current = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        self.selected_action = actions[(current + 1) % actions.len()];
    }

    /// Select the previous action
    pub fn select_previous_action(&mut self) {
        let actions = ResultAction::all();
        let current = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        let previous = if current == 0 {
            actions.len() - 1
        } else {
            current - 1
        };
        self.selected_action = actions[previous];
    }

    /// Render the results screen for the finished round
    pub fn render(&mut self, f: &mut Frame, round: &GameRound) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Score
                Constraint::Min(6),    // Missed answers
                Constraint::Length(3), // Actions
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_score(f, chunks[1], round);
        self.render_misses(f, chunks[2], round);
        self.render_actions(f, chunks[3]);
        self.render_help(f, chunks[4]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = Paragraph::new("Game Over")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, area);
    }

    fn render_score(&self, f: &mut Frame, area: ratatui::layout::Rect, round: &GameRound) {
        let score = Paragraph::new(format!("Your score: {} / {}", round.score(), round.total()))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(score, area);
    }

    fn render_misses(&self, f: &mut Frame, area: ratatui::layout::Rect, round: &GameRound) {
        if round.misses().is_empty() {
            let perfect = Paragraph::new("Perfect round! No missed flags.")
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Review"));
            f.render_widget(perfect, area);
            return;
        }

        let items: Vec<ListItem> = round
            .misses()
            .iter()
            .map(|miss| {
                let guess = if miss.guess.is_empty() {
                    "blank".to_string()
                } else {
                    miss.guess.clone()
                };
                ListItem::new(format!(
                    "{}  {} (you guessed: {})",
                    flag_glyph(&miss.code),
                    miss.correct,
                    guess
                ))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Incorrect Answers"),
        );
        f.render_widget(list, area);
    }

    fn render_actions(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut spans = Vec::new();
        for (i, action) in ResultAction::all().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            let style = if action == self.selected_action {
                Style::default().bg(Color::Cyan).fg(Color::Black)
            } else {
                Style::default()
            };
            spans.push(Span::styled(
                format!(" {} ", action.display_text()),
                style,
            ));
        }

        let actions = Paragraph::new(vec![Line::from(spans)])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(actions, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help = Paragraph::new("←→: Choose  |  Enter: Confirm  |  Q: Quit")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}
