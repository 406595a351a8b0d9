//! Play screen implementation
//!
//! Shows the current flag, collects the typed guess, and displays
//! correct/incorrect feedback between flags.

use crate::game::{Feedback, GameRound};
use crate::util::flag_glyph;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Play screen component
#[derive(Debug, Default)]
pub struct PlayScreen;

impl PlayScreen {
    /// Create a new play screen
    pub fn new() -> Self {
        Self
    }

    /// Render the play screen for the given round
    pub fn render(&self, f: &mut Frame, round: &GameRound) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(7), // Flag
                Constraint::Length(3), // Guess input
                Constraint::Length(3), // Feedback
                Constraint::Length(3), // Score
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_flag(f, chunks[1], round);
        self.render_input(f, chunks[2], round);
        self.render_feedback(f, chunks[3], round);
        self.render_score(f, chunks[4], round);
        self.render_help(f, chunks[5]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = Paragraph::new("Guess the Flag")
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

    fn render_flag(&self, f: &mut Frame, area: ratatui::layout::Rect, round: &GameRound) {
        let glyph = round
            .current_entry()
            .map(|entry| flag_glyph(&entry.code))
            .unwrap_or_default();

        let text = vec![Line::from(""), Line::from(""), Line::from(glyph)];

        let flag = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "Flag {} of {}",
                    (round.current_index() + 1).min(round.total()),
                    round.total()
                )),
        );
        f.render_widget(flag, area);
    }

    fn render_input(&self, f: &mut Frame, area: ratatui::layout::Rect, round: &GameRound) {
        // Block input echo while feedback is on screen
        let text = if round.is_awaiting_advance() {
            round.guess().to_string()
        } else {
            format!("{}_", round.guess())
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter country name"),
        );
        f.render_widget(input, area);
    }

    fn render_feedback(&self, f: &mut Frame, area: ratatui::layout::Rect, round: &GameRound) {
        let style = match round.feedback() {
            Feedback::None => Style::default(),
            Feedback::Correct => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Feedback::Incorrect { .. } => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        };

        let feedback = Paragraph::new(round.feedback().text())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(feedback, area);
    }

    fn render_score(&self, f: &mut Frame, area: ratatui::layout::Rect, round: &GameRound) {
        let score = Paragraph::new(format!("Score: {}", round.score()))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(score, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help = Paragraph::new("Type your answer  |  Enter: Submit  |  Esc: Back")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}
