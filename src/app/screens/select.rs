//! Selection screen implementation
//!
//! Lists the catalog with membership markers, lets the user build the
//! practice set, and validates that a game can start.

use crate::catalog::Catalog;
use crate::game::PracticeSet;
use crate::util::flag_glyph;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Selection screen component
#[derive(Debug)]
pub struct SelectScreen {
    entry_count: usize,
    selected_index: usize,
    list_state: ListState,
    validation: Option<String>,
}

impl SelectScreen {
    /// Create a new selection screen over a catalog of `entry_count` flags
    pub fn new(entry_count: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            entry_count,
            selected_index: 0,
            list_state,
            validation: None,
        }
    }

    /// Index of the highlighted catalog entry
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Move highlight up, wrapping at the top
    pub fn select_previous(&mut self) {
        if self.entry_count == 0 {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.entry_count - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move highlight down, wrapping at the bottom
    pub fn select_next(&mut self) {
        if self.entry_count == 0 {
            return;
        }
        if self.selected_index < self.entry_count - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Show a validation message (e.g. empty practice set on start)
    pub fn set_validation(&mut self, message: String) {
        self.validation = Some(message);
    }

    /// Clear any validation message
    pub fn clear_validation(&mut self) {
        self.validation = None;
    }

    /// Current validation message, if any
    pub fn validation(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    /// Render the selection screen
    pub fn render(&mut self, f: &mut Frame, catalog: &Catalog, practice: &PracticeSet) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Min(10),   // Flag list
                Constraint::Length(3), // Validation / status
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_list(f, chunks[1], catalog, practice);
        self.render_status(f, chunks[2], practice);
        self.render_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(2), // Subtitle
            ])
            .split(area);

        let title = Paragraph::new("FLAGQUIZ")
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
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Test your world flag knowledge")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_list(
        &mut self,
        f: &mut Frame,
        area: ratatui::layout::Rect,
        catalog: &Catalog,
        practice: &PracticeSet,
    ) {
        let items: Vec<ListItem> = catalog
            .entries()
            .iter()
            .map(|entry| {
                let marker = if practice.contains(&entry.code) {
                    "[x]"
                } else {
                    "[ ]"
                };
                ListItem::new(format!(
                    "{} {}  {}",
                    marker,
                    flag_glyph(&entry.code),
                    entry.country
                ))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(
                        "Select Flags to Practice ({}/{})",
                        practice.len(),
                        catalog.len()
                    )),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_status(&self, f: &mut Frame, area: ratatui::layout::Rect, practice: &PracticeSet) {
        let (text, style) = match &self.validation {
            Some(message) => (
                message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => (
                format!("{} flags selected", practice.len()),
                Style::default().fg(Color::White),
            ),
        };

        let status = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(status, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "↑↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Navigate  "),
            Span::styled(
                "Space",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Toggle  "),
            Span::styled(
                "A",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Select All  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Start  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_screen_creation() {
        let screen = SelectScreen::new(4);
        assert_eq!(screen.selected_index(), 0);
        assert!(screen.validation().is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut screen = SelectScreen::new(3);

        screen.select_next();
        screen.select_next();
        assert_eq!(screen.selected_index(), 2);
        screen.select_next();
        assert_eq!(screen.selected_index(), 0);

        screen.select_previous();
        assert_eq!(screen.selected_index(), 2);
    }

    #[test]
    fn test_navigation_on_empty_catalog() {
        let mut screen = SelectScreen::new(0);
        screen.select_next();
        screen.select_previous();
        assert_eq!(screen.selected_index(), 0);
    }

    #[test]
    fn test_validation_message() {
        let mut screen = SelectScreen::new(4);
        screen.set_validation("Select at least one flag to begin!".to_string());
        assert_eq!(
            screen.validation(),
            Some("Select at least one flag to begin!")
        );
        screen.clear_validation();
        assert!(screen.validation().is_none());
    }
}
