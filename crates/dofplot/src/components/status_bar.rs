use super::{Component, EventResult};
use crate::state::AppState;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str = "j/k: select | h/l: adjust | q/Esc/Ctrl+C: quit";

/// Key help with the sweep size, or the last sweep error
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn status_line(state: &AppState) -> Line<'_> {
        if let Some(error) = &state.error_message {
            return Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error),
            ]);
        }

        let mut spans = vec![Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))];
        if let Some(chart) = &state.chart {
            spans.push(Span::styled(
                format!(" | {} points", chart.len()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph =
            Paragraph::new(Self::status_line(state)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
