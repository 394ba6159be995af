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

/// Metrics at the current parameter set, independent of the sweep
pub struct Readout;

impl Readout {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Readout {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines: Vec<Line> = state
            .readout()
            .into_iter()
            .map(|(name, value)| {
                Line::from(vec![
                    Span::styled(format!("  {:<12}", name), Style::default().fg(Color::DarkGray)),
                    Span::raw(value),
                ])
            })
            .collect();

        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" CURRENT "));
        frame.render_widget(paragraph, area);
    }
}
