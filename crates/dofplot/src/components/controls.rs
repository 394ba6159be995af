use super::{Component, EventResult};
use crate::state::{AppState, Control};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Side panel listing every control and its current value
pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ControlsPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => EventResult::Exit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EventResult::Exit
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.selected = state.selected.next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.selected = state.selected.prev();
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.adjust(state.selected, 1);
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.adjust(state.selected, -1);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = Control::ALL
            .iter()
            .map(|&control| {
                let is_selected = control == state.selected;
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                let prefix = if is_selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{:<14}", control.label()), style),
                    Span::styled(state.value_text(control), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" CONTROLS "));
        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dofplot_core::model::OutputMetric;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_and_adjustment() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();

        for _ in 0..5 {
            panel.handle_key(press(KeyCode::Char('j')), &mut state);
        }
        assert_eq!(state.selected, Control::Metric);

        assert_eq!(
            panel.handle_key(press(KeyCode::Char('h')), &mut state),
            EventResult::Handled
        );
        assert_eq!(state.metric, OutputMetric::Limits);
    }

    #[test]
    fn test_quit_keys_request_exit() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();

        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(panel.handle_key(key, &mut state), EventResult::Exit);
        }
        assert_eq!(
            panel.handle_key(press(KeyCode::Char('c')), &mut state),
            EventResult::NotHandled
        );
        assert!(!state.exit);
    }

    #[test]
    fn test_unbound_key_passes_through() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();
        assert_eq!(
            panel.handle_key(press(KeyCode::Char('x')), &mut state),
            EventResult::NotHandled
        );
    }
}
