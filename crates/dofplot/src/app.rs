use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, controls::ControlsPanel, readout::Readout, status_bar::StatusBar,
    sweep_chart::SweepChartView,
};
use crate::state::AppState;

pub struct App {
    state: AppState,
    controls: ControlsPanel,
    readout: Readout,
    chart: SweepChartView,
    status_bar: StatusBar,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            controls: ControlsPanel::new(),
            readout: Readout::new(),
            chart: SweepChartView::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Content above, status bar below
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(0)])
            .split(rows[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[0]);

        self.controls.render(frame, side[0], &self.state);
        self.readout.render(frame, side[1], &self.state);
        self.chart.render(frame, columns[1], &self.state);
        self.status_bar.render(frame, rows[1], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self.controls.handle_key(key_event, &mut self.state) == EventResult::Exit {
            tracing::info!("Quit requested");
            self.state.exit = true;
        }
    }
}
