use super::{Component, EventResult};
use crate::state::AppState;
use crossterm::event::KeyEvent;
use dofplot_core::analysis::{AxisDescriptor, SweepChart, Trace};
use dofplot_core::format::format_length;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

/// Line colors in drawing order
const TRACE_COLORS: [Color; 2] = [Color::Cyan, Color::Magenta];

/// Renders the current sweep with the axes it describes
pub struct SweepChartView;

impl SweepChartView {
    pub fn new() -> Self {
        Self
    }
}

/// Tick text for a data-space value
fn format_tick(value: f64) -> String {
    if value.abs() >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// `[min, max]` of the x-axis in plot space
fn x_bounds(chart: &SweepChart) -> [f64; 2] {
    let scale = chart.x_axis.scale;
    let first = chart.x.first().and_then(|&v| scale.to_plot(v)).unwrap_or(0.0);
    let last = chart.x.last().and_then(|&v| scale.to_plot(v)).unwrap_or(1.0);
    [first, last]
}

/// Labels spread evenly along the x-axis.
///
/// Log axes list their explicit ticks, which sit evenly in plot space.
fn x_labels(chart: &SweepChart) -> Vec<String> {
    match &chart.x_axis.tick_values {
        Some(ticks) => ticks.iter().map(|&t| format_tick(t)).collect(),
        None => {
            let (min, max) = match (chart.x.first(), chart.x.last()) {
                (Some(&min), Some(&max)) => (min, max),
                _ => return Vec::new(),
            };
            [min, (min + max) / 2.0, max]
                .into_iter()
                .map(format_tick)
                .collect()
        }
    }
}

/// `[min, max]` of the y-axis; unranged axes fit the finite data from zero
fn y_bounds(chart: &SweepChart) -> [f64; 2] {
    let [min, max] = chart
        .y_axis
        .range
        .unwrap_or_else(|| [0.0, chart.finite_y_max().unwrap_or(1.0)]);
    if max > min { [min, max] } else { [min, min + 1.0] }
}

fn y_labels([min, max]: [f64; 2]) -> Vec<String> {
    [min, (min + max) / 2.0, max]
        .into_iter()
        .map(format_length)
        .collect()
}

fn axis<'a>(descriptor: &AxisDescriptor, bounds: [f64; 2], labels: Vec<String>) -> Axis<'a> {
    Axis::default()
        .title(descriptor.title.clone().dark_gray())
        .bounds(bounds)
        .labels(labels)
}

impl SweepChartView {
    fn render_chart(frame: &mut Frame, area: Rect, chart: &SweepChart, block: Block) {
        let y_bounds = y_bounds(chart);

        // Infinite values are drawn along the top edge
        let data: Vec<(&Trace, Vec<(f64, f64)>)> = chart
            .series
            .traces()
            .into_iter()
            .map(|trace| {
                let points =
                    trace.plot_points(&chart.x, chart.x_axis.scale, chart.y_axis.scale, y_bounds[1]);
                (trace, points)
            })
            .collect();

        let datasets: Vec<Dataset> = data
            .iter()
            .zip(TRACE_COLORS.iter().cycle())
            .map(|((trace, points), &color)| {
                Dataset::default()
                    .name(trace.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(color))
                    .data(points)
            })
            .collect();

        let widget = Chart::new(datasets)
            .block(block)
            .x_axis(axis(&chart.x_axis, x_bounds(chart), x_labels(chart)))
            .y_axis(axis(&chart.y_axis, y_bounds, y_labels(y_bounds)));

        frame.render_widget(widget, area);
    }
}

impl Component for SweepChartView {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = format!(" {} vs {} ", state.metric.label(), state.axis.label());
        let block = Block::default().borders(Borders::ALL).title(title);

        match &state.chart {
            Some(chart) if !chart.is_empty() => Self::render_chart(frame, area, chart, block),
            _ => {
                let content = vec![Line::from(Span::styled(
                    "  No data to display.",
                    Style::default().fg(Color::DarkGray),
                ))];
                frame.render_widget(Paragraph::new(content).block(block), area);
            }
        }
    }
}
