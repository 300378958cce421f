//! Chart rendering: the formatting boundary between computed series and the
//! terminal renderer.
//!
//! The previous chart is replaced wholesale on every pipeline run, empty
//! results included; an empty axis renders as a blank panel, not an error.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::app::App;
use crate::util::format::{format_axis_label, format_value};

pub fn render_chart(frame: &mut Frame, area: Rect, app: &App) {
    let series = &app.chart;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} per interval ", app.metric.label()));

    if series.timestamps.is_empty() {
        let msg = Paragraph::new("No data in range")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(msg, area);
        return;
    }

    // X positions are axis indices; the timestamp strings only appear as
    // formatted labels.
    let mean: Vec<(f64, f64)> = series
        .mean
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    // Overlay gaps must stay gaps: each contiguous run of present values
    // becomes its own dataset so absent positions are never drawn as zero.
    let overlay_runs: Vec<Vec<(f64, f64)>> = series
        .overlay
        .as_deref()
        .map(split_runs)
        .unwrap_or_default();

    let mut datasets = vec![
        Dataset::default()
            .name("mean")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Gray))
            .data(&mean),
    ];
    let overlay_name = app
        .selected_entity()
        .map(|info| info.title.as_str())
        .unwrap_or("selected");
    for (i, run) in overlay_runs.iter().enumerate() {
        let mut dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(run);
        if i == 0 {
            dataset = dataset.name(overlay_name);
        }
        datasets.push(dataset);
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(_, y) in mean.iter().chain(overlay_runs.iter().flatten()) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let y_padding = ((y_max - y_min).abs()).max(1.0) * 0.1;
    let (y_min, y_max) = (y_min - y_padding, y_max + y_padding);

    let last = series.timestamps.len() - 1;
    let x_labels = vec![
        Span::raw(format_axis_label(&series.timestamps[0])),
        Span::raw(format_axis_label(&series.timestamps[last / 2])),
        Span::raw(format_axis_label(&series.timestamps[last])),
    ];
    let y_labels = vec![
        Span::raw(format_value(y_min)),
        Span::raw(format_value((y_min + y_max) / 2.0)),
        Span::raw(format_value(y_max)),
    ];

    let x_axis = Axis::default()
        .title("interval".dark_gray())
        .bounds([0.0, last.max(1) as f64])
        .labels(x_labels);
    let y_axis = Axis::default()
        .title(app.metric.label().dark_gray())
        .bounds([y_min, y_max])
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Split an aligned optional series into contiguous runs of present points,
/// keyed by axis index.
fn split_runs(values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push((i as f64, *v)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
