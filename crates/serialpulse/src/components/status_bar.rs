//! Bottom status line: active query state and key help.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, RangeInput};

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(bound) = app.editing {
        let label = match bound {
            RangeInput::Start => "start",
            RangeInput::End => "end",
        };
        Line::from(vec![
            Span::styled(
                format!(" {label}: {}_", app.input),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                "  (Enter apply, Esc cancel)",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        let range = match (app.range_start.is_empty(), app.range_end.is_empty()) {
            (true, true) => "all".to_owned(),
            (false, true) => format!("{}..", app.range_start),
            (true, false) => format!("..{}", app.range_end),
            (false, false) => format!("{}..{}", app.range_start, app.range_end),
        };
        Line::from(vec![
            Span::styled(
                format!(" {}", app.metric.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {}  range {range}", app.granularity.as_str())),
            Span::styled(
                "  |  j/k select  m metric  d granularity  s/e range  x clear  q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
