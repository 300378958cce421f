//! Entity picker list.
//!
//! Row 0 is the "mean only" pseudo-entry; the rest are the entities from the
//! list table that actually have snapshot data.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::App;

pub fn render_entity_list(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let total = app.entities.len() + 1;
    let offset = centered_scroll(app.selected, total, visible);

    let items: Vec<ListItem> = std::iter::once("(mean only)".to_owned())
        .chain(app.entities.iter().map(|info| info.title.clone()))
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
        .map(|(idx, title)| {
            let style = if idx == app.selected {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else if idx == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            let marker = if idx == app.selected { "> " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(title, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Novels "));
    frame.render_widget(list, area);
}

/// Scroll offset that keeps the selection centered when possible.
fn centered_scroll(selected: usize, total: usize, visible: usize) -> usize {
    if total <= visible || visible == 0 {
        return 0;
    }
    let center = visible / 2;
    if selected <= center {
        0
    } else {
        (selected - center).min(total - visible)
    }
}
