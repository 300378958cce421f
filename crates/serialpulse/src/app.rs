use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use serialpulse_core::aggregate::DateRange;
use serialpulse_core::group::{EntityGroups, group_by_entity};
use serialpulse_core::model::{EntityInfo, Granularity, Metric, Snapshot};
use serialpulse_core::pipeline::{ChartSeries, run_query};
use serialpulse_core::query::ChartQuery;

use crate::components::{
    chart::render_chart, entity_list::render_entity_list, status_bar::render_status_bar,
};

/// Which date-range bound an input session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeInput {
    Start,
    End,
}

pub struct App {
    /// Entities offered in the picker: list-file order, restricted to those
    /// that actually have snapshot data.
    pub(crate) entities: Vec<EntityInfo>,
    pub(crate) groups: EntityGroups,
    /// 0 selects the "mean only" row; `i > 0` selects `entities[i - 1]`.
    pub(crate) selected: usize,
    pub(crate) metric: Metric,
    pub(crate) granularity: Granularity,
    pub(crate) range_start: String,
    pub(crate) range_end: String,
    pub(crate) editing: Option<RangeInput>,
    pub(crate) input: String,
    /// Last pipeline output; replaced wholesale on every control change.
    pub(crate) chart: ChartSeries,
    exit: bool,
}

impl App {
    pub fn new(entities: Vec<EntityInfo>, snapshots: Vec<Snapshot>) -> Self {
        let groups = group_by_entity(snapshots);
        let entities: Vec<EntityInfo> = entities
            .into_iter()
            .filter(|info| groups.contains_key(&info.id))
            .collect();

        let mut app = Self {
            entities,
            groups,
            selected: 0,
            metric: Metric::default(),
            granularity: Granularity::default(),
            range_start: String::new(),
            range_end: String::new(),
            editing: None,
            input: String::new(),
            chart: ChartSeries::default(),
            exit: false,
        };
        app.rerun_pipeline();
        app
    }

    /// The entity the overlay tracks, if any.
    pub(crate) fn selected_entity(&self) -> Option<&EntityInfo> {
        (self.selected > 0).then(|| &self.entities[self.selected - 1])
    }

    /// Build the query value for the current control state.
    fn query(&self) -> ChartQuery {
        ChartQuery {
            entity: self.selected_entity().map(|info| info.id.clone()),
            metric: self.metric,
            granularity: self.granularity,
            range: DateRange {
                start: (!self.range_start.is_empty()).then(|| self.range_start.clone()),
                end: (!self.range_end.is_empty()).then(|| self.range_end.clone()),
            },
        }
    }

    /// Re-run the whole pipeline and replace the chart data, even when the
    /// new result is empty.
    fn rerun_pipeline(&mut self) {
        let query = self.query();
        self.chart = run_query(&self.groups, &query);
        tracing::debug!(
            metric = query.metric.as_str(),
            granularity = query.granularity.as_str(),
            points = self.chart.timestamps.len(),
            overlay = self.chart.overlay.is_some(),
            "pipeline rerun"
        );
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(frame.area());

        render_entity_list(frame, columns[0], self);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(columns[1]);

        render_chart(frame, rows[0], self);
        render_status_bar(frame, rows[1], self);
    }

    fn handle_events(&mut self) -> std::io::Result<()> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(bound) = self.editing {
            self.handle_range_input(bound, key);
            return;
        }

        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => self.exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('m') => {
                self.metric = self.metric.next();
                self.rerun_pipeline();
            }
            KeyCode::Char('d') => {
                self.granularity = self.granularity.toggle();
                self.rerun_pipeline();
            }
            KeyCode::Char('s') => {
                self.input = self.range_start.clone();
                self.editing = Some(RangeInput::Start);
            }
            KeyCode::Char('e') => {
                self.input = self.range_end.clone();
                self.editing = Some(RangeInput::End);
            }
            KeyCode::Char('x') => {
                self.range_start.clear();
                self.range_end.clear();
                self.rerun_pipeline();
            }
            _ => {}
        }
    }

    fn move_selection(&mut self, step: isize) {
        // One extra row at the top for "mean only".
        let total = self.entities.len() as isize + 1;
        self.selected = (self.selected as isize + step).rem_euclid(total) as usize;
        self.rerun_pipeline();
    }

    fn handle_range_input(&mut self, bound: RangeInput, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.editing = None;
                self.input.clear();
            }
            KeyCode::Enter => {
                let value = std::mem::take(&mut self.input);
                match bound {
                    RangeInput::Start => self.range_start = value,
                    RangeInput::End => self.range_end = value,
                }
                self.editing = None;
                self.rerun_pipeline();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }
}
