//! Ratatui-based terminal dashboard.
//!
//! The TUI provides a settings panel with the two selectors (report type and
//! year), then renders the current view as a 2×2 chart grid. The year selector
//! is only enabled for the yearly report and is cleared whenever it becomes
//! disabled.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::Dashboard;
use crate::domain::{Chart, ChartKind, DashboardView, ReportType, YEAR_RANGE};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::{LineSeriesData, SalesLineChart};

const SLICE_COLORS: [Color; 5] = [Color::Cyan, Color::Yellow, Color::Green, Color::Magenta, Color::Red];

/// Start the TUI.
pub fn run(dashboard: Dashboard) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(dashboard);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

const FIELD_REPORT: usize = 0;
const FIELD_YEAR: usize = 1;

struct App {
    dashboard: Dashboard,
    report: Option<ReportType>,
    year: Option<i32>,
    year_input: String,
    selected_field: usize,
    editing_year: bool,
    status: String,
    view: DashboardView,
}

impl App {
    fn new(dashboard: Dashboard) -> Self {
        let status = format!(
            "Loaded {} rows from {}",
            dashboard.data.rows_used, dashboard.source
        );
        let mut app = Self {
            dashboard,
            report: None,
            year: None,
            year_input: String::new(),
            selected_field: FIELD_REPORT,
            editing_year: false,
            status,
            view: DashboardView::prompt(""),
        };
        app.refresh_view();
        app
    }

    fn year_disabled(&self) -> bool {
        self.dashboard
            .year_selector_disabled(self.report.map(ReportType::label))
    }

    /// Re-run the selector rules and rebuild the output region.
    fn refresh_view(&mut self) {
        if self.year_disabled() {
            self.year = None;
        }
        self.view = self
            .dashboard
            .view(self.report.map(ReportType::label), self.year);
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing_year {
            self.handle_year_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.selected_field = FIELD_REPORT,
            KeyCode::Down | KeyCode::Tab => self.selected_field = FIELD_YEAR,
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Backspace | KeyCode::Delete => self.clear_field(),
            KeyCode::Enter if self.selected_field == FIELD_YEAR => {
                if self.year_disabled() {
                    self.status = "Year selection is only available for Yearly Statistics.".to_string();
                } else {
                    self.editing_year = true;
                    self.year_input.clear();
                    self.status = "Editing year (YYYY). Enter to apply, Esc to cancel.".to_string();
                }
            }
            _ => {}
        }
        false
    }

    fn handle_year_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing_year = false;
                self.status = "Year edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing_year = false;
                self.apply_year_input();
            }
            KeyCode::Backspace => {
                self.year_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() && self.year_input.len() < 4 => {
                self.year_input.push(c);
            }
            _ => {}
        }
    }

    fn apply_year_input(&mut self) {
        let trimmed = self.year_input.trim();
        if trimmed.is_empty() {
            self.year = None;
            self.status = "year: cleared".to_string();
        } else {
            match trimmed.parse::<i32>() {
                Ok(y) if YEAR_RANGE.contains(&y) => {
                    self.year = Some(y);
                    self.status = format!("year: {y}");
                }
                _ => {
                    self.status = format!(
                        "Invalid year '{trimmed}' (expected {}-{}).",
                        YEAR_RANGE.start(),
                        YEAR_RANGE.end()
                    );
                    return;
                }
            }
        }
        self.refresh_view();
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            FIELD_REPORT => {
                self.report = step_report(self.report, delta);
                self.refresh_view();
                self.status = match self.report {
                    Some(r) => format!("report: {}", r.label()),
                    None => "report: cleared".to_string(),
                };
            }
            FIELD_YEAR => {
                if self.year_disabled() {
                    self.status = "Year selection is only available for Yearly Statistics.".to_string();
                    return;
                }
                let year = step_year(self.year, delta);
                self.year = Some(year);
                self.refresh_view();
                self.status = format!("year: {year}");
            }
            _ => {}
        }
    }

    fn clear_field(&mut self) {
        match self.selected_field {
            FIELD_REPORT => self.report = None,
            _ => self.year = None,
        }
        self.refresh_view();
        self.status = "selection cleared".to_string();
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
        self.draw_output(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let data = &self.dashboard.data;
        let lines = vec![
            Line::from(Span::styled(
                "XYZ Automotive Dashboard",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "rows: {} (skipped {}) | years: {}–{} | recession rows: {}",
                    data.rows_used,
                    data.row_errors.len(),
                    data.stats.year_min,
                    data.stats.year_max,
                    data.stats.recession_records,
                ),
                Style::default().fg(Color::Gray),
            )),
        ];
        let p = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let report_label = self
            .report
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| "Select a report type".to_string());
        let year_label = if self.editing_year {
            format!("{}▏", self.year_input)
        } else if self.year_disabled() {
            "(disabled)".to_string()
        } else {
            self.year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "Select-year".to_string())
        };

        let year_style = if self.year_disabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let items = vec![
            ListItem::new(format!("Select Statistics: {report_label}")),
            ListItem::new(format!("Year: {year_label}")).style(year_style),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_output(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let charts = match &self.view {
            DashboardView::Prompt { message } => {
                let msg = Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(msg, area);
                return;
            }
            DashboardView::Charts { charts, .. } => charts,
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let mut cells = Vec::with_capacity(4);
        for row in rows.iter() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            cells.extend(cols.iter().copied());
        }

        for (chart, cell) in charts.iter().zip(cells) {
            draw_chart(frame, cell, chart);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ change  Enter type year  Del clear  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn draw_chart(frame: &mut ratatui::Frame<'_>, area: Rect, chart: &Chart) {
    let block = Block::default().title(chart.title.as_str()).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Clear, inner);

    if chart.is_empty() {
        let msg = Paragraph::new("No data for this selection.").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    match chart.kind {
        ChartKind::Line => {
            let series = LineSeriesData::from_chart(chart);
            let widget = SalesLineChart {
                series: &series,
                x_label: &chart.x_label,
                y_label: &chart.y_label,
            };
            frame.render_widget(widget, inner);
        }
        ChartKind::Bar => draw_bars(frame, inner, chart),
        ChartKind::Pie => draw_shares(frame, inner, chart),
    }
}

/// Bars grouped by `x`; grouped charts (with `series`) get one bar per series value.
///
/// When the bars (or their group labels) do not fit the area, the chart is drawn
/// as one summary row per group instead, so no group is cut off.
fn draw_bars(frame: &mut ratatui::Frame<'_>, area: Rect, chart: &Chart) {
    let groups = bar_groups(chart);
    let Some(bar_width) = fitted_bar_width(&groups, area.width) else {
        draw_group_rows(frame, area, &groups);
        return;
    };

    let mut widget = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(1)
        .group_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    for (label, bars) in &groups {
        let bars: Vec<Bar> = bars
            .iter()
            .map(|(series, value)| {
                let bar = Bar::default()
                    .value(value.max(0.0).round() as u64)
                    .text_value(format!("{value:.0}"));
                match series {
                    Some(s) => bar.label(Line::from(s.clone())),
                    None => bar,
                }
            })
            .collect();
        widget = widget.data(BarGroup::default().label(Line::from(label.clone())).bars(&bars));
    }

    frame.render_widget(widget, area);
}

/// Bar width that fits every bar and every group label in `width` columns.
fn fitted_bar_width(groups: &[BarGroupData], width: u16) -> Option<u16> {
    let width = width as usize;
    let total_bars: usize = groups.iter().map(|(_, bars)| bars.len()).sum();
    if total_bars == 0 {
        return None;
    }
    // One gap column after every bar plus one between groups.
    let gaps = total_bars + groups.len();
    let bar_width = (width.saturating_sub(gaps) / total_bars).min(16);
    if bar_width == 0 {
        return None;
    }
    let labels_fit = groups.iter().all(|(label, bars)| {
        let group_width = bars.len() * bar_width + bars.len().saturating_sub(1);
        label.chars().count() <= group_width
    });
    labels_fit.then_some(bar_width as u16)
}

/// One row per group: label, series range, proportional bar, group total.
fn draw_group_rows(frame: &mut ratatui::Frame<'_>, area: Rect, groups: &[BarGroupData]) {
    let rows = group_rows(groups);
    let max = rows.iter().map(|r| r.total).fold(0.0_f64, f64::max);
    let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let range_width = rows.iter().map(|r| r.range.chars().count()).max().unwrap_or(0);
    let bar_space = (area.width as usize)
        .saturating_sub(label_width + range_width + 10)
        .max(1);

    let lines: Vec<Line> = rows
        .iter()
        .map(|r| {
            let n = if max > 0.0 {
                (r.total.max(0.0) / max * bar_space as f64).round() as usize
            } else {
                0
            };
            Line::from(vec![
                Span::raw(format!("{:<label_width$} ", r.label)),
                Span::styled(format!("{:<range_width$} ", r.range), Style::default().fg(Color::Gray)),
                Span::styled("█".repeat(n), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {:.0}", r.total)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

type BarGroupData = (String, Vec<(Option<String>, f64)>);

#[derive(Debug, Clone, PartialEq)]
struct GroupRow {
    label: String,
    /// `first–last` series value, e.g. the unemployment rate span.
    range: String,
    total: f64,
}

fn group_rows(groups: &[BarGroupData]) -> Vec<GroupRow> {
    groups
        .iter()
        .map(|(label, bars)| {
            let series: Vec<&str> = bars.iter().filter_map(|(s, _)| s.as_deref()).collect();
            let range = match (series.first(), series.last()) {
                (Some(first), Some(last)) if first != last => format!("{first}–{last}"),
                (Some(only), _) => only.to_string(),
                _ => String::new(),
            };
            GroupRow {
                label: label.clone(),
                range,
                total: bars.iter().map(|(_, v)| v).sum(),
            }
        })
        .collect()
}

/// Collapse chart points into `(x, [(series, value)])` groups, preserving order.
fn bar_groups(chart: &Chart) -> Vec<BarGroupData> {
    let mut groups: Vec<BarGroupData> = Vec::new();
    for p in &chart.points {
        match groups.last_mut() {
            Some((x, bars)) if *x == p.x => bars.push((p.series.clone(), p.value)),
            _ => groups.push((p.x.clone(), vec![(p.series.clone(), p.value)])),
        }
    }
    groups
}

/// Pie charts render as a share table with proportional bars.
fn draw_shares(frame: &mut ratatui::Frame<'_>, area: Rect, chart: &Chart) {
    let shares = chart.shares();
    if shares.is_empty() {
        frame.render_widget(Paragraph::new("Total is zero."), area);
        return;
    }

    let label_width = shares.iter().map(|(x, _)| x.chars().count()).max().unwrap_or(0);
    let bar_space = (area.width as usize).saturating_sub(label_width + 10).max(1);

    let lines: Vec<Line> = shares
        .iter()
        .enumerate()
        .map(|(i, (x, share))| {
            let color = SLICE_COLORS[i % SLICE_COLORS.len()];
            let n = (share * bar_space as f64).round() as usize;
            Line::from(vec![
                Span::raw(format!("{x:<label_width$} ")),
                Span::styled(format!("{:>5.1}% ", share * 100.0), Style::default().fg(Color::Gray)),
                Span::styled("█".repeat(n), Style::default().fg(color)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }), area);
}

/// Cycle the report selector: none → yearly → recession → none.
fn step_report(current: Option<ReportType>, delta: i32) -> Option<ReportType> {
    let mut options: Vec<Option<ReportType>> = vec![None];
    options.extend(ReportType::ALL.into_iter().map(Some));
    let len = options.len() as i32;
    let idx = options.iter().position(|o| *o == current).unwrap_or(0) as i32;
    options[(idx + delta).rem_euclid(len) as usize]
}

/// Move the year within `YEAR_RANGE`, wrapping at the ends. An empty selection
/// starts at the first (moving right) or last (moving left) year.
fn step_year(current: Option<i32>, delta: i32) -> i32 {
    let (start, end) = (*YEAR_RANGE.start(), *YEAR_RANGE.end());
    let Some(year) = current else {
        return if delta >= 0 { start } else { end };
    };
    let span = end - start + 1;
    start + (year - start + delta).rem_euclid(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataPoint, DataSource, PROMPT_SELECT_REPORT, PROMPT_SELECT_YEAR};

    fn app() -> App {
        let data = crate::data::generate_demo(11).unwrap();
        App::new(Dashboard::from_data(DataSource::Demo { seed: 11 }, data))
    }

    #[test]
    fn report_cycles_through_none() {
        assert_eq!(step_report(None, 1), Some(ReportType::Yearly));
        assert_eq!(step_report(Some(ReportType::Yearly), 1), Some(ReportType::Recession));
        assert_eq!(step_report(Some(ReportType::Recession), 1), None);
        assert_eq!(step_report(None, -1), Some(ReportType::Recession));
    }

    #[test]
    fn year_wraps_within_range() {
        assert_eq!(step_year(None, 1), 1980);
        assert_eq!(step_year(None, -1), 2023);
        assert_eq!(step_year(Some(2023), 1), 1980);
        assert_eq!(step_year(Some(1980), -1), 2023);
        assert_eq!(step_year(Some(2000), 1), 2001);
    }

    #[test]
    fn starts_with_report_prompt() {
        let app = app();
        assert_eq!(app.view.message(), Some(PROMPT_SELECT_REPORT));
        assert!(app.year_disabled());
    }

    #[test]
    fn yearly_flow_prompts_then_renders_charts() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        assert_eq!(app.report, Some(ReportType::Yearly));
        assert_eq!(app.view.message(), Some(PROMPT_SELECT_YEAR));

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        for c in "2008".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.year, Some(2008));
        assert_eq!(app.view.charts().len(), 4);
    }

    #[test]
    fn leaving_yearly_clears_year() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.year, Some(1980));

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.report, Some(ReportType::Recession));
        assert_eq!(app.year, None);
        assert_eq!(app.view.charts().len(), 4);

        // Year field stays disabled for the recession report.
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.year, None);
    }

    #[test]
    fn invalid_typed_year_is_rejected() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        for c in "1900".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.year, None);
        assert!(app.status.starts_with("Invalid year"));
    }

    fn rendered_text(width: u16, height: u16, chart: &Chart) -> String {
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_bars(f, f.area(), chart)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn crowded_unemployment_chart_keeps_every_vehicle_type() {
        let data = crate::data::generate_demo(42).unwrap();
        let chart = &crate::report::recession_charts(&data.records)[3];
        assert!(fitted_bar_width(&bar_groups(chart), 100).is_none());

        let text = rendered_text(100, 30, chart);
        let groups = bar_groups(chart);
        for (label, _) in &groups {
            assert!(text.contains(label.as_str()), "missing group {label}");
        }
        assert!(text.contains("Sports"));
        assert!(text.contains("Executivecar"));
    }

    #[test]
    fn narrow_chart_collapses_to_group_totals() {
        let chart = Chart {
            kind: ChartKind::Bar,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            points: vec![
                DataPoint { x: "Sports".to_string(), series: Some("5.1".to_string()), value: 10.0 },
                DataPoint { x: "Sports".to_string(), series: Some("7.4".to_string()), value: 20.0 },
                DataPoint { x: "Executivecar".to_string(), series: Some("6.0".to_string()), value: 5.0 },
            ],
        };
        let rows = group_rows(&bar_groups(&chart));
        assert_eq!(rows[0], GroupRow { label: "Sports".to_string(), range: "5.1–7.4".to_string(), total: 30.0 });
        assert_eq!(rows[1].range, "6.0");

        assert!(fitted_bar_width(&bar_groups(&chart), 12).is_none());
        let text = rendered_text(40, 6, &chart);
        assert!(text.contains("Sports") && text.contains("Executivecar"));
        assert!(text.contains("30"));
    }

    #[test]
    fn small_bar_chart_keeps_bar_layout() {
        let data = crate::data::generate_demo(42).unwrap();
        let chart = &crate::report::recession_charts(&data.records)[1];
        let width = fitted_bar_width(&bar_groups(chart), 100);
        assert!(width.is_some_and(|w| w >= 15));
    }

    #[test]
    fn bar_groups_follow_point_order() {
        let chart = Chart {
            kind: ChartKind::Bar,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            points: vec![
                DataPoint { x: "Sports".to_string(), series: Some("5".to_string()), value: 1.0 },
                DataPoint { x: "Sports".to_string(), series: Some("6".to_string()), value: 2.0 },
                DataPoint { x: "Executivecar".to_string(), series: Some("5".to_string()), value: 3.0 },
            ],
        };
        let groups = bar_groups(&chart);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Sports");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1[0], (Some("5".to_string()), 3.0));
    }
}
