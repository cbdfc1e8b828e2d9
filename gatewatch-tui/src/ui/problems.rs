//! Problems view rendering.

use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::{epoch_ms, format_age, format_clock_age};
use crate::ui::card::Card;
use crate::ui::common::render_panel_message;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel = &app.problems;

    if render_panel_message(
        frame,
        app,
        area,
        "Problems",
        panel.error.as_deref(),
        panel.loading,
        panel.items.is_empty(),
        "No problems found.",
    ) {
        return;
    }

    let now_ms = epoch_ms();

    let header = Row::new(vec!["Age", "Sev", "Name", "Ack", "Details"])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = panel
        .items
        .iter()
        .map(|problem| {
            let severity = problem.severity();
            let ack = if problem.is_acknowledged() { "yes" } else { "no" };
            let details = if problem.opdata.is_empty() {
                "-".to_string()
            } else {
                problem.opdata.clone()
            };

            Row::new(vec![
                Cell::from(format_clock_age(&problem.clock, now_ms)),
                Cell::from(severity.map(|s| s.label()).unwrap_or("-"))
                    .style(app.theme.severity_style(severity)),
                Cell::from(problem.name.clone()),
                Cell::from(ack),
                Cell::from(details),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(14),
        Constraint::Fill(3),
        Constraint::Length(4),
        Constraint::Fill(2),
    ];

    let subtitle = match panel.last_updated {
        Some(at) => format!("{} shown, updated {} ago", panel.items.len(), format_age(at.elapsed().as_millis() as i64)),
        None => format!("{} shown", panel.items.len()),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Card::new("Problems").subtitle(subtitle).block(&app.theme))
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(panel.selected.min(panel.items.len().saturating_sub(1))));

    frame.render_stateful_widget(table, area, &mut state);
}
