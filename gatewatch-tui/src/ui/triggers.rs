//! Triggers view rendering.

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
    let panel = &app.triggers;

    if render_panel_message(
        frame,
        app,
        area,
        "Triggers",
        panel.error.as_deref(),
        panel.loading,
        panel.items.is_empty(),
        "No triggers found.",
    ) {
        return;
    }

    let now_ms = epoch_ms();

    let header = Row::new(vec!["Changed", "Priority", "Description", "Host", "Status", "State"])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = panel
        .items
        .iter()
        .map(|trigger| {
            let priority = trigger.priority();
            let host = trigger
                .hosts
                .first()
                .map(|h| if h.name.is_empty() { h.host.clone() } else { h.name.clone() })
                .unwrap_or_else(|| "-".to_string());
            let status = if trigger.is_enabled() { "enabled" } else { "disabled" };
            let (state, state_good) = if trigger.in_problem_state() {
                ("PROBLEM", false)
            } else {
                ("OK", true)
            };

            Row::new(vec![
                Cell::from(format_clock_age(&trigger.lastchange, now_ms)),
                Cell::from(priority.map(|s| s.label()).unwrap_or("-"))
                    .style(app.theme.severity_style(priority)),
                Cell::from(trigger.description.clone()),
                Cell::from(host),
                Cell::from(status),
                Cell::from(state).style(app.theme.state_style(state_good)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Length(14),
        Constraint::Fill(3),
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(7),
    ];

    let subtitle = match panel.last_updated {
        Some(at) => format!("{} shown, updated {} ago", panel.items.len(), format_age(at.elapsed().as_millis() as i64)),
        None => format!("{} shown", panel.items.len()),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Card::new("Triggers").subtitle(subtitle).block(&app.theme))
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(panel.selected.min(panel.items.len().saturating_sub(1))));

    frame.render_stateful_widget(table, area, &mut state);
}
