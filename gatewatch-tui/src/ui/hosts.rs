//! Hosts view rendering.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::{epoch_ms, format_age, format_clock_age};
use crate::ui::card::Card;
use crate::ui::common::render_panel_message;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel = &app.hosts;

    if render_panel_message(
        frame,
        app,
        area,
        "Hosts",
        panel.error.as_deref(),
        panel.loading,
        panel.items.is_empty(),
        "No hosts found.",
    ) {
        return;
    }

    let now_ms = epoch_ms();

    let header = Row::new(vec!["Name", "Host", "Status", "Agent", "Seen", "Error"])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = panel
        .items
        .iter()
        .map(|host| {
            let (status, status_good) = if host.is_monitored() {
                ("monitored", true)
            } else {
                ("unmonitored", false)
            };
            let (agent, agent_style) = if host.is_available() {
                ("available", app.theme.state_style(true))
            } else if host.is_unavailable() {
                ("unavailable", app.theme.state_style(false))
            } else {
                ("unknown", Style::default().add_modifier(Modifier::DIM))
            };

            Row::new(vec![
                Cell::from(host.name.clone()),
                Cell::from(host.host.clone()),
                Cell::from(status).style(app.theme.state_style(status_good)),
                Cell::from(agent).style(agent_style),
                Cell::from(format_clock_age(&host.lastaccess, now_ms)),
                Cell::from(if host.error.is_empty() { "-".to_string() } else { host.error.clone() }),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(5),
        Constraint::Fill(2),
    ];

    let subtitle = match panel.last_updated {
        Some(at) => format!("{} shown, updated {} ago", panel.items.len(), format_age(at.elapsed().as_millis() as i64)),
        None => format!("{} shown", panel.items.len()),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Card::new("Hosts").subtitle(subtitle).block(&app.theme))
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(panel.selected.min(panel.items.len().saturating_sub(1))));

    frame.render_stateful_widget(table, area, &mut state);
}
