//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, the help
//! overlay, and the shared loading/error/empty rendering for panels.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, View};
use crate::ui::card::{Card, CardVariant};

/// Render the header bar with gateway identity and overall state.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (dot, dot_style) = match app.health.data.as_ref() {
        Some(health) if health.is_ok() => ("●", app.theme.state_style(true)),
        Some(_) => ("●", app.theme.state_style(false)),
        None => ("○", Style::default().add_modifier(Modifier::DIM)),
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", dot), dot_style),
        Span::styled("GATEWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(app.gateway().to_string()),
        Span::raw(" │ "),
        Span::styled(
            format!("{}", app.problems.items.len()),
            Style::default().fg(app.theme.warning),
        ),
        Span::raw(" problems"),
    ];

    let active = app.criteria.active_count();
    if active > 0 {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} filter{} active", active, if active == 1 { "" } else { "s" }),
            Style::default().fg(app.theme.highlight),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing available views.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![
        Line::from(" 1:Events "),
        Line::from(" 2:Problems "),
        Line::from(" 3:Triggers "),
        Line::from(" 4:Hosts "),
        Line::from(" 5:Health "),
        Line::from(" 6:Live "),
    ];

    let selected = match app.view {
        View::Events => 0,
        View::Problems => 1,
        View::Triggers => 2,
        View::Hosts => 3,
        View::Health => 4,
        View::Live => 5,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the search input when active, temporary status messages, or
/// the per-view last-updated time and key hints.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if app.search_active {
        let paragraph = Paragraph::new(format!(" search: {}_  (Enter:apply Esc:cancel)", app.search_input))
            .style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let updated = match app.view {
        View::Events => app.events.last_updated,
        View::Problems => app.problems.last_updated,
        View::Triggers => app.triggers.last_updated,
        View::Hosts => app.hosts.last_updated,
        View::Health => app.health.last_updated,
        View::Live => None,
    };

    let updated = match updated {
        Some(at) => format!("Updated {:.0}s ago", at.elapsed().as_secs_f64()),
        None if app.view == View::Live => {
            if app.live.connected {
                "Channel connected".to_string()
            } else {
                "Channel disconnected".to_string()
            }
        }
        None => "Waiting for data".to_string(),
    };

    let status = format!(
        " {} | {} | /:search f:filters c:clear r:refresh R:all ?:help q:quit",
        app.view.label(),
        updated,
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the loading/error/empty message for a panel, if one applies.
///
/// Returns true when a message was rendered and the view should skip
/// its table.
pub fn render_panel_message(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    error: Option<&str>,
    loading: bool,
    empty: bool,
    empty_text: &str,
) -> bool {
    if let Some(error) = error {
        let card = Card::new(title).variant(CardVariant::Error).subtitle("fetch failed");
        let block = card.block(&app.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = vec![
            Line::from(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(app.theme.critical),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to retry",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
        return true;
    }

    if loading && empty {
        let card = Card::new(title);
        let block = card.block(&app.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("Loading...").style(Style::default().add_modifier(Modifier::DIM)),
            inner,
        );
        return true;
    }

    if empty {
        let card = Card::new(title);
        let block = card.block(&app.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(empty_text).style(Style::default().add_modifier(Modifier::DIM)),
            inner,
        );
        return true;
    }

    false
}

/// Render the help overlay with keyboard shortcuts.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  Tab         Next view"),
        Line::from("  1-6         Jump to view"),
        Line::from("  ↑/↓ j/k     Move selection"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Filtering",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  /         Edit search term"),
        Line::from("  f         Open filter editor"),
        Line::from("  c         Clear all filters"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Data",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Refresh current panel"),
        Line::from("  R         Refresh all panels"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?         Toggle this help"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 26u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
