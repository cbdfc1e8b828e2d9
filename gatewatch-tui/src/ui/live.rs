//! Live feed view rendering.
//!
//! Shows the push-channel connection state, the latest payload, and
//! the recent-message feed (newest first).

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{epoch_ms, format_age, LiveMessage};
use crate::ui::card::{Card, CardVariant};

/// Card variant for a message kind, mirroring the created/deleted/
/// updated convention of the backend's change events.
fn kind_variant(message: &LiveMessage) -> CardVariant {
    match &message.kind {
        None => CardVariant::Default,
        Some(kind) if kind.contains("created") => CardVariant::Success,
        Some(kind) if kind.contains("deleted") => CardVariant::Error,
        Some(kind) if kind.contains("updated") => CardVariant::Warning,
        Some(_) => CardVariant::Default,
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Connection status
        Constraint::Length(7), // Latest payload
        Constraint::Min(4),    // Recent feed
    ])
    .split(area);

    render_connection(frame, app, chunks[0]);
    render_latest(frame, app, chunks[1]);
    render_feed(frame, app, chunks[2]);
}

fn render_connection(frame: &mut Frame, app: &App, area: Rect) {
    let (variant, text) = match (&app.live.endpoint, app.live.connected) {
        (None, _) => (
            CardVariant::Warning,
            "No live endpoint configured (start with --live <url>)".to_string(),
        ),
        (Some(url), true) => (CardVariant::Success, format!("● Connected to {}", url)),
        (Some(url), false) => (CardVariant::Error, format!("● Disconnected from {}", url)),
    };

    let card = Card::new("Connection").variant(variant);
    let block = card.block(&app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(text).style(app.theme.state_style(app.live.connected)),
        inner,
    );
}

fn render_latest(frame: &mut Frame, app: &App, area: Rect) {
    let Some(latest) = &app.live.latest else {
        let card = Card::new("Latest Message");
        let block = card.block(&app.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("No messages received yet.")
                .style(Style::default().add_modifier(Modifier::DIM)),
            inner,
        );
        return;
    };

    let received = latest
        .timestamp
        .clone()
        .unwrap_or_else(|| format!("{} ago", format_age(epoch_ms() - latest.received_at_ms)));

    let card = Card::new(latest.kind_title())
        .subtitle(received)
        .variant(kind_variant(latest));
    let block = card.block(&app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = serde_json::to_string_pretty(&latest.data).unwrap_or_else(|_| "<opaque>".to_string());
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), inner);
}

fn render_feed(frame: &mut Frame, app: &App, area: Rect) {
    let card = Card::new("Recent Messages")
        .subtitle(format!("last {}", app.live.feed.len()));
    let block = card.block(&app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.live.feed.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing yet. Events appear here as the backend emits them.")
                .style(Style::default().add_modifier(Modifier::DIM)),
            inner,
        );
        return;
    }

    let now_ms = epoch_ms();
    let lines: Vec<Line> = app
        .live
        .feed
        .iter()
        .rev() // newest first
        .map(|message| {
            let card_accent = Card::new("").variant(kind_variant(message)).accent(&app.theme);
            let preview = serde_json::to_string(&message.data).unwrap_or_default();
            let preview: String = preview.chars().take(60).collect();
            Line::from(vec![
                Span::styled(
                    format!("{:>4} ", format_age(now_ms - message.received_at_ms)),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::styled(
                    format!("{:<18}", message.kind_title()),
                    Style::default().fg(card_accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(preview),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
