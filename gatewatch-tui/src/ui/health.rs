//! Health view rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::card::{Card, CardVariant};
use crate::ui::common::render_panel_message;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel = &app.health;

    if render_panel_message(
        frame,
        app,
        area,
        "Gateway Health",
        panel.error.as_deref(),
        panel.loading,
        panel.data.is_none(),
        "No health report yet.",
    ) {
        return;
    }

    let Some(health) = panel.data.as_ref() else {
        return;
    };

    let variant = if health.is_ok() { CardVariant::Success } else { CardVariant::Error };
    let card = Card::new("Gateway Health")
        .subtitle(app.gateway().to_string())
        .variant(variant);
    let block = card.block(&app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = |text: &str| Span::styled(format!("{:<10}", text), Style::default().add_modifier(Modifier::BOLD));

    let mut lines = vec![Line::from(vec![
        label("Status"),
        Span::styled(
            health.status.clone(),
            app.theme.state_style(health.is_ok()).add_modifier(Modifier::BOLD),
        ),
    ])];

    if !health.version.is_empty() {
        lines.push(Line::from(vec![label("Version"), Span::raw(health.version.clone())]));
    }
    if let Some(uptime) = health.uptime {
        lines.push(Line::from(vec![label("Uptime"), Span::raw(format_uptime(uptime))]));
    }
    if let Some(memory) = &health.memory {
        let used = memory.used_bytes.map(format_bytes);
        let total = memory.total_bytes.map(format_bytes);
        let text = match (used, total) {
            (Some(used), Some(total)) => format!("{} / {}", used, total),
            (Some(used), None) => used,
            (None, Some(total)) => format!("? / {}", total),
            (None, None) => "-".to_string(),
        };
        lines.push(Line::from(vec![label("Memory"), Span::raw(text)]));
    }

    if !health.services.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Services",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (name, status) in &health.services {
            let good = status.eq_ignore_ascii_case("ok");
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<20}", name)),
                Span::styled(status.clone(), app.theme.state_style(good)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Format an uptime in seconds, largest two units: "3d 7h", "2h 5m".
fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let minutes = (secs % 3600) / 60;
    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes >= 1 << 30 {
        format!("{:.1} GiB", bytes as f64 / (1u64 << 30) as f64)
    } else if bytes >= 1 << 20 {
        format!("{:.1} MiB", bytes as f64 / (1u64 << 20) as f64)
    } else if bytes >= 1 << 10 {
        format!("{:.1} KiB", bytes as f64 / (1u64 << 10) as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_uses_the_two_largest_units() {
        assert_eq!(format_uptime(45), "45s");
        assert_eq!(format_uptime(185), "3m 5s");
        assert_eq!(format_uptime(7_260), "2h 1m");
        assert_eq!(format_uptime(90_000), "1d 1h");
    }

    #[test]
    fn byte_sizes_scale() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(5 << 20), "5.0 MiB");
        assert_eq!(format_bytes(3 << 30), "3.0 GiB");
    }
}
