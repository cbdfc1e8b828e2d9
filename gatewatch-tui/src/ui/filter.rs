//! Filter editor overlay.
//!
//! Edits the one [`FilterCriteria`] record. Stepping an enumerated
//! field commits immediately; text fields commit on Enter. Each commit
//! replaces the whole criteria record, which re-fetches every panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use gatewatch_types::{FilterCriteria, SeverityFilter, StatusFilter, TimeRange};

use crate::app::App;

/// The field the editor cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Severity,
    Status,
    TimeRange,
    Host,
    Search,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            FilterField::Severity => FilterField::Status,
            FilterField::Status => FilterField::TimeRange,
            FilterField::TimeRange => FilterField::Host,
            FilterField::Host => FilterField::Search,
            FilterField::Search => FilterField::Severity,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FilterField::Severity => FilterField::Search,
            FilterField::Status => FilterField::Severity,
            FilterField::TimeRange => FilterField::Status,
            FilterField::Host => FilterField::TimeRange,
            FilterField::Search => FilterField::Host,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Severity => "Severity",
            FilterField::Status => "Status",
            FilterField::TimeRange => "Time range",
            FilterField::Host => "Host",
            FilterField::Search => "Search",
        }
    }

    /// Whether this field takes typed text rather than fixed options.
    pub fn is_text(&self) -> bool {
        matches!(self, FilterField::Host | FilterField::Search)
    }
}

/// Editor state: the focused field plus draft text for the free-text
/// fields. Enumerated fields have no draft; they step directly on the
/// live criteria.
#[derive(Debug, Clone)]
pub struct FilterEditor {
    pub field: FilterField,
    pub host_input: String,
    pub search_input: String,
}

impl FilterEditor {
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self {
            field: FilterField::Severity,
            host_input: criteria.selected_host.clone(),
            search_input: criteria.search_term.clone(),
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Step the focused enumerated field, returning the new criteria
    /// to commit. Text fields do not step.
    pub fn step(&self, criteria: &FilterCriteria, forward: bool) -> Option<FilterCriteria> {
        let mut next = criteria.clone();
        match self.field {
            FilterField::Severity => {
                next.severity = cycle(&SeverityFilter::options(), criteria.severity, forward);
            }
            FilterField::Status => {
                next.status = cycle(&StatusFilter::options(), criteria.status, forward);
            }
            FilterField::TimeRange => {
                next.time_range = cycle(&TimeRange::options(), criteria.time_range, forward);
            }
            FilterField::Host | FilterField::Search => return None,
        }
        Some(next)
    }

    /// Apply both draft text fields, returning the criteria to commit.
    pub fn commit_text(&self, criteria: &FilterCriteria) -> FilterCriteria {
        let mut next = criteria.clone();
        next.selected_host = self.host_input.clone();
        next.search_term = self.search_input.clone();
        next
    }

    /// Append to the focused text field. No-op on option fields.
    pub fn push_char(&mut self, c: char) {
        match self.field {
            FilterField::Host => self.host_input.push(c),
            FilterField::Search => self.search_input.push(c),
            _ => {}
        }
    }

    /// Remove the last character of the focused text field.
    pub fn pop_char(&mut self) {
        match self.field {
            FilterField::Host => {
                self.host_input.pop();
            }
            FilterField::Search => {
                self.search_input.pop();
            }
            _ => {}
        }
    }

    /// Sync drafts after the criteria were reset underneath us.
    pub fn sync(&mut self, criteria: &FilterCriteria) {
        self.host_input = criteria.selected_host.clone();
        self.search_input = criteria.search_term.clone();
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
    options[next]
}

/// Render the filter editor as a centered overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(editor) = &app.filter_editor else {
        return;
    };

    let active = app.criteria.active_count();
    let title = format!(
        " Filters ({} active filter{}) ",
        active,
        if active == 1 { "" } else { "s" }
    );

    let field_line = |field: FilterField, value: String| -> Line {
        let focused = editor.field == field;
        let marker = if focused { "▶ " } else { "  " };
        let value_span = if focused && !field.is_text() {
            Span::styled(
                format!("◀ {} ▶", value),
                Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
            )
        } else if focused {
            Span::styled(
                format!("{}_", value),
                Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(value)
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("{:<12}", field.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            value_span,
        ])
    };

    let host_value = if editor.host_input.is_empty() && editor.field != FilterField::Host {
        "(all hosts)".to_string()
    } else {
        editor.host_input.clone()
    };
    let search_value = if editor.search_input.is_empty() && editor.field != FilterField::Search {
        "(none)".to_string()
    } else {
        editor.search_input.clone()
    };

    let lines = vec![
        Line::from(""),
        field_line(FilterField::Severity, app.criteria.severity.label().to_string()),
        field_line(FilterField::Status, app.criteria.status.label().to_string()),
        field_line(FilterField::TimeRange, app.criteria.time_range.label().to_string()),
        field_line(FilterField::Host, host_value),
        field_line(FilterField::Search, search_value),
        Line::from(""),
        Line::from(Span::styled(
            " Tab:field  ←/→:change  Enter:apply text",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            " Del:clear all  Esc:close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let width = 48u16.min(area.width.saturating_sub(4));
    let height = 12u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay);
    frame.render_widget(Paragraph::new(lines).block(block), overlay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewatch_types::Severity;

    #[test]
    fn field_cycle_is_closed() {
        let mut field = FilterField::Severity;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FilterField::Severity);
        assert_eq!(FilterField::Severity.prev(), FilterField::Search);
    }

    #[test]
    fn stepping_severity_walks_the_options() {
        let editor = FilterEditor::from_criteria(&FilterCriteria::default());
        let criteria = FilterCriteria::default();

        let next = editor.step(&criteria, true).unwrap();
        assert_eq!(next.severity, SeverityFilter::Level(Severity::NotClassified));

        // Stepping back from All wraps to the last option.
        let prev = editor.step(&criteria, false).unwrap();
        assert_eq!(prev.severity, SeverityFilter::Level(Severity::Disaster));

        // Only the stepped field changes.
        assert_eq!(next.status, criteria.status);
        assert_eq!(next.time_range, criteria.time_range);
    }

    #[test]
    fn text_fields_do_not_step() {
        let mut editor = FilterEditor::from_criteria(&FilterCriteria::default());
        editor.field = FilterField::Search;
        assert!(editor.step(&FilterCriteria::default(), true).is_none());
    }

    #[test]
    fn text_commit_applies_both_drafts() {
        let mut editor = FilterEditor::from_criteria(&FilterCriteria::default());
        editor.field = FilterField::Host;
        for c in "web-01".chars() {
            editor.push_char(c);
        }
        editor.field = FilterField::Search;
        for c in "cpu".chars() {
            editor.push_char(c);
        }
        editor.pop_char();

        let committed = editor.commit_text(&FilterCriteria::default());
        assert_eq!(committed.selected_host, "web-01");
        assert_eq!(committed.search_term, "cp");
    }

    #[test]
    fn option_fields_ignore_typed_characters() {
        let mut editor = FilterEditor::from_criteria(&FilterCriteria::default());
        editor.field = FilterField::Severity;
        editor.push_char('x');
        editor.pop_char();
        assert!(editor.host_input.is_empty());
        assert!(editor.search_input.is_empty());
    }
}
