use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use crate::app::{App, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // The filter editor captures all input while open
    if app.filter_editor.is_some() {
        handle_filter_editor_key(app, key);
        return;
    }

    // Inline search input
    if app.search_active {
        handle_search_key(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // View switching
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_view(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_view(),

        // Direct view access
        KeyCode::Char('1') => app.set_view(View::Events),
        KeyCode::Char('2') => app.set_view(View::Problems),
        KeyCode::Char('3') => app.set_view(View::Triggers),
        KeyCode::Char('4') => app.set_view(View::Hosts),
        KeyCode::Char('5') => app.set_view(View::Health),
        KeyCode::Char('6') => app.set_view(View::Live),

        // Selection
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),

        // Refresh (with an error showing, this is the retry control)
        KeyCode::Char('r') => {
            app.refresh_current();
            app.set_status_message(format!("Refreshing {}...", app.view.label()));
        }
        KeyCode::Char('R') => {
            app.refresh_all();
            app.set_status_message("Refreshing all panels...".to_string());
        }

        // Filtering
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('f') => app.open_filter_editor(),
        KeyCode::Char('c') => {
            if app.criteria.active_count() > 0 {
                app.clear_filters();
                app.set_status_message("Filters cleared".to_string());
            }
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while the inline search is active
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_search(),
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

/// Handle key input while the filter editor overlay is open
fn handle_filter_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_filter_editor(),

        KeyCode::Tab | KeyCode::Down => {
            if let Some(editor) = app.filter_editor.as_mut() {
                editor.next_field();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(editor) = app.filter_editor.as_mut() {
                editor.prev_field();
            }
        }

        // Step the focused option field; each step is a criteria change
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            let next = app
                .filter_editor
                .as_ref()
                .and_then(|editor| editor.step(&app.criteria, forward));
            if let Some(next) = next {
                app.set_criteria(next);
            }
        }

        // Commit the text drafts
        KeyCode::Enter => {
            let next = app
                .filter_editor
                .as_ref()
                .map(|editor| editor.commit_text(&app.criteria));
            if let Some(next) = next {
                app.set_criteria(next);
            }
        }

        // Clear all filters atomically
        KeyCode::Delete => {
            app.clear_filters();
            let criteria = app.criteria.clone();
            if let Some(editor) = app.filter_editor.as_mut() {
                editor.sync(&criteria);
            }
            app.set_status_message("Filters cleared".to_string());
        }

        KeyCode::Backspace => {
            if let Some(editor) = app.filter_editor.as_mut() {
                editor.pop_char();
            }
        }
        KeyCode::Char(c) => {
            if let Some(editor) = app.filter_editor.as_mut() {
                editor.push_char(c);
            }
        }

        _ => {}
    }
}

/// Handle mouse events (wheel scrolling moves the selection)
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),
        _ => {}
    }
}
