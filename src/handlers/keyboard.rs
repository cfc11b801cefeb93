//! Keyboard Input Handler
//!
//! Two modes: while a form field has focus, printable keys are typed into
//! it; otherwise keys navigate sections and drive the focused control.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::App;
use foliotui::logic::navigation;
use foliotui::model::ContactField;
use foliotui::Section;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    if let Some(field) = app.model.ui.editing_field() {
        handle_editing_key(app, field, key, now);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Esc => {
            // First Esc drops focus, the next one quits
            if app.model.ui.focus.take().is_none() {
                app.model.ui.should_quit = true;
            }
        }
        KeyCode::Char('t') => app.model.toggle_theme(),
        KeyCode::Char('?') => app.model.ui.show_help = !app.model.ui.show_help,
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(section) = navigation::section_for_hotkey(c) {
                app.model.scroll_to(section, now);
            }
        }
        KeyCode::Char('j') | KeyCode::Down | KeyCode::PageDown | KeyCode::Char(' ') => {
            app.model.scroll_next(now);
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::PageUp => {
            app.model.scroll_prev(now);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.model.scroll_to(Section::Home, now);
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.model.scroll_to(Section::Contact, now);
        }
        KeyCode::Tab => app.model.cycle_focus(false),
        KeyCode::BackTab => app.model.cycle_focus(true),
        KeyCode::Enter => {
            if let Some(focus) = app.model.ui.focus {
                app.activate(focus, now);
            }
        }
        _ => {}
    }
}

fn handle_editing_key(app: &mut App, field: ContactField, key: KeyEvent, now: Instant) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.model.ui.focus = None,
        KeyCode::Char('s') if ctrl => app.submit_contact(now),
        KeyCode::Tab => app.model.cycle_focus(false),
        KeyCode::BackTab => app.model.cycle_focus(true),
        KeyCode::Enter if field.is_multiline() => app.model.contact.insert_char(field, '\n'),
        KeyCode::Enter => app.model.cycle_focus(false),
        KeyCode::Backspace => app.model.contact.backspace(field),
        KeyCode::Char(c) if !ctrl => app.model.contact.insert_char(field, c),
        _ => {}
    }
}
