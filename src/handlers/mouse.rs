//! Mouse Input Handler
//!
//! Pointer motion feeds the tilt/parallax effects. Clicks are resolved
//! against the hit map recorded by the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use crate::ui::hit::HitTarget;
use crate::App;
use foliotui::model::Focus;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.model.interaction.pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.model.interaction.pointer_moved(mouse.column, mouse.row);
            match app.hit_map.target_at(mouse.column, mouse.row) {
                Some(target) => click(app, target, now),
                // Clicking empty space leaves the focused control
                None => app.model.ui.focus = None,
            }
        }
        MouseEventKind::ScrollDown => {
            app.model.scroll_next(now);
        }
        MouseEventKind::ScrollUp => {
            app.model.scroll_prev(now);
        }
        _ => {}
    }
}

fn click(app: &mut App, target: HitTarget, now: Instant) {
    match target {
        HitTarget::Nav(section) => {
            app.model.scroll_to(section, now);
        }
        HitTarget::ThemeToggle => app.activate(Focus::ThemeToggle, now),
        HitTarget::CallToAction => app.activate(Focus::CallToAction, now),
        HitTarget::Reactor => app.activate(Focus::Reactor, now),
        HitTarget::Field(field) => app.activate(Focus::Field(field), now),
        HitTarget::Submit => app.activate(Focus::Submit, now),
    }
}
