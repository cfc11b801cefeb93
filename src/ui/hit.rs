use ratatui::layout::{Position, Rect};

use foliotui::model::ContactField;
use foliotui::Section;

/// Something on screen a mouse click can trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Nav(Section),
    ThemeToggle,
    CallToAction,
    Reactor,
    Field(ContactField),
    Submit,
}

/// Clickable areas recorded during the last frame
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    areas: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.areas.push((area, target));
        }
    }

    /// Target under a cell; later (topmost) areas win
    pub fn target_at(&self, x: u16, y: u16) -> Option<HitTarget> {
        let position = Position { x, y };
        self.areas
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}
