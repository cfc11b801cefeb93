//! Interaction Model
//!
//! Root-owned state shared (read-only) with every section: the theme flag,
//! the last pointer position and the viewport used to normalize it.

use crate::logic::tilt::{self, Tilt, DOT_ANCHORS};
use crate::ThemeMode;

/// Last reported pointer position, in terminal cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: u16,
    pub y: u16,
}

/// Terminal size, in cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionModel {
    pub theme: ThemeMode,
    pub pointer: PointerPosition,
    pub viewport: Viewport,
    /// Whether pointer-move events are being delivered
    tracking: bool,
}

impl InteractionModel {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            theme: ThemeMode::Dark,
            pointer: PointerPosition::default(),
            viewport,
            tracking: false,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Begin accepting pointer-move events
    pub fn start_tracking(&mut self) {
        self.tracking = true;
    }

    /// Stop accepting pointer-move events
    pub fn stop_tracking(&mut self) {
        self.tracking = false;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Record a pointer-move event exactly as reported. Ignored once tracking stopped.
    pub fn pointer_moved(&mut self, x: u16, y: u16) -> bool {
        if !self.tracking {
            return false;
        }
        let position = PointerPosition { x, y };
        let changed = self.pointer != position;
        self.pointer = position;
        changed
    }

    pub fn resized(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
    }

    /// Pointer as fractions of the viewport
    pub fn normalized(&self) -> (f64, f64) {
        tilt::normalize(
            (self.pointer.x, self.pointer.y),
            (self.viewport.width, self.viewport.height),
        )
    }

    /// Background perspective for the current pointer
    pub fn tilt(&self) -> Tilt {
        let (nx, ny) = self.normalized();
        tilt::perspective(nx, ny)
    }

    /// Offsets of the five floating background dots
    pub fn dot_offsets(&self) -> [(f64, f64); 5] {
        let (nx, ny) = self.normalized();
        DOT_ANCHORS.map(|anchor| tilt::dot_offset(nx, ny, anchor))
    }

    /// Decorative background layers are only drawn in the dark theme
    pub fn show_background(&self) -> bool {
        self.theme == ThemeMode::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dark_and_untracked() {
        let model = InteractionModel::new(Viewport { width: 80, height: 24 });
        assert_eq!(model.theme, ThemeMode::Dark);
        assert!(!model.is_tracking());
        assert!(model.show_background());
    }

    #[test]
    fn test_light_theme_hides_background() {
        let mut model = InteractionModel::new(Viewport { width: 80, height: 24 });
        model.toggle_theme();
        assert!(!model.show_background());
    }

    #[test]
    fn test_pointer_ignored_without_tracking() {
        let mut model = InteractionModel::new(Viewport { width: 80, height: 24 });
        assert!(!model.pointer_moved(10, 10));
        assert_eq!(model.pointer, PointerPosition::default());
    }

    #[test]
    fn test_tilt_uses_viewport() {
        let mut model = InteractionModel::new(Viewport { width: 100, height: 50 });
        model.start_tracking();
        model.pointer_moved(100, 0);
        let tilt = model.tilt();
        assert!((tilt.rotate_y_deg - 5.0).abs() < 1e-9);
        assert!((tilt.rotate_x_deg + 5.0).abs() < 1e-9);
    }
}
