use ratatui::{
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine, Points},
    Frame,
};

use foliotui::logic::theme;
use foliotui::logic::tilt::{self, DOT_ANCHORS};
use foliotui::model::InteractionModel;

/// Canvas units per unit of dot translation
const DOT_SCALE: f64 = 0.5;

/// Grid spacing in canvas units (canvas is 100 x 100)
const GRID_STEP: f64 = 10.0;

/// Render the decorative grid and floating dots behind the content.
/// Both follow the pointer; callers skip this in the light theme.
pub fn render_background(f: &mut Frame, area: Rect, interaction: &InteractionModel) {
    let tilt = interaction.tilt();
    let shear = tilt::grid_shear(tilt);
    let offsets = interaction.dot_offsets();
    let grid = theme::grid_color();
    let dot_colors = theme::dot_colors();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(move |ctx| {
            // Vertical lines lean with the Y rotation
            let lean = shear * 50.0;
            let mut x = 0.0;
            while x <= 100.0 {
                ctx.draw(&CanvasLine::new(x - lean, 0.0, x + lean, 100.0, grid));
                x += GRID_STEP;
            }

            // Horizontal lines drift with the X rotation
            let drift = tilt.rotate_x_deg * 0.5;
            let mut y = 0.0;
            while y <= 100.0 {
                ctx.draw(&CanvasLine::new(0.0, y + drift, 100.0, y + drift, grid));
                y += GRID_STEP;
            }

            ctx.layer();
            for ((anchor, offset), color) in DOT_ANCHORS.iter().zip(offsets.iter()).zip(dot_colors) {
                let x = anchor.0 * 100.0 + offset.0 * DOT_SCALE;
                // Canvas y grows upwards, screen y grows downwards
                let y = 100.0 - (anchor.1 * 100.0 + offset.1 * DOT_SCALE);
                ctx.draw(&Points {
                    coords: &[(x, y), (x + 0.4, y), (x, y + 0.8), (x + 0.4, y + 0.8)],
                    color,
                });
            }
        });

    f.render_widget(canvas, area);
}
