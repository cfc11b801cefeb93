use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};
use std::time::Duration;

use super::hit::{HitMap, HitTarget};
use super::layout::centered_rect;
use foliotui::logic::reactor::{
    fit_radius, orbit_point, pulse, rotation, CORE_PULSE, CORE_RADIUS, INNER_PULSE, RINGS,
    SPARK_PERIOD,
};
use foliotui::logic::theme::{self, Palette};
use foliotui::ThemeMode;

/// Sparks: (orbit radius fraction, phase delay)
const SPARKS: [(f64, Duration); 3] = [
    (0.9, Duration::ZERO),
    (0.75, Duration::from_millis(500)),
    (0.95, Duration::from_millis(1000)),
];

/// Render the arc reactor widget. `elapsed` drives the rotation.
pub fn render_reactor(
    f: &mut Frame,
    area: Rect,
    mode: ThemeMode,
    palette: &Palette,
    activated: bool,
    focused: bool,
    elapsed: Duration,
    hits: &mut HitMap,
) {
    if area.height < 3 {
        return;
    }

    // Square-ish widget: terminal cells are about twice as tall as wide
    let side = area.height.saturating_sub(1);
    let widget_area = centered_rect(
        side.saturating_mul(2),
        side,
        Rect {
            height: area.height - 1,
            ..area
        },
    );

    let rings = theme::reactor_rings(mode);
    let core = theme::reactor_core(mode, activated);

    let block = if focused {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent))
    } else {
        Block::default()
    };

    // Canvas units: one per column horizontally, two per row vertically
    let half_w = widget_area.width as f64 / 2.0;
    let half_h = widget_area.height as f64;
    let radius = fit_radius(half_w * 2.0, half_h * 2.0, activated);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-half_w, half_w])
        .y_bounds([-half_h, half_h])
        .paint(move |ctx| {
            for (ring, color) in RINGS.iter().zip(rings) {
                let r = radius * ring.radius;
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: r,
                    color,
                });
                let angle = rotation(elapsed, ring.period, ring.reverse);
                let (mx, my) = orbit_point((0.0, 0.0), r, angle);
                ctx.draw(&Points {
                    coords: &[(mx, my), (mx + 0.5, my), (mx, my + 0.5), (mx + 0.5, my + 0.5)],
                    color: core,
                });
            }

            ctx.layer();

            // Core glow: more filled rings as the pulse peaks
            let glow = pulse(elapsed, CORE_PULSE);
            let inner = pulse(elapsed, INNER_PULSE);
            let core_r = radius * CORE_RADIUS;
            let fill_steps = if activated { 6 } else { 2 + (glow * 3.0).round() as usize };
            for step in 0..fill_steps {
                let r = core_r * (1.0 - step as f64 / (fill_steps as f64 + 1.0));
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: r,
                    color: rings[0],
                });
            }
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: core_r * (0.3 + 0.1 * inner),
                color: core,
            });

            // Sparks orbit the whole widget
            for (orbit, delay) in SPARKS {
                let angle = rotation(elapsed + delay, SPARK_PERIOD, false);
                let (sx, sy) = orbit_point((0.0, 0.0), radius * orbit, angle + delay.as_secs_f64());
                ctx.draw(&Points {
                    coords: &[(sx, sy)],
                    color: rings[2],
                });
            }
        });

    f.render_widget(canvas, widget_area);
    hits.push(widget_area, HitTarget::Reactor);

    let mut caption_style = Style::default().fg(palette.text);
    if activated {
        caption_style = caption_style.fg(palette.accent).add_modifier(Modifier::BOLD);
    }
    let caption = if activated {
        "◉ REACTOR ENGAGED ◉"
    } else {
        "Arc Reactor · Enter or click to engage"
    };
    f.render_widget(
        Paragraph::new(Line::styled(caption, caption_style)).alignment(Alignment::Center),
        Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        },
    );
}
