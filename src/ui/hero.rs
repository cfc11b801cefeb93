use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use super::hit::{HitMap, HitTarget};
use super::layout::centered_rect;
use foliotui::content::{HERO_CTA, HERO_TAGLINE};
use foliotui::logic::formatting::fit_width;
use foliotui::logic::theme::Palette;
use foliotui::model::{Focus, Typewriter};

/// Caret blink half-period
const CARET_BLINK: Duration = Duration::from_millis(500);

/// Render the hero: typewriter line, tagline and call-to-action
pub fn render_hero(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    typewriter: &Typewriter,
    focus: Option<Focus>,
    elapsed: Duration,
    revealing: bool,
    hits: &mut HitMap,
) {
    // typewriter, blank, tagline (up to 2 rows), blank, button
    let block_height = 6;
    let body = centered_rect(area.width.saturating_sub(4), block_height, area);
    if body.height == 0 {
        return;
    }

    let caret_on = (elapsed.as_millis() / CARET_BLINK.as_millis()) % 2 == 0;
    let mut headline_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    if revealing {
        headline_style = headline_style.add_modifier(Modifier::DIM);
    }

    let max = body.width.saturating_sub(2) as usize;
    let headline = Line::from(vec![
        Span::styled(fit_width(typewriter.current_text(), max), headline_style),
        Span::styled(if caret_on { "▌" } else { " " }, Style::default().fg(palette.accent)),
    ])
    .alignment(Alignment::Center);

    let rows = Rect { height: 1, ..body };
    f.render_widget(Paragraph::new(headline), rows);

    let tagline_area = Rect {
        y: body.y + 2,
        height: 2.min(body.height.saturating_sub(2)),
        ..body
    };
    f.render_widget(
        Paragraph::new(HERO_TAGLINE)
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        tagline_area,
    );

    if body.height < block_height {
        return;
    }
    let label = format!("  {}  ", HERO_CTA);
    let width = label.width() as u16;
    let button_area = centered_rect(
        width,
        1,
        Rect {
            y: body.y + 5,
            height: 1,
            ..body
        },
    );
    let mut button_style = Style::default()
        .fg(palette.button_fg)
        .bg(palette.button_bg)
        .add_modifier(Modifier::BOLD);
    if focus == Some(Focus::CallToAction) {
        button_style = button_style.add_modifier(Modifier::REVERSED);
    }
    f.render_widget(Paragraph::new(Span::styled(label, button_style)), button_area);
    hits.push(button_area, HitTarget::CallToAction);
}
