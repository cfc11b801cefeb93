use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::hit::{HitMap, HitTarget};
use foliotui::content::OWNER_BRAND;
use foliotui::logic::{navigation, theme};
use foliotui::model::Focus;
use foliotui::{Section, ThemeMode};

const NAV_GAP: u16 = 3;

/// Label of the theme toggle: it names the theme it switches to
fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "[☀ Light]",
        ThemeMode::Light => "[☾ Dark]",
    }
}

/// Render the fixed navigation bar: brand, anchor links, theme toggle
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    mode: ThemeMode,
    current: Section,
    focus: Option<Focus>,
    hits: &mut HitMap,
) {
    let palette = theme::palette(mode);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    let row = Rect { height: 1, ..inner };

    // Brand on the left
    let brand = format!(" ◉ {}", OWNER_BRAND);
    let brand_width = brand.width() as u16;
    f.render_widget(
        Paragraph::new(Span::styled(
            brand,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Rect { width: brand_width.min(row.width), ..row },
    );

    // Theme toggle on the right
    let toggle = toggle_label(mode);
    let toggle_width = toggle.width() as u16;
    let toggle_area = Rect {
        x: row.x + row.width.saturating_sub(toggle_width + 1),
        width: toggle_width.min(row.width),
        ..row
    };
    let mut toggle_style = Style::default().fg(palette.button_fg).bg(palette.button_bg);
    if focus == Some(Focus::ThemeToggle) {
        toggle_style = toggle_style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    f.render_widget(Paragraph::new(Span::styled(toggle, toggle_style)), toggle_area);
    hits.push(toggle_area, HitTarget::ThemeToggle);

    // Anchor links, right-aligned before the toggle; dropped when there is no room
    let links = navigation::nav_sections();
    let links_width: u16 = links
        .iter()
        .map(|s| s.as_str().width() as u16 + NAV_GAP)
        .sum();
    let available = toggle_area.x.saturating_sub(row.x + brand_width + 1);
    if links_width > available {
        return;
    }

    let mut x = toggle_area.x - links_width;
    let mut spans = Vec::new();
    for section in links {
        let label = section.as_str();
        let width = label.width() as u16;
        let style = if section == current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(label.to_string(), style));
        spans.push(Span::raw(" ".repeat(NAV_GAP as usize)));
        hits.push(Rect { x, width, ..row }, HitTarget::Nav(section));
        x += width + NAV_GAP;
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect {
            x: toggle_area.x - links_width,
            width: links_width,
            ..row
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_names_target_theme() {
        assert!(toggle_label(ThemeMode::Dark).contains("Light"));
        assert!(toggle_label(ThemeMode::Light).contains("Dark"));
    }
}
