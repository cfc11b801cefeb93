use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

use super::layout::centered_rect;
use foliotui::content::{
    ABOUT_TEXT, ABOUT_TITLE, PROJECTS, PROJECTS_TITLE, SKILLS, SKILLS_TITLE,
};
use foliotui::logic::reveal::{item_progress, PROJECT_STAGGER, SKILL_STAGGER};
use foliotui::logic::theme::Palette;
use foliotui::model::PointerPosition;

/// Below this width project cards stack vertically
const WIDE_LAYOUT: u16 = 90;

const SKILL_COLUMNS: usize = 4;

/// Section title with an accent rule underneath; returns the area left below it
fn render_title(f: &mut Frame, area: Rect, title: &str, palette: &Palette) -> Rect {
    if area.height < 2 {
        return Rect { height: 0, ..area };
    }
    let lines = vec![
        Line::styled(
            title.to_string(),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Line::styled("━━━━━━━━", Style::default().fg(palette.accent)),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect { height: 2, ..area },
    );
    Rect {
        y: area.y + 3.min(area.height),
        height: area.height.saturating_sub(3),
        ..area
    }
}

fn card(palette: &Palette, title: Option<&str>) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    if let Some(title) = title {
        block = block.title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ));
    }
    block
}

pub fn render_about(f: &mut Frame, area: Rect, palette: &Palette) {
    let body = render_title(f, area, ABOUT_TITLE, palette);
    let card_area = centered_rect(body.width.saturating_sub(8).min(72), 7, body);
    if card_area.height < 3 {
        return;
    }
    f.render_widget(
        Paragraph::new(ABOUT_TEXT)
            .block(card(palette, None))
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        card_area,
    );
}

/// Skills grid. Tiles fade in one after another, `SKILL_STAGGER` apart.
pub fn render_skills(f: &mut Frame, area: Rect, palette: &Palette, since_reveal: Duration) {
    let body = render_title(f, area, SKILLS_TITLE, palette);
    let rows = SKILLS.len().div_ceil(SKILL_COLUMNS) as u16;
    let grid = centered_rect(body.width.saturating_sub(4).min(80), rows * 3, body);
    if grid.height < 3 {
        return;
    }

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); rows as usize])
        .split(grid);

    for (index, skill) in SKILLS.iter().enumerate() {
        let progress = item_progress(since_reveal, index, SKILL_STAGGER);
        if progress <= 0.0 {
            continue;
        }
        let Some(row) = row_areas.get(index / SKILL_COLUMNS) else {
            break;
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, SKILL_COLUMNS as u32); SKILL_COLUMNS])
            .split(*row);
        let tile = cols[index % SKILL_COLUMNS];

        let mut style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
        if progress < 1.0 {
            style = style.add_modifier(Modifier::DIM);
        }
        f.render_widget(
            Paragraph::new(Line::styled(skill.to_string(), style))
                .block(card(palette, None))
                .alignment(Alignment::Center),
            tile,
        );
    }
}

/// Project cards. Hovering a card lights up its description.
pub fn render_projects(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    since_reveal: Duration,
    pointer: PointerPosition,
) {
    let body = render_title(f, area, PROJECTS_TITLE, palette);
    if body.height < 3 {
        return;
    }

    let wide = body.width >= WIDE_LAYOUT;
    let cards = if wide {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, PROJECTS.len() as u32); PROJECTS.len()])
            .split(Rect {
                height: body.height.min(9),
                ..body
            })
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(5); PROJECTS.len()])
            .split(body)
    };

    let pointer = Position::new(pointer.x, pointer.y);
    for (index, (project, card_area)) in PROJECTS.iter().zip(cards.iter()).enumerate() {
        let progress = item_progress(since_reveal, index, PROJECT_STAGGER);
        if progress <= 0.0 || card_area.height < 3 {
            continue;
        }
        let hovered = card_area.contains(pointer);

        let mut description = Style::default().fg(palette.text);
        if !hovered || progress < 1.0 {
            description = description.add_modifier(Modifier::DIM);
        }
        let mut block = card(palette, Some(project.title));
        if hovered {
            block = block.border_style(Style::default().fg(palette.accent));
        }

        f.render_widget(
            Paragraph::new(project.description)
                .block(block)
                .style(description)
                .wrap(Wrap { trim: true }),
            *card_area,
        );
    }
}
