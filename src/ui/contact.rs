use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::hit::{HitMap, HitTarget};
use super::layout::centered_rect;
use foliotui::content::{CONTACT_INTRO, CONTACT_SUBMIT, CONTACT_TITLE, SOCIAL_LINKS};
use foliotui::logic::theme::Palette;
use foliotui::model::{ContactField, ContactModel, Focus};

const FORM_WIDTH: u16 = 64;

/// Longest suffix of `text` that fits in `width` columns, leaving one for the cursor
fn tail_fit(text: &str, width: usize) -> &str {
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Hard-wrap at `width` columns, keeping explicit newlines
fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for logical in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for ch in logical.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(ch);
            used += w;
        }
        lines.push(line);
    }
    lines
}

fn field_block(
    palette: &Palette,
    field: ContactField,
    focused: bool,
    missing: bool,
) -> Block<'static> {
    let border = if missing {
        palette.failure
    } else if focused {
        palette.accent
    } else {
        palette.border
    };
    let mut title_style = Style::default().fg(border);
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(format!(" {} ", field.placeholder()), title_style))
        .style(Style::default().bg(palette.input_bg).fg(palette.input_fg))
}

/// Render the contact form, status line and social links
pub fn render_contact(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    contact: &ContactModel,
    focus: Option<Focus>,
    hits: &mut HitMap,
) {
    let width = FORM_WIDTH.min(area.width.saturating_sub(4));
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(2), // intro
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Min(3),    // message
            Constraint::Length(1), // submit
            Constraint::Length(1), // status
            Constraint::Length(1), // social links
        ])
        .split(column);

    f.render_widget(
        Paragraph::new(Line::styled(
            CONTACT_TITLE,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(CONTACT_INTRO)
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let missing = contact.missing();
    let fields = [
        (ContactField::Name, chunks[2]),
        (ContactField::Email, chunks[3]),
        (ContactField::Message, chunks[4]),
    ];
    for (field, field_area) in fields {
        if field_area.height < 3 {
            continue;
        }
        let focused = focus == Some(Focus::Field(field));
        let block = field_block(palette, field, focused, missing.contains(&field));
        let inner = block.inner(field_area);
        let value = contact.form.get(field);
        hits.push(field_area, HitTarget::Field(field));

        if field.is_multiline() {
            let lines = wrap_chars(value, inner.width.saturating_sub(1) as usize);
            let scroll = (lines.len() as u16).saturating_sub(inner.height);
            let cursor = lines
                .last()
                .map(|line| (line.width() as u16, lines.len() as u16 - 1 - scroll))
                .unwrap_or((0, 0));
            let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
            f.render_widget(Paragraph::new(text).block(block).scroll((scroll, 0)), field_area);
            if focused {
                f.set_cursor_position(Position::new(inner.x + cursor.0, inner.y + cursor.1));
            }
        } else {
            let shown = tail_fit(value, inner.width as usize);
            f.render_widget(Paragraph::new(shown.to_string()).block(block), field_area);
            if focused {
                f.set_cursor_position(Position::new(inner.x + shown.width() as u16, inner.y));
            }
        }
    }

    // Submit button
    let label = format!("  {}  ", CONTACT_SUBMIT);
    let button_area = centered_rect(label.width() as u16, 1, chunks[5]);
    let mut button_style = Style::default()
        .fg(palette.button_fg)
        .bg(palette.button_bg)
        .add_modifier(Modifier::BOLD);
    if focus == Some(Focus::Submit) {
        button_style = button_style.add_modifier(Modifier::REVERSED);
    }
    f.render_widget(Paragraph::new(Span::styled(label, button_style)), button_area);
    hits.push(button_area, HitTarget::Submit);

    // Outcome status, or transmission progress
    let status = contact.status();
    let status_line = if status.is_visible() {
        let color = match status {
            foliotui::model::SubmissionStatus::Success => palette.success,
            _ => palette.failure,
        };
        Line::styled(status.message(), Style::default().fg(color).add_modifier(Modifier::BOLD))
    } else if contact.in_flight() > 0 {
        Line::styled(
            "Transmitting…",
            Style::default().fg(palette.accent).add_modifier(Modifier::ITALIC),
        )
    } else {
        Line::default()
    };
    f.render_widget(
        Paragraph::new(status_line).alignment(Alignment::Center),
        chunks[6],
    );

    let mut links = Vec::new();
    for (i, (label, target)) in SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            links.push(Span::styled("  ·  ", Style::default().fg(palette.border)));
        }
        links.push(Span::styled(
            label.to_string(),
            Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED),
        ));
        if area.width > 100 {
            links.push(Span::styled(
                format!(" {}", target),
                Style::default().fg(palette.text).add_modifier(Modifier::DIM),
            ));
        }
    }
    f.render_widget(
        Paragraph::new(Line::from(links)).alignment(Alignment::Center),
        Rect {
            x: area.x,
            width: area.width,
            ..chunks[7]
        },
    );
}
