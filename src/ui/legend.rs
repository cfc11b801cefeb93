use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use foliotui::logic::theme::Palette;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(editing: bool, show_help: bool, palette: &Palette) -> Vec<Span<'static>> {
    let key = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(palette.text);
    let mut spans = vec![];

    let mut push = |k: &'static str, label: &'static str| {
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(label, text));
    };

    if editing {
        push("Esc", ":Done  ");
        push("Tab", ":Next field  ");
        push("Enter", ":Next/Newline  ");
        push("^S", ":Transmit  ");
        return spans;
    }

    push("↑/↓", ":Scroll  ");
    push("1-5", ":Jump  ");
    push("Tab", ":Focus  ");
    push("Enter", ":Activate  ");
    push("t", ":Theme  ");
    if show_help {
        push("PgUp/PgDn", ":Scroll  ");
        push("Home/End", ":First/Last  ");
        push("Click", ":Links, reactor, fields  ");
        push("Wheel", ":Scroll  ");
    }
    push("?", ":Help  ");
    push("q", ":Quit");
    spans
}

/// Rows reserved for the legend
pub fn calculate_legend_height(show_help: bool) -> u16 {
    if show_help {
        2
    } else {
        1
    }
}

/// Render the hotkey legend with the HUD (clock, relay warning) on the right
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    editing: bool,
    show_help: bool,
    hud: &str,
) {
    let mut spans = build_hotkey_spans(editing, show_help, palette);
    spans.push(Span::raw("  │ "));
    spans.push(Span::styled(hud.to_string(), Style::default().fg(palette.accent)));

    let legend = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.surface))
        .wrap(Wrap { trim: true });
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliotui::logic::theme::palette;
    use foliotui::ThemeMode;

    fn joined(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_editing_legend_offers_done_and_transmit() {
        let text = joined(&build_hotkey_spans(true, false, &palette(ThemeMode::Dark)));
        assert!(text.contains("Esc:Done"));
        assert!(text.contains("^S:Transmit"));
        assert!(!text.contains("q:Quit"));
    }

    #[test]
    fn test_help_expands_legend() {
        let p = palette(ThemeMode::Dark);
        let short = joined(&build_hotkey_spans(false, false, &p));
        let long = joined(&build_hotkey_spans(false, true, &p));
        assert!(long.len() > short.len());
        assert!(long.contains("Wheel:Scroll"));
    }
}
