use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Fixed navigation bar at the top
    pub header_area: Rect,
    /// Current section
    pub content_area: Rect,
    /// Hotkey legend / HUD at the bottom
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (title row + bottom border, padded)
            Constraint::Min(3),                // Section content
            Constraint::Length(legend_height), // Legend
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        content_area: chunks[1],
        legend_area: chunks[2],
    }
}

/// Rect of at most `width` x `height`, centred in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Shift an area down by `rows` (for the slide-in), shrinking it to stay inside
pub fn slide_down(area: Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    Rect {
        x: area.x,
        y: area.y + rows,
        width: area.width,
        height: area.height - rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_vertically() {
        let info = calculate_layout(Rect::new(0, 0, 100, 40), 1);
        assert_eq!(info.header_area.height, 3);
        assert_eq!(info.legend_area.height, 1);
        assert_eq!(info.content_area.height, 36);
        assert_eq!(info.content_area.y, 3);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(10, 10, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(15, 13, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }

    #[test]
    fn test_slide_down() {
        let area = Rect::new(0, 3, 80, 20);
        assert_eq!(slide_down(area, 2), Rect::new(0, 5, 80, 18));
        assert_eq!(slide_down(area, 30).height, 0);
    }
}
