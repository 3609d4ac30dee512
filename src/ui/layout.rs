use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Breadcrumb bar at the top
    pub header_area: Rect,
    pub tree_area: Rect,
    pub files_area: Rect,
    pub actions_area: Rect,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
    pub status_area: Rect,
}

/// Actions pane width; it collapses on narrow terminals
fn actions_width(total: u16) -> u16 {
    if total < 80 {
        0
    } else {
        (total / 5).clamp(22, 32)
    }
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb bar (border, text, border)
            Constraint::Min(3),    // Panes
            Constraint::Length(1), // Legend
            Constraint::Length(3), // Status bar
        ])
        .split(terminal_size);

    let content_area = main_chunks[1];
    let actions = actions_width(content_area.width);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(10),
            Constraint::Length(actions),
        ])
        .split(content_area);

    LayoutInfo {
        header_area: main_chunks[0],
        tree_area: panes[0],
        files_area: panes[1],
        actions_area: panes[2],
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}
