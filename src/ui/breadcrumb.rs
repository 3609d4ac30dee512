use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the breadcrumb bar for the active folder
pub fn render_breadcrumb(f: &mut Frame, area: Rect, breadcrumb: Option<&str>, loading: bool) {
    let mut spans = vec![Span::styled(
        breadcrumb.unwrap_or("").to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if loading {
        spans.push(Span::styled("  loading...", Style::default().fg(Color::Yellow)));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Browse Files")
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(bar, area);
}
