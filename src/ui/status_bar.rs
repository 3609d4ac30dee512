use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the status bar shows about the item under the cursor
pub struct StatusInfo<'a> {
    pub folder: Option<&'a str>,
    pub item_count: usize,
    pub selected_count: usize,
    /// Tooltip of the row under the cursor
    pub tooltip: Option<&'a str>,
    pub error: Option<&'a str>,
}

fn status_spans(info: &StatusInfo) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled("Folder: ", Style::default().fg(Color::Yellow)),
        Span::raw(info.folder.unwrap_or("-").to_string()),
        Span::raw(" │ "),
        Span::raw(format!("{} items", info.item_count)),
    ];
    if info.selected_count > 1 {
        spans.push(Span::raw(format!(" │ {} selected", info.selected_count)));
    }
    if let Some(tooltip) = info.tooltip {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(tooltip.to_string(), Style::default().fg(Color::Gray)));
    }
    if let Some(error) = info.error {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
    }
    spans
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let status = Paragraph::new(Line::from(status_spans(info)))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
