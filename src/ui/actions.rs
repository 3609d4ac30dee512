use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use repobrowse::logic::actions::ActionSet;

/// Render the action buttons for the current selection
pub fn render_actions(
    f: &mut Frame,
    area: Rect,
    actions: Option<&ActionSet>,
    cursor: Option<usize>,
    is_focused: bool,
) {
    if area.width == 0 {
        return;
    }

    let title = actions.map(|set| set.kind.header()).unwrap_or("Actions");
    let items: Vec<ListItem> = actions
        .map(|set| set.buttons.as_slice())
        .unwrap_or(&[])
        .iter()
        .map(|button| {
            let style = if button.enabled {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Span::styled(button.label, style))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(if is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                }),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(cursor);
    f.render_stateful_widget(list, area, &mut state);
}
