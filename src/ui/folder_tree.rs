use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use repobrowse::logic::view::TreeRow;

use super::icons::IconRenderer;

fn row_style(row: &TreeRow) -> Style {
    if row.selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if row.secondary_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn row_line(row: &TreeRow, icons: &IconRenderer) -> Line<'static> {
    Line::from(vec![
        Span::raw("  ".repeat(row.depth)),
        icons.expander(row.expandable, row.expanded, row.loading),
        icons.folder(row.trash),
        Span::styled(row.title.clone(), row_style(row)),
    ])
}

/// Render the folder tree pane
pub fn render_folder_tree(
    f: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[TreeRow],
    cursor: Option<usize>,
    is_focused: bool,
    loading: bool,
    icons: &IconRenderer,
) {
    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row_line(row, icons))).collect();

    let title = if loading && rows.is_empty() {
        format!("{} (loading...)", title)
    } else {
        title.to_string()
    };

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
