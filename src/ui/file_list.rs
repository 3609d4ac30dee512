use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use repobrowse::logic::view::FileRow;

use super::icons::IconRenderer;

/// Cut `text` to at most `max` display columns, ending in `…` when cut
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

fn file_line(row: &FileRow, title_width: usize, show_details: bool, icons: &IconRenderer) -> Line<'static> {
    let marker = if row.selected { "● " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        if row.folder {
            icons.folder(false)
        } else {
            icons.file(&row.extension)
        },
    ];

    let title_style = if row.active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    spans.push(Span::styled(truncate_to_width(&row.title, title_width), title_style));
    if !row.extension.is_empty() {
        spans.push(Span::styled(
            format!(" .{}", row.extension),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if show_details {
        if let Some(provenance) = &row.provenance {
            spans.push(Span::styled(
                format!("  {}", provenance),
                Style::default().fg(Color::Gray),
            ));
        }
        if let Some(deleted) = &row.deleted {
            spans.push(Span::styled(
                format!("  {}", deleted),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    Line::from(spans)
}

/// Render the file listing pane, or the empty placeholder
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[FileRow],
    placeholder: Option<&str>,
    cursor: Option<usize>,
    is_focused: bool,
    icons: &IconRenderer,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        });

    if rows.is_empty() {
        let text = placeholder.unwrap_or("");
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    // Trash details only fit on wider panes
    let show_details = area.width > 60;
    // Borders, highlight symbol, marker and icon
    let title_width = (area.width as usize).saturating_sub(10).max(4);
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(file_line(row, title_width, show_details, icons)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(cursor);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_titles_are_untouched() {
        assert_eq!(truncate_to_width("Sales", 10), "Sales");
    }

    #[test]
    fn test_long_titles_end_in_ellipsis() {
        let cut = truncate_to_width("Quarterly Sales Report", 10);
        assert_eq!(cut, "Quarterly…");
        assert!(cut.width() <= 10);
    }

    #[test]
    fn test_wide_characters_count_double() {
        let cut = truncate_to_width("報告書報告書", 5);
        assert_eq!(cut, "報告…");
    }
}
