use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Focus;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, focus: Focus) -> Vec<Span<'static>> {
    let mut spans = if vim_mode {
        vec![key("hjkl"), Span::raw(":Nav  "), key("gg/G"), Span::raw(":First/Last  ")]
    } else {
        vec![key("↑/↓"), Span::raw(":Nav  ")]
    };

    match focus {
        Focus::Tree => spans.extend(vec![
            key("Enter"),
            Span::raw(":Open folder  "),
            key("←/→"),
            Span::raw(":Collapse/Expand  "),
        ]),
        Focus::Files => spans.extend(vec![
            key("Enter"),
            Span::raw(":Select  "),
            key("Space"),
            Span::raw(":Toggle  "),
            key("⇧↑/⇧↓"),
            Span::raw(":Range  "),
            key("o"),
            Span::raw(":Open  "),
        ]),
        Focus::Actions => spans.extend(vec![key("Enter"), Span::raw(":Run action  ")]),
    }

    spans.extend(vec![
        key("Tab"),
        Span::raw(":Pane  "),
        key("r"),
        Span::raw(":Refresh  "),
        key("."),
        Span::raw(":Hidden  "),
        key("d"),
        Span::raw(":Descriptions  "),
        key("q"),
        Span::raw(":Quit"),
    ]);
    spans
}

pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, focus: Focus) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, focus)));
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_legend_follows_focus() {
        let files = text(&build_hotkey_spans(false, Focus::Files));
        assert!(files.contains(":Range"), "files pane shows range selection");
        let tree = text(&build_hotkey_spans(false, Focus::Tree));
        assert!(!tree.contains(":Range"), "tree pane has no range selection");
    }

    #[test]
    fn test_vim_legend() {
        let vim = text(&build_hotkey_spans(true, Focus::Tree));
        assert!(vim.contains("hjkl"));
    }
}
