use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Colors for the browser panes (terminal palette, respects the user's theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub trash_color: Color,
    pub file_color: Color,
    pub report_color: Color,
    pub data_color: Color,
    pub expander_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            trash_color: Color::Red,
            file_color: Color::Cyan,
            report_color: Color::Magenta,
            data_color: Color::Green,
            expander_color: Color::Gray,
        }
    }
}

/// Rough grouping of repository content by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Report,
    Analysis,
    Dashboard,
    Data,
    Other,
}

pub fn file_kind(extension: &str) -> FileKind {
    match extension.to_ascii_lowercase().as_str() {
        "prpt" | "prpti" | "waqr" => FileKind::Report,
        "xanalyzer" | "xaction" => FileKind::Analysis,
        "xdash" | "wcdf" | "cdfde" => FileKind::Dashboard,
        "ktr" | "kjb" | "csv" | "xml" | "json" | "xmi" => FileKind::Data,
        _ => FileKind::Other,
    }
}

pub struct IconRenderer {
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    /// `▸`/`▾` in front of a tree row; blank for leaves, `…` while loading
    pub fn expander(&self, expandable: bool, expanded: bool, loading: bool) -> Span<'static> {
        let symbol = if loading {
            "… "
        } else if !expandable {
            "  "
        } else if expanded {
            "▾ "
        } else {
            "▸ "
        };
        Span::styled(symbol, Style::default().fg(self.theme.expander_color))
    }

    pub fn folder(&self, trash: bool) -> Span<'static> {
        if trash {
            Span::styled("🗑  ", Style::default().fg(self.theme.trash_color))
        } else {
            Span::styled("📁 ", Style::default().fg(self.theme.folder_color))
        }
    }

    pub fn file(&self, extension: &str) -> Span<'static> {
        let (icon, color) = match file_kind(extension) {
            FileKind::Report => ("📊 ", self.theme.report_color),
            FileKind::Analysis => ("📈 ", self.theme.report_color),
            FileKind::Dashboard => ("🧭 ", self.theme.report_color),
            FileKind::Data => ("🗄  ", self.theme.data_color),
            FileKind::Other => ("📄 ", self.theme.file_color),
        };
        Span::styled(icon, Style::default().fg(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_ignores_case() {
        assert_eq!(file_kind("PRPT"), FileKind::Report);
        assert_eq!(file_kind("ktr"), FileKind::Data);
        assert_eq!(file_kind(""), FileKind::Other);
    }

    #[test]
    fn test_expander_symbols() {
        let icons = IconRenderer::new(IconTheme::default());
        assert_eq!(icons.expander(true, false, false).content, "▸ ");
        assert_eq!(icons.expander(true, true, false).content, "▾ ");
        assert_eq!(icons.expander(false, false, false).content, "  ");
        assert_eq!(icons.expander(true, false, true).content, "… ", "loading wins");
    }
}
