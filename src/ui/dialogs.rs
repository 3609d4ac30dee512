use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use repobrowse::logic::actions::ActionId;

pub fn confirmation_text(action: ActionId, item_count: usize) -> String {
    let what = if item_count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", item_count)
    };
    match action {
        ActionId::EmptyTrash | ActionId::PermanentDelete => format!(
            "{} ({})?\n\nWARNING: This action cannot be undone!\n\nContinue? (y/n)",
            action.label(),
            what
        ),
        _ => format!("Move {} to the trash?\n\nContinue? (y/n)", what),
    }
}

/// Render the confirmation dialog for a destructive action
pub fn render_confirmation(f: &mut Frame, action: ActionId, item_count: usize) {
    let area = f.area();
    let width = 50.min(area.width);
    let height = 9.min(area.height);
    let prompt_area = Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let prompt = Paragraph::new(confirmation_text(action, item_count))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Confirm {}", action.label()))
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permanent_actions_warn() {
        let text = confirmation_text(ActionId::EmptyTrash, 3);
        assert!(text.contains("cannot be undone"), "purge must warn: {}", text);
        assert!(text.contains("3 items"));
    }

    #[test]
    fn test_move_to_trash_is_recoverable() {
        let text = confirmation_text(ActionId::DeleteFile, 1);
        assert!(!text.contains("cannot be undone"));
        assert!(text.contains("1 item"));
    }
}
