use ratatui::Frame;

use crate::app::Focus;
use crate::App;

use super::{actions, breadcrumb, dialogs, file_list, folder_tree, layout, legend, status_bar, toast};

/// Main render function - draws the current view model
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);
    let view = &app.view;
    let focus = app.ui.focus;

    breadcrumb::render_breadcrumb(
        f,
        layout_info.header_area,
        view.headers.breadcrumb.as_deref(),
        view.loading,
    );

    let rows = view.tree_rows();
    folder_tree::render_folder_tree(
        f,
        layout_info.tree_area,
        view.headers.folders,
        &rows,
        app.ui.tree_cursor,
        focus == Focus::Tree,
        view.loading,
        &app.icon_renderer,
    );

    file_list::render_file_list(
        f,
        layout_info.files_area,
        view.headers.files,
        &view.files,
        view.empty_placeholder,
        app.ui.file_cursor,
        focus == Focus::Files,
        &app.icon_renderer,
    );

    actions::render_actions(
        f,
        layout_info.actions_area,
        view.actions.as_ref(),
        app.ui.action_cursor,
        focus == Focus::Actions,
    );

    legend::render_legend(f, layout_info.legend_area, app.ui.vim_mode, focus);

    let tooltip = match focus {
        Focus::Tree => app
            .ui
            .tree_cursor
            .and_then(|i| rows.get(i))
            .map(|row| row.tooltip.as_str()),
        Focus::Files => app
            .ui
            .file_cursor
            .and_then(|i| view.files.get(i))
            .map(|row| row.tooltip.as_str()),
        Focus::Actions => None,
    };
    let info = status_bar::StatusInfo {
        folder: app.model.active_folder_path(),
        item_count: view.files.len(),
        selected_count: view.files.iter().filter(|row| row.selected).count(),
        tooltip,
        error: view.error.as_deref(),
    };
    status_bar::render_status_bar(f, layout_info.status_area, &info);

    if let Some(confirm) = &app.ui.confirm {
        dialogs::render_confirmation(f, confirm.action, confirm.item_count);
    }

    if let Some((message, _shown)) = &app.ui.toast {
        toast::render_toast(f, size, message);
    }
}
