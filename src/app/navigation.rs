use repobrowse::logic::actions::ActionButton;
use repobrowse::logic::navigation::{clamp_cursor, move_cursor, position_of};
use repobrowse::logic::view::TreeRow;
use repobrowse::model::Modifiers;
use repobrowse::Msg;

use super::Focus;
use crate::App;

impl App {
    fn action_buttons(&self) -> &[ActionButton] {
        self.view
            .actions
            .as_ref()
            .map(|set| set.buttons.as_slice())
            .unwrap_or(&[])
    }

    /// Put the cursors back on the active folder and file
    pub(crate) fn follow_selection(&mut self) {
        let rows = self.view.tree_rows();
        if let Some(i) = position_of(&rows, |r| r.selected || r.secondary_selected) {
            self.ui.tree_cursor = Some(i);
        }
        if let Some(i) = position_of(&self.view.files, |f| f.active) {
            self.ui.file_cursor = Some(i);
        }
    }

    pub(crate) fn clamp_cursors(&mut self) {
        let tree_len = self.view.tree_rows().len();
        self.ui.tree_cursor = clamp_cursor(self.ui.tree_cursor, tree_len);
        self.ui.file_cursor = clamp_cursor(self.ui.file_cursor, self.view.files.len());
        self.ui.action_cursor = clamp_cursor(self.ui.action_cursor, self.action_buttons().len());
    }

    /// Move the cursor of the focused pane
    pub(crate) fn move_focused(&mut self, delta: isize) {
        match self.ui.focus {
            Focus::Tree => {
                let len = self.view.tree_rows().len();
                self.ui.tree_cursor = move_cursor(self.ui.tree_cursor, len, delta);
            }
            Focus::Files => {
                self.ui.file_cursor = move_cursor(self.ui.file_cursor, self.view.files.len(), delta);
            }
            Focus::Actions => {
                let len = self.action_buttons().len();
                self.ui.action_cursor = move_cursor(self.ui.action_cursor, len, delta);
            }
        }
    }

    pub(crate) fn cursor_tree_row(&self) -> Option<TreeRow> {
        let rows = self.view.tree_rows();
        self.ui.tree_cursor.and_then(|i| rows.get(i).cloned())
    }

    pub(crate) fn cursor_file_id(&self) -> Option<String> {
        self.ui
            .file_cursor
            .and_then(|i| self.view.files.get(i))
            .map(|f| f.id.clone())
    }

    pub(crate) fn cursor_action(&self) -> Option<&ActionButton> {
        self.ui.action_cursor.and_then(|i| self.action_buttons().get(i))
    }

    pub(crate) fn click_tree_cursor(&mut self) {
        if let Some(row) = self.cursor_tree_row() {
            self.dispatch(Msg::ClickFolder { path: row.path });
        }
    }

    pub(crate) fn click_file_cursor(&mut self, modifiers: Modifiers) {
        if let Some(id) = self.cursor_file_id() {
            self.dispatch(Msg::ClickFile { id, modifiers });
        }
    }

    /// Shift+arrow: move and extend the range from the anchor
    pub(crate) fn extend_file_selection(&mut self, delta: isize) {
        self.ui.file_cursor = move_cursor(self.ui.file_cursor, self.view.files.len(), delta);
        self.click_file_cursor(Modifiers::shift());
    }

    /// Left arrow: collapse, or jump to the parent row when already collapsed
    pub(crate) fn collapse_or_parent(&mut self) {
        let Some(row) = self.cursor_tree_row() else {
            return;
        };
        if row.expanded {
            self.dispatch(Msg::CollapseFolder { path: row.path });
            return;
        }
        if row.depth == 0 {
            return;
        }
        let rows = self.view.tree_rows();
        let Some(cursor) = self.ui.tree_cursor else {
            return;
        };
        if let Some(parent) = rows[..cursor].iter().rposition(|r| r.depth + 1 == row.depth) {
            self.ui.tree_cursor = Some(parent);
        }
    }

    pub(crate) fn jump_to_start(&mut self) {
        // From no cursor, moving up would land on the last row
        self.move_focused(1);
        self.move_focused(isize::MIN);
    }

    pub(crate) fn jump_to_end(&mut self) {
        self.move_focused(isize::MAX);
    }
}
