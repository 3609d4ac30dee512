//! App Methods
//!
//! Front-end state and the `impl App` blocks that drive the reducer:
//! - effects: Dispatching messages and running the effects they produce
//! - file_ops: Opening files and running repository actions
//! - navigation: Cursor movement and clicking whatever is under it

pub mod effects;
pub mod file_ops;
pub mod navigation;

use std::time::Instant;

use repobrowse::logic::actions::ActionId;

/// Toasts disappear after this long
const TOAST_MILLIS: u128 = 1500;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Tree,
    Files,
    Actions,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Tree => Focus::Files,
            Focus::Files => Focus::Actions,
            Focus::Actions => Focus::Tree,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Tree => Focus::Actions,
            Focus::Files => Focus::Tree,
            Focus::Actions => Focus::Files,
        }
    }
}

/// Destructive action waiting for y/n
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub action: ActionId,
    pub item_count: usize,
}

/// Terminal-only state; none of this reaches the reducer
#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    pub tree_cursor: Option<usize>,
    pub file_cursor: Option<usize>,
    pub action_cursor: Option<usize>,
    pub toast: Option<(String, Instant)>,
    pub confirm: Option<PendingConfirm>,
    pub vim_mode: bool,
    /// First `g` of `gg` seen
    pub vim_pending_g: bool,
    pub should_quit: bool,
}

impl UiState {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            ..Self::default()
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast = Some((message, Instant::now()));
    }

    pub fn dismiss_expired_toast(&mut self) {
        if let Some((_, shown)) = &self.toast {
            if shown.elapsed().as_millis() >= TOAST_MILLIS {
                self.toast = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut focus = Focus::Tree;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Tree, "three steps forward returns to the tree");
        assert_eq!(Focus::Tree.previous(), Focus::Actions);
        assert_eq!(Focus::Files.previous().next(), Focus::Files);
    }

    #[test]
    fn test_fresh_toast_survives_dismiss() {
        let mut ui = UiState::new(false);
        ui.show_toast("Restore done".to_string());
        ui.dismiss_expired_toast();
        assert!(ui.toast.is_some(), "toast must stay up for a while");
    }
}
