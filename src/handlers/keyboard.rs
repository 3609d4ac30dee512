//! Keyboard Input Handler
//!
//! Maps key presses to cursor movement and browser messages. The tree
//! and file panes behave like the mouse: Enter is a click, Space a
//! ctrl-click, Shift+arrows a shift-click.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use repobrowse::model::Modifiers;
use repobrowse::Msg;

use crate::app::{Focus, PendingConfirm};
use crate::App;

const PAGE: isize = 10;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.ui.confirm.is_some() {
        handle_confirm(app, key);
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    // `gg` in vim mode
    let pending_g = std::mem::take(&mut app.ui.vim_pending_g);

    match key.code {
        KeyCode::Char('q') => app.ui.should_quit = true,
        KeyCode::Char('c') if ctrl => app.ui.should_quit = true,

        KeyCode::Tab => app.ui.focus = app.ui.focus.next(),
        KeyCode::BackTab => app.ui.focus = app.ui.focus.previous(),

        KeyCode::Char('r') if !ctrl => app.dispatch(Msg::Refresh),
        KeyCode::F(5) => app.dispatch(Msg::Refresh),
        KeyCode::Char('d') if !ctrl => {
            let show = !app.model.context.show_descriptions;
            app.dispatch(Msg::SetShowDescriptions(show));
        }
        KeyCode::Char('.') => {
            let show = !app.model.context.show_hidden;
            app.dispatch(Msg::SetShowHidden(show));
        }

        KeyCode::Up if shift && app.ui.focus == Focus::Files => app.extend_file_selection(-1),
        KeyCode::Down if shift && app.ui.focus == Focus::Files => app.extend_file_selection(1),
        KeyCode::Char('K') if app.ui.vim_mode && app.ui.focus == Focus::Files => {
            app.extend_file_selection(-1)
        }
        KeyCode::Char('J') if app.ui.vim_mode && app.ui.focus == Focus::Files => {
            app.extend_file_selection(1)
        }

        KeyCode::Up => app.move_focused(-1),
        KeyCode::Down => app.move_focused(1),
        KeyCode::Char('k') if app.ui.vim_mode => app.move_focused(-1),
        KeyCode::Char('j') if app.ui.vim_mode => app.move_focused(1),
        KeyCode::PageUp => app.move_focused(-PAGE),
        KeyCode::PageDown => app.move_focused(PAGE),
        KeyCode::Char('u') if ctrl && app.ui.vim_mode => app.move_focused(-PAGE / 2),
        KeyCode::Char('d') if ctrl && app.ui.vim_mode => app.move_focused(PAGE / 2),
        KeyCode::Char('b') if ctrl && app.ui.vim_mode => app.move_focused(-PAGE),
        KeyCode::Char('f') if ctrl && app.ui.vim_mode => app.move_focused(PAGE),
        KeyCode::Home => app.jump_to_start(),
        KeyCode::End => app.jump_to_end(),
        KeyCode::Char('g') if app.ui.vim_mode => {
            if pending_g {
                app.jump_to_start();
            } else {
                app.ui.vim_pending_g = true;
            }
        }
        KeyCode::Char('G') if app.ui.vim_mode => app.jump_to_end(),

        KeyCode::Right => handle_right(app),
        KeyCode::Char('l') if app.ui.vim_mode => handle_right(app),
        KeyCode::Left => handle_left(app),
        KeyCode::Char('h') if app.ui.vim_mode => handle_left(app),

        KeyCode::Enter => handle_enter(app),
        KeyCode::Char(' ') => handle_space(app),
        KeyCode::Char('o') => {
            if app.ui.focus == Focus::Files {
                if let Some(id) = app.cursor_file_id() {
                    app.dispatch(Msg::OpenFile { id });
                }
            }
        }
        KeyCode::Esc => {
            if app.ui.focus == Focus::Files {
                app.dispatch(Msg::ClickBody);
            }
        }

        _ => {}
    }
}

fn handle_right(app: &mut App) {
    match app.ui.focus {
        Focus::Tree => {
            if let Some(row) = app.cursor_tree_row() {
                if row.expandable && !row.expanded {
                    app.dispatch(Msg::ExpandFolder { path: row.path });
                } else if row.expanded {
                    app.move_focused(1);
                }
            }
        }
        Focus::Files => app.ui.focus = Focus::Actions,
        Focus::Actions => {}
    }
}

fn handle_left(app: &mut App) {
    match app.ui.focus {
        Focus::Tree => app.collapse_or_parent(),
        Focus::Files => app.ui.focus = Focus::Tree,
        Focus::Actions => app.ui.focus = Focus::Files,
    }
}

fn handle_enter(app: &mut App) {
    match app.ui.focus {
        Focus::Tree => {
            app.click_tree_cursor();
            app.ui.focus = Focus::Files;
        }
        Focus::Files => app.click_file_cursor(Modifiers::NONE),
        Focus::Actions => activate_cursor_action(app),
    }
}

fn handle_space(app: &mut App) {
    match app.ui.focus {
        Focus::Tree => {
            if let Some(row) = app.cursor_tree_row() {
                app.dispatch(Msg::ToggleFolder { path: row.path });
            }
        }
        Focus::Files => app.click_file_cursor(Modifiers::ctrl()),
        Focus::Actions => activate_cursor_action(app),
    }
}

fn activate_cursor_action(app: &mut App) {
    let Some(button) = app.cursor_action() else {
        return;
    };
    if !button.enabled {
        return;
    }
    let id = button.id;
    if id.is_destructive() {
        app.ui.confirm = Some(PendingConfirm {
            action: id,
            item_count: button.target.ids().len(),
        });
        return;
    }
    app.dispatch(Msg::ActivateAction { id });
}

fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(confirm) = app.ui.confirm.take() {
                app.dispatch(Msg::ActivateAction { id: confirm.action });
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.ui.confirm = None;
        }
        // Ignore other keys while prompt is showing
        _ => {}
    }
}
