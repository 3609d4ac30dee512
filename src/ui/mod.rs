// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Folder, file and expander icons with themes
// - layout: Calculates screen layout (header, three panes, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the breadcrumb bar for the active folder
// - folder_tree: Renders the left folder tree
// - file_list: Renders the file listing (or trash contents)
// - actions: Renders the action buttons for the selection
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - dialogs: Renders confirmation dialogs for destructive actions
// - toast: Renders toast notifications (brief pop-up messages)

pub mod actions;
pub mod breadcrumb;
pub mod dialogs;
pub mod file_list;
pub mod folder_tree;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod toast;

pub use render::render;
