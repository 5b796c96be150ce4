// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (breadcrumb, panes, pagination, legend)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the breadcrumb trail with the folder title
// - folder_list: Renders the subfolder pane
// - image_list: Renders the image pane and the inline preview
// - lightbox: Renders the full-screen viewer with capture metadata
// - status_bar: Renders the pagination bar and bottom status line
// - legend: Renders hotkey legend
// - dialogs: Renders the root prompt, delete confirmation and help
// - toast: Renders toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod dialogs;
pub mod folder_list;
pub mod image_list;
pub mod layout;
pub mod legend;
pub mod lightbox;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
