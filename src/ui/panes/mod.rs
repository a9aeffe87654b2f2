//! TUI pane rendering modules
//!
//! - [`list`]: the list canvas (node boxes, pointer arrows, head/tail labels)
//! - [`notifications`]: outcome log for every operation
//! - [`status`]: status bar with list summary, prompt and keybindings
//!
//! Each pane module exports a primary `render_*` function that takes the data
//! it draws by reference and never touches the engine.

pub mod list;
pub mod notifications;
pub mod status;

pub use list::{canvas_lines, mode_label, render_list_pane};
pub use notifications::render_notifications_pane;
pub use status::{render_status_bar, PromptView, StatusRenderData};
