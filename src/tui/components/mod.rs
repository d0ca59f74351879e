// Reusable UI components shared across views

mod logs_panel;
mod status_bar;
mod title_bar;

pub use logs_panel::render as render_logs_panel;
pub use status_bar::render as render_status_bar;
pub use title_bar::render as render_title_bar;
