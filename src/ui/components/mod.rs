//! Reusable UI components

mod button;
mod dialog;

pub use button::{button_column, hint_line, render_menu_button};
pub use dialog::render_error_dialog;
