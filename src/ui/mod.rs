//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::{ActiveForm, View};
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match (&app.state.current_view, &app.state.form) {
        (View::LegalText, ActiveForm::LegalText(form)) => {
            forms::draw_legal_text(frame, main_area, form)
        }
        (View::Procedure, ActiveForm::Procedure(form)) => {
            forms::draw_procedure(frame, main_area, form)
        }
        (View::Wizard, ActiveForm::Wizard(wizard)) => forms::draw_wizard(frame, main_area, wizard),
        _ => home::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Errors are modal and drawn last
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
