//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the front error of the queue, centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw(" Appuyez sur "),
        Span::styled("Entrée", key),
        Span::raw(" ou "),
        Span::styled("Échap", key),
        Span::raw(" pour fermer"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Erreur",
            accent: Color::Red,
            message: error_message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
