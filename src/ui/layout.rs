//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{EXTRACT_SHORTCUT, INPUT_METHOD_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{InputMethod, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " LexDZ ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(kind) = app.state.form.kind() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(kind.title(), Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(
            " Textes juridiques et procédures administratives",
            Style::default().fg(Color::Gray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.extraction_pending() {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::raw(" "));
    }

    let hints = get_view_hints(
        &app.state.current_view,
        app.state.form.input_method(),
    );
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quitter ";
    let width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.right().saturating_sub(width),
        width: width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, input_method: InputMethod) -> String {
    match view {
        View::Home => "Entrée:ouvrir  q:quitter".to_string(),
        View::LegalText | View::Procedure => match input_method {
            InputMethod::Manual => format!(
                "{SAVE_SHORTCUT}:enregistrer  {INPUT_METHOD_SHORTCUT}:OCR  Esc:annuler"
            ),
            InputMethod::Ocr => format!(
                "{EXTRACT_SHORTCUT}:extraire  {INPUT_METHOD_SHORTCUT}:manuel  Esc:annuler"
            ),
        },
        View::Wizard => format!("PgUp/PgDn:étapes  {SAVE_SHORTCUT}:enregistrer  Esc:annuler"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_header_and_status() {
        let (header, main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(status.y, 23);
        assert_eq!(main.height, 22);
    }

    #[test]
    fn test_hints_follow_input_method() {
        assert!(get_view_hints(&View::Procedure, InputMethod::Ocr).contains("extraire"));
        assert!(get_view_hints(&View::LegalText, InputMethod::Manual).contains("enregistrer"));
    }
}
