//! Legal text form rendering

use super::field_renderer::draw_help_text;
use super::input_method::draw_input_method_tabs;
use super::ocr_panel::draw_ocr_panel;
use super::{draw_field_stack, field_hints, form_block};
use crate::state::{FormKind, InputMethod, LegalTextForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const RAW_TEXT_HEIGHT: u16 = 6;

pub fn draw_legal_text(frame: &mut Frame, area: Rect, form: &LegalTextForm) {
    let block = form_block(FormKind::LegalText.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input method tabs
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Body
        ])
        .split(inner);

    draw_input_method_tabs(frame, chunks[0], form.input_method);

    match form.input_method {
        InputMethod::Ocr => draw_ocr_panel(frame, chunks[2], &form.ocr),
        InputMethod::Manual => draw_manual(frame, chunks[2], form),
    }
}

fn draw_manual(frame: &mut Frame, area: Rect, form: &LegalTextForm) {
    let raw_text = form
        .data
        .get(FormKind::LegalText.fallback_field())
        .filter(|v| !v.is_blank())
        .map(|v| v.display_value());

    let raw_height = if raw_text.is_some() { RAW_TEXT_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),             // Fields
            Constraint::Length(raw_height), // Unstructured text
            Constraint::Length(1),          // Hints
        ])
        .split(area);

    let type_name = form.template.map(|t| t.name);
    draw_field_stack(frame, chunks[0], form, Some(type_name));

    if form.template.is_none() {
        let below = Rect {
            y: chunks[0].y + 3,
            height: chunks[0].height.saturating_sub(3),
            ..chunks[0]
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Sélectionnez un type de texte pour afficher ses champs.",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            below,
        );
    }

    if let Some(text) = raw_text {
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: false }).block(
                Block::default()
                    .title(" Texte brut (extraction non structurée) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            chunks[1],
        );
    }

    let hints = if form.is_type_selector_active() {
        vec![("◀/▶", "type de texte"), ("Tab", "champ suivant")]
    } else {
        field_hints(form)
    };
    draw_help_text(frame, chunks[2], &hints);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldValue, FormState};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(form: &LegalTextForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| draw_legal_text(frame, frame.area(), form))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_form_asks_for_a_type() {
        let screen = render(&LegalTextForm::new());
        assert!(screen.contains("Sélectionner un type de texte"));
        assert!(screen.contains("Insertion Manuelle"));
    }

    #[test]
    fn test_selected_type_shows_its_fields() {
        let mut form = LegalTextForm::new();
        assert!(form.select_type("loi"));
        let screen = render(&form);
        assert!(screen.contains("Journal N°"));
        assert!(screen.contains("Loi"));
    }

    #[test]
    fn test_unstructured_text_is_displayed() {
        let mut data = FormState::new();
        data.set("content", FieldValue::from("Texte intégral"));
        let screen = render(&LegalTextForm {
            data,
            ..LegalTextForm::new()
        });
        assert!(screen.contains("Texte brut"));
        assert!(screen.contains("Texte intégral"));
    }

    #[test]
    fn test_ocr_method_shows_panel() {
        let form = LegalTextForm {
            input_method: InputMethod::Ocr,
            ..LegalTextForm::new()
        };
        assert!(render(&form).contains("Texte reconnu"));
    }
}
