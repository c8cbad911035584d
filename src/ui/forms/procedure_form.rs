//! Administrative procedure form rendering

use super::field_renderer::draw_help_text;
use super::input_method::draw_input_method_tabs;
use super::ocr_panel::draw_ocr_panel;
use super::{draw_field_stack, field_hints, form_block};
use crate::state::{FormKind, InputMethod, ProcedureForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn draw_procedure(frame: &mut Frame, area: Rect, form: &ProcedureForm) {
    let block = form_block(FormKind::Procedure.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input method tabs
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    draw_input_method_tabs(frame, chunks[0], form.input_method);

    match form.input_method {
        InputMethod::Ocr => {
            let body = Rect {
                height: chunks[2].height + chunks[3].height,
                ..chunks[2]
            };
            draw_ocr_panel(frame, body, &form.ocr);
        }
        InputMethod::Manual => {
            draw_field_stack(frame, chunks[2], form, None);
            draw_help_text(frame, chunks[3], &field_hints(form));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_renders_title_and_first_fields() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let form = ProcedureForm::new();
        terminal
            .draw(|frame| draw_procedure(frame, frame.area(), &form))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Ajouter une nouvelle procédure administrative"));
        assert!(screen.contains("Insertion OCR"));
    }
}
