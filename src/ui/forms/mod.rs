//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `input_method`: Manual / OCR tab header
//! - `ocr_panel`: Raw OCR text panel
//! - `legal_text_form`, `procedure_form`, `wizard_form`: one view per form

mod field_renderer;
mod input_method;
mod legal_text_form;
mod ocr_panel;
mod procedure_form;
mod wizard_form;

pub use legal_text_form::draw_legal_text;
pub use procedure_form::draw_procedure;
pub use wizard_form::draw_wizard;

use crate::state::{FieldKind, FieldValue, Form};
use field_renderer::{
    draw_field, draw_type_selector, field_height, visible_window, SINGLE_LINE_HEIGHT,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Bordered frame shared by every form view
fn form_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Draw the focusable rows of `form`, scrolled so the active row is visible.
///
/// `type_selector` is drawn in the leading row when the form has one.
fn draw_field_stack(
    frame: &mut Frame,
    area: Rect,
    form: &dyn Form,
    type_selector: Option<Option<&str>>,
) {
    let fields = form.visible_fields();
    let data = form.data();
    let values: Vec<FieldValue> = fields.iter().map(|f| data.value_of(f)).collect();
    let leading = form.leading_rows();

    let mut heights = vec![SINGLE_LINE_HEIGHT; leading];
    heights.extend(
        fields
            .iter()
            .zip(&values)
            .map(|(field, value)| field_height(field, value)),
    );

    let active = form.active_field();
    let (start, end) = visible_window(&heights, active, area.height);

    let mut y = area.y;
    for row in start..end {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let rect = Rect {
            y,
            height: heights[row].min(remaining),
            ..area
        };

        if row < leading {
            if let Some(current) = type_selector {
                draw_type_selector(frame, rect, current, active == row);
            }
        } else {
            let index = row - leading;
            draw_field(
                frame,
                rect,
                fields[index],
                &values[index],
                active == row,
                form.list_cursor(),
            );
        }
        y += rect.height;
    }
}

/// Key hints for the focused field
fn field_hints(form: &dyn Form) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "champ suivant")];
    match form.active_descriptor().map(|f| f.kind) {
        Some(FieldKind::Select) => hints.push(("◀/▶", "choisir")),
        Some(FieldKind::Toggle) => hints.push(("Espace", "basculer")),
        Some(FieldKind::DynamicList) => {
            hints.push(("Ctrl+A", "ajouter"));
            hints.push(("Ctrl+X", "retirer"));
            hints.push(("↑/↓", "élément"));
        }
        Some(FieldKind::Textarea) => hints.push(("Entrée", "nouvelle ligne")),
        Some(FieldKind::File) => hints.push(("Suppr", "effacer le chemin")),
        Some(FieldKind::Date) => hints.push(("Format", "AAAA-MM-JJ")),
        Some(FieldKind::Text | FieldKind::Number) => {}
        None => {}
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LegalTextForm, ProcedureWizard};

    #[test]
    fn test_field_hints_for_list() {
        let mut form = LegalTextForm::new();
        assert!(form.select_type("loi"));
        let list_row = form
            .visible_fields()
            .iter()
            .position(|f| f.kind == FieldKind::DynamicList)
            .expect("law template has list fields");
        form.active_field_index = list_row + form.leading_rows();
        assert!(field_hints(&form).contains(&("Ctrl+A", "ajouter")));
    }

    #[test]
    fn test_field_hints_always_offer_navigation() {
        let wizard = ProcedureWizard::new();
        assert_eq!(field_hints(&wizard)[0], ("Tab", "champ suivant"));
    }
}
