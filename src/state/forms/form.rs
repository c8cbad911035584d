//! Common form navigation and the active form enum

use super::field::{FieldDescriptor, FieldKind, FieldValue};
use super::form_state::{FieldEdit, FormState};
use super::legal_text_form::LegalTextForm;
use super::ocr::{InputMethod, OcrPanel};
use super::procedure_form::ProcedureForm;
use super::submission::FormKind;
use super::wizard::ProcedureWizard;

/// Trait for common form operations
pub trait Form {
    fn kind(&self) -> FormKind;
    /// Template fields currently shown, in display order
    fn visible_fields(&self) -> Vec<&'static FieldDescriptor>;
    fn data(&self) -> &FormState;
    fn data_mut(&mut self) -> &mut FormState;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn list_cursor(&self) -> usize;
    fn set_list_cursor(&mut self, index: usize);

    /// Focusable rows drawn above the template fields (e.g. a type selector)
    fn leading_rows(&self) -> usize {
        0
    }

    fn field_count(&self) -> usize {
        self.leading_rows() + self.visible_fields().len()
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
        self.set_list_cursor(0);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
        self.set_list_cursor(0);
    }

    /// Descriptor of the focused template field, if focus is on one
    fn active_descriptor(&self) -> Option<&'static FieldDescriptor> {
        let index = self.active_field().checked_sub(self.leading_rows())?;
        self.visible_fields().get(index).copied()
    }

    fn active_value(&self) -> Option<FieldValue> {
        self.active_descriptor().map(|f| self.data().value_of(f))
    }

    /// Apply an edit to the focused field and keep focus and list cursor in range
    fn apply_edit(&mut self, edit: FieldEdit) {
        let Some(field) = self.active_descriptor() else {
            return;
        };
        let cursor = self.list_cursor();
        self.data_mut().apply(field, edit, cursor);

        if field.kind == FieldKind::DynamicList {
            let len = self.data().value_of(field).as_list().len();
            let cursor = match edit {
                FieldEdit::AppendEntry => len.saturating_sub(1),
                _ => cursor.min(len.saturating_sub(1)),
            };
            self.set_list_cursor(cursor);
        }
        self.clamp_focus();
    }

    /// Move the entry cursor of a focused list field
    fn move_list_cursor(&mut self, down: bool) {
        let Some(value) = self.active_value() else {
            return;
        };
        let len = value.as_list().len();
        let cursor = self.list_cursor();
        let next = if down {
            (cursor + 1).min(len.saturating_sub(1))
        } else {
            cursor.saturating_sub(1)
        };
        self.set_list_cursor(next);
    }

    fn clamp_focus(&mut self) {
        let count = self.field_count();
        if self.active_field() >= count {
            self.set_active_field(count.saturating_sub(1));
        }
    }

    fn is_active_field_multiline(&self) -> bool {
        self.active_descriptor()
            .is_some_and(|f| f.kind.is_multiline())
    }
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum ActiveForm {
    #[default]
    None,
    LegalText(LegalTextForm),
    Procedure(ProcedureForm),
    Wizard(ProcedureWizard),
}

impl ActiveForm {
    pub fn as_form(&self) -> Option<&dyn Form> {
        match self {
            ActiveForm::None => None,
            ActiveForm::LegalText(f) => Some(f),
            ActiveForm::Procedure(f) => Some(f),
            ActiveForm::Wizard(f) => Some(f),
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            ActiveForm::None => None,
            ActiveForm::LegalText(f) => Some(f),
            ActiveForm::Procedure(f) => Some(f),
            ActiveForm::Wizard(f) => Some(f),
        }
    }

    pub fn kind(&self) -> Option<FormKind> {
        self.as_form().map(|f| f.kind())
    }

    pub fn next_field(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.next_field();
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.prev_field();
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.as_form()
            .is_some_and(|f| f.is_active_field_multiline())
    }

    /// Input method selector, for forms that offer OCR input
    pub fn input_method_mut(&mut self) -> Option<&mut InputMethod> {
        match self {
            ActiveForm::LegalText(f) => Some(&mut f.input_method),
            ActiveForm::Procedure(f) => Some(&mut f.input_method),
            ActiveForm::None | ActiveForm::Wizard(_) => None,
        }
    }

    pub fn input_method(&self) -> InputMethod {
        match self {
            ActiveForm::LegalText(f) => f.input_method,
            ActiveForm::Procedure(f) => f.input_method,
            ActiveForm::None | ActiveForm::Wizard(_) => InputMethod::Manual,
        }
    }

    pub fn ocr_panel_mut(&mut self) -> Option<&mut OcrPanel> {
        match self {
            ActiveForm::LegalText(f) => Some(&mut f.ocr),
            ActiveForm::Procedure(f) => Some(&mut f.ocr),
            ActiveForm::None | ActiveForm::Wizard(_) => None,
        }
    }
}
