//! Legal text form: type selector plus the fields of the selected template

use super::error::FormError;
use super::field::FieldDescriptor;
use super::form::Form;
use super::form_state::FormState;
use super::ocr::{InputMethod, OcrPanel};
use super::submission::{FormKind, Submission};
use crate::templates::{self, DocumentTypeTemplate};

/// Single-page legal text form.
///
/// Row 0 is the document type selector; template fields follow.
#[derive(Debug, Clone, Default)]
pub struct LegalTextForm {
    pub template: Option<&'static DocumentTypeTemplate>,
    pub data: FormState,
    pub active_field_index: usize,
    pub list_cursor: usize,
    pub input_method: InputMethod,
    pub ocr: OcrPanel,
}

impl LegalTextForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_key(&self) -> Option<&'static str> {
        self.template.map(|t| t.type_key)
    }

    /// Select a template by key; entered values are kept
    pub fn select_type(&mut self, type_key: &str) -> bool {
        match templates::lookup(type_key) {
            Some(template) => {
                self.template = Some(template);
                self.list_cursor = 0;
                self.clamp_focus();
                true
            }
            None => false,
        }
    }

    /// Cycle the type selector through the registry
    pub fn cycle_type(&mut self, forward: bool) {
        let keys: Vec<&'static str> = templates::all_types().collect();
        let count = keys.len();
        let current = self
            .type_key()
            .and_then(|key| keys.iter().position(|k| *k == key));
        let next = match current {
            None if forward => 0,
            None => count - 1,
            Some(i) if forward => (i + 1) % count,
            Some(0) => count - 1,
            Some(i) => i - 1,
        };
        self.select_type(keys[next]);
    }

    pub fn is_type_selector_active(&self) -> bool {
        self.active_field_index == 0
    }

    /// Validate and build the payload for `on_submit`
    pub fn submit(&self) -> Result<Submission, FormError> {
        let template = self.template.ok_or(FormError::NoDocumentType)?;
        self.data.validate(template.fields)?;

        let mut fields = self.data.payload(template.fields);
        let fallback = FormKind::LegalText.fallback_field();
        if let Some(raw) = self.data.get(fallback) {
            if !raw.is_blank() {
                fields.insert(fallback.to_string(), raw.clone());
            }
        }

        Ok(Submission {
            form: FormKind::LegalText,
            text_type: Some(template.type_key.to_string()),
            fields,
        })
    }
}

impl Form for LegalTextForm {
    fn kind(&self) -> FormKind {
        FormKind::LegalText
    }
    fn visible_fields(&self) -> Vec<&'static FieldDescriptor> {
        match self.template {
            Some(template) => self.data.visible(template.fields),
            None => Vec::new(),
        }
    }
    fn data(&self) -> &FormState {
        &self.data
    }
    fn data_mut(&mut self) -> &mut FormState {
        &mut self.data
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
    fn list_cursor(&self) -> usize {
        self.list_cursor
    }
    fn set_list_cursor(&mut self, index: usize) {
        self.list_cursor = index;
    }
    fn leading_rows(&self) -> usize {
        1
    }
}
