//! Single-page administrative procedure form

use super::error::FormError;
use super::field::FieldDescriptor;
use super::form::Form;
use super::form_state::FormState;
use super::ocr::{InputMethod, OcrPanel};
use super::submission::{FormKind, Submission};
use crate::templates::PROCEDURE_TEMPLATE;

/// Values a new procedure starts with
pub(crate) fn procedure_defaults(documents_key: &str, extra_documents_key: &str) -> FormState {
    let mut data = FormState::new();
    data.set(documents_key, "text");
    data.set(extra_documents_key, "text");
    data.set("validityType", "periodic");
    data.set("feeType", "gratuit");
    for toggle in ["digitization", "thirdPartySubmission", "hasAppeal"] {
        data.set(toggle, false);
    }
    data
}

#[derive(Debug, Clone)]
pub struct ProcedureForm {
    pub data: FormState,
    pub active_field_index: usize,
    pub list_cursor: usize,
    pub input_method: InputMethod,
    pub ocr: OcrPanel,
}

impl Default for ProcedureForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcedureForm {
    pub fn new() -> Self {
        Self {
            data: procedure_defaults("requiredDocumentsType", "additionalDocumentsType"),
            active_field_index: 0,
            list_cursor: 0,
            input_method: InputMethod::default(),
            ocr: OcrPanel::default(),
        }
    }

    pub fn submit(&self) -> Result<Submission, FormError> {
        let fields = PROCEDURE_TEMPLATE.fields;
        self.data.validate(fields)?;
        Ok(Submission {
            form: FormKind::Procedure,
            text_type: None,
            fields: self.data.payload(fields),
        })
    }
}

impl Form for ProcedureForm {
    fn kind(&self) -> FormKind {
        FormKind::Procedure
    }
    fn visible_fields(&self) -> Vec<&'static FieldDescriptor> {
        self.data.visible(PROCEDURE_TEMPLATE.fields)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldEdit, FieldValue};
    use pretty_assertions::assert_eq;

    fn filled() -> ProcedureForm {
        let mut form = ProcedureForm::new();
        form.data.set("name", "Demande de passeport");
        form.data.set("description", "Délivrance du passeport biométrique");
        form.data.set("procedureType", "Document d'identité");
        form.data.set("sectorAdministration", "Ministère de l'Intérieur");
        form.data.set("submissionLocation", "Daïra");
        form.data.set("processingDuration", "15");
        form
    }

    #[test]
    fn test_defaults() {
        let form = ProcedureForm::new();
        assert_eq!(form.data.get("feeType"), Some(&FieldValue::from("gratuit")));
        assert_eq!(form.data.get("validityType"), Some(&FieldValue::from("periodic")));
        assert_eq!(form.data.get("hasAppeal"), Some(&FieldValue::Bool(false)));
        assert_eq!(
            form.data.get("requiredDocumentsType"),
            Some(&FieldValue::from("text"))
        );
    }

    #[test]
    fn test_periodic_validity_shows_dates_and_hides_appeal() {
        let names: Vec<_> = ProcedureForm::new()
            .visible_fields()
            .iter()
            .map(|f| f.name)
            .collect();
        assert!(names.contains(&"validityStartDate"));
        assert!(names.contains(&"validityEndDate"));
        assert!(!names.contains(&"feeAmount"));
        assert!(!names.contains(&"appealLocation"));
        assert!(!names.contains(&"digitizationDate"));
    }

    #[test]
    fn test_paid_fee_reveals_amount() {
        let mut form = ProcedureForm::new();
        form.data.set("feeType", "payant");
        assert!(form.visible_fields().iter().any(|f| f.name == "feeAmount"));
    }

    #[test]
    fn test_toggle_appeal_from_keyboard() {
        let mut form = ProcedureForm::new();
        let row = form
            .visible_fields()
            .iter()
            .position(|f| f.name == "hasAppeal")
            .unwrap();
        form.set_active_field(row);
        let before = form.field_count();
        form.apply_edit(FieldEdit::Toggle);
        assert_eq!(form.field_count(), before + 3);
    }

    #[test]
    fn test_submit_requires_core_fields() {
        let err = ProcedureForm::new().submit().unwrap_err();
        match err {
            FormError::MissingRequired(labels) => {
                assert_eq!(labels.len(), 6);
                assert!(labels.contains(&"Nom de la procédure".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_submit_rejects_non_numeric_duration() {
        let mut form = filled();
        form.data.set("processingDuration", "quinze");
        assert!(matches!(
            form.submit(),
            Err(FormError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_submit_payload_drops_hidden_fields() {
        let mut form = filled();
        form.data.set("feeAmount", "1000");
        let submission = form.submit().unwrap();
        assert_eq!(submission.form, FormKind::Procedure);
        assert!(submission.text_type.is_none());
        assert!(!submission.fields.contains_key("feeAmount"));
        assert_eq!(
            submission.fields.get("name"),
            Some(&FieldValue::from("Demande de passeport"))
        );
        assert_eq!(submission.display_name(), "Demande de passeport");
    }
}
