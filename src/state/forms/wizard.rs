//! Multi-step procedure wizard

use super::error::WizardError;
use super::field::FieldDescriptor;
use super::form::Form;
use super::form_state::FormState;
use super::procedure_form::procedure_defaults;
use super::submission::{FormKind, Submission};
use crate::templates::{DocumentTypeTemplate, PROCEDURE_WIZARD_STEPS};

/// Procedure wizard over [`PROCEDURE_WIZARD_STEPS`].
///
/// `current_step` is 1-based. All steps share one [`FormState`], so moving
/// between steps never loses a value.
#[derive(Debug, Clone)]
pub struct ProcedureWizard {
    pub current_step: usize,
    pub data: FormState,
    pub active_field_index: usize,
    pub list_cursor: usize,
}

impl Default for ProcedureWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcedureWizard {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            data: procedure_defaults("requiredDocumentsType", "complementaryDocumentsType"),
            active_field_index: 0,
            list_cursor: 0,
        }
    }

    pub fn total_steps(&self) -> usize {
        PROCEDURE_WIZARD_STEPS.len()
    }

    pub fn current_template(&self) -> &'static DocumentTypeTemplate {
        &PROCEDURE_WIZARD_STEPS[self.current_step - 1]
    }

    pub fn step_title(&self) -> &'static str {
        self.current_template().name
    }

    /// Fraction of the wizard reached, `current / N`
    pub fn progress(&self) -> f64 {
        self.current_step as f64 / self.total_steps() as f64
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    /// Advance one step; no-op on the final step
    pub fn next(&mut self) -> bool {
        if self.is_final_step() {
            return false;
        }
        self.current_step += 1;
        self.reset_focus();
        true
    }

    /// Go back one step; no-op on the first step
    pub fn prev(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.current_step -= 1;
        self.reset_focus();
        true
    }

    fn reset_focus(&mut self) {
        self.active_field_index = 0;
        self.list_cursor = 0;
    }

    fn all_fields() -> impl Iterator<Item = &'static FieldDescriptor> {
        PROCEDURE_WIZARD_STEPS.iter().flat_map(|step| step.fields.iter())
    }

    /// Validate every step and return the union of their values
    pub fn submit(&self) -> Result<Submission, WizardError> {
        if !self.is_final_step() {
            return Err(WizardError::NotOnFinalStep {
                current: self.current_step,
                total: self.total_steps(),
            });
        }
        self.data.validate(Self::all_fields())?;
        Ok(Submission {
            form: FormKind::ProcedureWizard,
            text_type: None,
            fields: self.data.payload(Self::all_fields()),
        })
    }
}

impl Form for ProcedureWizard {
    fn kind(&self) -> FormKind {
        FormKind::ProcedureWizard
    }
    fn visible_fields(&self) -> Vec<&'static FieldDescriptor> {
        // Controlling fields may live on another step
        let step = self.current_template().fields;
        self.data
            .visible(Self::all_fields())
            .into_iter()
            .filter(|f| step.iter().any(|s| s.name == f.name))
            .collect()
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
