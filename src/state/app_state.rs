//! Application state definitions

use super::forms::{
    ActiveForm, FormKind, InputMethod, LegalTextForm, ProcedureForm, ProcedureWizard,
};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    LegalText,
    Procedure,
    Wizard,
}

impl View {
    pub fn is_form_view(&self) -> bool {
        !matches!(self, View::Home)
    }

    pub fn for_form(kind: FormKind) -> Self {
        match kind {
            FormKind::LegalText => View::LegalText,
            FormKind::Procedure => View::Procedure,
            FormKind::ProcedureWizard => View::Wizard,
        }
    }
}

/// Entries of the home menu, in display order
pub const HOME_ITEMS: &[(FormKind, &str)] = &[
    (FormKind::LegalText, "Texte juridique"),
    (FormKind::Procedure, "Procédure administrative"),
    (FormKind::ProcedureWizard, "Procédure administrative (assistant)"),
];

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,
    pub home_index: usize,

    // Form being filled in
    pub form: ActiveForm,
    /// Bumped whenever in-flight extraction results must be ignored
    pub form_generation: u64,

    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.home_index + 1 < HOME_ITEMS.len() {
            self.home_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        self.home_index = self.home_index.saturating_sub(1);
    }

    pub fn selected_home_item(&self) -> FormKind {
        HOME_ITEMS[self.home_index.min(HOME_ITEMS.len() - 1)].0
    }

    /// Replace the active form with an empty one of `kind`
    pub fn open_form(&mut self, kind: FormKind, input_method: InputMethod) {
        self.form = match kind {
            FormKind::LegalText => ActiveForm::LegalText(LegalTextForm {
                input_method,
                ..LegalTextForm::new()
            }),
            FormKind::Procedure => ActiveForm::Procedure(ProcedureForm {
                input_method,
                ..ProcedureForm::new()
            }),
            FormKind::ProcedureWizard => ActiveForm::Wizard(ProcedureWizard::new()),
        };
        self.bump_generation();
    }

    /// Discard the active form
    pub fn clear_form(&mut self) {
        self.form = ActiveForm::None;
        self.bump_generation();
    }

    pub fn bump_generation(&mut self) -> u64 {
        self.form_generation = self.form_generation.wrapping_add(1);
        self.form_generation
    }

    pub fn push_error(&mut self, message: String) {
        tracing::debug!("Queued error: {message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
