//! Form domain layer
//!
//! Field descriptors and values, the shared form state, and the three form
//! containers (legal text, single-page procedure, procedure wizard).

mod dynamic_list;
mod error;
mod field;
mod form;
mod form_state;
mod legal_text_form;
mod ocr;
mod procedure_form;
mod submission;
mod wizard;

pub use dynamic_list::EMPTY_LIST_PLACEHOLDER;
pub use error::{FormError, WizardError};
pub use field::{FieldDescriptor, FieldKind, FieldValue};
pub use form::{ActiveForm, Form};
pub use form_state::{FieldEdit, FieldMap, FormState};
pub use legal_text_form::LegalTextForm;
pub use ocr::{InputMethod, OcrFocus, OcrPanel};
pub use procedure_form::ProcedureForm;
pub use submission::{FormKind, Submission};
pub use wizard::ProcedureWizard;
