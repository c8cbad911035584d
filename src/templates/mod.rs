//! Template registry
//!
//! Static field lists keyed by document type. The forms look templates up by
//! key and render whatever fields they describe.

mod legal_texts;
mod nomenclature;
mod procedures;

use crate::state::FieldDescriptor;

pub use legal_texts::LEGAL_TEXT_TEMPLATES;
pub use procedures::{PROCEDURE_TEMPLATE, PROCEDURE_WIZARD_STEPS};

/// Field list associated with one document type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTypeTemplate {
    pub type_key: &'static str,
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl DocumentTypeTemplate {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Find the legal text template for a type key
pub fn lookup(type_key: &str) -> Option<&'static DocumentTypeTemplate> {
    LEGAL_TEXT_TEMPLATES.iter().find(|t| t.type_key == type_key)
}

/// All legal text type keys, in selector order
pub fn all_types() -> impl Iterator<Item = &'static str> {
    LEGAL_TEXT_TEMPLATES.iter().map(|t| t.type_key)
}
