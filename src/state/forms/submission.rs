//! Submission payloads handed to the persistence boundary

use super::form_state::FieldMap;
use serde::{Deserialize, Serialize};

/// Which form produced a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    LegalText,
    Procedure,
    ProcedureWizard,
}

impl FormKind {
    pub fn slug(self) -> &'static str {
        match self {
            FormKind::LegalText => "legal-text",
            FormKind::Procedure => "procedure",
            FormKind::ProcedureWizard => "procedure-wizard",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        [Self::LegalText, Self::Procedure, Self::ProcedureWizard]
            .into_iter()
            .find(|kind| kind.slug() == slug)
    }

    /// Context tag carried by auto-fill requests
    pub fn context(self) -> &'static str {
        match self {
            FormKind::LegalText => "legal-text",
            FormKind::Procedure | FormKind::ProcedureWizard => "procedure",
        }
    }

    /// Field that receives raw OCR text when structured extraction fails
    pub fn fallback_field(self) -> &'static str {
        match self {
            FormKind::LegalText => "content",
            FormKind::Procedure | FormKind::ProcedureWizard => "description",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::LegalText => "Ajout d'un Texte Juridique Algérien",
            FormKind::Procedure | FormKind::ProcedureWizard => {
                "Ajouter une nouvelle procédure administrative"
            }
        }
    }
}

/// Aggregated form data passed to `on_submit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub form: FormKind,
    /// Legal text type key (absent for procedures)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    pub fields: FieldMap,
}

impl Submission {
    /// Human readable name used in confirmation messages
    pub fn display_name(&self) -> String {
        match self.form {
            FormKind::LegalText => self.text_type.clone().unwrap_or_default(),
            FormKind::Procedure | FormKind::ProcedureWizard => self
                .fields
                .get("name")
                .map(|v| v.display_value())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "nouvelle procédure".to_string()),
        }
    }
}
