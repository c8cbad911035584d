//! Trait abstraction for structured-data extraction to enable mocking in tests

use crate::state::{FieldMap, FormKind};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("aucun extracteur configuré")]
    Unavailable,

    #[error("impossible de lancer l'extracteur : {0}")]
    Io(#[from] std::io::Error),

    #[error("l'extracteur a échoué ({status}) : {stderr}")]
    Failed { status: String, stderr: String },

    #[error("réponse de l'extracteur illisible : {0}")]
    InvalidOutput(#[from] serde_json::Error),

    #[error("l'extracteur doit renvoyer un objet JSON")]
    NotAnObject,

    #[error("l'extracteur n'a pas répondu après {} s", .0.as_secs())]
    TimedOut(Duration),
}

/// Turns raw OCR text into field values
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract legal text fields (journal number, title, articles...)
    async fn extract_legal_text(&self, text: &str) -> Result<FieldMap, ExtractError>;

    /// Extract administrative procedure fields
    async fn extract_procedure(&self, text: &str) -> Result<FieldMap, ExtractError>;
}

/// Dispatch to the extraction matching a form
pub async fn extract_for(
    extractor: &dyn Extractor,
    kind: FormKind,
    text: &str,
) -> Result<FieldMap, ExtractError> {
    match kind {
        FormKind::LegalText => extractor.extract_legal_text(text).await,
        FormKind::Procedure | FormKind::ProcedureWizard => extractor.extract_procedure(text).await,
    }
}
