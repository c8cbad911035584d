//! OCR/AI hand-off: raw text in, field values out
//!
//! Extraction runs on a spawned task and reports back through a channel. Each
//! request carries the form generation it was issued for, so a result that
//! arrives after the form was cancelled or changed can be recognised and
//! dropped.

mod command;
mod traits;

pub use command::CommandExtractor;
pub use traits::{extract_for, ExtractError, Extractor};

#[cfg(test)]
pub use traits::MockExtractor;

use crate::state::{FieldMap, FieldValue, FormKind, FormState};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Result of an extraction, tagged with the request it answers
#[derive(Debug)]
pub struct ExtractionOutcome {
    pub generation: u64,
    pub kind: FormKind,
    pub raw_text: String,
    pub result: Result<FieldMap, ExtractError>,
}

/// How an extraction result ended up in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Extracted values merged in
    Merged(usize),
    /// Extraction failed; raw text stored under the fallback field
    Fallback,
}

/// Merge an extraction result into the form.
///
/// Extracted values win over entered ones. On failure the raw text goes to
/// `fallback_field` and the error stops here.
pub fn apply_extraction(
    state: &mut FormState,
    result: Result<FieldMap, ExtractError>,
    raw_text: &str,
    fallback_field: &str,
) -> Applied {
    match result {
        Ok(fields) => {
            let count = fields.len();
            state.merge(fields);
            Applied::Merged(count)
        }
        Err(e) => {
            tracing::warn!("Extraction failed, keeping raw text in {fallback_field}: {e}");
            state.set(fallback_field, FieldValue::Text(raw_text.to_string()));
            Applied::Fallback
        }
    }
}

/// Run an extraction in the background and send the outcome to `tx`
pub fn spawn_extraction(
    extractor: Arc<dyn Extractor>,
    kind: FormKind,
    raw_text: String,
    generation: u64,
    tx: mpsc::UnboundedSender<ExtractionOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = extract_for(extractor.as_ref(), kind, &raw_text).await;
        let outcome = ExtractionOutcome {
            generation,
            kind,
            raw_text,
            result,
        };
        if tx.send(outcome).is_err() {
            tracing::debug!("Extraction finished after the receiver was dropped");
        }
    })
}
