//! Persistence boundary for submitted forms

use crate::state::Submission;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

/// Where a submission was stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub id: Uuid,
    pub location: PathBuf,
}

/// Receives validated submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitSink: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<SubmitReceipt>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredSubmission<'a> {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    submission: &'a Submission,
}

/// Writes each submission to its own JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    output_dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl SubmitSink for JsonFileSink {
    async fn submit(&self, submission: &Submission) -> Result<SubmitReceipt> {
        let id = Uuid::new_v4();
        let submitted_at = Utc::now();
        let file_name = format!(
            "{}-{}-{id}.json",
            submission.form.slug(),
            submitted_at.format("%Y%m%dT%H%M%S")
        );
        let location = self.output_dir.join(file_name);

        let content = serde_json::to_string_pretty(&StoredSubmission {
            id,
            submitted_at,
            submission,
        })?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| format!("creating {}", self.output_dir.display()))?;
        tokio::fs::write(&location, content)
            .await
            .with_context(|| format!("writing {}", location.display()))?;

        tracing::info!("Stored {} submission at {}", submission.form.slug(), location.display());
        Ok(SubmitReceipt { id, location })
    }
}
