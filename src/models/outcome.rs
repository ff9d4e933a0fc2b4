//! Seed outcome models
//!
//! Per-record results and the summary of a whole seed run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Collection, RecordId};

/// Status of a single fixture record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Created,
    Failed,
    Skipped,
}

impl RecordStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            RecordStatus::Created => "✓",
            RecordStatus::Failed => "✗",
            RecordStatus::Skipped => "○",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Created => write!(f, "CREATED"),
            RecordStatus::Failed => write!(f, "FAILED"),
            RecordStatus::Skipped => write!(f, "SKIPPED"),
        }
    }
}

/// Result of posting (or not posting) one record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub collection: Collection,
    pub label: String,
    pub status: RecordStatus,
    pub id: Option<RecordId>,
    pub message: Option<String>,
}

impl RecordOutcome {
    pub fn created(collection: Collection, label: impl Into<String>, id: RecordId) -> Self {
        Self {
            collection,
            label: label.into(),
            status: RecordStatus::Created,
            id: Some(id),
            message: None,
        }
    }

    pub fn failed(
        collection: Collection,
        label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            collection,
            label: label.into(),
            status: RecordStatus::Failed,
            id: None,
            message: Some(message.into()),
        }
    }

    pub fn skipped(
        collection: Collection,
        label: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            collection,
            label: label.into(),
            status: RecordStatus::Skipped,
            id: None,
            message: Some(reason.into()),
        }
    }

    /// Id of the created record, absent on failure or skip
    pub fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.symbol(), self.label)?;
        if let Some(id) = &self.id {
            write!(f, " (id {id})")?;
        }
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

/// Summary of one seed run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedSummary {
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub created: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub outcomes: Vec<RecordOutcome>,
}

impl SeedSummary {
    pub fn new(started_at: DateTime<Utc>, duration_ms: u64, outcomes: Vec<RecordOutcome>) -> Self {
        let count = |status: RecordStatus| outcomes.iter().filter(|o| o.status == status).count();

        Self {
            started_at,
            total: outcomes.len(),
            created: count(RecordStatus::Created),
            failed: count(RecordStatus::Failed),
            skipped: count(RecordStatus::Skipped),
            duration_ms,
            outcomes,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Outcomes for one collection, in posting order
    pub fn for_collection(&self, collection: Collection) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes
            .iter()
            .filter(move |o| o.collection == collection)
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} | Created: {} | Failed: {} | Skipped: {} | Duration: {}ms",
            self.total, self.created, self.failed, self.skipped, self.duration_ms
        )
    }
}
