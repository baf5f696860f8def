//! Trait abstraction for the submit sink to enable mocking in tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::validation::FormValues;

/// A validated payload handed to the sink, stamped at submission time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            submitted_at: Utc::now(),
        }
    }
}

/// Errors a sink can report back to the form
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Destination for validated form payloads.
///
/// The form never calls this while invalid; suppression happens by
/// disabling the submit control, not by checks inside the sink.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitSink: Send + Sync {
    /// Receive one validated submission
    async fn submit(&mut self, submission: &Submission) -> Result<(), SubmitError>;
}
