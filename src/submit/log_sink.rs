//! Logging submit sink
//!
//! The default external collaborator: serializes the validated payload to a
//! single JSON object and emits it through tracing. Stands in for whatever
//! the surrounding application would do with the data (API call,
//! navigation, ...).

use async_trait::async_trait;

use super::traits::{Submission, SubmitError, SubmitSink};

pub struct LogSink;

#[async_trait]
impl SubmitSink for LogSink {
    async fn submit(&mut self, submission: &Submission) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(&submission.values)?;
        tracing::info!(
            %payload,
            submitted_at = %submission.submitted_at.to_rfc3339(),
            "form submitted"
        );
        Ok(())
    }
}
