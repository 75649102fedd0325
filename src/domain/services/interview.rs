#[cfg(test)]
#[path = "interview_test.rs"]
mod tests;

use thiserror::Error;

use crate::domain::models::BackendBox;
use crate::domain::models::BackendError;
use crate::domain::models::Document;
use crate::domain::models::Phase;
use crate::domain::models::Session;
use crate::domain::models::Turn;

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("{operation} is not available while the interview is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Drives a `Session` through upload, question and answer turns, and the
/// final review. Holds no interview state of its own; every call is handed
/// the session it works on.
pub struct InterviewService {
    backend: BackendBox,
}

impl InterviewService {
    pub fn new(backend: BackendBox) -> InterviewService {
        return InterviewService { backend };
    }

    fn expect_phase(
        session: &Session,
        operation: &'static str,
        expected: Phase,
    ) -> Result<(), InterviewError> {
        let phase = session.phase();
        if phase != expected {
            return Err(InterviewError::InvalidPhase { operation, phase });
        }

        return Ok(());
    }

    pub async fn submit_document(
        &self,
        session: &mut Session,
        document: Document,
    ) -> Result<(), InterviewError> {
        InterviewService::expect_phase(session, "Uploading a pitch deck", Phase::NotStarted)?;

        tracing::debug!(name = document.name, "Submitting pitch deck");
        let question = self.backend.upload(document).await?;

        session.transcript.push(Turn::assistant(&question));
        session.started = true;

        return Ok(());
    }

    /// The answer is recorded before the backend is asked for the next
    /// question, and stays in the transcript if that request fails.
    pub async fn submit_answer(
        &self,
        session: &mut Session,
        answer: &str,
    ) -> Result<(), InterviewError> {
        InterviewService::expect_phase(session, "Answering", Phase::InProgress)?;

        session.transcript.push(Turn::user(answer));
        let question = self.backend.continue_interview(answer).await?;
        session.transcript.push(Turn::assistant(&question));

        return Ok(());
    }

    pub async fn finish_interview(&self, session: &mut Session) -> Result<(), InterviewError> {
        InterviewService::expect_phase(session, "Finishing the interview", Phase::InProgress)?;

        let review = self.backend.finish().await?;
        session.final_review = Some(review);
        session.finished = true;

        return Ok(());
    }

    pub fn reset(session: &mut Session) {
        tracing::debug!(phase = %session.phase(), "Resetting interview");
        session.reset();
    }
}
