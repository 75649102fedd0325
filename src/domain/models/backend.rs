#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use async_trait::async_trait;
use thiserror::Error;

use super::Document;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend could not be reached, or replied with something that isn't
    /// the expected JSON.
    #[error("Could not connect to the backend. Make sure it's running. Error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. The body is shown to
    /// the user as is.
    #[error("{body}")]
    Server { status: u16, body: String },
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;

#[async_trait]
pub trait Backend {
    /// Sends the pitch deck for analysis. Returns the investor's opening
    /// question.
    async fn upload(&self, document: Document) -> Result<String, BackendError>;

    /// Sends the founder's latest answer. Returns the next question.
    async fn continue_interview(&self, answer: &str) -> Result<String, BackendError>;

    /// Ends the interview on the backend and returns the final review.
    async fn finish(&self) -> Result<String, BackendError>;
}
