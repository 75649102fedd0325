#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Turn;

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

impl Phase {
    pub fn title(&self) -> &'static str {
        match self {
            Phase::NotStarted => return "Upload your pitch deck",
            Phase::InProgress => return "Investor Q&A",
            Phase::Finished => return "Final Investment Review",
        }
    }
}

/// Everything a single interview holds. Only lives in memory, and only the
/// interview controller mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub transcript: Vec<Turn>,
    pub started: bool,
    pub finished: bool,
    pub final_review: Option<String>,
}

impl Session {
    pub fn phase(&self) -> Phase {
        if self.finished {
            return Phase::Finished;
        }
        if self.started {
            return Phase::InProgress;
        }

        return Phase::NotStarted;
    }

    pub fn reset(&mut self) {
        *self = Session::default();
    }
}
