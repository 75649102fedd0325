use std::path::PathBuf;

use super::Message;

pub enum Action {
    CopyMessages(Vec<Message>),
    FinishInterview(),
    Reset(),
    SubmitAnswer(String),
    SubmitDocument(PathBuf),
}
