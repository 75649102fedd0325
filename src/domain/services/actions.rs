#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::path::Path;

use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use super::InterviewService;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendBox;
use crate::domain::models::Document;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Session;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /finish (/f) - Ends the interview and asks the investor for a final review.
- /new (/n) - Starts a new interview once the final review is in.
- /copy (/c) - Copies the interview transcript and review to your clipboard.
- /quit /exit (/q) - Exit Angel.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit.

INTERVIEW:
Start by entering the path to your pitch deck (PPTX, PDF, or DOCX). The investor reads it and asks a first question. Answer each question and press Enter to get the next one. When you're ready, use /finish to receive the final investment review.
        "#;

    return text.trim().to_string();
}

async fn submit_document(
    interview: &InterviewService,
    session: &mut Session,
    path: &Path,
) -> Result<()> {
    let document = Document::load(path).await?;
    interview.submit_document(session, document).await?;

    return Ok(());
}

/// Tells the UI how the session looks after an interview action. Failures
/// are never fatal to the worker, they end up in front of the user instead.
fn report<E: Into<anyhow::Error>>(
    tx: &mpsc::UnboundedSender<Event>,
    session: &Session,
    res: Result<(), E>,
) -> Result<()> {
    match res {
        Ok(()) => {
            tx.send(Event::SessionUpdated(session.clone()))?;
        }
        Err(err) => {
            let err: anyhow::Error = err.into();
            tracing::error!(error = ?err, phase = %session.phase(), "Interview action failed");
            tx.send(Event::SessionFailed(session.clone(), err.to_string()))?;
        }
    }

    return Ok(());
}

fn copy_messages(
    clipboard: &mut ClipboardService,
    messages: Vec<Message>,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    if messages.is_empty() {
        tx.send(Event::Notice(Message::new(
            Author::Angel,
            "There's nothing to copy yet.",
        )))?;
        return Ok(());
    }

    let formatted = ClipboardService::format_messages(&messages);
    if let Err(err) = clipboard.set(formatted) {
        tx.send(Event::Notice(Message::new_with_type(
            Author::Angel,
            MessageType::Error,
            &format!("Failed to copy to your clipboard: {err}"),
        )))?;
        return Ok(());
    }

    tx.send(Event::Notice(Message::new(
        Author::Angel,
        "Copied the interview to your clipboard.",
    )))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Owns the interview session and runs one action at a time until the UI
    /// hangs up.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let interview = InterviewService::new(backend);
        let mut session = Session::default();
        let mut clipboard = ClipboardService::default();

        while let Some(action) = rx.recv().await {
            match action {
                Action::SubmitDocument(path) => {
                    let res = submit_document(&interview, &mut session, &path).await;
                    report(&tx, &session, res)?;
                }
                Action::SubmitAnswer(answer) => {
                    let res = interview.submit_answer(&mut session, &answer).await;
                    report(&tx, &session, res)?;
                }
                Action::FinishInterview() => {
                    let res = interview.finish_interview(&mut session).await;
                    report(&tx, &session, res)?;
                }
                Action::Reset() => {
                    InterviewService::reset(&mut session);
                    tx.send(Event::SessionUpdated(session.clone()))?;
                }
                Action::CopyMessages(messages) => {
                    copy_messages(&mut clipboard, messages, &tx)?;
                }
            }
        }

        return Ok(());
    }
}
