#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::actions::help_text;
use super::BubbleList;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::DocumentKind;
use crate::domain::models::Loading;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Phase;
use crate::domain::models::Session;
use crate::domain::models::SlashCommand;

/// What the terminal shows. The worker owns the real session, this keeps the
/// latest snapshot of it plus whatever is only relevant on screen.
pub struct AppState {
    pub bubble_list: BubbleList,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub loading: Loading,
    pub messages: Vec<Message>,
    pub notice: Option<Message>,
    pub pending_answer: Option<String>,
    pub scroll: Scroll,
    pub session: Session,
    pub waiting_for_backend: bool,
}

impl Default for AppState {
    fn default() -> AppState {
        let mut app_state = AppState {
            bubble_list: BubbleList::default(),
            last_known_height: 0,
            last_known_width: 0,
            loading: Loading::default(),
            messages: vec![],
            notice: None,
            pending_answer: None,
            scroll: Scroll::default(),
            session: Session::default(),
            waiting_for_backend: false,
        };
        app_state.sync_dependants();

        return app_state;
    }
}

impl AppState {
    pub fn phase(&self) -> Phase {
        return self.session.phase();
    }

    pub fn input_title(&self) -> String {
        match self.phase() {
            Phase::NotStarted => {
                return format!(
                    "Path to your pitch deck ({})",
                    DocumentKind::accepted()
                )
            }
            Phase::InProgress => {
                return "Your answer... (/finish to get your review)".to_string()
            }
            Phase::Finished => {
                return "/new to start a new interview, /copy to copy the review".to_string()
            }
        }
    }

    /// Transcript turns followed by the review, if there is one.
    pub fn transcript_messages(&self) -> Vec<Message> {
        let mut messages = self
            .session
            .transcript
            .iter()
            .map(Message::from)
            .collect::<Vec<Message>>();

        if let Some(review) = &self.session.final_review {
            messages.push(Message::new(Author::Investor, review));
        }

        return messages;
    }

    /// Handles a submitted line of input. Returns true when the user asked to
    /// quit.
    pub fn handle_input(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() || self.waiting_for_backend {
            return Ok(false);
        }

        self.notice = None;

        if let Some(command) = SlashCommand::parse(text) {
            if command.is_quit() {
                return Ok(true);
            }

            if command.is_help() {
                self.set_notice(Message::new(Author::Angel, &help_text()));
            } else if command.is_copy() {
                tx.send(Action::CopyMessages(self.transcript_messages()))?;
            } else if command.is_finish() {
                if self.phase() == Phase::InProgress {
                    self.wait_for("Generating your final review...");
                    tx.send(Action::FinishInterview())?;
                } else {
                    self.set_error("There's no interview in progress to finish.");
                }
            } else if command.is_new() {
                if self.phase() == Phase::Finished {
                    self.wait_for("Starting a new interview...");
                    tx.send(Action::Reset())?;
                } else {
                    self.set_error("You can start a new interview once the final review is in.");
                }
            }

            self.sync_dependants();
            return Ok(false);
        }

        match self.phase() {
            Phase::NotStarted => {
                let path = PathBuf::from(text.trim_matches(|c: char| return c == '\'' || c == '"'));
                if DocumentKind::from_path(&path).is_some() {
                    self.wait_for(
                        "Analyzing your pitch deck and preparing the first question...",
                    );
                    tx.send(Action::SubmitDocument(path))?;
                } else {
                    self.set_error(&format!(
                        "{text} is not a supported pitch deck. Choose a {} file.",
                        DocumentKind::accepted()
                    ));
                }
            }
            Phase::InProgress => {
                self.pending_answer = Some(text.to_string());
                self.wait_for("Thinking...");
                tx.send(Action::SubmitAnswer(text.to_string()))?;
            }
            Phase::Finished => {
                self.set_error(
                    "The interview is over. Use /new to start a new interview, or /copy to copy the review.",
                );
            }
        }

        self.sync_dependants();
        self.scroll.last();

        return Ok(false);
    }

    pub fn apply_session(&mut self, session: Session) {
        self.session = session;
        self.pending_answer = None;
        self.waiting_for_backend = false;
        self.sync_dependants();
        self.scroll.last();
    }

    /// The failed action's effects are whatever the snapshot says. For a
    /// failed answer that includes the answer itself.
    pub fn apply_failure(&mut self, session: Session, err: &str) {
        self.session = session;
        self.pending_answer = None;
        self.waiting_for_backend = false;
        self.notice = Some(Message::new_with_type(
            Author::Angel,
            MessageType::Error,
            err,
        ));
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_notice(&mut self, message: Message) {
        self.notice = Some(message);
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn set_error(&mut self, text: &str) {
        self.notice = Some(Message::new_with_type(
            Author::Angel,
            MessageType::Error,
            text,
        ));
    }

    fn wait_for(&mut self, text: &str) {
        self.waiting_for_backend = true;
        self.loading = Loading::new(text);
    }

    fn sync_dependants(&mut self) {
        let mut messages = vec![];
        if self.phase() == Phase::NotStarted {
            messages.push(Message::new(
                Author::Angel,
                &format!(
                    "Upload your pitch deck to start the interview process. Enter the path to a {} file below.",
                    DocumentKind::accepted()
                ),
            ));
        }
        messages.extend(self.transcript_messages());
        if let Some(answer) = &self.pending_answer {
            messages.push(Message::new(Author::User, answer));
        }
        if let Some(notice) = &self.notice {
            messages.push(notice.clone());
        }
        self.messages = messages;

        self.bubble_list
            .set_messages(&self.messages, self.last_known_width as usize);

        self.scroll.set_state(
            self.bubble_list.len().try_into().unwrap_or(u16::MAX),
            self.last_known_height,
        );
    }
}
