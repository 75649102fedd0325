#[cfg(test)]
#[path = "clipboard_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::Message;

/// Keeps one clipboard handle alive for the life of the worker. Some
/// platforms drop copied text when the handle that set it goes away.
pub struct ClipboardService {
    clipboard: Option<arboard::Clipboard>,
}

impl Default for ClipboardService {
    fn default() -> ClipboardService {
        return ClipboardService::new();
    }
}

impl ClipboardService {
    pub fn new() -> ClipboardService {
        let clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::warn!(err = ?err, "Clipboard service is unable to start");
                None
            }
        };

        return ClipboardService { clipboard };
    }

    pub fn set(&mut self, text: String) -> Result<()> {
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(text)?;
            return Ok(());
        }

        bail!("The clipboard isn't available on this system.");
    }

    pub fn format_messages(messages: &[Message]) -> String {
        if messages.len() == 1 {
            return messages[0].text.to_string();
        }

        return messages
            .iter()
            .map(|message| {
                return format!("{}: {}", message.author.to_string(), message.text);
            })
            .collect::<Vec<String>>()
            .join("\n\n");
    }
}
