#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

use std::path::Path;

use anyhow::bail;
use anyhow::Result;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DocumentKind {
    Pptx,
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Only the extension is looked at. Whether the bytes are actually a deck
    /// is for the backend to find out.
    pub fn from_path(path: &Path) -> Option<DocumentKind> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        return DocumentKind::iter().find(|kind| return kind.to_string() == extension);
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            DocumentKind::Pptx => {
                return "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            DocumentKind::Pdf => return "application/pdf",
            DocumentKind::Docx => {
                return "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// "PPTX, PDF, DOCX"
    pub fn accepted() -> String {
        return DocumentKind::iter()
            .map(|kind| return kind.to_string().to_uppercase())
            .collect::<Vec<String>>()
            .join(", ");
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: &str, kind: DocumentKind, bytes: Vec<u8>) -> Document {
        return Document {
            name: name.to_string(),
            kind,
            bytes,
        };
    }

    pub async fn load(path: &Path) -> Result<Document> {
        let kind = match DocumentKind::from_path(path) {
            Some(kind) => kind,
            None => bail!(format!(
                "{} is not a supported pitch deck. Choose a {} file.",
                path.display(),
                DocumentKind::accepted()
            )),
        };

        if !path.is_file() {
            bail!(format!("No file found at {}", path.display()));
        }

        let bytes = fs::read(path).await?;
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => format!("deck.{kind}"),
        };

        tracing::debug!(name = name, kind = %kind, size = bytes.len(), "Loaded document");

        return Ok(Document::new(&name, kind, bytes));
    }

    pub fn content_type(&self) -> &'static str {
        return self.kind.content_type();
    }
}
