use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry of the interview transcript. Turns are never edited once
/// they have been appended to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: &str) -> Turn {
        return Turn {
            role: Role::User,
            content: content.to_string(),
        };
    }

    pub fn assistant(content: &str) -> Turn {
        return Turn {
            role: Role::Assistant,
            content: content.to_string(),
        };
    }
}
