mod action;
mod author;
mod backend;
mod document;
mod event;
mod loading;
mod message;
mod session;
mod slash_commands;
mod textarea;
mod turn;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use document::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use session::*;
pub use slash_commands::*;
pub use textarea::*;
pub use turn::*;
