pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod clipboard;
pub mod events;
mod interview;
mod scroll;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use interview::*;
pub use scroll::*;
