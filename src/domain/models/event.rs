use tui_textarea::Input;

use super::Message;
use super::Session;

pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    Notice(Message),
    SessionFailed(Session, String),
    SessionUpdated(Session),
    UIResize(),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UITick(),
}
