use ratatui::style::Color;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

fn create_lines(message: &Message, alignment: BubbleAlignment, width: usize) -> Vec<String> {
    return Bubble::new(message, alignment, width)
        .as_lines()
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<Vec<String>>()
                .join("");
        })
        .collect();
}

#[test]
fn it_creates_left_aligned_bubbles() {
    let message = Message::new(Author::Angel, "Hi there!");
    let lines = create_lines(&message, BubbleAlignment::Left, 30);

    let pad = " ".repeat(16);
    assert_eq!(
        lines,
        vec![
            format!("╭Angel──────╮{pad}"),
            format!("│ Hi there! │{pad}"),
            format!("╰───────────╯{pad}"),
        ]
    );
}

#[test]
fn it_creates_right_aligned_bubbles() {
    let message = Message::new(Author::Investor, "Why now?");
    let lines = create_lines(&message, BubbleAlignment::Right, 30);

    let pad = " ".repeat(30 - 13);
    assert_eq!(
        lines,
        vec![
            format!("{pad}╭Investor──╮"),
            format!("{pad}│ Why now? │"),
            format!("{pad}╰──────────╯"),
        ]
    );
}

#[test]
fn it_wraps_long_messages() {
    let message = Message::new(
        Author::Investor,
        "What problem do you solve and who pays for it?",
    );
    // 4% of 27 rounds up to 2, leaving 20 columns for text.
    let lines = create_lines(&message, BubbleAlignment::Left, 27);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1].trim_end(), "│ What problem do you │");
    assert_eq!(lines[2].trim_end(), "│ solve and who pays  │");
    assert_eq!(lines[3].trim_end(), "│ for it?             │");
    for line in lines {
        assert_eq!(line.chars().count(), 26);
    }
}

#[test]
fn it_colours_errors_red() {
    let message = Message::new_with_type(Author::Angel, MessageType::Error, "internal error");
    let lines = Bubble::new(&message, BubbleAlignment::Left, 40).as_lines();

    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    assert_eq!(lines[1].spans[1].style.fg, Some(Color::Red));
}

#[test]
fn it_keeps_investor_text_uncoloured() {
    let message = Message::new(Author::Investor, "Why now?");
    let lines = Bubble::new(&message, BubbleAlignment::Left, 40).as_lines();

    assert_eq!(lines[1].spans[1].style.fg, None);
}
