#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    message: &'a Message,
    alignment: BubbleAlignment,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            message,
            alignment,
            window_max_width,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = (self.window_max_width as f32 * 0.04).ceil() as usize;

        // left border + left padding + (text, not counted) + right padding + right
        // border + scrollbar. And then minimum bubble padding.
        let line_border_width = 5 + min_bubble_padding_length;

        let message_lines = self.message.as_string_lines(
            self.window_max_width
                .saturating_sub(line_border_width)
                .max(1),
        );

        let username = self.message.author.to_string();
        let username_length = username.chars().count();
        let max_line_length = message_lines
            .iter()
            .map(|line| return line.chars().count())
            .max()
            .unwrap_or(0)
            .max(username_length);

        // Bubbles are max_line_length + 4 wide, one column stays free for the
        // scrollbar.
        let bubble_padding = " ".repeat(
            self.window_max_width
                .saturating_sub(max_line_length + 5),
        );

        let top_bar = format!(
            "╭{username}{}╮",
            "─".repeat(max_line_length + 2 - username_length)
        );
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));

        let mut lines = vec![self.pad(vec![self.highlight_span(top_bar)], &bubble_padding)];
        for line in message_lines {
            let fill = " ".repeat(max_line_length - line.chars().count());
            let spans = vec![
                self.highlight_span("│ ".to_string()),
                self.text_span(line),
                self.highlight_span(format!("{fill} │")),
            ];
            lines.push(self.pad(spans, &bubble_padding));
        }
        lines.push(self.pad(vec![self.highlight_span(bottom_bar)], &bubble_padding));

        return lines;
    }

    fn pad(&self, mut spans: Vec<Span<'static>>, bubble_padding: &str) -> Line<'static> {
        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(bubble_padding.to_string()));
            return Line::from(spans);
        }

        let mut res = vec![Span::from(bubble_padding.to_string())];
        res.extend(spans);
        return Line::from(res);
    }

    fn style(&self) -> Option<Style> {
        if self.message.message_type() == MessageType::Error {
            return Some(Style {
                fg: Some(Color::Red),
                ..Style::default()
            });
        }
        if self.message.author == Author::Angel {
            return Some(Style {
                fg: Some(Color::Rgb(201, 162, 39)), // Halo gold
                ..Style::default()
            });
        }

        return None;
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if let Some(style) = self.style() {
            return Span::styled(text, style);
        }

        return Span::from(text);
    }

    /// Investor and user text keeps the terminal's colours, notices are tinted
    /// all the way through.
    fn text_span(&self, text: String) -> Span<'static> {
        if self.message.author == Author::Angel {
            return self.highlight_span(text);
        }

        return Span::from(text);
    }
}
