#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::domain::models::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

/// Bubbles never grow wider than this share of the conversation width.
const MAX_WIDTH_PERCENTAGE: usize = 80;
/// Left border and padding plus right padding and border.
const BORDER_ELEMENTS_LENGTH: usize = 4;

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, window_max_width: usize) -> Bubble<'a> {
        let mut alignment = BubbleAlignment::Left;
        if message.is_from_user() {
            alignment = BubbleAlignment::Right;
        }

        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn alignment(&self) -> BubbleAlignment {
        return self.alignment;
    }

    fn max_text_width(&self) -> usize {
        let bubble_width = self.window_max_width * MAX_WIDTH_PERCENTAGE / 100;
        return bubble_width.saturating_sub(BORDER_ELEMENTS_LENGTH).max(1);
    }

    fn style(&self) -> Style {
        if self.alignment == BubbleAlignment::Right {
            return Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD);
        }

        return Style::default().fg(Color::Gray);
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let text_lines = self.message.as_string_lines(self.max_text_width());
        let author = self.message.author.to_string();
        let author_len = author.width();

        let line_len = text_lines
            .iter()
            .map(|line| return line.width())
            .chain([author_len])
            .max()
            .unwrap_or(author_len);

        let mut lines = vec![format!(
            "╭{author}{}╮",
            "─".repeat(line_len + 2 - author_len)
        )];
        for text_line in text_lines.iter() {
            let fill = " ".repeat(line_len.saturating_sub(text_line.width()));
            lines.push(format!("│ {text_line}{fill} │"));
        }
        lines.push(format!("╰{}╯", "─".repeat(line_len + 2)));

        let outer_padding = " ".repeat(
            self.window_max_width
                .saturating_sub(line_len + BORDER_ELEMENTS_LENGTH),
        );
        let style = self.style();

        return lines
            .into_iter()
            .map(|line| {
                if self.alignment == BubbleAlignment::Right {
                    return Line::from(vec![
                        Span::from(outer_padding.to_string()),
                        Span::styled(line, style),
                    ]);
                }

                return Line::from(Span::styled(line, style));
            })
            .collect();
    }
}
