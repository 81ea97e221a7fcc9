#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use crate::domain::models::Message;

/// Rendered conversation lines, cached per message. Messages are immutable,
/// so entries only go stale when the width changes.
#[derive(Default)]
pub struct BubbleList {
    cache: Vec<Vec<Line<'static>>>,
    line_width: usize,
    lines_len: usize,
}

impl BubbleList {
    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width || self.cache.len() > messages.len() {
            self.cache.clear();
            self.line_width = line_width;
        }

        for message in messages.iter().skip(self.cache.len()) {
            let mut lines = Bubble::new(message, line_width).as_lines();
            // Breathing room between bubbles.
            lines.push(Line::default());
            self.cache.push(lines);
        }

        self.lines_len = self.cache.iter().map(|lines| return lines.len()).sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn is_empty(&self) -> bool {
        return self.lines_len == 0;
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect, scroll: usize, trailing: Vec<Line<'static>>) {
        let mut lines: Vec<Line<'static>> = self.cache.iter().flatten().cloned().collect();
        lines.extend(trailing);

        frame.render_widget(
            Paragraph::new(lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
            rect,
        );
    }
}
