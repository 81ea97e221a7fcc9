use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

const FRAMES: [&str; 3] = ["●··", "·●·", "··●"];

/// Animated dots shown in place of the reply while a message is in flight.
#[derive(Default)]
pub struct TypingIndicator {
    frame: usize,
}

impl TypingIndicator {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn dots(&self) -> &'static str {
        return FRAMES[self.frame];
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let style = Style::default().fg(Color::Gray);
        return vec![
            Line::from(Span::styled("╭─────╮", style)),
            Line::from(Span::styled(format!("│ {} │", self.dots()), style)),
            Line::from(Span::styled("╰─────╯", style)),
        ];
    }
}
