use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub const INPUT_PLACEHOLDER: &str = "Type your message...";

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Plain)
                .padding(Padding::new(1, 1, 0, 0)),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        return textarea;
    }
}
