#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Scroll;
use super::WidgetShell;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::TextArea;
use crate::domain::models::TypingIndicator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was empty or whitespace.
    Ignored,
    /// A reply is still pending, so nothing was sent.
    Rejected,
    Sent,
}

/// Everything the chat widget shows. Owned by the UI loop for the lifetime of
/// the process; nothing here is persisted.
pub struct AppState {
    pub bubble_list: BubbleList,
    pub draft: tui_textarea::TextArea<'static>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub messages: Vec<Message>,
    pub scroll: Scroll,
    pub shell: WidgetShell,
    pub typing: TypingIndicator,
    pub waiting_for_reply: bool,
}

impl AppState {
    pub fn new(breakpoint_px: u32) -> AppState {
        return AppState {
            bubble_list: BubbleList::default(),
            draft: TextArea::default(),
            last_known_height: 0,
            last_known_width: 0,
            messages: vec![],
            scroll: Scroll::default(),
            shell: WidgetShell::new(breakpoint_px),
            typing: TypingIndicator::default(),
            waiting_for_reply: false,
        };
    }

    /// Sends the current draft. At most one message is in flight at a time.
    pub fn submit(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<SubmitOutcome> {
        let text = self.draft.lines().join("\n");
        let text = text.trim();
        if text.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }
        if self.waiting_for_reply {
            tracing::debug!("Submit rejected, a reply is still pending");
            return Ok(SubmitOutcome::Rejected);
        }

        self.draft = TextArea::default();
        self.waiting_for_reply = true;
        self.add_message(Message::new(Author::User, text));

        tx.send(Action::WebhookRequest(text.to_string()))?;

        return Ok(SubmitOutcome::Sent);
    }

    pub fn handle_reply(&mut self, message: Message) {
        self.waiting_for_reply = false;
        self.add_message(message);
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn tick(&mut self) {
        if self.waiting_for_reply {
            self.typing.tick();
        }
    }

    /// Lines drawn after the last bubble.
    pub fn trailing_lines(&self) -> Vec<Line<'static>> {
        if self.waiting_for_reply {
            return self.typing.as_lines();
        }

        return vec![];
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, usize::from(self.last_known_width));

        self.scroll.set_state(
            self.bubble_list.len() + self.trailing_lines().len(),
            usize::from(self.last_known_height),
        );

        if self.waiting_for_reply {
            self.scroll.last();
        }
    }
}
