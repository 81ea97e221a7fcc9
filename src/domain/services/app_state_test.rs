use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::AppState;
use super::SubmitOutcome;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::DEFAULT_MOBILE_BREAKPOINT_PX;
use crate::domain::models::EXCHANGE_ERROR_REPLY;
use crate::domain::models::MISSING_OUTPUT_REPLY;

impl Default for AppState {
    fn default() -> AppState {
        let mut app_state = AppState::new(DEFAULT_MOBILE_BREAKPOINT_PX);
        app_state.set_rect(Rect::new(0, 0, 40, 10));
        return app_state;
    }
}

fn type_draft(app_state: &mut AppState, text: &str) {
    app_state.draft.insert_str(text);
}

mod submit {
    use super::*;

    #[test]
    fn it_ignores_whitespace() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        type_draft(&mut app_state, "   ");
        app_state.draft.insert_newline();
        type_draft(&mut app_state, " ");

        assert_eq!(app_state.submit(&tx)?, SubmitOutcome::Ignored);
        assert!(app_state.messages.is_empty());
        assert!(!app_state.waiting_for_reply);
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_sends_the_trimmed_message() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        type_draft(&mut app_state, "  Do you have blazers in navy?  ");

        assert_eq!(app_state.submit(&tx)?, SubmitOutcome::Sent);
        assert_eq!(app_state.messages.len(), 1);
        assert_eq!(app_state.messages[0].author, Author::User);
        assert_eq!(app_state.messages[0].text, "Do you have blazers in navy?");
        assert!(app_state.waiting_for_reply);
        assert_eq!(app_state.draft.lines(), [""]);
        assert_eq!(
            rx.try_recv()?,
            Action::WebhookRequest("Do you have blazers in navy?".to_string())
        );

        return Ok(());
    }

    #[test]
    fn it_rejects_while_waiting_for_a_reply() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        type_draft(&mut app_state, "first");
        assert_eq!(app_state.submit(&tx)?, SubmitOutcome::Sent);

        type_draft(&mut app_state, "second");
        assert_eq!(app_state.submit(&tx)?, SubmitOutcome::Rejected);

        assert_eq!(app_state.messages.len(), 1);
        assert_eq!(app_state.draft.lines(), ["second"]);
        assert_eq!(rx.try_recv()?, Action::WebhookRequest("first".to_string()));
        assert!(rx.try_recv().is_err());

        return Ok(());
    }
}

mod handle_reply {
    use super::*;

    #[test]
    fn it_grows_by_two_per_turn() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        type_draft(&mut app_state, "hello");
        app_state.submit(&tx)?;
        app_state.handle_reply(Message::new(Author::Assistant, MISSING_OUTPUT_REPLY));
        assert_eq!(app_state.messages.len(), 2);

        type_draft(&mut app_state, "are you there?");
        app_state.submit(&tx)?;
        app_state.handle_reply(Message::new(Author::Assistant, EXCHANGE_ERROR_REPLY));
        assert_eq!(app_state.messages.len(), 4);

        let authors: Vec<Author> = app_state.messages.iter().map(|m| return m.author).collect();
        assert_eq!(
            authors,
            vec![Author::User, Author::Assistant, Author::User, Author::Assistant]
        );

        return Ok(());
    }

    #[test]
    fn it_clears_waiting_after_a_failure() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        type_draft(&mut app_state, "hello");
        app_state.submit(&tx)?;

        app_state.handle_reply(Message::new(Author::Assistant, EXCHANGE_ERROR_REPLY));

        assert!(!app_state.waiting_for_reply);
        assert_eq!(app_state.messages[1].text, EXCHANGE_ERROR_REPLY);
        assert!(app_state.trailing_lines().is_empty());

        return Ok(());
    }
}

mod scrolling {
    use super::*;

    #[test]
    fn it_follows_the_latest_message() {
        let mut app_state = AppState::default();
        for idx in 0..6 {
            app_state.add_message(Message::new(Author::Assistant, &format!("reply {idx}")));
        }

        // Three bubble lines and a spacer per message.
        assert_eq!(app_state.bubble_list.len(), 24);
        assert_eq!(app_state.scroll.position, 24 - 10);
    }

    #[test]
    fn it_makes_room_for_the_typing_indicator() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        for idx in 0..5 {
            app_state.add_message(Message::new(Author::Assistant, &format!("reply {idx}")));
        }

        type_draft(&mut app_state, "one more");
        app_state.submit(&tx)?;

        assert_eq!(app_state.trailing_lines().len(), 3);
        assert_eq!(app_state.scroll.position, 24 + 3 - 10);

        return Ok(());
    }

    #[test]
    fn it_only_animates_while_waiting() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        app_state.tick();
        assert_eq!(app_state.typing.dots(), "●··");

        type_draft(&mut app_state, "hi");
        app_state.submit(&tx)?;
        app_state.tick();
        assert_eq!(app_state.typing.dots(), "·●·");

        return Ok(());
    }
}
