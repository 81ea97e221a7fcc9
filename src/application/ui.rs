#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::WidgetLayout;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Storefront;

const PANEL_TITLE: &str = "Classic Mode";
const PANEL_SUBTITLE: &str = "Fashion Assistant";
const WELCOME_TITLE: &str = "Welcome to Classic Mode";
const WELCOME_SUBTITLE: &str = "How can we assist you today?";

/// Holds the terminal in raw mode with mouse capture for as long as it lives.
struct TerminalGuard {}

impl TerminalGuard {
    fn acquire() -> Result<TerminalGuard> {
        enable_raw_mode()?;
        let guard = TerminalGuard {};
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        return Ok(guard);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        destruct_terminal_for_panic();
    }
}

fn render_toggle(frame: &mut Frame, rect: Rect) {
    frame.render_widget(
        Paragraph::new("Chat")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            ),
        rect,
    );
}

fn render_welcome(frame: &mut Frame, rect: Rect) {
    let mut lines = vec![Line::default(); usize::from(rect.height.saturating_sub(2) / 2)];
    lines.push(Line::from(Span::styled(
        WELCOME_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        WELCOME_SUBTITLE,
        Style::default().fg(Color::Gray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn render_panel(frame: &mut Frame, app_state: &mut AppState) {
    let panel = app_state.shell.panel_rect();
    let mut border_type = BorderType::Rounded;
    if app_state.shell.layout() == WidgetLayout::FullScreen {
        border_type = BorderType::Plain;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .title(Span::styled(
            format!(" {PANEL_TITLE} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(panel);

    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);
    frame.render_widget(Paragraph::new("[x]"), app_state.shell.close_button_rect());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            PANEL_SUBTITLE,
            Style::default().fg(Color::Gray),
        ))
        .block(Block::default().borders(Borders::BOTTOM)),
        layout[0],
    );

    let conversation = layout[1].inner(&Margin {
        vertical: 0,
        horizontal: 1,
    });
    if conversation.width != app_state.last_known_width
        || conversation.height != app_state.last_known_height
    {
        app_state.set_rect(conversation);
    }

    if app_state.messages.is_empty() && !app_state.waiting_for_reply {
        render_welcome(frame, conversation);
    } else {
        app_state.bubble_list.render(
            frame,
            conversation,
            app_state.scroll.position,
            app_state.trailing_lines(),
        );
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            layout[1],
            &mut app_state.scroll.scrollbar_state,
        );
    }

    if app_state.waiting_for_reply {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{PANEL_SUBTITLE} is typing..."),
                Style::default().fg(Color::DarkGray),
            ))
            .block(Block::default().borders(Borders::TOP)),
            layout[2],
        );
    } else {
        frame.render_widget(app_state.draft.widget(), layout[2]);
    }
}

fn render(frame: &mut Frame, app_state: &mut AppState) {
    let viewport = frame.size();
    if viewport != app_state.shell.viewport() {
        app_state.shell.resize(viewport);
    }

    Storefront::render(frame, viewport);
    render_toggle(frame, app_state.shell.toggle_rect());

    if app_state.shell.is_open() {
        render_panel(frame, app_state);
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    events: &mut EventsService,
    tx: mpsc::UnboundedSender<Action>,
) -> Result<()> {
    #[cfg(feature = "dev")]
    {
        app_state.shell.open();
        app_state
            .draft
            .insert_str("Do you have the Classic Blazer in navy, and how does it fit?");
    }

    loop {
        terminal.draw(|frame| {
            render(frame, app_state);
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEsc() => {
                app_state.shell.close();
            }
            Event::KeyboardEnter() => {
                if !app_state.shell.is_open() {
                    app_state.shell.open();
                    continue;
                }

                app_state.submit(&tx)?;
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.shell.is_open() {
                    match input {
                        Input {
                            key: Key::Char('c'),
                            ..
                        } => {
                            app_state.shell.open();
                        }
                        Input {
                            key: Key::Char('q'),
                            ..
                        } => {
                            break;
                        }
                        _ => (),
                    }
                    continue;
                }

                if !app_state.waiting_for_reply {
                    app_state.draft.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if app_state.shell.is_open() && !app_state.waiting_for_reply {
                    app_state.draft.insert_str(text);
                }
            }
            Event::MouseDown(column, row) => {
                app_state.shell.handle_mouse_down(column, row);
            }
            Event::UIResize(width, height) => {
                app_state.shell.resize(Rect::new(0, 0, width, height));
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UITick() => {
                app_state.tick();
            }
            Event::WebhookReply(message) => {
                app_state.handle_reply(message);
            }
        }
    }

    return Ok(());
}

/// Restores the terminal. Safe to call more than once, and from a panic hook.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    );
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let breakpoint_px = u32::try_from(Config::get_u64(ConfigKey::MobileBreakpoint)?)?;

    let _guard = TerminalGuard::acquire()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app_state = AppState::new(breakpoint_px);
    let mut events = EventsService::new(event_rx);

    start_loop(&mut terminal, &mut app_state, &mut events, tx).await?;
    terminal.show_cursor()?;

    return Ok(());
}
