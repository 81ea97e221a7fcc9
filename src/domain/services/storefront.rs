#[cfg(test)]
#[path = "storefront_test.rs"]
mod tests;

use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use crate::domain::models::columns_to_px;
use crate::domain::models::featured_products;
use crate::domain::models::product_grid_columns;
use crate::domain::models::Product;
use crate::domain::models::COLLECTION_DESCRIPTION;
use crate::domain::models::COLLECTION_TITLE;
use crate::domain::models::HERO_CTA;
use crate::domain::models::HERO_TAGLINE;
use crate::domain::models::HERO_TITLE;

const HERO_HEIGHT: u16 = 7;
const COLLECTION_HEIGHT: u16 = 5;
const CARD_HEIGHT: u16 = 4;

/// The static page sitting behind the chat widget.
pub struct Storefront {}

impl Storefront {
    pub fn render(frame: &mut Frame, rect: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(HERO_HEIGHT),
                Constraint::Length(COLLECTION_HEIGHT),
                Constraint::Min(0),
            ])
            .split(rect);

        Storefront::render_hero(frame, layout[0]);
        Storefront::render_collection(frame, layout[1]);
        Storefront::render_grid(frame, layout[2]);
    }

    fn render_hero(frame: &mut Frame, rect: Rect) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                HERO_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(HERO_TAGLINE),
            Line::default(),
            Line::from(Span::styled(
                format!("[ {HERO_CTA} ]"),
                Style::default().fg(Color::Black).bg(Color::White),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::BOTTOM)),
            rect,
        );
    }

    fn render_collection(frame: &mut Frame, rect: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                COLLECTION_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                COLLECTION_DESCRIPTION,
                Style::default().fg(Color::Gray),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().padding(Padding::new(0, 0, 1, 0))),
            rect,
        );
    }

    fn render_grid(frame: &mut Frame, rect: Rect) {
        let columns = product_grid_columns(columns_to_px(rect.width));
        let products = featured_products();
        let rows: Vec<&[Product]> = products.chunks(columns).collect();

        let row_rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                rows.iter()
                    .map(|_| return Constraint::Length(CARD_HEIGHT))
                    .chain([Constraint::Min(0)]),
            )
            .split(rect);

        for (row, row_rect) in rows.iter().zip(row_rects.iter()) {
            let card_rects = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_rect);

            for (product, card_rect) in row.iter().zip(card_rects.iter()) {
                Storefront::render_card(frame, *card_rect, product);
            }
        }
    }

    fn render_card(frame: &mut Frame, rect: Rect, product: &Product) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" No. {:02} ", product.id))
            .padding(Padding::new(1, 1, 0, 0));

        let inner_width = usize::from(block.inner(rect).width);
        let used = product.name.chars().count() + product.price.chars().count();
        let gap = " ".repeat(inner_width.saturating_sub(used).max(1));

        let lines = vec![
            Line::from(vec![
                Span::styled(product.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::from(gap),
                Span::from(product.price),
            ]),
            Line::from(Span::styled(
                product.image,
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
