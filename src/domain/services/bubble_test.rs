use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Author;
use crate::domain::models::Message;

fn lines_to_strings(lines: Vec<Line>) -> Vec<String> {
    return lines
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
fn it_aligns_assistant_messages_left() {
    let message = Message::new(Author::Assistant, "Hi there!");
    let bubble = Bubble::new(&message, 40);
    assert_eq!(bubble.alignment(), BubbleAlignment::Left);

    insta::assert_snapshot!(lines_to_strings(bubble.as_lines()).join("\n"), @r###"
    ╭Fashion Assistant──╮
    │ Hi there!         │
    ╰───────────────────╯
    "###);
}

#[test]
fn it_aligns_user_messages_right() {
    let message = Message::new(Author::User, "Do you have the blazer in navy?");
    let bubble = Bubble::new(&message, 40);
    assert_eq!(bubble.alignment(), BubbleAlignment::Right);

    let padding = " ".repeat(11);
    assert_eq!(
        lines_to_strings(bubble.as_lines()),
        vec![
            format!("{padding}╭You{}╮", "─".repeat(24)),
            format!("{padding}│ Do you have the blazer in │"),
            format!("{padding}│ navy?                     │"),
            format!("{padding}╰{}╯", "─".repeat(27)),
        ]
    );
}

#[test]
fn it_fits_every_line_in_the_window() {
    let message = Message::new(
        Author::Assistant,
        "Our Classic Coat is cut from a wool blend and pairs beautifully with the Tailored Pants for a polished silhouette.",
    );
    let lines = lines_to_strings(Bubble::new(&message, 30).as_lines());

    assert!(lines.len() > 3);
    for line in lines {
        assert!(line.chars().count() <= 30);
    }
}

#[test]
fn it_keeps_borders_aligned_for_wide_characters() {
    let message = Message::new(
        Author::Assistant,
        "你好！需要帮助吗？ The 👗 Evening Gown runs true to size, 我们有S、M、L三个尺码。",
    );
    let lines = lines_to_strings(Bubble::new(&message, 30).as_lines());

    assert!(lines.len() > 3);
    let first_width = lines[0].width();
    for line in lines.iter() {
        assert_eq!(line.width(), first_width, "ragged line: {line}");
        assert!(line.width() <= 30);
    }
}
