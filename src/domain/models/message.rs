#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::Author;

/// A single entry in the conversation. Messages are never edited after they
/// are created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            timestamp: Utc::now(),
        };
    }

    pub fn is_from_user(&self) -> bool {
        return self.author == Author::User;
    }

    /// Word wraps the text to `line_max_width` terminal columns. Words wider
    /// than the line are split across lines.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let width = line_max_width.max(1);
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push("".to_string());
                continue;
            }

            let mut current_line = String::new();
            let mut line_width = 0;

            for word in full_line.split_whitespace() {
                let mut word = word.to_string();
                while word.width() > width {
                    if line_width > 0 {
                        lines.push(current_line);
                        current_line = String::new();
                        line_width = 0;
                    }
                    let (head, tail) = split_at_width(&word, width);
                    lines.push(head);
                    word = tail;
                }

                if word.is_empty() {
                    continue;
                }

                let word_width = word.width();
                if line_width == 0 {
                    current_line = word;
                    line_width = word_width;
                } else if line_width + 1 + word_width > width {
                    lines.push(current_line);
                    current_line = word;
                    line_width = word_width;
                } else {
                    current_line.push(' ');
                    current_line.push_str(&word);
                    line_width += 1 + word_width;
                }
            }

            if !current_line.is_empty() {
                lines.push(current_line);
            }
        }

        return lines;
    }
}

/// Splits off the longest prefix that fits in `width` columns. The prefix
/// always holds at least one character.
fn split_at_width(word: &str, width: usize) -> (String, String) {
    let mut taken = 0;
    let mut split = 0;
    for (idx, letter) in word.char_indices() {
        let letter_width = letter.width().unwrap_or(0);
        if idx > 0 && taken + letter_width > width {
            break;
        }
        taken += letter_width;
        split = idx + letter.len_utf8();
    }

    return (word[..split].to_string(), word[split..].to_string());
}
