//! Plain-text rendering of the chat transcript

use crate::core::message::{Message, TranscriptRole};

const USER_PREFIX: &str = "You: ";
const ERROR_PREFIX: &str = "❌ ";

/// Lines for one turn, followed by a blank spacer line.
pub fn render_message(message: &Message) -> Vec<String> {
    let mut lines = Vec::new();
    let prefix = match message.role {
        TranscriptRole::User => USER_PREFIX,
        TranscriptRole::Assistant => "",
        TranscriptRole::AppError => ERROR_PREFIX,
    };
    let continuation = " ".repeat(prefix.chars().count());

    if message.content.is_empty() {
        lines.push(prefix.trim_end().to_string());
    }
    for (index, line) in message.content.lines().enumerate() {
        let lead = if index == 0 { prefix } else { continuation.as_str() };
        if line.trim().is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{lead}{line}"));
        }
    }

    lines.push(String::new());
    lines
}

/// Every stored turn in its original order.
pub fn render_transcript(messages: &[Message]) -> Vec<String> {
    messages.iter().flat_map(render_message).collect()
}
