use crate::core::session::ChatSession;

pub const HELP_TEXT: &str = "Commands:
  /clear              Start over with an empty history
  /history            Redraw the whole conversation
  /temperature <t>    Set the sampling temperature (0.0 - 2.0)
  /help               Show this help
  /quit, /exit        Leave the chat (Ctrl+D works too)";

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Nothing to do (blank input).
    Ignored,
    /// Print this and keep going.
    Notice(String),
    /// History was reset.
    Cleared,
    /// Re-render the transcript.
    Redraw,
    Quit,
    ProcessAsMessage(String),
}

pub fn process_input(session: &mut ChatSession, input: &str) -> CommandResult {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return CommandResult::Ignored;
    }

    if !trimmed.starts_with('/') {
        return CommandResult::ProcessAsMessage(trimmed.to_string());
    }

    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match command {
        "/clear" => {
            session.clear();
            CommandResult::Cleared
        }
        "/history" => CommandResult::Redraw,
        "/help" => CommandResult::Notice(HELP_TEXT.to_string()),
        "/quit" | "/exit" => CommandResult::Quit,
        "/temperature" | "/temp" => match args.as_slice() {
            [] => CommandResult::Notice(format!(
                "Temperature: {}",
                session.params().temperature
            )),
            [value] => match value.parse::<f32>() {
                Ok(t) if (0.0..=2.0).contains(&t) => {
                    session.set_temperature(t);
                    CommandResult::Notice(format!("Temperature set to {t}"))
                }
                _ => CommandResult::Notice(format!(
                    "Invalid temperature '{value}'. Use a number between 0.0 and 2.0."
                )),
            },
            _ => CommandResult::Notice("Usage: /temperature <value>".to_string()),
        },
        _ => CommandResult::Notice(format!(
            "Unknown command: {command}. Type /help for a list of commands."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GenerationParams;

    fn session() -> ChatSession {
        ChatSession::new(GenerationParams::default())
    }

    #[test]
    fn plain_text_is_sent_as_a_message() {
        let mut session = session();
        assert_eq!(
            process_input(&mut session, "  hello there \n"),
            CommandResult::ProcessAsMessage("hello there".to_string())
        );
        assert_eq!(process_input(&mut session, "   "), CommandResult::Ignored);
    }

    #[test]
    fn clear_resets_the_session() {
        let mut session = session();
        assert_eq!(process_input(&mut session, "/clear"), CommandResult::Cleared);
        assert!(session.is_empty());
    }

    #[test]
    fn temperature_command_validates_range() {
        let mut session = session();

        assert_eq!(
            process_input(&mut session, "/temperature 0.3"),
            CommandResult::Notice("Temperature set to 0.3".to_string())
        );
        assert_eq!(session.params().temperature, 0.3);

        assert!(matches!(
            process_input(&mut session, "/temperature 9"),
            CommandResult::Notice(text) if text.starts_with("Invalid temperature")
        ));
        assert_eq!(session.params().temperature, 0.3);
    }

    #[test]
    fn quit_and_unknown_commands() {
        let mut session = session();
        assert_eq!(process_input(&mut session, "/exit"), CommandResult::Quit);
        assert!(matches!(
            process_input(&mut session, "/frobnicate"),
            CommandResult::Notice(text) if text.starts_with("Unknown command: /frobnicate")
        ));
    }
}
