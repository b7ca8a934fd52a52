//! Line-oriented interactive chat loop

use std::error::Error;
use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::api::GeminiClient;
use crate::commands::{process_input, CommandResult};
use crate::core::session::{ChatBackend, ChatSession};
use crate::ui::transcript::{render_message, render_transcript};
use crate::utils::logging::LoggingState;

const PROMPT: &str = "> ";

pub async fn run_chat(
    client: GeminiClient,
    mut session: ChatSession,
    log_file: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let logging = LoggingState::new(log_file)?;
    let mut stdout = io::stdout();

    print_banner(&mut stdout, &client, &logging)?;

    let stdin = BufReader::new(tokio::io::stdin());
    drive_chat(&client, &mut session, &logging, stdin, &mut stdout).await?;
    Ok(())
}

fn print_banner<W: Write>(
    out: &mut W,
    client: &GeminiClient,
    logging: &LoggingState,
) -> io::Result<()> {
    writeln!(out, "🚀 flashchat - terminal chat")?;
    writeln!(out, "📡 Model: {}", client.model())?;
    writeln!(out, "🌐 Endpoint: {}", client.base_url())?;
    writeln!(out, "📝 Transcript log: {}", logging.get_status_string())?;
    writeln!(out, "💡 /help for commands, /clear to start over, Ctrl+D to quit")?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: Vec<String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Reads lines until end of input or `/quit`, one exchange at a time.
pub async fn drive_chat<B, R, W>(
    backend: &B,
    session: &mut ChatSession,
    logging: &LoggingState,
    mut input: R,
    out: &mut W,
) -> io::Result<()>
where
    B: ChatBackend + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buffer = Vec::new();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer).await? == 0 {
            writeln!(out)?;
            break;
        }
        let line = match std::str::from_utf8(&buffer) {
            Ok(line) => line,
            Err(err) => {
                warn!("Discarding input line: {err}");
                writeln!(out, "Input was not valid UTF-8 and was ignored.")?;
                continue;
            }
        };

        match process_input(session, line) {
            CommandResult::Ignored => {}
            CommandResult::Notice(text) => writeln!(out, "{text}")?,
            CommandResult::Cleared => {
                if let Err(e) = logging.log_message("## History cleared") {
                    eprintln!("Failed to log message: {e}");
                }
                writeln!(out, "History cleared.")?;
            }
            CommandResult::Redraw => {
                if session.is_empty() {
                    writeln!(out, "(no messages yet)")?;
                } else {
                    write_lines(out, render_transcript(session.messages()))?;
                }
            }
            CommandResult::Quit => break,
            CommandResult::ProcessAsMessage(text) => {
                let start = session.messages().len();
                let reply = session.send(backend, text).await.clone();

                for message in &session.messages()[start..] {
                    if let Err(e) = logging.log_turn(message) {
                        eprintln!("Failed to log message: {e}");
                    }
                }
                // The user's own line is already on screen.
                write_lines(out, render_message(&reply))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GenerationParams;
    use crate::core::message::Message;
    use crate::utils::test_utils::{
        create_test_client, spawn_canned_server, success_body, unreachable_base_url,
    };
    use serde_json::json;

    #[tokio::test]
    async fn clear_between_turns_leaves_only_the_new_exchange() {
        let (base_url, server) = spawn_canned_server(vec![
            (200, success_body("Hello!")),
            (200, success_body("Hi again.")),
        ])
        .await;
        let client = create_test_client(&base_url);
        let mut session = ChatSession::new(GenerationParams::default());
        let logging = LoggingState::new(None).expect("logging");
        let mut out = Vec::new();

        drive_chat(
            &client,
            &mut session,
            &logging,
            &b"hello\n/clear\nhi\n"[..],
            &mut out,
        )
        .await
        .expect("loop should finish");

        assert_eq!(
            session.messages(),
            &[Message::user("hi"), Message::assistant("Hi again.")]
        );

        let requests = server.await.expect("server task");
        assert_eq!(
            requests[1].json_body()["contents"],
            json!([{"role": "user", "parts": [{"text": "hi"}]}])
        );

        let printed = String::from_utf8(out).expect("utf8 output");
        assert!(printed.contains("Hello!"));
        assert!(printed.contains("History cleared."));
        assert!(printed.contains("Hi again."));
    }

    #[tokio::test]
    async fn request_failures_are_shown_not_raised() {
        let client = create_test_client(&unreachable_base_url().await);
        let mut session = ChatSession::new(GenerationParams::default());
        let logging = LoggingState::new(None).expect("logging");
        let mut out = Vec::new();

        drive_chat(
            &client,
            &mut session,
            &logging,
            &b"hello\n/quit\nignored\n"[..],
            &mut out,
        )
        .await
        .expect("loop should finish");

        assert_eq!(session.messages().len(), 2);
        assert!(session.messages()[1].is_app());
        let printed = String::from_utf8(out).expect("utf8 output");
        assert!(printed.contains("❌ Error: Request failed"));
    }

    #[tokio::test]
    async fn undecodable_lines_are_skipped_and_the_chat_continues() {
        let (base_url, server) = spawn_canned_server(vec![(200, success_body("Hello!"))]).await;
        let client = create_test_client(&base_url);
        let mut session = ChatSession::new(GenerationParams::default());
        let logging = LoggingState::new(None).expect("logging");
        let mut out = Vec::new();

        drive_chat(
            &client,
            &mut session,
            &logging,
            &b"caf\xe9\nhello\n"[..],
            &mut out,
        )
        .await
        .expect("loop should finish");

        assert_eq!(
            session.messages(),
            &[Message::user("hello"), Message::assistant("Hello!")]
        );
        let requests = server.await.expect("server task");
        assert_eq!(requests.len(), 1);

        let printed = String::from_utf8(out).expect("utf8 output");
        assert!(printed.contains("not valid UTF-8"));
    }

    #[tokio::test]
    async fn history_redraws_every_turn_in_order() {
        let (base_url, server) = spawn_canned_server(vec![
            (200, success_body("one")),
            (200, success_body("two")),
        ])
        .await;
        let client = create_test_client(&base_url);
        let mut session = ChatSession::new(GenerationParams::default());
        let logging = LoggingState::new(None).expect("logging");
        let mut out = Vec::new();

        drive_chat(
            &client,
            &mut session,
            &logging,
            &b"first\nsecond\n/history\n"[..],
            &mut out,
        )
        .await
        .expect("loop should finish");
        server.await.expect("server task");

        let printed = String::from_utf8(out).expect("utf8 output");
        let redraw = printed
            .rsplit_once("> You: first")
            .map(|(_, tail)| tail)
            .expect("transcript should be redrawn");
        let order: Vec<_> = ["one", "You: second", "two"]
            .iter()
            .map(|needle| redraw.find(needle).expect("turn present"))
            .collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
