//! Sample flow exercising each client operation once

use std::error::Error;
use std::io::{self, Write};

use crate::api::GeminiClient;
use crate::core::config::Config;
use crate::core::session::ChatSession;
use crate::ui::transcript::render_message;

const STORY_PROMPT: &str = "Write a short story about a robot learning to paint.";
const CODE_PROMPT: &str =
    "Write a Python function to calculate the factorial of a number using recursion.";
const CODE_TEMPERATURE: f32 = 0.3;
const CHAT_PROMPT: &str = "Write a haiku about artificial intelligence";

fn separator() -> String {
    format!("\n{}\n", "=".repeat(50))
}

pub async fn run_demo(client: &GeminiClient, config: &Config) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    write_demo(client, config, &mut stdout).await?;
    Ok(())
}

/// Each step reports its own failure and the demo moves on.
pub async fn write_demo<W: Write>(
    client: &GeminiClient,
    config: &Config,
    out: &mut W,
) -> io::Result<()> {
    let params = config.generation_params();

    writeln!(out, "=== Simple Text Generation ===")?;
    match client.generate(STORY_PROMPT, &params).await {
        Ok(generated) => {
            writeln!(out, "Generated content:")?;
            writeln!(out, "{}", generated.text)?;
        }
        Err(err) => writeln!(out, "Error: {err}")?,
    }

    writeln!(out, "{}", separator())?;

    writeln!(out, "=== Code Generation ===")?;
    let code_params = params.with_temperature(CODE_TEMPERATURE);
    match client.generate(CODE_PROMPT, &code_params).await {
        Ok(generated) => {
            writeln!(out, "Generated code:")?;
            writeln!(out, "{}", generated.text)?;
        }
        Err(err) => writeln!(out, "Error: {err}")?,
    }

    writeln!(out, "{}", separator())?;

    writeln!(out, "=== Available Models ===")?;
    match client.list_models().await {
        Ok(models) => {
            for model in models {
                writeln!(out, "- {}", model.name)?;
            }
        }
        Err(err) => writeln!(out, "Error listing models: {err}")?,
    }

    writeln!(out, "{}", separator())?;

    writeln!(out, "=== Chat Session ===")?;
    let mut session = ChatSession::new(params);
    let reply = session.send(client, CHAT_PROMPT).await;
    for line in render_message(reply) {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
