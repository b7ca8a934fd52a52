//! One-shot generation without the chat loop

use std::error::Error;

use crate::api::{GeminiClient, GenerationParams};

pub async fn run_generate(
    client: &GeminiClient,
    prompt: &str,
    params: &GenerationParams,
    raw: bool,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Usage: flashchat generate <prompt>");
        std::process::exit(1);
    }

    match client.generate(prompt, params).await {
        Ok(generated) if raw => {
            println!("{}", serde_json::to_string_pretty(&generated.raw)?);
        }
        Ok(generated) => println!("{}", generated.text),
        Err(err) => {
            eprintln!("❌ Error: {err}");
            if let Some(payload) = err.raw_payload().filter(|_| raw) {
                eprintln!("{}", serde_json::to_string_pretty(payload)?);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
