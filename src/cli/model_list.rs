//! Model listing functionality

use std::error::Error;

use crate::api::{GeminiClient, ModelInfo};

pub async fn list_models(client: &GeminiClient) -> Result<(), Box<dyn Error>> {
    println!("🤖 Available Models");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    println!("🎯 Current model: {}", client.model());
    println!();

    let models = match client.list_models().await {
        Ok(models) => models,
        Err(err) => {
            eprintln!("❌ Error listing models: {err}");
            std::process::exit(1);
        }
    };

    if models.is_empty() {
        println!("No models found for this key.");
        return Ok(());
    }

    println!("Found {} models:", models.len());
    println!();
    for model in &models {
        for line in describe_model(model) {
            println!("{line}");
        }
        println!();
    }

    Ok(())
}

pub fn describe_model(model: &ModelInfo) -> Vec<String> {
    let mut lines = vec![format!("  • {}", model.name)];

    if let Some(display_name) = model
        .display_name
        .as_deref()
        .filter(|name| !name.is_empty() && *name != model.name)
    {
        lines.push(format!("    Name: {display_name}"));
    }
    match (model.input_token_limit, model.output_token_limit) {
        (Some(input), Some(output)) => {
            lines.push(format!("    Tokens: {input} in / {output} out"))
        }
        (Some(input), None) => lines.push(format!("    Tokens: {input} in")),
        (None, Some(output)) => lines.push(format!("    Tokens: {output} out")),
        (None, None) => {}
    }
    if !model.supported_generation_methods.is_empty() {
        lines.push(format!(
            "    Methods: {}",
            model.supported_generation_methods.join(", ")
        ));
    }

    lines
}
