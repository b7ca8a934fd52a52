//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod demo;
pub mod generate;
pub mod model_list;

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::api::GeminiClient;
use crate::cli::demo::run_demo;
use crate::cli::generate::run_generate;
use crate::cli::model_list::list_models;
use crate::core::config::{Config, ConfigKey};
use crate::core::credentials::{resolve_env_client_settings, CredentialError, SettingsOverrides};
use crate::core::session::ChatSession;
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "flashchat", version)]
#[command(about = "A terminal chat client for the Gemini generateContent API")]
#[command(
    long_about = "flashchat sends prompts to a Gemini model over the generativelanguage REST API \
and keeps a multi-turn chat going in the terminal.\n\n\
Environment Variables:\n\
  GEMINI_API_KEY    Your API key (required)\n\
  GEMINI_MODEL      Model to use (optional, defaults to gemini-1.5-flash)\n\
  GEMINI_BASE_URL   API root (optional, defaults to https://generativelanguage.googleapis.com/v1beta)\n\
  RUST_LOG          Diagnostic log filter (optional, defaults to warn)\n\n\
Chat commands:\n\
  /clear            Start over with an empty history\n\
  /history          Redraw the conversation\n\
  /temperature <t>  Change the sampling temperature\n\
  /quit             Leave the chat"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model to use, overriding GEMINI_MODEL and the config file
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// API root URL, overriding GEMINI_BASE_URL and the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Append the chat transcript to this file
    #[arg(short = 'l', long, global = true)]
    pub log: Option<String>,

    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat (default)
    Chat,
    /// Generate a single response for a prompt
    Generate {
        /// Prompt text (multiple words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,
        /// Sampling temperature
        #[arg(short = 't', long)]
        temperature: Option<f32>,
        /// Maximum number of output tokens
        #[arg(long)]
        max_tokens: Option<u32>,
        /// Print the full decoded response instead of the text
        #[arg(long)]
        raw: bool,
    },
    /// List the models available to your API key
    Models,
    /// Run the sample flow: story, code, model list, chat
    Demo,
    /// Set a configuration value
    Set {
        /// Configuration key (model, base-url, temperature, max-output-tokens, top-p, top-k, max-context-messages)
        key: String,
        /// Value to set
        #[arg(required = true, trailing_var_arg = true)]
        value: Vec<String>,
    },
    /// Remove a configuration value
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Print the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(args))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Diagnostics go to stderr so piped output stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints a credential failure with its quick fixes and exits.
fn exit_with_credential_error(err: CredentialError) -> ! {
    eprintln!("{err}");
    let fixes = err.quick_fixes();
    if !fixes.is_empty() {
        eprintln!();
        eprintln!("💡 Quick fixes:");
        for fix in fixes {
            eprintln!("  • {fix}");
        }
    }
    std::process::exit(err.exit_code());
}

fn build_client(config: &Config, overrides: &SettingsOverrides) -> GeminiClient {
    let client = resolve_env_client_settings(config, overrides).and_then(GeminiClient::new);
    client.unwrap_or_else(|err| exit_with_credential_error(err))
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    let overrides = SettingsOverrides {
        model: args.model,
        base_url: args.base_url,
    };

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = Config::load()?;
            let client = build_client(&config, &overrides);
            let session = ChatSession::new(config.generation_params())
                .with_max_context_messages(config.max_context_messages);
            run_chat(client, session, args.log).await
        }
        Commands::Generate {
            prompt,
            temperature,
            max_tokens,
            raw,
        } => {
            let config = Config::load()?;
            let client = build_client(&config, &overrides);
            let mut params = config.generation_params();
            if let Some(temperature) = temperature {
                params = params.with_temperature(temperature);
            }
            if let Some(max_tokens) = max_tokens {
                params = params.with_max_output_tokens(max_tokens);
            }
            run_generate(&client, &prompt.join(" "), &params, raw).await
        }
        Commands::Models => {
            let config = Config::load()?;
            let client = build_client(&config, &overrides);
            list_models(&client).await
        }
        Commands::Demo => {
            let config = Config::load()?;
            let client = build_client(&config, &overrides);
            run_demo(&client, &config).await
        }
        Commands::Set { key, value } => {
            let key: ConfigKey = key.parse()?;
            let value = value.join(" ");
            let mut config = Config::load()?;
            config.set_value(key, &value)?;
            config.save()?;
            println!("✅ Set {} to: {}", key.as_str(), value.trim());
            Ok(())
        }
        Commands::Unset { key } => {
            let key: ConfigKey = key.parse()?;
            let mut config = Config::load()?;
            config.unset_value(key);
            config.save()?;
            println!("✅ Unset {}", key.as_str());
            Ok(())
        }
        Commands::Config => {
            Config::load()?.print_all();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
