use super::*;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_means_chat() {
    let args = parse_args(&["flashchat"]);
    assert!(args.command.is_none());
    assert!(!args.verbose);
}

#[test]
fn global_flags_apply_to_subcommands() {
    let args = parse_args(&["flashchat", "chat", "-m", "gemini-1.5-pro", "-l", "chat.log", "-v"]);
    assert!(matches!(args.command, Some(Commands::Chat)));
    assert_eq!(args.model.as_deref(), Some("gemini-1.5-pro"));
    assert_eq!(args.log.as_deref(), Some("chat.log"));
    assert!(args.verbose);
}

#[test]
fn generate_collects_prompt_words_and_options() {
    let args = parse_args(&[
        "flashchat",
        "generate",
        "-t",
        "0.3",
        "--max-tokens",
        "200",
        "write",
        "a",
        "haiku",
    ]);

    match args.command {
        Some(Commands::Generate {
            prompt,
            temperature,
            max_tokens,
            raw,
        }) => {
            assert_eq!(prompt.join(" "), "write a haiku");
            assert_eq!(temperature, Some(0.3));
            assert_eq!(max_tokens, Some(200));
            assert!(!raw);
        }
        _ => panic!("expected generate subcommand"),
    }
}

#[test]
fn generate_requires_a_prompt() {
    assert!(Args::try_parse_from(["flashchat", "generate"]).is_err());
}

#[test]
fn set_joins_value_words() {
    let args = parse_args(&["flashchat", "set", "model", "gemini-1.5-flash-8b"]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, "model");
            assert_eq!(value.join(" "), "gemini-1.5-flash-8b");
        }
        _ => panic!("expected set subcommand"),
    }
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
