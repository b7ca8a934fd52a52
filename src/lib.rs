//! flashchat is a small terminal client for the Gemini `generateContent` API.
//!
//! The crate is organized around a few collaborating layers:
//! - [`api`] builds requests, talks HTTP, and turns every response into either
//!   generated text or a classified [`api::ApiError`].
//! - [`core`] owns configuration, credential resolution, the transcript model,
//!   and the [`core::session::ChatSession`] that carries multi-turn context.
//! - [`ui`] renders the transcript and runs the interactive line loop.
//! - [`commands`] parses slash commands typed into the chat.
//! - [`cli`] parses arguments and dispatches subcommands.
//!
//! The binary (`src/main.rs`) routes straight into [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
