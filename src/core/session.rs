//! Chat session state: the ordered transcript and the context policy used
//! for each request.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::api::{ApiError, Generated, GenerationParams};
use crate::core::message::Message;

/// Anything that can produce the next reply given the ordered prior turns.
///
/// The last turn in `context` is always the user message being answered.
#[async_trait]
pub trait ChatBackend {
    async fn reply(
        &self,
        context: &[Message],
        params: &GenerationParams,
    ) -> Result<Generated, ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

pub struct ChatSession {
    messages: Vec<Message>,
    state: SessionState,
    params: GenerationParams,
    max_context_messages: Option<usize>,
}

impl ChatSession {
    pub fn new(params: GenerationParams) -> Self {
        Self {
            messages: Vec::new(),
            state: SessionState::Idle,
            params,
            max_context_messages: None,
        }
    }

    /// Caps how many prior turns accompany each request. `None` sends the
    /// whole conversation; a limit below one is treated as one.
    pub fn with_max_context_messages(mut self, limit: Option<usize>) -> Self {
        self.max_context_messages = limit.map(|limit| limit.max(1));
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn set_temperature(&mut self, temperature: f32) {
        self.params.temperature = temperature;
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops the whole transcript and starts over.
    pub fn clear(&mut self) {
        debug!(turns = self.messages.len(), "Clearing chat history");
        self.messages.clear();
        self.state = SessionState::Idle;
    }

    /// Records the user turn, asks the backend for a reply and records that
    /// too. Failures become an error turn instead of propagating.
    pub async fn send<B>(&mut self, backend: &B, input: impl Into<String>) -> &Message
    where
        B: ChatBackend + ?Sized,
    {
        self.messages.push(Message::user(input));
        self.state = SessionState::AwaitingReply;

        let context = self.context();
        debug!(context_turns = context.len(), "Sending chat turn");

        let reply = match backend.reply(&context, &self.params).await {
            Ok(generated) => Message::assistant(generated.text),
            Err(err) => {
                warn!(kind = err.kind(), "Chat turn failed: {err}");
                Message::app_error(format_reply_error(&err))
            }
        };

        let index = self.messages.len();
        self.messages.push(reply);
        self.state = SessionState::Idle;
        &self.messages[index]
    }

    /// The turns that accompany the next request, oldest first.
    ///
    /// Error turns are never sent, and neither is the user turn that
    /// produced them. When a limit is set only the newest turns are kept,
    /// and the context never opens on an assistant turn.
    pub fn context(&self) -> Vec<Message> {
        let mut context: Vec<&Message> = Vec::with_capacity(self.messages.len());
        for message in &self.messages {
            if message.is_app() {
                if context.last().is_some_and(|last| last.is_user()) {
                    context.pop();
                }
            } else {
                context.push(message);
            }
        }

        if let Some(limit) = self.max_context_messages {
            let excess = context.len().saturating_sub(limit);
            context.drain(..excess);
            while context.first().is_some_and(|first| first.is_assistant()) {
                context.remove(0);
            }
        }

        context.into_iter().cloned().collect()
    }
}

pub fn format_reply_error(err: &ApiError) -> String {
    format!("Error: {err}")
}
