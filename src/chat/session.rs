use crate::{
    advisory::{AdvisoryContext, AdvisoryEngine},
    models::{Author, ChatMessage},
};

pub const WELCOME_MESSAGE: &str = "Hello! I am your farming assistant. Ask me about irrigation, crop calendar, pest management, or say \"what to do this month\" for monthly advice.";

/// In-memory transcript for one visit to the chat screen. Nothing here is
/// persisted; leaving the screen drops it.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Author::Assistant, WELCOME_MESSAGE)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the user's line and the assistant's answer, returning the
    /// answer. Blank input is ignored.
    pub fn send(
        &mut self,
        input: &str,
        engine: &AdvisoryEngine,
        ctx: &AdvisoryContext<'_>,
    ) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        let reply = engine.respond(input, ctx);
        self.messages.push(ChatMessage::new(Author::User, input));
        self.messages.push(ChatMessage::new(Author::Assistant, reply));
        self.messages.last()
    }
}
