//! Conversation wiring around the resolver.
//!
//! `ChatEngine` owns the session state and the remote dialog collaborator,
//! keeps the append-only history, and converts collaborator failures into a
//! fixed apologetic message. One user message is one attempt; there is no
//! retry logic here.

use accessmap_core::catalog::Catalog;
use accessmap_core::traits::RemoteDialogService;
use accessmap_core::types::{ChatMessage, Sender};
use accessmap_search::SearchIndex;
use tracing::warn;

use crate::resolver::{bot_message, now_ms, resolve_turn, ChatSession, Resolution};

pub const WELCOME: &str = "Hi! I'm your AccessKingston assistant. I can help you find healthcare, \
     groceries, banks, and other services in Kingston. What are you looking for?";
pub const APOLOGY: &str = "I'm sorry, I'm having trouble responding right now. Please try again.";

pub struct ChatEngine {
    session: ChatSession,
    remote: Box<dyn RemoteDialogService>,
    history: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatEngine {
    pub fn new(remote: Box<dyn RemoteDialogService>) -> Self {
        let mut engine = Self {
            session: ChatSession::new(),
            remote,
            history: Vec::new(),
            next_id: 0,
        };
        let welcome = engine.assign_id(bot_message(WELCOME.to_string(), Vec::new()));
        engine.history.push(welcome);
        engine
    }

    /// Handle one typed or voice-transcribed user message. Appends the user
    /// message and the bot reply to the history and returns the reply.
    pub fn handle_message(
        &mut self,
        text: &str,
        catalog: &Catalog,
        index: &SearchIndex<'_>,
    ) -> ChatMessage {
        let trimmed = text.trim();
        let user = self.assign_id(ChatMessage {
            id: String::new(),
            text: trimmed.to_string(),
            sender: Sender::User,
            timestamp_ms: now_ms(),
            actions: Vec::new(),
        });
        self.history.push(user);

        let reply = match resolve_turn(&mut self.session, trimmed, catalog, index) {
            Resolution::Reply(message) => message,
            Resolution::Forward => match self.remote.send_message(trimmed) {
                Ok(dialog) => bot_message(dialog.message, Vec::new()),
                Err(e) => {
                    warn!("remote dialog failed: {e:#}");
                    bot_message(APOLOGY.to_string(), Vec::new())
                }
            },
        };
        let reply = self.assign_id(reply);
        self.history.push(reply.clone());
        reply
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Called when the conversation UI closes: the follow-up context does
    /// not survive into the next conversation.
    pub fn reset_session(&mut self) {
        self.session.reset();
    }

    fn assign_id(&mut self, mut message: ChatMessage) -> ChatMessage {
        let prefix = match message.sender {
            Sender::User => "user",
            Sender::Bot => "bot",
        };
        message.id = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        message
    }
}
