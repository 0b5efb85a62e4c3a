//! Chat session with the recommendation bot.
//!
//! A submission runs in two halves so a front end can render the
//! "bot is typing" state in between:
//! 1. `begin`: append the user message, enter the composing state, guess
//!    the mood from the text
//! 2. `finish`: append the bot reply (movies or an apology) and leave the
//!    composing state, whatever the outcome
//!
//! `send` runs both halves around the service call.

use catalog::{Movie, Mood};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::service::MovieService;
use crate::store::Store;

pub type MessageId = Uuid;

pub const GREETING: &str = "Hi there! 👋 I'm your movie recommendation bot. Tell me how you're feeling today or what kind of movie you're in the mood for, and I'll suggest some perfect matches!";

pub const APOLOGY: &str =
    "Sorry, I had trouble getting recommendations right now. Could you try again?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Bot,
}

/// Emoji reactions a message can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    ThumbsUp,
    Heart,
    Laugh,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Reaction::ThumbsUp, Reaction::Heart, Reaction::Laugh];

    pub fn emoji(self) -> &'static str {
        match self {
            Reaction::ThumbsUp => "👍",
            Reaction::Heart => "❤️",
            Reaction::Laugh => "😂",
        }
    }

    /// Parse an emoji; the heart is accepted with or without its variation
    /// selector
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        match emoji.trim() {
            "👍" => Some(Reaction::ThumbsUp),
            "❤️" | "❤" => Some(Reaction::Heart),
            "😂" => Some(Reaction::Laugh),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Recommendations bundled with a bot reply
    pub movies: Option<Vec<Movie>>,
    /// Active reactions in the order they were added
    pub reactions: Vec<Reaction>,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>, movies: Option<Vec<Movie>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
            movies,
            reactions: Vec::new(),
        }
    }

    pub fn has_reaction(&self, reaction: Reaction) -> bool {
        self.reactions.contains(&reaction)
    }
}

/// Handle for a submission whose bot reply is still pending
#[derive(Debug)]
#[must_use = "a pending reply leaves the session composing until finished"]
pub struct PendingReply {
    mood: Mood,
}

impl PendingReply {
    /// Mood detected from the user's text
    pub fn mood(&self) -> Mood {
        self.mood
    }
}

pub struct ChatSession {
    messages: Vec<ChatMessage>,
    composing: bool,
}

impl ChatSession {
    /// New session opened by the bot greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Bot, GREETING, None)],
            composing: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Start a submission.
    ///
    /// Returns `None` (and changes nothing) for blank text or while a reply
    /// is already being composed.
    pub fn begin(&mut self, text: &str, store: &mut Store) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        if self.composing {
            debug!("Ignoring submission while a reply is being composed");
            return None;
        }

        self.messages.push(ChatMessage::new(Role::User, text, None));
        self.composing = true;
        store.set_loading(true);

        let mood = mood::detect_mood(text);
        info!("Chat message classified as {}", mood);
        Some(PendingReply { mood })
    }

    /// Complete a submission with the service result
    pub fn finish(
        &mut self,
        pending: PendingReply,
        result: Result<Vec<Movie>, ServiceError>,
        store: &mut Store,
    ) -> &ChatMessage {
        let reply = match result {
            Ok(movies) => ChatMessage::new(Role::Bot, mood::restate(pending.mood), Some(movies)),
            Err(e) => {
                warn!("Chat recommendations failed: {}", e);
                ChatMessage::new(Role::Bot, APOLOGY, None)
            }
        };

        self.messages.push(reply);
        self.composing = false;
        store.set_loading(false);
        &self.messages[self.messages.len() - 1]
    }

    /// Submit `text` and wait for the bot's reply
    pub async fn send(
        &mut self,
        text: &str,
        service: &MovieService,
        store: &mut Store,
    ) -> Option<&ChatMessage> {
        let pending = self.begin(text, store)?;

        service.compose_pause().await;
        let result = service.get_recommendations(pending.mood(), None).await;

        Some(self.finish(pending, result, store))
    }

    /// Toggle `reaction` on a message.
    ///
    /// Returns whether the reaction is now active, or `None` when no message
    /// has that id.
    pub fn toggle_reaction(&mut self, message_id: MessageId, reaction: Reaction) -> Option<bool> {
        let message = self.messages.iter_mut().find(|m| m.id == message_id)?;

        if let Some(pos) = message.reactions.iter().position(|r| *r == reaction) {
            message.reactions.remove(pos);
            Some(false)
        } else {
            message.reactions.push(reaction);
            Some(true)
        }
    }

    /// Toggle a reaction given as an emoji. Unknown ids and emoji outside the
    /// reaction vocabulary are ignored.
    pub fn add_reaction(&mut self, message_id: MessageId, emoji: &str) {
        match Reaction::from_emoji(emoji) {
            Some(reaction) => {
                self.toggle_reaction(message_id, reaction);
            }
            None => debug!("Ignoring unsupported reaction {:?}", emoji),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::InstantNetwork;
    use catalog::Catalog;
    use std::sync::Arc;

    fn service(network: InstantNetwork) -> MovieService {
        MovieService::new(Arc::new(Catalog::builtin()), Arc::new(network))
    }

    #[test]
    fn test_session_opens_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Bot);
        assert_eq!(session.messages()[0].text, GREETING);
        assert!(!session.is_composing());
    }

    #[tokio::test]
    async fn test_send_appends_user_and_bot_messages() {
        let service = service(InstantNetwork::reliable());
        let mut store = Store::new();
        let mut session = ChatSession::new();

        let reply = session
            .send("I want some action!", &service, &mut store)
            .await
            .expect("reply");
        assert_eq!(reply.role, Role::Bot);
        assert!(reply.text.contains("excited mood"));
        let movies = reply.movies.as_ref().unwrap();
        assert_eq!(movies.len(), 5);

        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[1].role, Role::User);
        assert_eq!(session.messages()[1].text, "I want some action!");
        assert!(!session.is_composing());
        assert!(!store.state().is_loading);
    }

    #[tokio::test]
    async fn test_failure_appends_apology_and_stops_composing() {
        let service = service(InstantNetwork::failing());
        let mut store = Store::new();
        let mut session = ChatSession::new();

        let reply = session.send("so sad", &service, &mut store).await.unwrap();
        assert_eq!(reply.text, APOLOGY);
        assert!(reply.movies.is_none());

        assert!(!session.is_composing());
        assert!(!store.state().is_loading);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let service = service(InstantNetwork::reliable());
        let mut store = Store::new();
        let mut session = ChatSession::new();

        assert!(session.send("   \n", &service, &mut store).await.is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_begin_enters_composing_state() {
        let mut store = Store::new();
        let mut session = ChatSession::new();

        let pending = session.begin("something quiet", &mut store).unwrap();
        assert_eq!(pending.mood(), Mood::Calm);
        assert!(session.is_composing());
        assert!(store.state().is_loading);

        // A second submission while composing is dropped
        assert!(session.begin("another", &mut store).is_none());
        assert_eq!(session.messages().len(), 2);

        session.finish(pending, Err(ServiceError::Unavailable), &mut store);
        assert!(!session.is_composing());
        assert!(!store.state().is_loading);
    }

    #[test]
    fn test_heart_twice_toggles_off() {
        let mut session = ChatSession::new();
        let id = session.messages()[0].id;

        session.add_reaction(id, "❤️");
        assert!(session.messages()[0].has_reaction(Reaction::Heart));

        session.add_reaction(id, "❤️");
        assert!(!session.messages()[0].has_reaction(Reaction::Heart));
        assert!(session.messages()[0].reactions.is_empty());
    }

    #[test]
    fn test_reactions_are_independent() {
        let mut session = ChatSession::new();
        let id = session.messages()[0].id;

        assert_eq!(session.toggle_reaction(id, Reaction::Laugh), Some(true));
        assert_eq!(session.toggle_reaction(id, Reaction::ThumbsUp), Some(true));
        assert_eq!(session.toggle_reaction(id, Reaction::Laugh), Some(false));
        assert_eq!(session.messages()[0].reactions, vec![Reaction::ThumbsUp]);
    }

    #[test]
    fn test_unknown_message_or_emoji_is_noop() {
        let mut session = ChatSession::new();
        let before = session.messages().to_vec();

        session.add_reaction(Uuid::new_v4(), "👍");
        session.add_reaction(before[0].id, "🦀");

        assert_eq!(session.messages(), before.as_slice());
        assert_eq!(session.toggle_reaction(Uuid::new_v4(), Reaction::Heart), None);
    }

    #[test]
    fn test_reaction_emoji_round_trip() {
        for reaction in Reaction::ALL {
            assert_eq!(Reaction::from_emoji(reaction.emoji()), Some(reaction));
        }
        assert_eq!(Reaction::from_emoji("❤"), Some(Reaction::Heart));
    }
}
