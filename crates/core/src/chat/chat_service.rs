use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, RwLock};

use super::chat_model::{ChatMessage, MessageSender};
use super::chat_responses::{keyword_reply, reply_pool};
use crate::errors::{lock_poisoned, Result};
use crate::users::{AuthServiceTrait, UserRole};

/// Trait for assistant conversations
pub trait ChatServiceTrait: Send + Sync {
    /// Records the user's message and the assistant's reply.
    ///
    /// Blank input is ignored and yields `Ok(None)`.
    fn send_message(&self, message: &str) -> Result<Option<ChatMessage>>;
    fn messages(&self) -> Result<Vec<ChatMessage>>;
    fn clear_chat(&self) -> Result<()>;
}

/// Scripted assistant: keyword rules first, then a random role-specific reply.
pub struct ChatService {
    auth_service: Arc<dyn AuthServiceTrait>,
    messages: RwLock<Vec<ChatMessage>>,
    rng: Mutex<StdRng>,
}

impl ChatService {
    pub fn new(auth_service: Arc<dyn AuthServiceTrait>) -> Self {
        Self::with_rng(auth_service, StdRng::from_entropy())
    }

    /// Deterministic fallback replies for a given seed.
    pub fn with_seed(auth_service: Arc<dyn AuthServiceTrait>, seed: u64) -> Self {
        Self::with_rng(auth_service, StdRng::seed_from_u64(seed))
    }

    fn with_rng(auth_service: Arc<dyn AuthServiceTrait>, rng: StdRng) -> Self {
        Self {
            auth_service,
            messages: RwLock::new(Vec::new()),
            rng: Mutex::new(rng),
        }
    }

    fn generate_reply(&self, message: &str, role: UserRole) -> Result<&'static str> {
        if let Some(reply) = keyword_reply(message) {
            return Ok(reply);
        }
        let pool = reply_pool(role);
        let index = self
            .rng
            .lock()
            .map_err(lock_poisoned)?
            .gen_range(0..pool.len());
        Ok(pool[index])
    }
}

impl ChatServiceTrait for ChatService {
    fn send_message(&self, message: &str) -> Result<Option<ChatMessage>> {
        if message.trim().is_empty() {
            return Ok(None);
        }

        let role = self
            .auth_service
            .current_user()?
            .map(|user| user.role)
            .unwrap_or_default();
        let reply = ChatMessage::new(MessageSender::Bot, self.generate_reply(message, role)?);
        debug!("Assistant replying to {} message", role.as_str());

        let mut messages = self.messages.write().map_err(lock_poisoned)?;
        messages.push(ChatMessage::new(MessageSender::User, message));
        messages.push(reply.clone());
        Ok(Some(reply))
    }

    fn messages(&self) -> Result<Vec<ChatMessage>> {
        Ok(self.messages.read().map_err(lock_poisoned)?.clone())
    }

    fn clear_chat(&self) -> Result<()> {
        self.messages.write().map_err(lock_poisoned)?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::chat_responses::KEYWORD_RULES;
    use crate::errors::Error;
    use crate::events::NoOpDomainEventSink;
    use crate::users::{AuthService, NewUser};

    fn auth() -> Arc<AuthService> {
        Arc::new(AuthService::new(Arc::new(NoOpDomainEventSink)))
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let chat = ChatService::with_seed(auth(), 7);
        assert_eq!(chat.send_message("   ").unwrap(), None);
        assert!(chat.messages().unwrap().is_empty());
    }

    #[test]
    fn test_keyword_message_gets_scripted_reply() {
        let chat = ChatService::with_seed(auth(), 7);
        let reply = chat.send_message("How do I upload a file?").unwrap().unwrap();

        assert_eq!(reply.sender, MessageSender::Bot);
        assert_eq!(reply.message, KEYWORD_RULES[3].reply);

        let transcript = chat.messages().unwrap();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].sender, MessageSender::User);
        assert_eq!(transcript[0].message, "How do I upload a file?");
        assert_eq!(transcript[1], reply);
    }

    #[test]
    fn test_guest_fallback_comes_from_general_pool() {
        let chat = ChatService::with_seed(auth(), 7);
        let reply = chat.send_message("hello").unwrap().unwrap();
        assert!(reply_pool(UserRole::Guest).contains(&reply.message.as_str()));
    }

    #[test]
    fn test_seller_fallback_comes_from_seller_pool() {
        let auth = auth();
        auth.register(NewUser {
            name: "Vikram".to_string(),
            email: "vikram@example.com".to_string(),
            password: "pw".to_string(),
            role: UserRole::Seller,
        })
        .unwrap();
        let chat = ChatService::with_seed(auth, 11);

        for _ in 0..10 {
            let reply = chat.send_message("good morning").unwrap().unwrap();
            assert!(reply_pool(UserRole::Seller).contains(&reply.message.as_str()));
        }
    }

    #[test]
    fn test_same_seed_gives_same_fallbacks() {
        let first = ChatService::with_seed(auth(), 42);
        let second = ChatService::with_seed(auth(), 42);
        for _ in 0..5 {
            assert_eq!(
                first.send_message("hi").unwrap().unwrap().message,
                second.send_message("hi").unwrap().unwrap().message
            );
        }
    }

    #[test]
    fn test_clear_chat() {
        let chat = ChatService::with_seed(auth(), 1);
        chat.send_message("price?").unwrap();
        chat.clear_chat().unwrap();
        assert!(chat.messages().unwrap().is_empty());
    }

    #[test]
    fn test_poisoned_transcript_is_reported() {
        let chat = ChatService::with_seed(auth(), 3);
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = chat.messages.write().unwrap();
            panic!("writer died");
        }));

        assert!(matches!(chat.send_message("price?"), Err(Error::Unexpected(_))));
        assert!(matches!(chat.messages(), Err(Error::Unexpected(_))));
    }
}
