//! Chat module - the scripted marketplace assistant.

mod chat_model;
mod chat_responses;
mod chat_service;

pub use chat_model::{ChatMessage, MessageSender};
pub use chat_responses::{keyword_reply, reply_pool, KeywordRule, KEYWORD_RULES};
pub use chat_service::{ChatService, ChatServiceTrait};
