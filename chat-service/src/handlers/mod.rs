//! HTTP handlers for the chat gateway.

pub mod chat;
pub mod health;

pub use chat::{chat, chat_both};
pub use health::health_check;
