//! Request and response DTOs for the chat gateway.

pub mod chat;

pub use chat::{ChatBothRequest, ChatBothResponse, ChatRequest, ModelAnswer, ModelTarget};
