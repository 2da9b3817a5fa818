//! # eurobot-core
//!
//! Core types and traits for the country bot: [`Bot`], [`Handler`], message, chat and keyboard types,
//! and tracing initialization. Transport-agnostic; used by handler-chain and the eurobot application.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{EurobotError, Result};
pub use logger::init_tracing;
pub use types::{
    Button, Chat, Handler, HandlerResponse, Keyboard, Message, MessageKind, ToCoreMessage,
    ToCoreUser, User,
};
