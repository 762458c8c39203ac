//! Data models for conversation exports and cost estimates.
//!
//! - [`Conversation`] and its nested [`MappingItem`], [`Message`], [`Author`], [`Content`]
//!   mirror the records in `conversations.json`
//! - [`ExtractedMessages`] holds the per-role text and message dates pulled from an export
//! - [`TokenTotals`] and [`CostReport`] carry the tokenized counts and the final estimate
//!
//! Required fields follow the export's schema; a record missing one is rejected by serde
//! and skipped by the parser in [`crate::parsers`].

pub mod conversation;
pub mod report;

pub use conversation::{
    Author, Content, Conversation, MappingItem, Message, MessageMetadata, Role,
};
pub use report::{CostReport, ExtractedMessages, TokenTotals};
