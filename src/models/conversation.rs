use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const ROLE_USER: &str = "user";
const ROLE_ASSISTANT: &str = "assistant";

/// Metadata attached to both authors and messages. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(default)]
    pub is_visually_hidden_from_conversation: Option<bool>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub message_source: Option<Value>,
    #[serde(default)]
    pub timestamp_: Option<String>,
    #[serde(default)]
    pub message_type: Option<Value>,
    #[serde(default)]
    pub model_slug: Option<String>,
    #[serde(default)]
    pub default_model_slug: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub citations: Option<Vec<Value>>,
    #[serde(default)]
    pub gizmo_id: Option<Value>,
    #[serde(default)]
    pub finish_details: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub is_complete: Option<bool>,
    #[serde(default)]
    pub pad: Option<String>,
}

/// Text payload of a message. `parts` is treated as empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub content_type: String,
    #[serde(default = "empty_parts")]
    pub parts: Option<Vec<String>>,
}

fn empty_parts() -> Option<Vec<String>> {
    Some(Vec::new())
}

impl Content {
    pub fn parts(&self) -> &[String] {
        self.parts.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub role: String,
    #[serde(default)]
    pub name: Option<Value>,
    pub metadata: MessageMetadata,
}

/// Coarse classification of `author.role`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    Other,
}

impl Author {
    pub fn role(&self) -> Role {
        match self.role.as_str() {
            ROLE_USER => Role::User,
            ROLE_ASSISTANT => Role::Assistant,
            _ => Role::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: Author,
    #[serde(default)]
    pub create_time: Option<f64>,
    #[serde(default)]
    pub update_time: Option<f64>,
    #[serde(default)]
    pub content: Option<Content>,
    pub status: String,
    #[serde(default)]
    pub end_turn: Option<bool>,
    pub weight: f64,
    pub metadata: MessageMetadata,
    pub recipient: String,
    #[serde(default)]
    pub channel: Option<Value>,
}

/// One node of a conversation's message tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingItem {
    pub id: String,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

/// A single conversation thread from the export.
///
/// Only `mapping` is read by the estimator; the tree links (`parent`,
/// `children`, `current_node`) are carried but never followed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub title: String,
    pub create_time: f64,
    pub update_time: f64,
    pub mapping: HashMap<String, MappingItem>,
    pub moderation_results: Vec<Value>,
    pub current_node: String,
    #[serde(default)]
    pub plugin_ids: Option<Value>,
    pub conversation_id: String,
    #[serde(default)]
    pub conversation_template_id: Option<Value>,
    #[serde(default)]
    pub gizmo_id: Option<Value>,
    pub is_archived: bool,
    pub safe_urls: Vec<Value>,
    pub default_model_slug: String,
    #[serde(default)]
    pub conversation_origin: Option<Value>,
    #[serde(default)]
    pub voice: Option<Value>,
    pub id: String,
}
