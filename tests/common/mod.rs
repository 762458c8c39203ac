//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

pub const EXPORT_FILE_NAME: &str = "conversations.json";

/// 2023-11-14T22:13:20Z
pub const NOV_14_2023: f64 = 1_700_000_000.0;
/// 2024-01-01T00:00:00Z
pub const JAN_1_2024: f64 = 1_704_067_200.0;

/// Builder for a temp directory holding a `conversations.json` export
pub struct ExportBuilder {
    temp_dir: TempDir,
    records: Vec<Value>,
}

impl ExportBuilder {
    /// Create a new builder with no records
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: Vec::new() }
    }

    /// Add a well-formed conversation
    pub fn with_conversation(mut self, conversation: ConversationBuilder) -> Self {
        self.records.push(conversation.to_json());
        self
    }

    /// Add an arbitrary raw record (for malformed input)
    pub fn with_raw_record(mut self, record: Value) -> Self {
        self.records.push(record);
        self
    }

    /// Write the export and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        let content = serde_json::to_string_pretty(&Value::Array(self.records))
            .expect("Failed to serialize export");
        write_export(self.temp_dir.path(), &content);
        self.temp_dir
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw content to `conversations.json` in `dir`
pub fn write_export(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, content).expect("Failed to write conversations.json");
    path
}

/// Builder for a conversation record
pub struct ConversationBuilder {
    id: String,
    title: String,
    nodes: Vec<NodeBuilder>,
}

impl ConversationBuilder {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), title: format!("Conversation {}", id), nodes: Vec::new() }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_node(mut self, node: NodeBuilder) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn to_json(&self) -> Value {
        let mapping: serde_json::Map<String, Value> =
            self.nodes.iter().map(|n| (n.id.clone(), n.to_json())).collect();
        let current_node = self.nodes.last().map(|n| n.id.clone()).unwrap_or_default();

        json!({
            "title": self.title,
            "create_time": NOV_14_2023,
            "update_time": NOV_14_2023 + 100.0,
            "mapping": mapping,
            "moderation_results": [],
            "current_node": current_node,
            "plugin_ids": null,
            "conversation_id": self.id,
            "conversation_template_id": null,
            "gizmo_id": null,
            "is_archived": false,
            "safe_urls": [],
            "default_model_slug": "gpt-4o",
            "conversation_origin": null,
            "voice": null,
            "id": self.id
        })
    }
}

/// Builder for a mapping node, with or without a message
pub struct NodeBuilder {
    id: String,
    role: Option<String>,
    parts: Option<Vec<String>>,
    has_content: bool,
    create_time: Option<f64>,
}

impl NodeBuilder {
    fn with_role(id: &str, role: &str) -> Self {
        Self {
            id: id.to_string(),
            role: Some(role.to_string()),
            parts: Some(Vec::new()),
            has_content: true,
            create_time: Some(NOV_14_2023),
        }
    }

    pub fn user(id: &str) -> Self {
        Self::with_role(id, "user")
    }

    pub fn assistant(id: &str) -> Self {
        Self::with_role(id, "assistant")
    }

    pub fn role(id: &str, role: &str) -> Self {
        Self::with_role(id, role)
    }

    /// A node with no message (e.g. the tree root)
    pub fn empty(id: &str) -> Self {
        Self { id: id.to_string(), role: None, parts: None, has_content: false, create_time: None }
    }

    /// Append a text part
    pub fn text(mut self, text: &str) -> Self {
        self.parts.get_or_insert_with(Vec::new).push(text.to_string());
        self
    }

    /// Omit `parts` from the content object
    pub fn without_parts(mut self) -> Self {
        self.parts = None;
        self
    }

    /// Set `content` to null
    pub fn without_content(mut self) -> Self {
        self.has_content = false;
        self
    }

    pub fn create_time(mut self, create_time: f64) -> Self {
        self.create_time = Some(create_time);
        self
    }

    pub fn without_create_time(mut self) -> Self {
        self.create_time = None;
        self
    }

    pub fn to_json(&self) -> Value {
        let Some(role) = &self.role else {
            return json!({"id": self.id, "message": null, "parent": null, "children": []});
        };

        let content = if self.has_content {
            let mut content = json!({"content_type": "text"});
            if let Some(parts) = &self.parts {
                content["parts"] = json!(parts);
            }
            content
        } else {
            Value::Null
        };

        json!({
            "id": self.id,
            "message": {
                "id": format!("msg-{}", self.id),
                "author": {"role": role, "name": null, "metadata": {}},
                "create_time": self.create_time,
                "update_time": null,
                "content": content,
                "status": "finished_successfully",
                "end_turn": null,
                "weight": 1.0,
                "metadata": {},
                "recipient": "all",
                "channel": null
            },
            "parent": null,
            "children": []
        })
    }
}

/// An export resembling a small real history: several conversations over three days,
/// a system prompt, a tool call and a root node
pub fn realistic_export() -> TempDir {
    ExportBuilder::new()
        .with_conversation(
            ConversationBuilder::new("c1")
                .title("Rust lifetimes")
                .with_node(NodeBuilder::empty("root"))
                .with_node(
                    NodeBuilder::role("sys", "system").text("You are a helpful assistant."),
                )
                .with_node(
                    NodeBuilder::user("u1")
                        .text("Why does the borrow checker reject this?")
                        .create_time(NOV_14_2023),
                )
                .with_node(
                    NodeBuilder::assistant("a1")
                        .text("The reference outlives the value it points to.")
                        .create_time(NOV_14_2023 + 30.0),
                ),
        )
        .with_conversation(
            ConversationBuilder::new("c2")
                .title("Weather")
                .with_node(NodeBuilder::user("u1").text("Weather in Oslo?").create_time(JAN_1_2024))
                .with_node(
                    NodeBuilder::role("t1", "tool")
                        .text("{\"temp\": -3}")
                        .create_time(JAN_1_2024 + 5.0),
                )
                .with_node(
                    NodeBuilder::assistant("a1")
                        .text("It is -3°C in Oslo.")
                        .create_time(JAN_1_2024 + 86_400.0),
                ),
        )
        .build()
}
