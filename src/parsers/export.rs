use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::models::Conversation;

/// Conversations accepted from an export, plus the number of records rejected
#[derive(Debug, Clone, Default)]
pub struct ParsedExport {
    pub conversations: Vec<Conversation>,
    pub skipped: usize,
}

/// Read an export file and return the raw records of its top-level array
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or its
/// top-level value is not an array.
pub fn load_export(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;

    let document: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    match document {
        Value::Array(records) => Ok(records),
        other => bail!(
            "Expected a JSON array of conversations in {}, found {}",
            path.display(),
            json_type_name(&other)
        ),
    }
}

/// Convert raw records into typed conversations
/// Malformed records are logged with their content and skipped; they never abort the run
pub fn parse_conversations(records: Vec<Value>) -> ParsedExport {
    let total = records.len();
    let mut parsed = ParsedExport::default();

    for (index, record) in records.iter().enumerate() {
        // Borrowed so the record is only rendered when it has to be reported
        match Conversation::deserialize(record) {
            Ok(conversation) => parsed.conversations.push(conversation),
            Err(e) => {
                warn!(record = index, "Failed to parse conversation: {}: {}", e, record);
                parsed.skipped += 1;
            }
        }
    }

    info!(
        "Parsed {} conversations ({} skipped of {})",
        parsed.conversations.len(),
        parsed.skipped,
        total
    );

    parsed
}

/// Load and validate an export file in one step
pub fn parse_export_file(path: &Path) -> Result<ParsedExport> {
    let records = load_export(path)?;
    Ok(parse_conversations(records))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
