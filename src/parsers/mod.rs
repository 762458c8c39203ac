//! Loader and validator for `conversations.json` exports
//!
//! # Error Handling Strategy
//!
//! Two tiers:
//!
//! - **Document failures**: a missing or unreadable file, invalid JSON, or a top-level value
//!   that is not an array are fatal and returned as `anyhow` errors with the path attached.
//!
//! - **Record failures**: each conversation is validated on its own. A record that does not
//!   match the schema is logged (with its content and the serde error) and skipped; the
//!   remaining records are still processed. There is no failure-rate threshold.

pub mod export;

pub use export::{ParsedExport, load_export, parse_conversations, parse_export_file};
