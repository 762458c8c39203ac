//! Conversation Cost - Estimate API cost of a conversational-AI export
//!
//! This library reads a `conversations.json` export and estimates what its traffic would
//! cost at per-token API rates:
//!
//! - Parsing the export into typed [`Conversation`] records, skipping malformed ones
//! - Extracting user and assistant text and message dates from every mapping node
//! - Counting tokens with the `o200k_base` byte-pair encoding
//! - Pricing input and output tokens and averaging over the distinct days of use
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use conversation_cost::{BpeTokenizer, estimate_file};
//!
//! let tokenizer = BpeTokenizer::o200k_base()?;
//! let report = estimate_file(Path::new("conversations.json"), &tokenizer)?;
//! println!("Total cost: {}", report.total_cost);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod estimator;
pub mod models;
pub mod parsers;
pub mod tokenizer;
pub mod utils;

// Re-export commonly used types
pub use error::EstimateError;
pub use estimator::{Pricing, count_tokens, estimate_conversations, estimate_file, extract_messages};
pub use models::{Conversation, CostReport, ExtractedMessages, TokenTotals};
pub use parsers::{load_export, parse_conversations, parse_export_file};
pub use tokenizer::{BpeTokenizer, TokenCounter};
