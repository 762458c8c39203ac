//! Cost estimation over parsed conversations
//!
//! [`extract_messages`] walks every mapping node and buckets text by role,
//! [`count_tokens`] runs the text through a [`TokenCounter`], and
//! [`CostReport::compute`](crate::models::CostReport::compute) applies [`Pricing`] and
//! averages the total over the distinct days of use.

pub mod aggregate;
pub mod extract;

use std::path::Path;

use anyhow::Result;
use tracing::info;

pub use aggregate::{Pricing, count_tokens};
pub use extract::extract_messages;

use crate::models::{Conversation, CostReport};
use crate::parsers::parse_export_file;
use crate::tokenizer::TokenCounter;

/// Run extraction, tokenization and pricing over already-parsed conversations
pub fn estimate_conversations(
    conversations: &[Conversation],
    counter: &impl TokenCounter,
) -> Result<CostReport> {
    let extracted = extract_messages(conversations)?;
    info!(
        user_messages = extracted.user_messages.len(),
        assistant_messages = extracted.assistant_messages.len(),
        dated_messages = extracted.message_dates.len(),
        "Extracted messages"
    );

    let totals = count_tokens(&extracted, counter)?;
    let report = CostReport::compute(&totals, extracted.unique_days(), &Pricing::DEFAULT)?;
    Ok(report)
}

/// Estimate the cost of an export file end to end
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, a timestamp is out of range, a message
/// contains a special-token string, or no message carries a usable date. Malformed
/// conversations are skipped, not reported as errors.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use conversation_cost::{BpeTokenizer, estimate_file};
///
/// let tokenizer = BpeTokenizer::o200k_base()?;
/// let report = estimate_file(Path::new("conversations.json"), &tokenizer)?;
/// println!("{}", report);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn estimate_file(path: &Path, counter: &impl TokenCounter) -> Result<CostReport> {
    let parsed = parse_export_file(path)?;
    estimate_conversations(&parsed.conversations, counter)
}
