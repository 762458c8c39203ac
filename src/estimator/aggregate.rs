use tracing::debug;

use crate::error::EstimateError;
use crate::models::{CostReport, ExtractedMessages, TokenTotals};
use crate::tokenizer::TokenCounter;

const TOKENS_PER_MILLION: f64 = 1_000_000.0;
const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Per-token rates in US dollars per million tokens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    /// Rate applied to user (input) tokens
    pub input_per_million: f64,
    /// Rate applied to assistant (output) tokens
    pub output_per_million: f64,
}

impl Pricing {
    pub const DEFAULT: Pricing = Pricing { input_per_million: 5.0, output_per_million: 15.0 };
}

impl Default for Pricing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tokenize every non-empty message. Empty strings get no entry at all.
///
/// # Errors
///
/// Stops at the first message the counter refuses to encode.
pub fn count_tokens(
    extracted: &ExtractedMessages,
    counter: &impl TokenCounter,
) -> Result<TokenTotals, EstimateError> {
    let count_all = |messages: &[String]| -> Result<Vec<usize>, EstimateError> {
        messages.iter().filter(|m| !m.is_empty()).map(|m| counter.count_tokens(m)).collect()
    };

    let totals = TokenTotals {
        user_token_counts: count_all(&extracted.user_messages)?,
        assistant_token_counts: count_all(&extracted.assistant_messages)?,
    };

    debug!(
        user_messages = totals.user_token_counts.len(),
        assistant_messages = totals.assistant_token_counts.len(),
        "Tokenized messages"
    );

    Ok(totals)
}

impl CostReport {
    /// Price the token totals and average the cost over `days_of_use`
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::NoActiveDays`] when `days_of_use` is zero.
    pub fn compute(
        totals: &TokenTotals,
        days_of_use: usize,
        pricing: &Pricing,
    ) -> Result<Self, EstimateError> {
        if days_of_use == 0 {
            return Err(EstimateError::NoActiveDays);
        }

        let total_input_tokens = totals.total_user_tokens();
        let total_output_tokens = totals.total_assistant_tokens();

        let input_cost = total_input_tokens as f64 * pricing.input_per_million / TOKENS_PER_MILLION;
        let output_cost =
            total_output_tokens as f64 * pricing.output_per_million / TOKENS_PER_MILLION;
        let total_cost = input_cost + output_cost;
        let average_cost_per_day = total_cost / days_of_use as f64;
        let average_cost_per_month = average_cost_per_day * DAYS_PER_YEAR / MONTHS_PER_YEAR;

        Ok(Self {
            total_input_tokens,
            total_output_tokens,
            input_cost,
            output_cost,
            total_cost,
            days_of_use,
            average_cost_per_day,
            average_cost_per_month,
        })
    }
}
