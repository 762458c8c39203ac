use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Text and dates pulled out of an export, prior to tokenization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMessages {
    pub user_messages: Vec<String>,
    pub assistant_messages: Vec<String>,
    pub message_dates: Vec<NaiveDate>,
}

impl ExtractedMessages {
    /// Number of distinct UTC calendar days with at least one timestamped message
    pub fn unique_days(&self) -> usize {
        self.message_dates.iter().collect::<HashSet<_>>().len()
    }
}

/// Per-message token counts, one entry per non-empty message string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTotals {
    pub user_token_counts: Vec<usize>,
    pub assistant_token_counts: Vec<usize>,
}

impl TokenTotals {
    pub fn total_user_tokens(&self) -> usize {
        self.user_token_counts.iter().sum()
    }

    pub fn total_assistant_tokens(&self) -> usize {
        self.assistant_token_counts.iter().sum()
    }
}

/// Final cost estimate for an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub total_input_tokens: usize,
    pub total_output_tokens: usize,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
    pub days_of_use: usize,
    pub average_cost_per_day: f64,
    pub average_cost_per_month: f64,
}

/// Token and day counts print as integers, money as the shortest round-trip float
/// (always with a decimal point or exponent, e.g. `1.0`, `5e-6`).
impl fmt::Display for CostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Input Tokens: {}", self.total_input_tokens)?;
        writeln!(f, "Total Output Tokens: {}", self.total_output_tokens)?;
        writeln!(f, "Total Input Cost: {:?}", self.input_cost)?;
        writeln!(f, "Total Output Cost: {:?}", self.output_cost)?;
        writeln!(f, "Total Cost: {:?}", self.total_cost)?;
        writeln!(f, "Days of Use: {}", self.days_of_use)?;
        writeln!(f, "Average Cost Per Day: {:?}", self.average_cost_per_day)?;
        write!(f, "Average Cost Per Month: {:?}", self.average_cost_per_month)
    }
}
