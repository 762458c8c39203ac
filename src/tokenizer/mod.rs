//! Token counting
//!
//! The estimator only needs the number of tokens in a string, so the encoder sits behind
//! [`TokenCounter`]. [`BpeTokenizer`] is the production implementation backed by the
//! `o200k_base` byte-pair encoding.

use tiktoken_rs::CoreBPE;

use crate::error::EstimateError;

/// Name of the encoding used for cost estimates
pub const ENCODING_NAME: &str = "o200k_base";

pub trait TokenCounter {
    /// Number of tokens `text` encodes to
    fn count_tokens(&self, text: &str) -> Result<usize, EstimateError>;
}

/// Byte-pair-encoding tokenizer with a fixed vocabulary
///
/// Text containing one of the encoding's special-token strings (such as `<|endoftext|>`)
/// is rejected rather than encoded.
pub struct BpeTokenizer {
    bpe: CoreBPE,
    special_tokens: Vec<String>,
}

impl BpeTokenizer {
    /// Build the `o200k_base` encoder
    ///
    /// The vocabulary ships inside the tokenizer crate; no network access is needed.
    pub fn o200k_base() -> Result<Self, EstimateError> {
        let bpe =
            tiktoken_rs::o200k_base().map_err(|e| EstimateError::Tokenizer(e.to_string()))?;
        let mut special_tokens: Vec<String> =
            bpe.special_tokens().into_iter().map(String::from).collect();
        special_tokens.sort();
        Ok(Self { bpe, special_tokens })
    }

    /// Encode `text` to token ids
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::DisallowedSpecialToken`] if `text` contains a special-token
    /// string.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>, EstimateError> {
        if let Some(token) = self.special_tokens.iter().find(|t| text.contains(t.as_str())) {
            return Err(EstimateError::DisallowedSpecialToken(token.clone()));
        }
        Ok(self.bpe.encode_ordinary(text).into_iter().map(|rank| rank as u32).collect())
    }
}

impl TokenCounter for BpeTokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize, EstimateError> {
        self.encode(text).map(|tokens| tokens.len())
    }
}
