use thiserror::Error;

/// Errors produced while turning an export into a cost estimate.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// No message carried a usable `create_time`, so there is nothing to average over.
    #[error("No days of use found: cannot compute average cost per day")]
    NoActiveDays,

    /// A `create_time` could not be represented as a UTC date.
    #[error("Message timestamp out of range: {0}")]
    TimestampOutOfRange(f64),

    /// Message text contains a special-token string the encoder refuses to encode.
    #[error("Encountered text corresponding to disallowed special token {0:?}")]
    DisallowedSpecialToken(String),

    /// The BPE encoder could not be initialized.
    #[error("Failed to initialize tokenizer: {0}")]
    Tokenizer(String),
}
