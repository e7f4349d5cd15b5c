/// Errors produced by the `calc-core` crate.
///
/// The `Display` text of each variant is the message shown to API clients.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A division was requested with a divisor of exactly zero.
    #[error("Can't divide by zero")]
    DivideByZero,

    /// The supplied API key does not have the fixed key length.
    #[error("API key is incorrect length")]
    KeyWrongLength { len: usize },

    /// The supplied API key has the right shape but was never issued.
    #[error("invalid API key")]
    UnknownKey,

    /// The operating system random source could not produce bytes.
    #[error("random source unavailable: {0}")]
    EntropyUnavailable(String),
}
