//! Core logic for the calc service.
//!
//! Issues API keys per email address, validates caller-supplied keys, and
//! implements the four arithmetic operations behind the HTTP API. Nothing
//! here knows about HTTP.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod arith;
pub mod error;
pub mod key;
pub mod store;
pub mod validate;

pub use arith::{Answer, Operands, Operation};
pub use error::CoreError;
pub use key::{ApiKey, KEY_LENGTH};
pub use store::{Issued, KeyRecord, KeyStore};
pub use validate::Validation;
