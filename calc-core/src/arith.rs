//! The four arithmetic operations exposed by the API.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

/// Request body of every arithmetic endpoint: `{"a": <number>, "b": <number>}`.
///
/// A missing operand reads as `0.0`; `A` and `B` are accepted as key spellings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Operands {
    #[serde(default, alias = "A")]
    pub a: f64,
    #[serde(default, alias = "B")]
    pub b: f64,
}

impl Operands {
    /// Decode operands from a raw JSON body.
    ///
    /// # Errors
    /// Returns the underlying [`serde_json::Error`] if the body is empty, not
    /// a JSON object, or holds a non-numeric operand.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Response body of every arithmetic endpoint: `{"ans": <number>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Answer {
    #[serde(serialize_with = "serialize_number")]
    pub ans: f64,
}

/// Largest magnitude below which every whole `f64` is an exact `i64`.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Writes whole finite values without a fraction (`5`, not `5.0`).
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation, clippy::float_cmp)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INT_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// An arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in route order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The path segment naming this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation with plain IEEE 754 semantics.
    ///
    /// # Errors
    /// Returns [`CoreError::DivideByZero`] for [`Operation::Divide`] when `b`
    /// compares equal to `0.0` (which includes `-0.0`).
    #[allow(clippy::float_cmp)]
    pub fn apply(self, Operands { a, b }: Operands) -> Result<Answer, CoreError> {
        let ans = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CoreError::DivideByZero);
                }
                a / b
            }
        };
        Ok(Answer { ans })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("unknown operation '{s}'"))
    }
}
