//! Environment-driven gateway configuration.

use std::{fmt, net::SocketAddr, str::FromStr};

/// Listen address used when `CALC_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Environment variable holding the listen address.
pub const LISTEN_ADDR_VAR: &str = "CALC_LISTEN_ADDR";

/// Environment variable selecting the [`KeyGating`] policy.
pub const KEY_GATING_VAR: &str = "CALC_KEY_GATING";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue { var: &'static str, value: String, reason: String },
}

/// Whether the arithmetic endpoints require an API key.
///
/// One policy applies to the whole process: `Required` mounts only
/// `/{op}/{api_key}`, `Disabled` mounts only `/{op}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyGating {
    #[default]
    Required,
    Disabled,
}

impl FromStr for KeyGating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "disabled" => Ok(Self::Disabled),
            other => Err(format!("expected 'required' or 'disabled', got '{other}'")),
        }
    }
}

impl fmt::Display for KeyGating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "required",
            Self::Disabled => "disabled",
        })
    }
}

/// Runtime configuration for the gateway binary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Key gating policy for the arithmetic endpoints.
    pub gating: KeyGating,
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = parse_var(&lookup, LISTEN_ADDR_VAR, DEFAULT_LISTEN_ADDR, |v| {
            v.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;
        let gating = parse_var(&lookup, KEY_GATING_VAR, "required", str::parse::<KeyGating>)?;
        Ok(Self { listen_addr, gating })
    }
}

fn parse_var<F, T, P>(
    lookup: &F,
    var: &'static str,
    default: &str,
    parse: P,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_owned());
    parse(&value).map_err(|reason| ConfigError::InvalidValue { var, value, reason })
}
