//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calc_core::CoreError;

/// Errors that can occur during gateway request handling.
///
/// Every variant is a client error and renders as a `400` plain-text body.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// Key validation or arithmetic failed in the core layer.
    #[error("400 - {0}")]
    Core(#[from] CoreError),

    /// The JSON request body could not be decoded into operands.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The request is missing a required value.
    #[error("400 - {0}")]
    InvalidRequest(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(resp: Response) -> String {
        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[tokio::test]
    async fn core_errors_render_fixed_messages() {
        let cases = [
            (CoreError::DivideByZero, "400 - Can't divide by zero"),
            (CoreError::KeyWrongLength { len: 3 }, "400 - API key is incorrect length"),
            (CoreError::UnknownKey, "400 - invalid API key"),
        ];
        for (err, expected) in cases {
            let resp = GatewayError::from(err).into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_text(resp).await, expected);
        }
    }

    #[tokio::test]
    async fn decode_error_passes_parser_text_through() {
        let parse_err = match serde_json::from_str::<serde_json::Value>("{") {
            Ok(v) => panic!("expected parse failure, got {v}"),
            Err(e) => e,
        };
        let expected = parse_err.to_string();
        let resp = GatewayError::from(parse_err).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(resp).await, expected);
    }

    #[test]
    fn gateway_error_display_includes_message() {
        let err = GatewayError::InvalidRequest("email is required".to_owned());
        assert_eq!(err.to_string(), "400 - email is required");
    }
}
