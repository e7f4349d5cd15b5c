//! Axum route handlers for the calc gateway.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post, MethodRouter},
    Form, Json, Router,
};
use calc_core::{Answer, KeyStore, Operands, Operation};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::KeyGating, error::GatewayError, pages};

// ── Shared state ─────────────────────────────────────────────────────────────

type Store = Arc<KeyStore>;

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeyRequest {
    #[serde(default)]
    pub email: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given key store.
///
/// `gating` decides which arithmetic routes are mounted: `/{op}/{api_key}`
/// when keys are required, `/{op}` otherwise. Never both.
pub fn create_router(store: Store, gating: KeyGating) -> Router {
    let mut router = Router::new()
        .route("/", get(move || home(gating)))
        .route("/getkey", post(get_key))
        .route("/health", get(health));

    for op in Operation::ALL {
        router = match gating {
            KeyGating::Required => router.route(&format!("/{op}/{{api_key}}"), gated(op)),
            KeyGating::Disabled => router.route(&format!("/{op}"), open(op)),
        };
    }

    router
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn gated(op: Operation) -> MethodRouter<Store> {
    post(move |State(store): State<Store>, Path(api_key): Path<String>, body: Bytes| async move {
        calculate_with_key(&store, op, &api_key, &body)
    })
}

fn open(op: Operation) -> MethodRouter<Store> {
    post(move |body: Bytes| async move { calculate(op, &body) })
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /` — landing page with the key request form.
pub async fn home(gating: KeyGating) -> Html<String> {
    Html(pages::home(gating).into_string())
}

/// `POST /getkey` — issue a key for the submitted email, or show the one it
/// already has.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the form cannot be parsed or
/// the `email` field is missing or blank.
pub async fn get_key(
    State(store): State<Store>,
    form: Result<Form<KeyRequest>, FormRejection>,
) -> Result<Html<String>, GatewayError> {
    let Form(body) = form.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let email = body.email.trim();
    if email.is_empty() {
        return Err(GatewayError::InvalidRequest("email is required".to_owned()));
    }
    let issued = store.issue_or_get(email);
    Ok(Html(pages::issued_key(&issued).into_string()))
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

/// Validate `api_key`, then decode and compute. The body is not parsed
/// unless the key is valid.
///
/// # Errors
/// Returns [`GatewayError::Core`] for key validation failures and division by
/// zero, and [`GatewayError::Decode`] for malformed bodies.
pub fn calculate_with_key(
    store: &KeyStore,
    op: Operation,
    api_key: &str,
    body: &[u8],
) -> Result<Json<Answer>, GatewayError> {
    if let Err(e) = store.ensure_valid(api_key) {
        tracing::debug!(%op, error = %e, "rejected api key");
        return Err(e.into());
    }
    calculate(op, body)
}

/// Decode operands from `body` and apply `op`.
///
/// # Errors
/// Returns [`GatewayError::Decode`] for malformed bodies and
/// [`GatewayError::Core`] for division by zero.
pub fn calculate(op: Operation, body: &[u8]) -> Result<Json<Answer>, GatewayError> {
    let operands = Operands::decode(body)?;
    Ok(Json(op.apply(operands)?))
}
