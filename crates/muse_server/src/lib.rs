//! HTTP front door for the Muse generation gateway.
//!
//! Request/response translation only: JSON parsing, the health
//! short-circuit, CORS, and mapping the gateway's error taxonomy onto
//! status codes. All generation logic lives in `muse_gateway`.

mod config;

pub use config::{ServerConfig, ServerConfigBuilder};

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use muse_core::{GenerationRequest, HEALTH_MODE};
use muse_error::{MuseError, MuseErrorKind};
use muse_gateway::Gateway;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};

/// Shared front door state.
#[derive(Clone)]
pub struct AppState {
    /// The generation gateway.
    pub gateway: Arc<Gateway>,
}

/// Creates the front door router.
///
/// A single POST endpoint carries every mode; OPTIONS preflights are
/// answered by the CORS layer and any other method gets 405 from the
/// method router. Every response carries permissive cross-origin headers.
pub fn create_router(gateway: Arc<Gateway>) -> Router {
    let state = AppState { gateway };

    Router::new()
        .route("/", post(generate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The generation endpoint.
#[instrument(skip_all)]
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> impl IntoResponse {
    if request.mode() == HEALTH_MODE {
        let snapshot = state.gateway.health();
        return (StatusCode::OK, Json(json!({ "result": snapshot })));
    }

    match state.gateway.generate(&request).await {
        Ok(result) => {
            info!(mode = %request.mode(), "Request served");
            (StatusCode::OK, Json(json!(result)))
        }
        Err(err) => error_response(&err),
    }
}

/// Map a gateway error onto the wire contract.
///
/// Authorization failures get 402 so clients can render an upsell rather
/// than a failure state; validation is the caller's 400; everything else
/// (exhaustion, configuration, transport) is a 500.
fn error_response(err: &MuseError) -> (StatusCode, Json<serde_json::Value>) {
    let (status, label) = match err.kind() {
        MuseErrorKind::Validation(_) => (StatusCode::BAD_REQUEST, "invalid request"),
        MuseErrorKind::Authorization(_) => (StatusCode::PAYMENT_REQUIRED, "upgrade required"),
        MuseErrorKind::Exhaustion(_) => (StatusCode::INTERNAL_SERVER_ERROR, "generation failed"),
        MuseErrorKind::Candidate(_) | MuseErrorKind::Http(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    };
    (
        status,
        Json(json!({ "error": label, "message": err.to_string() })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use muse_error::{
        AuthorizationError, AuthorizationErrorKind, ExhaustionError, ValidationError,
    };

    #[test]
    fn test_validation_maps_to_400() {
        let err = MuseError::from(ValidationError::new("Missing prompt"));
        assert_eq!(error_response(&err).0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authorization_maps_to_402() {
        let err = MuseError::from(AuthorizationError::new(
            AuthorizationErrorKind::UpgradeRequired {
                tier: "novice".to_string(),
                mode: "video".to_string(),
            },
        ));
        let (status, body) = error_response(&err);
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body.0["error"], "upgrade required");
    }

    #[test]
    fn test_missing_credential_failure_maps_to_500() {
        // Missing credentials fold into candidate errors and fail closed;
        // at the front door that is an internal failure, never a skip.
        let err = MuseError::from(muse_error::CandidateError::new(
            "gemini-2.5-flash",
            "gemini credential not configured",
        ));
        let (status, body) = error_response(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0["error"], "internal error");
    }

    #[test]
    fn test_exhaustion_maps_to_500_with_last_failure() {
        let err = MuseError::from(ExhaustionError::new(
            "text",
            vec![muse_error::AttemptRecord {
                candidate: "gemini-2.5-flash".to_string(),
                message: "quota".to_string(),
            }],
        ));
        let (status, body) = error_response(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body.0["message"].as_str().unwrap();
        assert!(message.contains("gemini-2.5-flash"));
        assert!(message.contains("quota"));
    }
}
