use crate::infra::{AppState, DecisionState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use loan_decision::decision::{Decision, DecisionRequest};
use loan_decision::error::{decision_status, AppError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

/// Wire shape of a decision. Exactly one of the offer fields or `error_message` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DecisionResponse {
    pub(crate) loan_amount: Option<i64>,
    pub(crate) loan_period: Option<i32>,
    pub(crate) error_message: Option<String>,
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            loan_amount: decision.loan_amount(),
            loan_period: decision.loan_period(),
            error_message: decision.reason(),
        }
    }
}

pub(crate) fn with_decision_routes(state: DecisionState) -> Router {
    Router::new()
        .route("/loan/decision", post(decision_handler))
        .with_state(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn decision_handler(
    State(state): State<DecisionState>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let decision = state
        .engine
        .decide_with_clock(&request, state.clock.as_ref());

    let status = match &decision {
        Decision::Approved { .. } => StatusCode::OK,
        Decision::Rejected(error) => decision_status(error),
    };
    info!(
        status = status.as_u16(),
        approved = decision.is_approved(),
        "loan decision issued"
    );

    Ok((status, Json(DecisionResponse::from(&decision))).into_response())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
