use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use pedsdx::error::AppError;
use pedsdx::reasoning::protocol::protocol_route;
use pedsdx::reasoning::{
    resolve_protocol_route, validate_snapshot, AgeGroup, CompletionState, ConditionId,
    Differential, InterventionView, ProtocolPhase, ReasoningEngine, RequiredTestView,
    ShockAnalysis, ShockClassifier, SurveySnapshot,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) snapshot: SurveySnapshot,
    #[serde(default)]
    pub(crate) completed_interventions: BTreeSet<String>,
    #[serde(default)]
    pub(crate) completed_tests: BTreeSet<String>,
    #[serde(default)]
    pub(crate) launched: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) assessed_at: DateTime<Utc>,
    pub(crate) age_group: AgeGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) top_differential: Option<ConditionId>,
    pub(crate) differentials: Vec<Differential>,
    pub(crate) protocol_route: &'static str,
    pub(crate) care_plan: String,
    pub(crate) protocol_phase: ProtocolPhase,
    pub(crate) protocol_phase_label: &'static str,
    pub(crate) protocol_launch_enabled: bool,
    pub(crate) immediate_interventions: Vec<InterventionView>,
    pub(crate) urgent_interventions: Vec<InterventionView>,
    pub(crate) confirmatory_interventions: Vec<InterventionView>,
    pub(crate) required_tests: Vec<RequiredTestView>,
    pub(crate) all_immediate_complete: bool,
    pub(crate) all_stat_tests_sent: bool,
    pub(crate) age_considerations: Vec<String>,
    pub(crate) shock_analyses: Vec<ShockAnalysis>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ShockResponse {
    pub(crate) assessed_at: DateTime<Utc>,
    pub(crate) in_shock: bool,
    pub(crate) analyses: Vec<ShockAnalysis>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProtocolRouteResponse {
    pub(crate) condition_id: ConditionId,
    pub(crate) route: &'static str,
    /// False when the general resuscitation route was used as a fallback.
    pub(crate) explicit: bool,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessments/reason",
            axum::routing::post(reason_endpoint),
        )
        .route(
            "/api/v1/assessments/shock",
            axum::routing::post(shock_endpoint),
        )
        .route(
            "/api/v1/protocols/:condition_id",
            axum::routing::get(protocol_endpoint),
        )
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

pub(crate) async fn reason_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest {
        snapshot,
        completed_interventions,
        completed_tests,
        launched,
    } = payload;
    validate_snapshot(&snapshot)?;

    let completion = CompletionState {
        completed_interventions,
        completed_tests,
    };
    let output =
        ReasoningEngine::standard().reason_with_progress(&snapshot, &completion, launched);
    let top_differential = output.top_differential().map(|entry| entry.id);
    debug!(
        top = ?top_differential,
        phase = output.protocol_phase.label(),
        "assessment reasoned"
    );

    Ok(Json(AssessmentResponse {
        assessed_at: Utc::now(),
        age_group: output.age_group,
        top_differential,
        differentials: state.assessment.visible(output.differentials),
        protocol_route: output.protocol_route,
        care_plan: output.care_plan,
        protocol_phase: output.protocol_phase,
        protocol_phase_label: output.protocol_phase.label(),
        protocol_launch_enabled: output.protocol_launch_enabled,
        immediate_interventions: output.immediate_interventions,
        urgent_interventions: output.urgent_interventions,
        confirmatory_interventions: output.confirmatory_interventions,
        required_tests: output.required_tests,
        all_immediate_complete: output.all_immediate_complete,
        all_stat_tests_sent: output.all_stat_tests_sent,
        age_considerations: output.age_considerations,
        shock_analyses: output.shock_analyses,
    }))
}

pub(crate) async fn shock_endpoint(
    Json(snapshot): Json<SurveySnapshot>,
) -> Result<Json<ShockResponse>, AppError> {
    validate_snapshot(&snapshot)?;

    let classifier = ShockClassifier;
    Ok(Json(ShockResponse {
        assessed_at: Utc::now(),
        in_shock: classifier.in_shock(&snapshot),
        analyses: classifier.differentiate(&snapshot),
    }))
}

pub(crate) async fn protocol_endpoint(
    Path(condition_id): Path<String>,
) -> Result<Json<ProtocolRouteResponse>, AppError> {
    let condition: ConditionId = condition_id.parse()?;

    Ok(Json(ProtocolRouteResponse {
        condition_id: condition,
        route: resolve_protocol_route(condition),
        explicit: protocol_route(condition).is_some(),
    }))
}
