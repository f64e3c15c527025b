// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity routes for authenticated users.

use crate::eligibility::Rule;
use crate::error::{AppError, Result};
use crate::extract::Validated;
use crate::middleware::auth::AuthUser;
use crate::models::requests::FillPositionRequest;
use crate::models::{
    Activity, ActivityPatch, ActivityType, CompetitionPatch, CreateCompetitionRequest,
    NewActivity, User,
};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Activity routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities))
        .route(
            "/api/activities/{id}",
            get(get_activity).delete(delete_activity),
        )
        .route("/api/activities/{id}/fill", post(fill_position))
        .route("/api/activities/{id}/eligibility", post(check_eligibility))
        .route("/api/trainings", post(create_training))
        .route("/api/trainings/{id}", put(update_training))
        .route("/api/competitions", post(create_competition))
        .route("/api/competitions/{id}", put(update_competition))
        .route("/api/eligible/{kind}", post(eligible_activities))
}

// ─── Listing ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub activity_type: Option<ActivityType>,
}

async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Activity>> {
    Json(state.activity_service.list(query.activity_type))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Activity>> {
    Ok(Json(state.activity_service.get(id)?))
}

// ─── Eligibility ─────────────────────────────────────────────

/// Result of checking one user against one activity.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EligibilityResponse {
    pub eligible: bool,
    /// Name of the first rule the user failed, if any.
    pub failed_rule: Option<Rule>,
}

async fn check_eligibility(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Validated(user): Validated<User>,
) -> Result<Json<EligibilityResponse>> {
    let failed_rule = state.activity_service.check_eligibility(&user, id)?;
    Ok(Json(EligibilityResponse {
        eligible: failed_rule.is_none(),
        failed_rule,
    }))
}

/// Every activity of `kind` the posted user may join.
async fn eligible_activities(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Validated(user): Validated<User>,
) -> Result<Json<Vec<Activity>>> {
    let activity_type = parse_kind(&kind)?;
    Ok(Json(state.activity_service.compatible(&user, activity_type)))
}

fn parse_kind(kind: &str) -> Result<ActivityType> {
    match kind {
        "training" | "trainings" => Ok(ActivityType::Training),
        "competition" | "competitions" => Ok(ActivityType::Competition),
        other => Err(AppError::NotFound(format!("Unknown activity kind {}", other))),
    }
}

// ─── Creation ────────────────────────────────────────────────

async fn create_training(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
    Validated(request): Validated<NewActivity>,
) -> (StatusCode, Json<Activity>) {
    let activity = state
        .activity_service
        .create_training(caller.user_id, request);
    (StatusCode::CREATED, Json(activity))
}

async fn create_competition(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
    Validated(request): Validated<CreateCompetitionRequest>,
) -> (StatusCode, Json<Activity>) {
    let activity = state
        .activity_service
        .create_competition(caller.user_id, request);
    (StatusCode::CREATED, Json(activity))
}

// ─── Updates ─────────────────────────────────────────────────

async fn fill_position(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Validated(request): Validated<FillPositionRequest>,
) -> Result<Json<Activity>> {
    Ok(Json(
        state.activity_service.fill_position(id, request.position)?,
    ))
}

async fn update_training(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<u64>,
    Validated(patch): Validated<ActivityPatch>,
) -> Result<Json<Activity>> {
    Ok(Json(
        state
            .activity_service
            .update_training(caller.user_id, id, patch)?,
    ))
}

async fn update_competition(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<u64>,
    Validated(patch): Validated<CompetitionPatch>,
) -> Result<Json<Activity>> {
    Ok(Json(
        state
            .activity_service
            .update_competition(caller.user_id, id, patch)?,
    ))
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.activity_service.delete(caller.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}
