//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::Value;
use tracing::{info, warn};

use crate::costing::{CostingError, CostingOptions};
use crate::domain::RoutingMode;
use crate::navigation::NavigationConfig;
use crate::routing::{RouteOptions, RoutingBackend};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", post(create_route).delete(clear_routes))
        .route("/routes/:id", get(get_route).delete(delete_route))
        .route("/preferences/offline", put(set_offline_mode))
        .route(
            "/profiles/:mode",
            get(get_profile).put(put_profile).delete(reset_profile),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compute a route, adapt it for navigation and store it.
async fn create_route(
    State(state): State<AppState>,
    Json(req): Json<CreateRouteRequest>,
) -> Result<Json<CreateRouteResponse>, AppError> {
    let costing = match &req.options {
        Some(fields) => Some(parse_profile(req.mode, fields)?),
        None => state.adapters.read().await.for_mode(req.mode).options().cloned(),
    };

    let mut options = RouteOptions::new();
    if let Some(units) = req.units {
        options = options.with_units(units);
    }
    if let Some(costing) = costing {
        options = options.with_costing(costing);
    }

    let route = state
        .routing
        .compute_route(req.origin, req.destination, req.mode, &options)
        .await;

    let nav_route = state.adapters.read().await.for_mode(req.mode).adapt(&route);
    let steps = nav_route.steps.len();
    let route_id = state.routes.store(nav_route).await;

    info!(%route_id, mode = %req.mode, legs = route.legs.len(), steps, "route stored");

    Ok(Json(CreateRouteResponse {
        route_id,
        distance: route.distance,
        duration: route.duration,
        units: route.units,
        legs: route.legs.len(),
        steps,
    }))
}

/// Fetch a stored route.
async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = state.routes.get(&id).await.ok_or_else(|| AppError::NotFound {
        message: format!("Route {id} not found"),
    })?;

    Ok(Json(RouteResponse {
        route_id: id,
        route: route.as_ref().clone(),
        config: NavigationConfig::DEFAULT,
    }))
}

/// Remove a stored route.
async fn delete_route(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.routes.remove(&id).await;
    StatusCode::NO_CONTENT
}

/// Remove every stored route.
async fn clear_routes(State(state): State<AppState>) -> StatusCode {
    state.routes.clear();
    StatusCode::NO_CONTENT
}

/// Toggle offline routing. Applies to requests made after this returns.
async fn set_offline_mode(
    State(state): State<AppState>,
    Json(req): Json<OfflineModeRequest>,
) -> Json<OfflineModeRequest> {
    state.preferences().set_offline_mode(req.offline);
    info!(offline = req.offline, "offline mode changed");
    Json(OfflineModeRequest {
        offline: state.preferences().offline_mode(),
    })
}

/// Show a mode's costing profile.
async fn get_profile(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<Json<ProfileResponse>, AppError> {
    let mode = parse_mode(&mode)?;
    profile_response(&state, mode).await.map(Json)
}

/// Replace a mode's costing profile with the given field object.
async fn put_profile(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Json(fields): Json<Value>,
) -> Result<Json<ProfileResponse>, AppError> {
    let mode = parse_mode(&mode)?;
    let options = parse_profile(mode, &fields)?;
    state.adapters.write().await.set_options_for_mode(mode, options);
    profile_response(&state, mode).await.map(Json)
}

/// Restore a mode's default costing profile.
async fn reset_profile(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<StatusCode, AppError> {
    let mode = parse_mode(&mode)?;
    state.adapters.write().await.reset_options_for_mode(mode);
    Ok(StatusCode::NO_CONTENT)
}

async fn profile_response(state: &AppState, mode: RoutingMode) -> Result<ProfileResponse, AppError> {
    let adapters = state.adapters.read().await;
    let adapter = adapters.for_mode(mode);
    let costing = adapter
        .effective_options()
        .to_costing_json()
        .map_err(|e| AppError::Internal {
            message: e.to_string(),
        })?;

    Ok(ProfileResponse {
        mode,
        customized: adapter.options().is_some(),
        costing,
    })
}

fn parse_mode(mode: &str) -> Result<RoutingMode, AppError> {
    RoutingMode::parse(mode).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown routing mode: {mode}"),
    })
}

fn parse_profile(mode: RoutingMode, fields: &Value) -> Result<CostingOptions, AppError> {
    Ok(CostingOptions::from_stored_json(
        mode.as_str(),
        &fields.to_string(),
    )?)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<CostingError> for AppError {
    fn from(e: CostingError) -> Self {
        AppError::BadRequest {
            message: format!("Invalid costing options: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
