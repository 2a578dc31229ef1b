//! Axum HTTP server: the presentation layer's door into the engine.
//!
//! All endpoints are stateless — each request runs against the pure
//! simulation entry points and returns JSON.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/theory` | Closed-form and exact probabilities for a grid size |
//! | POST | `/trial` | Run one trial, returning both full paths |
//! | POST | `/analysis` | Run a batch and return the aggregate report |
//!
//! Requests may carry a `seed`; when omitted one is drawn fresh, and the
//! seed actually used is echoed back so the run can be reproduced.

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::constants::point_label;
use crate::error::SimError;
use crate::simulation::{
    build_report, exact_meeting_probability, meeting_point_weights, run_analysis,
    run_trial_with_seed, theoretical_probability, AnalysisReport,
};
use crate::types::meeting_points;

pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/theory", get(handle_theory))
        .route("/trial", post(handle_run_trial))
        .route("/analysis", post(handle_run_analysis))
        .layer(cors)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct TheoryQuery {
    grid_size: usize,
}

#[derive(Deserialize)]
struct TrialRequest {
    grid_size: usize,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct AnalysisRequest {
    grid_size: usize,
    trials: usize,
    #[serde(default)]
    seed: Option<u64>,
}

type ErrorBody = (StatusCode, Json<serde_json::Value>);

fn error_response(status: StatusCode, msg: &str) -> ErrorBody {
    (status, Json(serde_json::json!({ "error": msg })))
}

fn bad_request(err: &SimError) -> ErrorBody {
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_theory(
    Query(params): Query<TheoryQuery>,
) -> Result<Json<serde_json::Value>, ErrorBody> {
    let n = params.grid_size;
    if n < 1 {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "grid_size must be >= 1",
        ));
    }

    let weights = meeting_point_weights(n);
    let total = exact_meeting_probability(n);
    let points: Vec<serde_json::Value> = meeting_points(n)
        .iter()
        .enumerate()
        .map(|(i, p)| {
            serde_json::json!({
                "label": point_label(i),
                "x": p.x,
                "y": p.y,
                "weight": weights[i],
                "conditional": weights[i] / total,
            })
        })
        .collect();

    Ok(Json(serde_json::json!({
        "grid_size": n,
        "theoretical_probability": theoretical_probability(n),
        "exact_probability": total,
        "points": points,
    })))
}

async fn handle_run_trial(
    Json(req): Json<TrialRequest>,
) -> Result<Json<serde_json::Value>, ErrorBody> {
    let seed = req.seed.unwrap_or_else(rand::random);
    let trial = run_trial_with_seed(req.grid_size, seed).map_err(|e| bad_request(&e))?;

    let meeting_point = trial.meeting_point_index().map(|i| {
        let p = trial.near_final();
        serde_json::json!({
            "index": i,
            "label": point_label(i),
            "x": p.x,
            "y": p.y,
        })
    });

    Ok(Json(serde_json::json!({
        "grid_size": trial.grid_size,
        "seed": seed,
        "met": trial.met,
        "steps_taken": trial.steps_taken,
        "near_path": trial.near_path,
        "far_path": trial.far_path,
        "meeting_point": meeting_point,
        "final_distance": trial.near_final().distance(&trial.far_final()),
    })))
}

async fn handle_run_analysis(
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, ErrorBody> {
    let seed = req.seed.unwrap_or_else(rand::random);
    // A large batch is CPU-bound rayon work; keep it off the async workers.
    let agg = tokio::task::spawn_blocking(move || run_analysis(req.grid_size, req.trials, seed))
        .await
        .map_err(|_| {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "analysis task failed",
            )
        })?
        .map_err(|e| bad_request(&e))?;

    Ok(Json(build_report(&agg)))
}
