//! Axum HTTP server: the boundary consumed by the browser frontends.
//!
//! The question bank and seeded history are immutable and shared as `Arc`;
//! live sessions sit in a shared map keyed by id. Sessions exist only in
//! memory — restarting the process discards them all.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/questions` | Question count + full ordered list |
//! | GET | `/questions/:index` | One question, `question: null` past the end |
//! | POST | `/sessions` | Create a session |
//! | GET | `/sessions/:id` | Phase snapshot |
//! | POST | `/sessions/:id/answers` | Record one score |
//! | GET | `/sessions/:id/decision` | Total + recommendation |
//! | DELETE | `/sessions/:id` | Discard the session |
//! | GET | `/history` | Ledger panel mock history |
//! | POST | `/convert/merit` | Always 503 (maintenance notice) |
//! | POST | `/convert/sin` | Always 200 "Hello World!" |
//!
//! Requesting a question index at or past the end of the bank is the designed
//! end-of-flow signal: the handler answers 200 with `question: null` and the
//! frontend switches to the decision view. It is never an error.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;
use uuid::Uuid;

use crate::ledger::{seed_history, LedgerEntry, MERIT_CONVERSION_NOTICE, SIN_CONVERSION_REPLY};
use crate::question_bank::QuestionBank;
use crate::session::Session;

/// Shared server state: immutable bank + history, live session map.
#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub history: Arc<Vec<LedgerEntry>>,
}

impl AppState {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            history: Arc::new(seed_history()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/questions", get(handle_list_questions))
        .route("/questions/:index", get(handle_get_question))
        .route("/sessions", post(handle_create_session))
        .route(
            "/sessions/:id",
            get(handle_get_session).delete(handle_discard_session),
        )
        .route("/sessions/:id/answers", post(handle_record_answer))
        .route("/sessions/:id/decision", get(handle_get_decision))
        .route("/history", get(handle_get_history))
        .route("/convert/merit", post(handle_convert_merit))
        .route("/convert/sin", post(handle_convert_sin))
        .layer(cors)
        .with_state(state)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct RecordAnswerRequest {
    score: i32,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

// ── Health & questions ──────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_list_questions(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.bank.len(),
        "questions": state.bank.questions(),
    }))
}

async fn handle_get_question(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<serde_json::Value> {
    // None past the end is the end-of-flow cue, answered with 200.
    Json(serde_json::json!({
        "index": index,
        "total_questions": state.bank.len(),
        "question": state.bank.question_at(index),
    }))
}

// ── Session flow ────────────────────────────────────────────────────

async fn handle_create_session(State(state): State<AppState>) -> impl IntoResponse {
    let id = Uuid::new_v4();
    let session = Session::new(state.bank.len());
    state.sessions.write().await.insert(id, session);
    debug!("Created session {id}");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "session_id": id,
            "question_count": state.bank.len(),
        })),
    )
}

async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "session not found"))?;

    Ok(Json(serde_json::json!({
        "session_id": id,
        "phase": session.phase().as_str(),
        "current_step": session.current_step(),
        "question_count": state.bank.len(),
        "total": session.current_total(),
        "complete": session.is_complete(),
    })))
}

async fn handle_record_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecordAnswerRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "session not found"))?;

    if !session.record_answer(req.score) {
        return Err(error_response(
            StatusCode::CONFLICT,
            "session already complete",
        ));
    }

    // The next question (or null) is the frontend's cue for what to render.
    Ok(Json(serde_json::json!({
        "current_step": session.current_step(),
        "complete": session.is_complete(),
        "question": state.bank.question_at(session.current_step()),
    })))
}

async fn handle_get_decision(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "session not found"))?;

    let decision = session.decide();
    Ok(Json(serde_json::json!({
        "session_id": id,
        "total": session.current_total(),
        "decision": decision.label(),
        "decision_code": decision,
        "complete": session.is_complete(),
    })))
}

async fn handle_discard_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    match state.sessions.write().await.remove(&id) {
        Some(_) => {
            debug!("Discarded session {id}");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(error_response(StatusCode::NOT_FOUND, "session not found")),
    }
}

// ── Ledger panel ────────────────────────────────────────────────────

async fn handle_get_history(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.history.len(),
        "entries": state.history.as_ref(),
    }))
}

async fn handle_convert_merit() -> (StatusCode, Json<serde_json::Value>) {
    error_response(StatusCode::SERVICE_UNAVAILABLE, MERIT_CONVERSION_NOTICE)
}

async fn handle_convert_sin() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": SIN_CONVERSION_REPLY }))
}
