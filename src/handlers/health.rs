use axum::{extract::State, response::Json};
use serde_json::json;

use crate::AppState;

pub async fn health_checker_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let filler = state.orchestrator.config();

    Json(json!({
        "status": "success",
        "message": "Concurrent map misuse demo is running",
        "port": state.env.port,
        "filler": {
            "threads": filler.threads,
            "target": filler.target,
            "initial": filler.initial,
            "timeout_secs": filler.timeout.as_secs()
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
