use axum::extract::State;

use crate::{
    error::Result,
    models::{FillOutcome, FillReport},
    AppState,
};

/// Reproduces the race: tasks read the size and fill the gap without a lock.
pub async fn wrong_handler(State(state): State<AppState>) -> Result<String> {
    let report = state.orchestrator.run_unsynchronized().await?;
    Ok(render(&report))
}

/// Same batch, with each read-compute-insert sequence under the map's lock.
pub async fn right_handler(State(state): State<AppState>) -> Result<String> {
    let report = state.orchestrator.run_synchronized().await?;
    Ok(render(&report))
}

fn render(report: &FillReport) -> String {
    let outcome = report.outcome();
    if let FillOutcome::SizeMismatch { expected, actual } = outcome {
        tracing::warn!(
            strategy = report.strategy,
            "Final size {} differs from target {}",
            actual,
            expected
        );
    }
    outcome.to_string()
}
