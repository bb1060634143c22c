use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Worker batch did not complete within {timeout:?}")]
    TimeoutExceeded { timeout: Duration },

    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    #[error("Worker task failed: {completed} of {expected} tasks completed")]
    TaskFailed { completed: usize, expected: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<rayon::ThreadPoolBuildError> for AppError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        AppError::WorkerPool(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::TimeoutExceeded { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::WorkerPool(_)
            | AppError::TaskFailed { .. }
            | AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let response = AppError::TimeoutExceeded {
            timeout: Duration::from_millis(5),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_task_failure_message() {
        let err = AppError::TaskFailed {
            completed: 3,
            expected: 10,
        };
        assert_eq!(
            err.to_string(),
            "Worker task failed: 3 of 10 tasks completed"
        );
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
