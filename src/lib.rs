//! Concurrent map misuse - a two-endpoint HTTP demo showing that size reads
//! and bulk inserts on a concurrent map are not atomic across calls.
//!
//! `GET /concurrenthashmapmisuse/wrong` tops a map up from several workers
//! using an unguarded size read, and usually overshoots. `GET
//! /concurrenthashmapmisuse/right` does the same under a per-map lock and
//! always lands on the target.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<config::Config>,
    pub orchestrator: Arc<services::Orchestrator>,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        let orchestrator = services::Orchestrator::new(config.filler);
        Self {
            env: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
        }
    }
}
