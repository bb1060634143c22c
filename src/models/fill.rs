use serde::Serialize;
use std::fmt;

/// Lifecycle of a single gap-filling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillState {
    Initialized,
    Filling,
    AwaitingCompletion,
    Completed,
    TimedOut,
}

#[derive(Debug, Clone, Serialize)]
pub struct FillReport {
    pub strategy: &'static str,
    pub target: usize,
    pub initial_size: usize,
    pub final_size: usize,
    pub state: FillState,
}

impl FillReport {
    pub fn is_consistent(&self) -> bool {
        self.final_size == self.target
    }

    pub fn outcome(&self) -> FillOutcome {
        if self.is_consistent() {
            FillOutcome::Ok
        } else {
            FillOutcome::SizeMismatch {
                expected: self.target,
                actual: self.final_size,
            }
        }
    }
}

/// Non-fatal result of a completed run, rendered as the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    Ok,
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FillOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillOutcome::Ok => write!(f, "ok"),
            FillOutcome::SizeMismatch { expected, actual } => {
                write!(f, "error: expected {} entries, found {}", expected, actual)
            }
        }
    }
}
