use serde::Deserialize;
use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_THREAD_COUNT: usize = 10;
pub const DEFAULT_ITEM_COUNT: usize = 1000;
pub const DEFAULT_SHORTFALL: usize = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub filler: FillerConfig,
}

/// Parameters of one gap-filling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FillerConfig {
    /// Number of pool workers, and number of tasks submitted to them.
    pub threads: usize,
    pub target: usize,
    /// Entries present before the tasks start.
    pub initial: usize,
    pub timeout: Duration,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREAD_COUNT,
            target: DEFAULT_ITEM_COUNT,
            initial: DEFAULT_ITEM_COUNT - DEFAULT_SHORTFALL,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FillerConfig {
    pub fn new(threads: usize, target: usize, initial: usize, timeout: Duration) -> Result<Self> {
        if threads == 0 {
            return Err(AppError::Configuration(
                "thread count must be at least 1".to_string(),
            ));
        }
        if initial > target {
            return Err(AppError::Configuration(format!(
                "initial fill {} exceeds target {}",
                initial, target
            )));
        }

        Ok(Self {
            threads,
            target,
            initial,
            timeout,
        })
    }
}

impl Config {
    pub fn init() -> Result<Config> {
        let port = env_or("PORT", 8000u16)?;

        let threads = env_or("FILLER_THREADS", DEFAULT_THREAD_COUNT)?;
        let target = env_or("FILLER_TARGET", DEFAULT_ITEM_COUNT)?;
        let shortfall = env_or("FILLER_SHORTFALL", DEFAULT_SHORTFALL)?;
        let timeout_secs = env_or("FILLER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let initial = target.checked_sub(shortfall).ok_or_else(|| {
            AppError::Configuration(format!(
                "FILLER_SHORTFALL ({}) must not exceed FILLER_TARGET ({})",
                shortfall, target
            ))
        })?;

        let filler = FillerConfig::new(
            threads,
            target,
            initial,
            Duration::from_secs(timeout_secs),
        )?;

        Ok(Config { port, filler })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::Configuration(format!("{} must be a number, got {:?}", key, raw))),
        Err(_) => Ok(default),
    }
}
