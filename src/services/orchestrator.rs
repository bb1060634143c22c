use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::mpsc;

use crate::{
    config::FillerConfig,
    error::{AppError, Result},
    models::{FillReport, FillState, SharedMap},
    services::{
        data_generator::generate_entries,
        filler::{GapFiller, SynchronizedFiller, UnsynchronizedFiller},
    },
};

/// Runs a batch of gap-filling tasks against a freshly seeded map.
///
/// Every run builds its own map and worker pool; nothing is shared between
/// runs. Tasks that are still queued when the timeout fires are skipped, but
/// a task already inside `GapFiller::fill` runs to completion on its worker.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: FillerConfig,
}

impl Orchestrator {
    pub fn new(config: FillerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FillerConfig {
        &self.config
    }

    pub async fn run_unsynchronized(&self) -> Result<FillReport> {
        self.run(UnsynchronizedFiller).await
    }

    pub async fn run_synchronized(&self) -> Result<FillReport> {
        self.run(SynchronizedFiller).await
    }

    pub async fn run<F: GapFiller>(&self, filler: F) -> Result<FillReport> {
        let FillerConfig {
            threads,
            target,
            initial,
            timeout,
        } = self.config;
        let strategy = filler.name();
        let mut state = FillState::Initialized;

        // Seeding and spawning the pool threads both block.
        let (map, pool) = tokio::task::spawn_blocking(move || -> Result<_> {
            let map = SharedMap::from_entries(generate_entries(initial as i64));
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|index| format!("gap-filler-{}", index))
                .panic_handler(|_| tracing::error!("Gap filler task panicked"))
                .build()?;
            Ok((map, pool))
        })
        .await
        .map_err(|err| AppError::WorkerPool(format!("pool setup failed: {}", err)))??;

        let map = Arc::new(map);
        let initial_size = map.len();
        tracing::info!(strategy, "Init size: {}", initial_size);

        let filler = Arc::new(filler);
        let cancelled = Arc::new(AtomicBool::new(false));
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<usize>();

        transition(&mut state, FillState::Filling, strategy);
        for task in 0..threads {
            let map = Arc::clone(&map);
            let filler = Arc::clone(&filler);
            let cancelled = Arc::clone(&cancelled);
            let done_tx = done_tx.clone();

            pool.spawn(move || {
                if cancelled.load(Ordering::Acquire) {
                    tracing::debug!(task, "Skipping task after cancellation");
                    return;
                }
                let inserted = filler.fill(&map, target);
                let _ = done_tx.send(inserted);
            });
        }
        drop(done_tx);

        transition(&mut state, FillState::AwaitingCompletion, strategy);
        let completion = async {
            let mut completed = 0;
            let mut inserted = 0;
            while completed < threads {
                match done_rx.recv().await {
                    Some(count) => {
                        completed += 1;
                        inserted += count;
                    }
                    None => break,
                }
            }
            (completed, inserted)
        };

        match tokio::time::timeout(timeout, completion).await {
            Ok((completed, inserted)) if completed == threads => {
                transition(&mut state, FillState::Completed, strategy);
                tracing::debug!(strategy, "Tasks inserted {} entries", inserted);
            }
            Ok((completed, _)) => {
                return Err(AppError::TaskFailed {
                    completed,
                    expected: threads,
                });
            }
            Err(_) => {
                cancelled.store(true, Ordering::Release);
                transition(&mut state, FillState::TimedOut, strategy);
                tracing::warn!(strategy, "Worker batch exceeded {:?}", timeout);
                return Err(AppError::TimeoutExceeded { timeout });
            }
        }

        let final_size = map.len();
        tracing::info!(strategy, "Finished size: {}", final_size);

        Ok(FillReport {
            strategy,
            target,
            initial_size,
            final_size,
            state,
        })
    }
}

fn transition(state: &mut FillState, next: FillState, strategy: &'static str) {
    tracing::debug!(strategy, "Fill state {:?} -> {:?}", state, next);
    *state = next;
}
