use crate::models::SharedMap;
use crate::services::data_generator::generate_entries;

/// One task's attempt to top `map` up to `target` entries.
///
/// Implementations are run concurrently by the orchestrator, one call per
/// task, all against the same map. Returns the number of entries inserted.
pub trait GapFiller: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn fill(&self, map: &SharedMap, target: usize) -> usize;
}

/// Difference between `target` and the size observed right now. Negative
/// once the map has overshot.
pub fn observe_gap(map: &SharedMap, target: usize) -> i64 {
    target as i64 - map.len() as i64
}

/// Inserts `gap` freshly generated entries; a non-positive gap is a no-op.
pub fn apply_gap(map: &SharedMap, gap: i64) -> usize {
    map.insert_all(generate_entries(gap))
}

/// Reads the size and inserts the gap with no coordination between tasks.
///
/// Several tasks can observe the same stale size and each insert a full
/// gap, so the final size is unpredictable and usually above target.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsynchronizedFiller;

impl GapFiller for UnsynchronizedFiller {
    fn name(&self) -> &'static str {
        "unsynchronized"
    }

    fn fill(&self, map: &SharedMap, target: usize) -> usize {
        let gap = observe_gap(map, target);
        tracing::info!("Gap size: {}", gap);
        apply_gap(map, gap)
    }
}

/// Same task shape, with the whole read-compute-insert sequence held under
/// the map's fill lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SynchronizedFiller;

impl GapFiller for SynchronizedFiller {
    fn name(&self) -> &'static str {
        "synchronized"
    }

    fn fill(&self, map: &SharedMap, target: usize) -> usize {
        let _guard = map.lock_for_fill();
        let gap = observe_gap(map, target);
        tracing::info!("Gap size: {}", gap);
        apply_gap(map, gap)
    }
}
