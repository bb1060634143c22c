use uuid::Uuid;

use crate::models::Entries;

/// Builds a fresh map of `count` entries keyed by random UUIDs and valued
/// `1..=count`. A zero or negative count yields an empty map.
pub fn generate_entries(count: i64) -> Entries {
    let count = u64::try_from(count).unwrap_or(0);
    let entries = Entries::with_capacity(count as usize);
    for rank in 1..=count {
        entries.insert(Uuid::new_v4().to_string(), rank);
    }
    entries
}
