//! Stored statistics

use crate::game::PlayerStats;
use crate::storage::{self, STATS_KEY, Storage};
use tracing::info;

/// Stored stats, or zeroes when nothing readable is stored
pub fn read_stats<S: Storage + ?Sized>(storage: &S) -> PlayerStats {
    storage::load_or_default(storage, STATS_KEY)
}

/// Forget all stored stats
pub fn clear_stats<S: Storage + ?Sized>(storage: &mut S) {
    storage::remove_record(storage, STATS_KEY);
    info!("statistics cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn read_then_clear() {
        let mut storage = MemoryStorage::new();
        let mut stats = PlayerStats::default();
        stats.record_game(4, true);
        storage::save_record(&mut storage, STATS_KEY, &stats);

        assert_eq!(read_stats(&storage), stats);
        clear_stats(&mut storage);
        assert_eq!(read_stats(&storage), PlayerStats::default());
    }
}
