// Timing - Timestamp selection for the next proposed block
// Principle: A proposed block lands on or before the next scheduled
// staker transition, never past it.

use super::view::{ChainView, StateError};
use crate::time::Clock;
use crate::types::Timestamp;
use tracing::debug;

/// Outcome of block-time selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTimeDecision {
    /// Timestamp the next block must carry
    pub timestamp: Timestamp,

    /// True when the timestamp was reduced to the next staker change time
    pub capped: bool,
}

/// Erreurs de sélection du temps de bloc
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TimingError {
    #[error("Failed getting next staker change time: {0}")]
    StakerChangeTime(#[from] StateError),
}

/// Selects the timestamp for the next proposed block.
///
/// The candidate is `max(now, parent_time)` so block time advances with
/// both the wall clock and chain history; it is then capped at the next
/// staker change time, because the block carrying that instant is the one
/// that applies the transition. Landing exactly on the change time counts
/// as capped.
pub fn next_block_time<C: ChainView>(
    chain: &C,
    clock: &impl Clock,
) -> Result<BlockTimeDecision, TimingError> {
    let mut timestamp = clock.now();
    let parent_time = chain.timestamp();
    if parent_time > timestamp {
        timestamp = parent_time;
    }
    // timestamp = max(now, parent_time)

    let mut capped = false;
    if let Some(change_time) = next_staker_change_time(chain)? {
        if timestamp >= change_time {
            timestamp = change_time;
            capped = true;
        }
    }
    // timestamp = min(max(now, parent_time), next_staker_change_time)

    debug!("Selected block time {} (capped: {})", timestamp, capped);
    Ok(BlockTimeDecision { timestamp, capped })
}

/// Returns the next time a staker will be added to or removed from the
/// current validator set, or `None` when neither set has a scheduled
/// change.
///
/// Only the head of each iterator is inspected; the sets are sorted by
/// `next_time`, so the head is the earliest transition. Both iterators
/// drop (and release) before returning, on error paths included.
pub fn next_staker_change_time<C: ChainView>(chain: &C) -> Result<Option<Timestamp>, StateError> {
    let mut current_stakers = chain.current_stakers()?;
    let mut pending_stakers = chain.pending_stakers()?;

    let next_current = current_stakers.next().map(|s| s.next_time);
    let next_pending = pending_stakers.next().map(|s| s.next_time);

    Ok(match (next_current, next_pending) {
        (Some(current_time), Some(pending_time)) => {
            if current_time < pending_time {
                Some(current_time)
            } else {
                Some(pending_time)
            }
        }
        (Some(current_time), None) => Some(current_time),
        (None, Some(pending_time)) => Some(pending_time),
        (None, None) => None,
    })
}
