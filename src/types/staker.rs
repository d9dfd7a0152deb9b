// Staker - Change records for the validator timetable
use super::primitives::{Balance, NodeId, Timestamp};
use serde::{Deserialize, Serialize};

/// A staker as seen by the block-construction timetable.
///
/// A pending staker transitions into the current set at `next_time`; a
/// current staker leaves the set at `next_time`. Block timing only cares
/// about that instant, the rest of the record is carried for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staker {
    /// Identifiant du staker
    pub id: NodeId,

    /// Montant staké
    pub weight: Balance,

    /// Next instant at which this staker changes state
    pub next_time: Timestamp,
}

impl Staker {
    pub fn new(id: NodeId, weight: Balance, next_time: Timestamp) -> Self {
        Self {
            id,
            weight,
            next_time,
        }
    }
}
