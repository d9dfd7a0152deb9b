// Chain view - Read-only snapshot consumed at block-construction time
use crate::types::{Gas, Staker, Timestamp};
use serde::{Deserialize, Serialize};

/// Accumulated fee state of the chain under the dynamic regime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeState {
    /// Gas consumed above target, drives the price curve upward
    pub excess: Gas,
}

/// Stakers in ascending `next_time` order.
///
/// Dropping the iterator releases whatever storage resources back it, so
/// every exit path of a caller releases exactly once.
pub type StakerIter<'a> = Box<dyn Iterator<Item = Staker> + 'a>;

/// A consistent, read-only view of chain state.
///
/// Implementations must hand out staker iterators sorted ascending by
/// `next_time`; the timing layer relies on that ordering and does not
/// re-check it. The view is never written through.
pub trait ChainView {
    /// Timestamp of the last committed block
    fn timestamp(&self) -> Timestamp;

    /// Current fee state
    fn fee_state(&self) -> FeeState;

    /// Active stakers, ordered by their next transition
    fn current_stakers(&self) -> Result<StakerIter<'_>, StateError>;

    /// Stakers waiting to activate, ordered by their start time
    fn pending_stakers(&self) -> Result<StakerIter<'_>, StateError>;
}

/// Erreurs de lecture du snapshot
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Failed to read staker set: {0}")]
    ReadFailed(String),

    #[error("Corrupted staker record: {0}")]
    Corrupted(String),
}

/// In-memory chain view.
///
/// Keeps both staker sets sorted on insertion so the iterator ordering
/// contract holds by construction. Used as the deterministic fixture in
/// tests and by embedders that track the validator timetable themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryChain {
    timestamp: Timestamp,
    fee_state: FeeState,
    current: Vec<Staker>,
    pending: Vec<Staker>,
}

impl MemoryChain {
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }

    pub fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    pub fn set_fee_state(&mut self, fee_state: FeeState) {
        self.fee_state = fee_state;
    }

    pub fn add_current_staker(&mut self, staker: Staker) {
        let at = self
            .current
            .partition_point(|s| s.next_time <= staker.next_time);
        self.current.insert(at, staker);
    }

    pub fn add_pending_staker(&mut self, staker: Staker) {
        let at = self
            .pending
            .partition_point(|s| s.next_time <= staker.next_time);
        self.pending.insert(at, staker);
    }
}

impl ChainView for MemoryChain {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn fee_state(&self) -> FeeState {
        self.fee_state
    }

    fn current_stakers(&self) -> Result<StakerIter<'_>, StateError> {
        Ok(Box::new(self.current.iter().copied()))
    }

    fn pending_stakers(&self) -> Result<StakerIter<'_>, StateError> {
        Ok(Box::new(self.pending.iter().copied()))
    }
}
