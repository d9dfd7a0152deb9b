// State - Read-only chain snapshot and block-timing decisions
pub mod timing;
pub mod view;

pub use timing::{next_block_time, next_staker_change_time, BlockTimeDecision, TimingError};
pub use view::{ChainView, FeeState, MemoryChain, StakerIter, StateError};
