// Meridian Core - Block-timing and fee-policy decisions for block construction
// Principle: A block may never skip a scheduled staker transition, and the
// fee regime is decided by the chain clock alone.

pub mod config;
pub mod fee;
pub mod state;
pub mod time;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use fee::{pick_fee_calculator, FeeCalculator};
pub use state::{next_block_time, next_staker_change_time, BlockTimeDecision, ChainView};
pub use time::{Clock, SystemClock};
