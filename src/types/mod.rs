// Types fondamentaux de Meridian
// Principe: Minimal, auditable, durable

pub mod primitives;
pub mod staker;
pub mod transaction;

pub use primitives::*;
pub use staker::*;
pub use transaction::*;
