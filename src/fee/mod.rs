// Fee - Calculators, gas price curve, and regime selection
// Principle: The fee regime is fixed at construction time, never at fee time

pub mod calculator;
pub mod gas;
pub mod policy;

pub use calculator::{DynamicCalculator, FeeCalculator, FeeError, StaticCalculator};
pub use gas::{calculate_price, weighted_gas, GasError};
pub use policy::{pick_fee_calculator, static_fee_calculator};
