// Gas - Price curve and complexity weighing for the dynamic fee model
use crate::types::{Dimensions, Gas, GasPrice};

/// Computes the gas price for a given accumulated excess.
///
/// The price follows `min_price * e^(excess / excess_conversion_constant)`,
/// evaluated with the integer series expansion so every node computes the
/// exact same value. Saturates at `GasPrice::MAX` instead of overflowing.
///
/// `excess_conversion_constant` must be non-zero.
pub fn calculate_price(
    min_price: GasPrice,
    excess: Gas,
    excess_conversion_constant: Gas,
) -> GasPrice {
    debug_assert!(excess_conversion_constant > 0);

    let factor = min_price as u128;
    let numerator = excess as u128;
    let denominator = excess_conversion_constant.max(1) as u128;

    // Taylor expansion of factor * e^(numerator/denominator): term i+1 is
    // term i scaled by numerator/(denominator * i), truncated division.
    let mut i: u128 = 1;
    let mut output: u128 = 0;
    let mut term = factor * denominator;
    while term > 0 {
        output = output.saturating_add(term);
        if output / denominator > GasPrice::MAX as u128 {
            return GasPrice::MAX;
        }
        term = term.saturating_mul(numerator) / (denominator * i);
        i += 1;
    }

    (output / denominator) as GasPrice
}

/// Weighs a transaction's complexity into gas.
///
/// Gas is the dot product of the configured weights and the measured
/// dimensions; overflow means the transaction is unpriceable, not free.
pub fn weighted_gas(weights: &Dimensions, usage: &Dimensions) -> Result<Gas, GasError> {
    let axes = [
        (weights.bandwidth, usage.bandwidth),
        (weights.db_read, usage.db_read),
        (weights.db_write, usage.db_write),
        (weights.compute, usage.compute),
    ];

    let mut total: Gas = 0;
    for (weight, used) in axes {
        let cost = weight.checked_mul(used).ok_or(GasError::Overflow)?;
        total = total.checked_add(cost).ok_or(GasError::Overflow)?;
    }
    Ok(total)
}

/// Erreurs de gas
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GasError {
    #[error("Overflow while weighing transaction complexity")]
    Overflow,
}
