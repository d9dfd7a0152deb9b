// Fees - Static and dynamic fee schedules
use crate::types::{Balance, Dimensions, Gas, GasPrice, MICROMRD, MILLIMRD};
use serde::{Deserialize, Serialize};

/// Flat fee schedule, one amount per transaction kind.
///
/// Before Apricot Phase 3 the subnet and blockchain creation fees did not
/// exist as independent knobs; both charged the asset creation fee. The
/// fee layer re-applies that unification when building a calculator for a
/// pre-upgrade timestamp, the schedule itself always stores the modern
/// layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFeeConfig {
    /// Fee for a simple transfer
    pub tx_fee: Balance,

    /// Fee for issuing a new asset
    pub create_asset_tx_fee: Balance,

    /// Fee for registering a subnet
    pub create_subnet_tx_fee: Balance,

    /// Fee for launching a blockchain on a subnet
    pub create_blockchain_tx_fee: Balance,

    /// Fee for joining the validator set
    pub add_validator_fee: Balance,

    /// Fee for delegating to a validator
    pub add_delegator_fee: Balance,
}

impl StaticFeeConfig {
    /// Mainnet schedule
    pub fn mainnet() -> Self {
        Self {
            tx_fee: MILLIMRD,
            create_asset_tx_fee: 10 * MILLIMRD,
            create_subnet_tx_fee: MRD_CREATION_FEE,
            create_blockchain_tx_fee: MRD_CREATION_FEE,
            add_validator_fee: 0,
            add_delegator_fee: 0,
        }
    }
}

/// One-MRD creation fee shared by the mainnet subnet/blockchain knobs
const MRD_CREATION_FEE: Balance = 1_000 * MILLIMRD;

/// Parameters of the gas-priced fee model active after Etna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicFeeConfig {
    /// Gas cost per unit of each complexity axis
    pub weights: Dimensions,

    /// Floor of the gas price, charged when the chain is idle
    pub min_price: GasPrice,

    /// Scale of the price curve; larger values flatten the response to
    /// accumulated excess
    pub excess_conversion_constant: Gas,
}

impl DynamicFeeConfig {
    /// Mainnet parameters
    pub fn mainnet() -> Self {
        Self {
            weights: Dimensions::new(1, 10, 100, 10),
            min_price: MICROMRD as GasPrice,
            excess_conversion_constant: 2_164_043,
        }
    }
}
