// Fee calculators - Flat schedule before Etna, gas-priced after
use super::gas::{weighted_gas, GasError};
use crate::config::StaticFeeConfig;
use crate::types::{Balance, Dimensions, GasPrice, TxKind};

/// A fee calculator fixed at construction time.
///
/// The regime set is closed: protocol upgrades only ever moved the chain
/// from the flat schedule to the gas-priced model, so the two variants are
/// an enum rather than an open trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeCalculator {
    Static(StaticCalculator),
    Dynamic(DynamicCalculator),
}

impl FeeCalculator {
    /// Calculator over a (possibly legacy-unified) flat schedule
    pub fn new_static(fees: StaticFeeConfig) -> Self {
        FeeCalculator::Static(StaticCalculator { fees })
    }

    /// Calculator pricing measured complexity at the given gas price
    pub fn new_dynamic(weights: Dimensions, gas_price: GasPrice) -> Self {
        FeeCalculator::Dynamic(DynamicCalculator { weights, gas_price })
    }

    /// Fee owed by a transaction of the given kind and complexity
    pub fn calculate_fee(&self, kind: TxKind, complexity: &Dimensions) -> Result<Balance, FeeError> {
        match self {
            FeeCalculator::Static(calc) => Ok(calc.fee_of(kind)),
            FeeCalculator::Dynamic(calc) => calc.fee_of(complexity),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, FeeCalculator::Dynamic(_))
    }
}

/// Flat per-kind fees, schedule frozen at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCalculator {
    fees: StaticFeeConfig,
}

impl StaticCalculator {
    pub fn fee_of(&self, kind: TxKind) -> Balance {
        match kind {
            TxKind::Transfer => self.fees.tx_fee,
            TxKind::CreateAsset => self.fees.create_asset_tx_fee,
            TxKind::CreateSubnet => self.fees.create_subnet_tx_fee,
            TxKind::CreateBlockchain => self.fees.create_blockchain_tx_fee,
            TxKind::AddValidator => self.fees.add_validator_fee,
            TxKind::AddDelegator => self.fees.add_delegator_fee,
        }
    }

    /// Schedule this calculator was built with
    pub fn schedule(&self) -> &StaticFeeConfig {
        &self.fees
    }
}

/// Gas-priced fees, price frozen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicCalculator {
    weights: Dimensions,
    gas_price: GasPrice,
}

impl DynamicCalculator {
    pub fn fee_of(&self, complexity: &Dimensions) -> Result<Balance, FeeError> {
        let gas = weighted_gas(&self.weights, complexity)?;
        // u64 * u64 always fits the u128 balance
        Ok(gas as Balance * self.gas_price as Balance)
    }

    /// Gas price this calculator was built with
    pub fn gas_price(&self) -> GasPrice {
        self.gas_price
    }
}

/// Erreurs de calcul de frais
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum FeeError {
    #[error("Transaction complexity overflows gas accounting: {0}")]
    Gas(#[from] GasError),
}
