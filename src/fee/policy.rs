// Fee policy - Picks the calculator matching the active upgrade
use super::calculator::FeeCalculator;
use super::gas;
use crate::config::Config;
use crate::state::ChainView;
use crate::types::Timestamp;
use tracing::debug;

/// Creates either a static or a dynamic fee calculator, depending on the
/// upgrade active at the chain's current timestamp.
///
/// Reads the view, never writes it; calling twice over the same snapshot
/// yields the same calculator.
pub fn pick_fee_calculator<C: ChainView>(config: &Config, chain: &C) -> FeeCalculator {
    let timestamp = chain.timestamp();
    if !config.upgrades.is_etna_activated(timestamp) {
        return static_fee_calculator(config, timestamp);
    }

    let fee_state = chain.fee_state();
    let gas_price = gas::calculate_price(
        config.dynamic_fees.min_price,
        fee_state.excess,
        config.dynamic_fees.excess_conversion_constant,
    );
    debug!("Fee regime: dynamic (gas price {})", gas_price);
    FeeCalculator::new_dynamic(config.dynamic_fees.weights, gas_price)
}

/// Creates a static fee calculator for the given timestamp, with the
/// schedule set to either the pre- or post-Apricot-Phase-3 layout.
///
/// Before Phase 3 the subnet and blockchain creation fees did not exist
/// independently; both charged the asset creation fee.
pub fn static_fee_calculator(config: &Config, timestamp: Timestamp) -> FeeCalculator {
    let mut fees = config.static_fees.clone();
    if !config.upgrades.is_apricot_phase3_activated(timestamp) {
        fees.create_subnet_tx_fee = fees.create_asset_tx_fee;
        fees.create_blockchain_tx_fee = fees.create_asset_tx_fee;
        debug!("Fee regime: static, legacy unified creation fee");
    } else {
        debug!("Fee regime: static");
    }
    FeeCalculator::new_static(fees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DynamicFeeConfig, StaticFeeConfig, UpgradeConfig};
    use crate::state::{FeeState, MemoryChain};
    use crate::types::{Dimensions, TxKind};

    fn config() -> Config {
        Config {
            upgrades: UpgradeConfig {
                apricot_phase3_time: 100,
                etna_time: 200,
            },
            static_fees: StaticFeeConfig {
                tx_fee: 1,
                create_asset_tx_fee: 10,
                create_subnet_tx_fee: 20,
                create_blockchain_tx_fee: 30,
                add_validator_fee: 0,
                add_delegator_fee: 0,
            },
            dynamic_fees: DynamicFeeConfig {
                weights: Dimensions::new(1, 1, 1, 1),
                min_price: 5,
                excess_conversion_constant: 100,
            },
        }
    }

    #[test]
    fn test_legacy_schedule_before_phase3() {
        let chain = MemoryChain::new(99);
        let calc = pick_fee_calculator(&config(), &chain);
        let none = Dimensions::default();

        // Both creation fees collapse to the asset creation fee
        assert_eq!(calc.calculate_fee(TxKind::CreateSubnet, &none).unwrap(), 10);
        assert_eq!(
            calc.calculate_fee(TxKind::CreateBlockchain, &none).unwrap(),
            10
        );
        assert_eq!(calc.calculate_fee(TxKind::CreateAsset, &none).unwrap(), 10);
    }

    #[test]
    fn test_independent_fees_at_phase3_boundary() {
        // The modern layout applies exactly at activation, not after it
        let chain = MemoryChain::new(100);
        let calc = pick_fee_calculator(&config(), &chain);
        let none = Dimensions::default();

        assert_eq!(calc.calculate_fee(TxKind::CreateSubnet, &none).unwrap(), 20);
        assert_eq!(
            calc.calculate_fee(TxKind::CreateBlockchain, &none).unwrap(),
            30
        );
    }

    #[test]
    fn test_static_until_just_before_etna() {
        let chain = MemoryChain::new(199);
        assert!(!pick_fee_calculator(&config(), &chain).is_dynamic());
    }

    #[test]
    fn test_dynamic_at_etna_boundary() {
        let chain = MemoryChain::new(200);
        assert!(pick_fee_calculator(&config(), &chain).is_dynamic());
    }

    #[test]
    fn test_dynamic_price_floor_at_zero_excess() {
        let mut chain = MemoryChain::new(250);
        chain.set_fee_state(FeeState { excess: 0 });

        match pick_fee_calculator(&config(), &chain) {
            FeeCalculator::Dynamic(calc) => assert_eq!(calc.gas_price(), 5),
            FeeCalculator::Static(_) => panic!("expected dynamic calculator"),
        }
    }

    #[test]
    fn test_selection_is_repeatable() {
        let mut chain = MemoryChain::new(300);
        chain.set_fee_state(FeeState { excess: 77 });
        let config = config();

        let first = pick_fee_calculator(&config, &chain);
        let second = pick_fee_calculator(&config, &chain);
        assert_eq!(first, second);
    }
}
