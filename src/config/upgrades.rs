// Upgrades - Timestamp-gated protocol upgrade schedule
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Mainnet activation instants
pub const MAINNET_APRICOT_PHASE3_TIME: Timestamp = 1_607_626_800; // 2020-12-10 19:00:00 UTC
pub const MAINNET_ETNA_TIME: Timestamp = 1_733_407_200; // 2024-12-05 14:00:00 UTC

/// Activation timetable for the named protocol upgrades.
///
/// Operators must keep the timetable monotonic (an upgrade never
/// deactivates); the predicates below are inclusive, so the new rules
/// apply exactly at the activation instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpgradeConfig {
    /// Apricot Phase 3 - splits the unified creation fee into
    /// independently configurable subnet and blockchain fees
    pub apricot_phase3_time: Timestamp,

    /// Etna - replaces the static fee schedule with gas-priced fees
    pub etna_time: Timestamp,
}

impl UpgradeConfig {
    /// Mainnet timetable
    pub fn mainnet() -> Self {
        Self {
            apricot_phase3_time: MAINNET_APRICOT_PHASE3_TIME,
            etna_time: MAINNET_ETNA_TIME,
        }
    }

    /// Timetable with every upgrade active from genesis (test networks)
    pub fn latest() -> Self {
        Self {
            apricot_phase3_time: 0,
            etna_time: 0,
        }
    }

    pub fn is_apricot_phase3_activated(&self, timestamp: Timestamp) -> bool {
        timestamp >= self.apricot_phase3_time
    }

    pub fn is_etna_activated(&self, timestamp: Timestamp) -> bool {
        timestamp >= self.etna_time
    }
}
