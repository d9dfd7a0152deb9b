// Meridian primitives - Minimal foundational types
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp Unix en secondes
pub type Timestamp = u64;

/// Balance en MRD (u128 = suffisant pour des siècles)
/// 1 MRD = 10^12 units
pub type Balance = u128;

/// Constantes monétaires
pub const MRD: Balance = 1_000_000_000_000; // 10^12
pub const MILLIMRD: Balance = 1_000_000_000; // 10^9
pub const MICROMRD: Balance = 1_000_000; // 10^6

/// Gas consumed by a transaction or accumulated by the chain
pub type Gas = u64;

/// Price of one unit of gas, in base units
pub type GasPrice = u64;

/// Identifiant d'un staker (clé publique du noeud)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId([u8; 32]);

impl NodeId {
    pub const ZERO: NodeId = NodeId([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        NodeId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "node:{}", hex::encode(&self.0[..8]))
    }
}

impl From<[u8; 32]> for NodeId {
    fn from(bytes: [u8; 32]) -> Self {
        NodeId(bytes)
    }
}
