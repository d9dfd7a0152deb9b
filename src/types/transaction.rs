// Transaction - Kinds and complexity dimensions priced by the fee layer
use serde::{Deserialize, Serialize};

/// Transaction kinds the platform prices.
///
/// The static fee schedule assigns one flat fee per kind; the dynamic
/// model ignores the kind and prices measured complexity instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    /// Simple value transfer
    Transfer,
    /// Issue a new asset on the platform
    CreateAsset,
    /// Register a new subnet
    CreateSubnet,
    /// Launch a blockchain on an existing subnet
    CreateBlockchain,
    /// Add a validator to the active set
    AddValidator,
    /// Delegate stake to an existing validator
    AddDelegator,
}

/// Resource consumption of a transaction, one axis per metered resource.
///
/// Gas is the weighted sum of these axes; the weights live in the dynamic
/// fee configuration so governance can re-balance them without a code
/// change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Serialized size on the wire, in bytes
    pub bandwidth: u64,

    /// State reads performed
    pub db_read: u64,

    /// State writes performed
    pub db_write: u64,

    /// Signature checks and other CPU work
    pub compute: u64,
}

impl Dimensions {
    pub fn new(bandwidth: u64, db_read: u64, db_write: u64, compute: u64) -> Self {
        Self {
            bandwidth,
            db_read,
            db_write,
            compute,
        }
    }
}
