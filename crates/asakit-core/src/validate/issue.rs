//! Individual rule violations reported by the token config validator.

use std::fmt;

/// Maximum `unitName` length accepted by the chain.
pub const UNIT_NAME_MAX_CHARS: usize = 8;
/// Maximum `assetName` length accepted by the chain.
pub const ASSET_NAME_MAX_CHARS: usize = 32;
/// Largest `decimals` value accepted.
pub const DECIMALS_MAX: u32 = 19;

/// The optional role addresses of an asset, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Manager,
    Reserve,
    Freeze,
    Clawback,
}

impl AddressField {
    pub const ALL: [AddressField; 4] = [
        AddressField::Manager,
        AddressField::Reserve,
        AddressField::Freeze,
        AddressField::Clawback,
    ];

    /// Field name as it appears in form input and JSON.
    pub fn name(self) -> &'static str {
        match self {
            AddressField::Manager => "manager",
            AddressField::Reserve => "reserve",
            AddressField::Freeze => "freeze",
            AddressField::Clawback => "clawback",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One violated rule. `Display` yields the user-facing error string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    #[error("total must be a positive number")]
    Total,
    #[error("decimals must be a non-negative number (0-19 recommended)")]
    Decimals,
    #[error("defaultFrozen must be boolean")]
    DefaultFrozen,
    #[error("unitName must be non-empty and at most 8 characters (Algorand limit)")]
    UnitName,
    #[error("assetName must be non-empty and at most 32 characters (Algorand limit)")]
    AssetName,
    #[error("{0} must be an address string")]
    Address(AddressField),
}
