//! # Contract Address Newtype
//!
//! A validated EVM contract address. Policy rules carry raw address
//! strings until resolution; anything that reaches the rules engine must
//! first pass through [`ContractAddress::new()`].
//!
//! The well-known placeholder fill address is the value policy templates
//! ship with before any contract is deployed. A resolved policy must
//! never contain it — [`ContractAddress::is_placeholder_fill()`] is the
//! check the validation pass uses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IrwaError;

/// The fill address policy templates use before deployment.
pub const PLACEHOLDER_FILL_ADDRESS: &str = "0x1234567890123456789012345678901234567890";

/// A checksummed-or-lowercase EVM contract address: `0x` + 40 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Validate and wrap an address string.
    pub fn new(s: &str) -> Result<Self, IrwaError> {
        let hex = s.strip_prefix("0x").ok_or_else(|| {
            IrwaError::Validation(format!("contract address must start with 0x: {s:?}"))
        })?;
        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IrwaError::Validation(format!(
                "contract address must be 40 hex digits after 0x: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// The address as a `0x`-prefixed string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the well-known pre-deployment fill address.
    pub fn is_placeholder_fill(&self) -> bool {
        self.0.eq_ignore_ascii_case(PLACEHOLDER_FILL_ADDRESS)
    }
}

impl FromStr for ContractAddress {
    type Err = IrwaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_address() {
        let addr = ContractAddress::new("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").unwrap();
        assert_eq!(addr.as_str(), "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        assert!(!addr.is_placeholder_fill());
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(ContractAddress::new("70997970C51812dc3A010C7d01b50e0d17dc79C8").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ContractAddress::new("0x7099").is_err());
        assert!(ContractAddress::new(&format!("0x{}", "a".repeat(41))).is_err());
    }

    #[test]
    fn rejects_non_hex() {
        assert!(ContractAddress::new(&format!("0x{}", "g".repeat(40))).is_err());
    }

    #[test]
    fn rejects_unresolved_placeholder_token() {
        assert!(ContractAddress::new("{{MODIFIED_PRET_ADDRESS}}").is_err());
    }

    #[test]
    fn detects_placeholder_fill() {
        let addr = ContractAddress::new(PLACEHOLDER_FILL_ADDRESS).unwrap();
        assert!(addr.is_placeholder_fill());
    }

    #[test]
    fn placeholder_fill_detection_is_case_insensitive() {
        let upper = PLACEHOLDER_FILL_ADDRESS.to_uppercase().replace("0X", "0x");
        let addr = ContractAddress::new(&upper).unwrap();
        assert!(addr.is_placeholder_fill());
    }

    #[test]
    fn from_str_roundtrip() {
        let addr: ContractAddress = PLACEHOLDER_FILL_ADDRESS.parse().unwrap();
        assert_eq!(addr.to_string(), PLACEHOLDER_FILL_ADDRESS);
    }

    #[test]
    fn serde_transparent() {
        let addr = ContractAddress::new(PLACEHOLDER_FILL_ADDRESS).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{PLACEHOLDER_FILL_ADDRESS}\""));
    }
}
