//! # Policy Identifier Newtype
//!
//! The rules engine assigns every created policy a positive integer id.
//! Zero is not a valid id; the constructor rejects it so downstream code
//! never has to re-check.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IrwaError;

/// Identifier of a policy registered in the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(u64);

impl PolicyId {
    /// Wrap a raw id, rejecting zero.
    pub fn new(id: u64) -> Result<Self, IrwaError> {
        if id == 0 {
            return Err(IrwaError::Validation(
                "policy id must be greater than 0".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for PolicyId {
    type Err = IrwaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s
            .parse()
            .map_err(|_| IrwaError::Validation(format!("invalid policy id: {s:?}")))?;
        Self::new(raw)
    }
}

impl std::fmt::Display for PolicyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
