//! # Policy Document Model
//!
//! Serde model for the policy JSON files submitted to the rules engine.
//! Rule-specific parameters vary per rule family, so everything beyond
//! the common fields is captured in a flattened map and converted by
//! the codec at submission time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use irwa_core::IrwaError;

/// A named, ordered collection of compliance rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    /// Human-readable policy name.
    pub policy_name: String,
    /// Rules in document order.
    pub rules: Vec<PolicyRule>,
}

/// A single compliance rule bound to a deployed contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRule {
    /// Rule identifier (e.g. `RULE_04`).
    pub id: String,
    /// Human-readable rule name.
    pub name: String,
    /// The contract the rule is bound to. Raw string: may still hold a
    /// placeholder token before resolution.
    pub contract_address: String,
    /// Rule-specific parameters, preserved as-is.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl PolicyDocument {
    /// Read and parse a policy file.
    ///
    /// An empty file is a `Validation` error rather than a JSON parse
    /// error so the operator sees which file is unusable.
    pub fn from_file(path: &Path) -> Result<Self, IrwaError> {
        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Err(IrwaError::Validation(format!(
                "policy file {} is empty",
                path.display()
            )));
        }
        Ok(serde_json::from_str(&raw)?)
    }
}
