//! # Policy Validation
//!
//! Proves a resolved policy is safe to submit: every rule's contract
//! address must parse, contain no surviving placeholder token, and
//! differ from the well-known pre-deployment fill address. A violation
//! is a hard failure naming the offending rules — nothing may reach the
//! rules engine with an unresolved address.

use irwa_core::{ContractAddress, IrwaError};

use crate::document::PolicyDocument;

/// Validate every rule's contract address.
pub fn validate(policy: &PolicyDocument) -> Result<(), IrwaError> {
    let mut invalid: Vec<&str> = Vec::new();
    for rule in &policy.rules {
        if rule.contract_address.contains("{{") {
            invalid.push(&rule.id);
            continue;
        }
        match ContractAddress::new(&rule.contract_address) {
            Ok(addr) if addr.is_placeholder_fill() => invalid.push(&rule.id),
            Ok(_) => {}
            Err(_) => invalid.push(&rule.id),
        }
    }
    if invalid.is_empty() {
        return Ok(());
    }
    Err(IrwaError::Validation(format!(
        "{} rules still have placeholder or invalid contract addresses ({}); \
         deploy contracts first",
        invalid.len(),
        invalid.join(", ")
    )))
}
