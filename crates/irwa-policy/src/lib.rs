//! # irwa-policy — Policy Documents, Address Resolution, Validation
//!
//! A policy document is a JSON file naming a set of compliance rules,
//! each bound to a deployed contract address. Templates ship with
//! `{{MODIFIED_PRET_ADDRESS}}` placeholder tokens; before a policy can
//! be submitted to the rules engine the resolver rewrites every token
//! with the real deployed address and the validation pass proves no
//! placeholder survived.
//!
//! The resolver never mutates the input file: it writes a sibling file
//! with a `-deployed` suffix (or a caller-chosen path) in a single full
//! overwrite.

pub mod document;
pub mod resolver;
pub mod validate;

pub use document::{PolicyDocument, PolicyRule};
pub use resolver::{
    deployed_output_path, read_deployment_artifact, update_policy_addresses, AddressSource,
    ADDRESS_PLACEHOLDER, DEFAULT_DEPLOYMENT_FILE, DEPLOYMENT_ENV_VAR,
};
pub use validate::validate;
