//! # irwa-core — Foundational Types for the RWA Policy Toolkit
//!
//! Defines the primitives shared by every other crate in the workspace:
//! the error taxonomy, validated newtypes for contract addresses and
//! policy identifiers, the `Uint256` integer type used for on-chain
//! numeric arguments, and the content digest function that turns
//! arbitrary strings (LEIs, corporate names, URIs) into deterministic
//! 256-bit values.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `irwa-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone` and implement
//!   `Serialize`/`Deserialize` where they cross a file or wire boundary.

pub mod address;
pub mod digest;
pub mod error;
pub mod policy_id;

// Re-export primary types for ergonomic imports.
pub use address::{ContractAddress, PLACEHOLDER_FILL_ADDRESS};
pub use digest::{content_hash, Uint256};
pub use error::IrwaError;
pub use policy_id::PolicyId;
