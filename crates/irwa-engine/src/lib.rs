//! # irwa-engine — Rules Engine Collaborator
//!
//! The rules engine is an external cloud service plus an on-chain
//! enforcement contract; this crate is the only path the toolkit uses
//! to reach it. Three operations are consumed as opaque remote calls
//! (`create_policy`, `append_policy`, `policy_exists`) behind the
//! [`RulesEngine`] trait; modifier generation runs client-side from the
//! resolved policy document.
//!
//! Calls are sequential and independent: no retry, no cancellation, no
//! shared mutable state. A failed call propagates as [`EngineError`]
//! and aborts the current command.

pub mod client;
pub mod config;
pub mod modifiers;

pub use client::{ensure_policy_exists, EngineError, HttpRulesEngine, RulesEngine};
pub use config::{ConfigError, EngineConfig};
pub use modifiers::generate_modifiers;
