//! # irwa-cli — CLI Tool for the Institutional RWA Policy Toolkit
//!
//! Provides the `irwa` command-line interface.
//!
//! ## Subcommands
//!
//! - `irwa policy` — Address resolution, validation, and rules-engine
//!   policy lifecycle (setup, apply, status).
//! - `irwa modifiers` — Solidity modifier generation for protected
//!   contracts.
//! - `irwa params` — Parameter conversion and code-table inspection.
//!
//! ## Workflow
//!
//! ```bash
//! # 1. Deploy contracts, producing deployment-modified.env
//! # 2. Create the policy in the rules engine:
//! irwa policy setup policies/institutional-complete-14-rules.json
//! # 3. Generate modifiers and redeploy the protected contract:
//! irwa modifiers inject policies/institutional-complete-14-rules.json
//! # 4. Bind the policy to the deployed contract:
//! irwa policy apply --id <policyId> --contract <address>
//! ```

pub mod modifiers;
pub mod params;
pub mod policy;

/// Default policy document, matching the deploy scripts' layout.
pub const DEFAULT_POLICY_FILE: &str = "policies/institutional-complete-14-rules.json";
