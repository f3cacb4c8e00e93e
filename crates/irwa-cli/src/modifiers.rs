//! # Modifiers Subcommand
//!
//! Generates the Solidity modifier source that wires a contract's
//! functions to the rules engine. Addresses are resolved first so the
//! generated file always reflects the deployed policy.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use irwa_engine::generate_modifiers;
use irwa_policy::{update_policy_addresses, AddressSource, PolicyDocument};

/// Arguments for the `irwa modifiers` subcommand.
#[derive(Args, Debug)]
pub struct ModifiersArgs {
    #[command(subcommand)]
    pub command: ModifiersCommand,
}

/// Modifiers subcommands.
#[derive(Subcommand, Debug)]
pub enum ModifiersCommand {
    /// Generate the modifier file for a policy.
    Inject {
        /// Policy JSON file.
        #[arg(default_value = crate::DEFAULT_POLICY_FILE)]
        policy: PathBuf,

        /// Output file for the generated modifiers.
        #[arg(long, default_value = "src/InstitutionalRWAFRE.sol")]
        out: PathBuf,

        /// Source contract the modifiers are generated for. Repeatable.
        #[arg(long = "contract", default_value = "src/InstitutionalRWA.sol")]
        contracts: Vec<PathBuf>,
    },
}

/// Execute the modifiers subcommand.
pub fn run_modifiers(args: &ModifiersArgs) -> Result<u8> {
    match &args.command {
        ModifiersCommand::Inject {
            policy,
            out,
            contracts,
        } => cmd_inject(policy, out, contracts, &AddressSource::from_process_env()),
    }
}

fn cmd_inject(
    policy_path: &Path,
    out: &Path,
    contracts: &[PathBuf],
    source: &AddressSource,
) -> Result<u8> {
    if !policy_path.exists() {
        bail!("policy file {} does not exist", policy_path.display());
    }
    println!("Generating rules engine modifiers");
    println!("  policy file: {}", policy_path.display());
    println!("  output:      {}", out.display());

    let resolved = update_policy_addresses(policy_path, None, source)
        .context("failed to resolve policy addresses")?;
    let document = PolicyDocument::from_file(&resolved)
        .with_context(|| format!("failed to read resolved policy {}", resolved.display()))?;

    let lines = generate_modifiers(&document, out, contracts)
        .context("failed to generate modifiers")?;

    println!("Generated {lines} lines of modifier code for {} rules", document.rules.len());
    Ok(0)
}
