//! # Policy Subcommand
//!
//! Policy lifecycle operations: placeholder address resolution,
//! pre-submission validation, and the rules-engine calls that create a
//! policy and bind it to a deployed contract.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use irwa_core::{ContractAddress, PolicyId};
use irwa_engine::{ensure_policy_exists, EngineConfig, HttpRulesEngine, RulesEngine};
use irwa_policy::{update_policy_addresses, validate, AddressSource, PolicyDocument};

/// Arguments for the `irwa policy` subcommand.
#[derive(Args, Debug)]
pub struct PolicyArgs {
    #[command(subcommand)]
    pub command: PolicyCommand,
}

/// Policy subcommands.
#[derive(Subcommand, Debug)]
pub enum PolicyCommand {
    /// Resolve addresses, validate, and create the policy in the rules engine.
    Setup {
        /// Policy JSON file.
        #[arg(default_value = crate::DEFAULT_POLICY_FILE)]
        policy: PathBuf,
    },

    /// Replace placeholder addresses without contacting the engine.
    Resolve {
        /// Policy JSON file.
        #[arg(default_value = crate::DEFAULT_POLICY_FILE)]
        policy: PathBuf,

        /// Output file. Defaults to the input with a `-deployed` suffix.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Apply an existing policy to a deployed contract.
    Apply {
        /// Policy id assigned at setup.
        #[arg(long)]
        id: u64,

        /// Address of the contract to protect.
        #[arg(long)]
        contract: String,
    },

    /// Check that a policy exists and report its status.
    Status {
        /// Policy id assigned at setup.
        #[arg(long)]
        id: u64,
    },
}

/// Execute the policy subcommand.
pub async fn run_policy(args: &PolicyArgs) -> Result<u8> {
    match &args.command {
        PolicyCommand::Setup { policy } => cmd_setup(policy).await,
        PolicyCommand::Resolve { policy, out } => {
            cmd_resolve(policy, out.as_deref(), &AddressSource::from_process_env())
        }
        PolicyCommand::Apply { id, contract } => cmd_apply(*id, contract).await,
        PolicyCommand::Status { id } => cmd_status(*id).await,
    }
}

async fn cmd_setup(policy_path: &Path) -> Result<u8> {
    if !policy_path.exists() {
        bail!("policy file {} does not exist", policy_path.display());
    }
    println!("Setting up institutional RWA policy");
    println!("  policy file:  {}", policy_path.display());

    let source = AddressSource::from_process_env();
    let resolved = update_policy_addresses(policy_path, None, &source)
        .context("failed to resolve policy addresses")?;
    println!("  resolved:     {}", resolved.display());

    let document = PolicyDocument::from_file(&resolved)
        .with_context(|| format!("failed to read resolved policy {}", resolved.display()))?;
    println!("  policy:       {}", document.policy_name);
    println!("  rules:        {}", document.rules.len());

    validate(&document).context("policy failed address validation")?;

    let config = EngineConfig::from_env().context("rules engine configuration")?;
    let engine = HttpRulesEngine::new(&config)?;
    let policy_id = engine.create_policy(&document).await?;

    println!();
    println!("Policy {policy_id} created");
    for rule in &document.rules {
        println!("  {}: {}", rule.id, rule.name);
    }
    println!();
    println!("Next step: irwa modifiers inject {}", resolved.display());
    Ok(0)
}

fn cmd_resolve(policy_path: &Path, out: Option<&Path>, source: &AddressSource) -> Result<u8> {
    if !policy_path.exists() {
        bail!("policy file {} does not exist", policy_path.display());
    }
    let written = update_policy_addresses(policy_path, out, source)
        .context("failed to resolve policy addresses")?;
    println!("Policy addresses updated: {}", written.display());
    Ok(0)
}

async fn cmd_apply(id: u64, contract: &str) -> Result<u8> {
    let policy_id = PolicyId::new(id)?;
    let contract = ContractAddress::new(contract)?;
    if contract.is_placeholder_fill() {
        bail!("refusing to apply policy to the placeholder fill address");
    }

    let config = EngineConfig::from_env().context("rules engine configuration")?;
    let engine = HttpRulesEngine::new(&config)?;
    ensure_policy_exists(&engine, policy_id).await?;

    println!("Applying policy {policy_id} to contract {contract}");
    engine.append_policy(policy_id, &contract).await?;
    println!("Policy applied; contract functions are now rule-protected");
    Ok(0)
}

async fn cmd_status(id: u64) -> Result<u8> {
    let policy_id = PolicyId::new(id)?;

    let config = EngineConfig::from_env().context("rules engine configuration")?;
    let engine = HttpRulesEngine::new(&config)?;
    ensure_policy_exists(&engine, policy_id).await?;

    println!("Policy {policy_id} is active");
    Ok(0)
}
