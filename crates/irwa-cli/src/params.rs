//! # Params Subcommand
//!
//! Operator-facing access to the parameter codec: convert an inline
//! JSON argument object the way policy setup does, or list the code
//! tables.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use irwa_codec::{convert_params, AssetType, Country, MarketCondition, MetadataCategory};

/// Arguments for the `irwa params` subcommand.
#[derive(Args, Debug)]
pub struct ParamsArgs {
    #[command(subcommand)]
    pub command: ParamsCommand,
}

/// Params subcommands.
#[derive(Subcommand, Debug)]
pub enum ParamsCommand {
    /// Convert a JSON object of call arguments to engine form.
    Convert {
        /// Inline JSON object, e.g. '{"assetType":"treasury","country":"us"}'.
        #[arg(long)]
        json: String,
    },

    /// Print the code tables.
    Tables,
}

/// Execute the params subcommand.
pub fn run_params(args: &ParamsArgs) -> Result<u8> {
    match &args.command {
        ParamsCommand::Convert { json } => cmd_convert(json),
        ParamsCommand::Tables => cmd_tables(),
    }
}

fn cmd_convert(json: &str) -> Result<u8> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let Some(object) = value.as_object() else {
        bail!("--json must be a JSON object of call arguments");
    };
    let converted = convert_params(object);
    println!("{}", serde_json::to_string_pretty(&converted)?);
    Ok(0)
}

fn cmd_tables() -> Result<u8> {
    println!("Asset types:");
    for t in AssetType::all() {
        println!("  {:<12} {}", t.as_str(), t.code());
    }
    println!();
    println!("Market conditions:");
    for c in MarketCondition::all() {
        println!("  {:<12} {}", c.as_str(), c.code());
    }
    println!();
    println!("Country codes (ISO-3166-1 numeric):");
    for c in Country::all() {
        println!("  {:<12} {}", c.as_str(), c.code());
    }
    println!();
    println!("Metadata categories:");
    for m in MetadataCategory::all() {
        println!("  {:<12} {}", m.as_str(), m.code());
    }
    Ok(0)
}
