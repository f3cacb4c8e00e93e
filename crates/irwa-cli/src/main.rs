//! # irwa CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use irwa_cli::modifiers::{run_modifiers, ModifiersArgs};
use irwa_cli::params::{run_params, ParamsArgs};
use irwa_cli::policy::{run_policy, PolicyArgs};

/// Institutional RWA Policy Toolkit
///
/// Resolves deployed contract addresses into policy documents, converts
/// call parameters to on-chain form, generates rules engine modifiers,
/// and manages the policy lifecycle against the rules engine cloud API.
#[derive(Parser, Debug)]
#[command(name = "irwa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Policy lifecycle: resolve, setup, apply, status.
    Policy(PolicyArgs),

    /// Solidity modifier generation.
    Modifiers(ModifiersArgs),

    /// Parameter conversion and code-table inspection.
    Params(ParamsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Policy(args) => run_policy(&args).await,
        Commands::Modifiers(args) => run_modifiers(&args),
        Commands::Params(args) => run_params(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irwa_cli::policy::PolicyCommand;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_policy_setup_default_file() {
        let cli = Cli::try_parse_from(["irwa", "policy", "setup"]).unwrap();
        let Commands::Policy(args) = cli.command else {
            panic!("expected policy subcommand");
        };
        let PolicyCommand::Setup { policy } = args.command else {
            panic!("expected setup");
        };
        assert_eq!(policy, PathBuf::from(irwa_cli::DEFAULT_POLICY_FILE));
    }

    #[test]
    fn cli_parse_policy_setup_explicit_file() {
        let cli = Cli::try_parse_from(["irwa", "policy", "setup", "custom.json"]).unwrap();
        let Commands::Policy(args) = cli.command else {
            panic!("expected policy subcommand");
        };
        let PolicyCommand::Setup { policy } = args.command else {
            panic!("expected setup");
        };
        assert_eq!(policy, PathBuf::from("custom.json"));
    }

    #[test]
    fn cli_parse_policy_resolve_with_out() {
        let cli = Cli::try_parse_from([
            "irwa", "policy", "resolve", "p.json", "--out", "p-live.json",
        ])
        .unwrap();
        let Commands::Policy(args) = cli.command else {
            panic!("expected policy subcommand");
        };
        let PolicyCommand::Resolve { policy, out } = args.command else {
            panic!("expected resolve");
        };
        assert_eq!(policy, PathBuf::from("p.json"));
        assert_eq!(out, Some(PathBuf::from("p-live.json")));
    }

    #[test]
    fn cli_parse_policy_apply() {
        let cli = Cli::try_parse_from([
            "irwa",
            "policy",
            "apply",
            "--id",
            "14",
            "--contract",
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
        ])
        .unwrap();
        let Commands::Policy(args) = cli.command else {
            panic!("expected policy subcommand");
        };
        let PolicyCommand::Apply { id, contract } = args.command else {
            panic!("expected apply");
        };
        assert_eq!(id, 14);
        assert_eq!(contract, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
    }

    #[test]
    fn cli_parse_policy_status() {
        let cli = Cli::try_parse_from(["irwa", "policy", "status", "--id", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Policy(_)));
    }

    #[test]
    fn cli_parse_modifiers_inject_defaults() {
        let cli = Cli::try_parse_from(["irwa", "modifiers", "inject"]).unwrap();
        assert!(matches!(cli.command, Commands::Modifiers(_)));
    }

    #[test]
    fn cli_parse_params_convert() {
        let cli = Cli::try_parse_from([
            "irwa",
            "params",
            "convert",
            "--json",
            r#"{"assetType":"treasury"}"#,
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Params(_)));
    }

    #[test]
    fn cli_parse_params_tables() {
        let cli = Cli::try_parse_from(["irwa", "params", "tables"]).unwrap();
        assert!(matches!(cli.command, Commands::Params(_)));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["irwa", "params", "tables"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["irwa", "-vv", "params", "tables"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["irwa"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["irwa", "nonexistent"]).is_err());
    }
}
