//! # Address Resolver
//!
//! Rewrites `{{MODIFIED_PRET_ADDRESS}}` placeholder tokens in a policy
//! file with the deployed contract address. Resolution priority:
//!
//! 1. An explicit configuration value (the `MODIFIED_PRET_ADDRESS`
//!    environment variable when built via
//!    [`AddressSource::from_process_env()`]).
//! 2. A deployment artifact file containing a
//!    `MODIFIED_PRET_ADDRESS=<value>` line.
//!
//! If neither source yields an address the resolver fails with a
//! `Configuration` error before writing anything. A half-resolved
//! policy file must never exist on disk.

use std::path::{Path, PathBuf};

use irwa_core::IrwaError;

/// Placeholder token policy templates carry before deployment.
pub const ADDRESS_PLACEHOLDER: &str = "{{MODIFIED_PRET_ADDRESS}}";

/// Environment variable holding the deployed contract address.
pub const DEPLOYMENT_ENV_VAR: &str = "MODIFIED_PRET_ADDRESS";

/// Default deployment artifact written by the deploy scripts.
pub const DEFAULT_DEPLOYMENT_FILE: &str = "deployment-modified.env";

/// Where the deployed address comes from.
///
/// Constructed once per invocation; handlers receive it as an argument
/// instead of reading process globals.
#[derive(Debug, Clone)]
pub struct AddressSource {
    env_value: Option<String>,
    deployment_file: PathBuf,
}

impl AddressSource {
    /// Build from an explicit value and artifact path.
    pub fn new(env_value: Option<String>, deployment_file: impl Into<PathBuf>) -> Self {
        Self {
            env_value,
            deployment_file: deployment_file.into(),
        }
    }

    /// Build from the process environment and the default artifact path.
    pub fn from_process_env() -> Self {
        Self::new(
            std::env::var(DEPLOYMENT_ENV_VAR).ok(),
            DEFAULT_DEPLOYMENT_FILE,
        )
    }

    /// Resolve the deployed address, env value first, artifact second.
    pub fn resolve(&self) -> Result<String, IrwaError> {
        if let Some(value) = &self.env_value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
        if let Some(value) = read_deployment_artifact(&self.deployment_file)? {
            return Ok(value);
        }
        Err(IrwaError::Configuration(format!(
            "{DEPLOYMENT_ENV_VAR} not set and no usable deployment artifact at {}; \
             deploy the contract first or set the environment variable",
            self.deployment_file.display()
        )))
    }
}

/// Read the deployed address from a deployment artifact file.
///
/// The first line matching `MODIFIED_PRET_ADDRESS=<value>` wins, with
/// surrounding whitespace trimmed. A missing file is `Ok(None)`, not
/// an error.
pub fn read_deployment_artifact(path: &Path) -> Result<Option<String>, IrwaError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "no deployment artifact found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    for line in content.lines() {
        let rest = line
            .trim()
            .strip_prefix(DEPLOYMENT_ENV_VAR)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = rest {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }
    Ok(None)
}

/// Derive the default output path: `policy.json` → `policy-deployed.json`.
pub fn deployed_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}-deployed.{}", ext.to_string_lossy()),
        None => format!("{stem}-deployed"),
    };
    input.with_file_name(file_name)
}

/// Replace every placeholder token in `policy_path` with the resolved
/// address and write the result.
///
/// Returns the path written. The input file is never modified; the
/// output is a full overwrite of `output` (or the derived `-deployed`
/// sibling). Resolution failure aborts before any write.
pub fn update_policy_addresses(
    policy_path: &Path,
    output: Option<&Path>,
    source: &AddressSource,
) -> Result<PathBuf, IrwaError> {
    let address = source.resolve()?;
    tracing::info!(%address, policy = %policy_path.display(), "resolving policy addresses");

    let content = std::fs::read_to_string(policy_path)?;
    let updated = content.replace(ADDRESS_PLACEHOLDER, &address);

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => deployed_output_path(policy_path),
    };
    std::fs::write(&output_path, updated)?;
    tracing::info!(output = %output_path.display(), "policy addresses updated");
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xABCDEFabcdefABCDEFabcdefABCDEFabcdefABCD";

    fn write_policy(dir: &Path, placeholders: usize) -> PathBuf {
        let rules: Vec<String> = (0..placeholders)
            .map(|i| {
                format!(
                    r#"{{"id":"RULE_{i:02}","name":"Rule {i}","contractAddress":"{ADDRESS_PLACEHOLDER}"}}"#
                )
            })
            .collect();
        let body = format!(
            r#"{{"policyName":"Test Policy","rules":[{}]}}"#,
            rules.join(",")
        );
        let path = dir.join("policy.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn env_value_wins_over_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("deployment-modified.env");
        std::fs::write(&artifact, "MODIFIED_PRET_ADDRESS=0xfromfile").unwrap();
        let source = AddressSource::new(Some(ADDR.to_string()), &artifact);
        assert_eq!(source.resolve().unwrap(), ADDR);
    }

    #[test]
    fn artifact_is_used_when_env_missing() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("deployment-modified.env");
        std::fs::write(&artifact, format!("OTHER=1\nMODIFIED_PRET_ADDRESS={ADDR}  \n")).unwrap();
        let source = AddressSource::new(None, &artifact);
        assert_eq!(source.resolve().unwrap(), ADDR);
    }

    #[test]
    fn blank_env_value_falls_through_to_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("deployment-modified.env");
        std::fs::write(&artifact, format!("MODIFIED_PRET_ADDRESS={ADDR}")).unwrap();
        let source = AddressSource::new(Some("   ".to_string()), &artifact);
        assert_eq!(source.resolve().unwrap(), ADDR);
    }

    #[test]
    fn missing_both_sources_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = AddressSource::new(None, dir.path().join("missing.env"));
        let err = source.resolve().unwrap_err();
        assert!(matches!(err, IrwaError::Configuration(_)));
    }

    #[test]
    fn artifact_without_matching_line_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("deployment-modified.env");
        std::fs::write(&artifact, "SOMETHING_ELSE=abc\n").unwrap();
        assert_eq!(read_deployment_artifact(&artifact).unwrap(), None);
    }

    #[test]
    fn substitutes_every_placeholder_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let policy = write_policy(dir.path(), 2);
        let source = AddressSource::new(Some(ADDR.to_string()), dir.path().join("none.env"));

        let out = update_policy_addresses(&policy, None, &source).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written.matches(ADDR).count(), 2);
        assert!(!written.contains(ADDRESS_PLACEHOLDER));
        assert!(!written.contains("{{"));
    }

    #[test]
    fn input_file_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let policy = write_policy(dir.path(), 1);
        let before = std::fs::read_to_string(&policy).unwrap();
        let source = AddressSource::new(Some(ADDR.to_string()), dir.path().join("none.env"));

        update_policy_addresses(&policy, None, &source).unwrap();
        assert_eq!(std::fs::read_to_string(&policy).unwrap(), before);
    }

    #[test]
    fn failed_resolution_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let policy = write_policy(dir.path(), 1);
        let source = AddressSource::new(None, dir.path().join("missing.env"));

        let err = update_policy_addresses(&policy, None, &source).unwrap_err();
        assert!(matches!(err, IrwaError::Configuration(_)));
        assert!(!deployed_output_path(&policy).exists());
    }

    #[test]
    fn explicit_output_path_is_respected() {
        let dir = tempfile::tempdir().unwrap();
        let policy = write_policy(dir.path(), 1);
        let target = dir.path().join("custom-output.json");
        let source = AddressSource::new(Some(ADDR.to_string()), dir.path().join("none.env"));

        let out = update_policy_addresses(&policy, Some(&target), &source).unwrap();
        assert_eq!(out, target);
        assert!(target.exists());
    }

    #[test]
    fn output_path_derivation() {
        assert_eq!(
            deployed_output_path(Path::new("policies/rules.json")),
            PathBuf::from("policies/rules-deployed.json")
        );
        assert_eq!(
            deployed_output_path(Path::new("rules")),
            PathBuf::from("rules-deployed")
        );
    }
}
