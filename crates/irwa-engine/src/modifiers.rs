//! # Solidity Modifier Generation
//!
//! Produces the modifier source file that wires a contract's functions
//! to the rules engine. Generation is client-side and deterministic:
//! the same resolved policy always yields byte-identical output, so the
//! generated file can be checked into the contract repo and diffed.

use std::path::{Path, PathBuf};

use irwa_core::IrwaError;
use irwa_policy::PolicyDocument;

/// Generate the modifier source for a resolved policy.
///
/// Emits one Solidity `modifier` per policy rule, named after the rule
/// id, and writes the file to `output`. Every path in
/// `contract_sources` must exist — they are the contracts the modifiers
/// are generated for and are recorded in the file header. Returns the
/// number of lines written.
pub fn generate_modifiers(
    policy: &PolicyDocument,
    output: &Path,
    contract_sources: &[PathBuf],
) -> Result<usize, IrwaError> {
    for source in contract_sources {
        if !source.exists() {
            return Err(IrwaError::Validation(format!(
                "contract source file {} does not exist",
                source.display()
            )));
        }
    }

    let rendered = render(policy, contract_sources);
    let lines = rendered.lines().count();
    std::fs::write(output, rendered)?;
    tracing::info!(
        output = %output.display(),
        rules = policy.rules.len(),
        lines,
        "generated policy modifiers"
    );
    Ok(lines)
}

fn render(policy: &PolicyDocument, contract_sources: &[PathBuf]) -> String {
    let mut out = String::new();
    out.push_str("// SPDX-License-Identifier: UNLICENSED\n");
    out.push_str("pragma solidity ^0.8.24;\n\n");
    out.push_str("import \"@forte/rules-engine/src/client/RulesEngineClient.sol\";\n\n");
    out.push_str(&format!("// Policy: {}\n", policy.policy_name));
    for source in contract_sources {
        out.push_str(&format!("// Generated for: {}\n", source.display()));
    }
    out.push_str(&format!(
        "abstract contract {} is RulesEngineClient {{\n",
        contract_name(&policy.policy_name)
    ));
    for rule in &policy.rules {
        out.push_str(&format!("    // {}\n", rule.name));
        out.push_str(&format!(
            "    modifier checksPolicy{}() {{\n",
            pascal_case(&rule.id)
        ));
        out.push_str("        _invokeRulesEngine(msg.data);\n");
        out.push_str("        _;\n");
        out.push_str("    }\n\n");
    }
    out.push_str("}\n");
    out
}

fn contract_name(policy_name: &str) -> String {
    let pascal = pascal_case(policy_name);
    if pascal.is_empty() {
        "PolicyModifiers".to_string()
    } else {
        format!("{pascal}Modifiers")
    }
}

/// Collapse an arbitrary string to PascalCase over its alphanumeric
/// segments: `RULE_04` → `Rule04`, `GLEIF Entity Check` → `GleifEntityCheck`.
fn pascal_case(raw: &str) -> String {
    raw.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}
