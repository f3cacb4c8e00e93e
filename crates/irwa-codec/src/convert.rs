//! # Parameter Set Conversion
//!
//! Converts a mapping of call arguments into the form the rules engine
//! expects. String values are tried against the four code tables in a
//! fixed priority order — asset type, market condition, country code,
//! metadata category — and replaced by the numeric code on first match.
//! Strings matching no table become the decimal rendering of their
//! content hash. Non-string values pass through unchanged.
//!
//! The table keys are disjoint, so the priority order never changes
//! which code a known key maps to; it is fixed anyway so converted
//! output is deterministic and test expectations hold.

use serde_json::{Map, Value};

use irwa_core::content_hash;

use crate::tables::{AssetType, Country, MarketCondition, MetadataCategory};

/// Convert every entry of a call-argument mapping.
///
/// Purely derived and stateless: the input is not mutated and repeated
/// calls on the same input produce identical output.
pub fn convert_params(params: &Map<String, Value>) -> Map<String, Value> {
    let mut converted = Map::new();
    for (key, value) in params {
        let out = match value {
            Value::String(s) => convert_string(s),
            other => other.clone(),
        };
        converted.insert(key.clone(), out);
    }
    converted
}

/// Convert a single string value: first table match wins, otherwise the
/// content hash as a decimal string.
fn convert_string(s: &str) -> Value {
    if let Ok(t) = s.parse::<AssetType>() {
        return Value::from(t.code());
    }
    if let Ok(c) = s.parse::<MarketCondition>() {
        return Value::from(c.code());
    }
    if let Ok(c) = s.parse::<Country>() {
        return Value::from(c.code());
    }
    if let Ok(m) = s.parse::<MetadataCategory>() {
        return Value::from(m.code());
    }
    Value::String(content_hash(s).to_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn known_keys_become_codes_and_unknown_strings_hash() {
        let params = as_map(json!({
            "assetType": "treasury",
            "country": "us",
            "note": "hello",
        }));
        let converted = convert_params(&params);
        assert_eq!(converted["assetType"], json!(1));
        assert_eq!(converted["country"], json!(840));
        assert_eq!(
            converted["note"],
            Value::String(content_hash("hello").to_decimal())
        );
    }

    #[test]
    fn non_string_values_pass_through() {
        let params = as_map(json!({
            "amount": 1_000_000,
            "enabled": true,
            "threshold": 0.25,
            "nested": {"keep": "me"},
        }));
        let converted = convert_params(&params);
        assert_eq!(converted["amount"], json!(1_000_000));
        assert_eq!(converted["enabled"], json!(true));
        assert_eq!(converted["threshold"], json!(0.25));
        assert_eq!(converted["nested"], json!({"keep": "me"}));
    }

    #[test]
    fn all_four_tables_are_consulted() {
        let params = as_map(json!({
            "a": "EQUITY",
            "b": "volatile",
            "c": "SG",
            "d": "legal",
        }));
        let converted = convert_params(&params);
        assert_eq!(converted["a"], json!(7));
        assert_eq!(converted["b"], json!(4));
        assert_eq!(converted["c"], json!(702));
        assert_eq!(converted["d"], json!(2));
    }

    #[test]
    fn lei_strings_hash_deterministically() {
        let params = as_map(json!({"lei": "HWUPKR0MPOU8FGXBT394"}));
        let first = convert_params(&params);
        let second = convert_params(&params);
        assert_eq!(first, second);
        assert!(matches!(first["lei"], Value::String(_)));
    }

    #[test]
    fn empty_map_converts_to_empty_map() {
        assert!(convert_params(&Map::new()).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let params = as_map(json!({"assetType": "bond"}));
        let before = params.clone();
        let _ = convert_params(&params);
        assert_eq!(params, before);
    }
}
