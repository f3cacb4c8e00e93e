//! # Rule Parameter Wrappers
//!
//! Typed argument sets for each policy rule family. Each wrapper is a
//! thin composition of table lookups and [`content_hash`] over named
//! fields; the serialized field names are exactly what the rules engine
//! expects, so these structs can be passed straight into policy setup
//! payloads.

use serde::Serialize;

use irwa_core::{content_hash, IrwaError, Uint256};

use crate::tables::{AssetType, Country, MarketCondition, MetadataCategory};

/// GLEIF corporate identity arguments (legal entity verification rules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GleifParams {
    /// Hash of the Legal Entity Identifier.
    pub lei_hash: Uint256,
    /// Hash of the registered corporate name.
    pub corporate_name_hash: Uint256,
}

/// Hash LEI and corporate name for on-chain comparison.
pub fn gleif_params(lei: &str, corporate_name: &str) -> GleifParams {
    GleifParams {
        lei_hash: content_hash(lei),
        corporate_name_hash: content_hash(corporate_name),
    }
}

/// BPMN process attestation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BpmnParams {
    /// Hash of the business process identifier.
    pub process_id_hash: Uint256,
}

/// Hash a BPMN process id.
pub fn bpmn_params(process_id: &str) -> BpmnParams {
    BpmnParams {
        process_id_hash: content_hash(process_id),
    }
}

/// DCSA shipping document arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DcsaParams {
    /// The document's bytes32 hash reinterpreted as a uint256.
    pub document_hash_uint: Uint256,
}

/// Convert an already-hashed document (bytes32 hex) to a uint256 field.
pub fn dcsa_params(document_hash: &str) -> Result<DcsaParams, IrwaError> {
    Ok(DcsaParams {
        document_hash_uint: Uint256::from_hex(document_hash)?,
    })
}

/// Metadata scoring arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataScoreParams {
    /// Token identifier, passed through unchanged.
    pub token_id: String,
    /// Hash of the metadata URI.
    pub metadata_uri_hash: Uint256,
    /// Numeric metadata category code.
    pub category_id: u32,
}

/// Build metadata scoring arguments from raw strings.
pub fn metadata_score_params(
    token_id: &str,
    metadata_uri: &str,
    category: &str,
) -> Result<MetadataScoreParams, IrwaError> {
    Ok(MetadataScoreParams {
        token_id: token_id.to_string(),
        metadata_uri_hash: content_hash(metadata_uri),
        category_id: category.parse::<MetadataCategory>()?.code(),
    })
}

/// Fractionalization threshold arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FractionThresholdParams {
    /// Numeric asset type code.
    pub asset_type_id: u32,
}

/// Look up the asset type for a fraction threshold rule.
pub fn fraction_threshold_params(asset_type: &str) -> Result<FractionThresholdParams, IrwaError> {
    Ok(FractionThresholdParams {
        asset_type_id: asset_type.parse::<AssetType>()?.code(),
    })
}

/// Liquidity scoring arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityScoreParams {
    /// Trade amount, passed through unchanged.
    pub amount: String,
    /// Numeric market condition code.
    pub market_condition_id: u32,
}

/// Build liquidity scoring arguments.
pub fn liquidity_score_params(
    amount: &str,
    market_condition: &str,
) -> Result<LiquidityScoreParams, IrwaError> {
    Ok(LiquidityScoreParams {
        amount: amount.to_string(),
        market_condition_id: market_condition.parse::<MarketCondition>()?.code(),
    })
}

/// Per-asset-type amount threshold arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypeThresholdParams {
    /// Numeric asset type code.
    pub asset_type_id: u32,
    /// Threshold amount, passed through unchanged.
    pub amount: String,
}

/// Build asset-type threshold arguments.
pub fn asset_type_threshold_params(
    asset_type: &str,
    amount: &str,
) -> Result<AssetTypeThresholdParams, IrwaError> {
    Ok(AssetTypeThresholdParams {
        asset_type_id: asset_type.parse::<AssetType>()?.code(),
        amount: amount.to_string(),
    })
}

/// Cross-border PYUSD payment arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossBorderPaymentParams {
    /// ISO numeric code of the origin country.
    pub from_country_code: u32,
    /// ISO numeric code of the destination country.
    pub to_country_code: u32,
    /// Payment amount, passed through unchanged.
    pub amount: String,
}

/// Build cross-border payment arguments from alpha-2 country strings.
pub fn cross_border_payment_params(
    from_country: &str,
    to_country: &str,
    amount: &str,
) -> Result<CrossBorderPaymentParams, IrwaError> {
    Ok(CrossBorderPaymentParams {
        from_country_code: from_country.parse::<Country>()?.code(),
        to_country_code: to_country.parse::<Country>()?.code(),
        amount: amount.to_string(),
    })
}
