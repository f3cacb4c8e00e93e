//! # Contract-Call Helpers
//!
//! Argument builders for the institutional RWA contract's mint
//! functions. Each produces the engine-compatible numeric fields plus
//! the original strings, which the contract stores as metadata.

use serde::Serialize;

use irwa_core::{IrwaError, Uint256};

use crate::rules::{cross_border_payment_params, gleif_params};
use crate::tables::AssetType;

/// Arguments for `mintInstitutionalAsset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintInstitutionalAssetParams {
    /// Recipient address.
    pub recipient: String,
    /// Token amount.
    pub amount: String,
    /// Principal amount in base units.
    pub principal_amount: String,
    /// Numeric asset type code.
    pub asset_type_id: u32,
    /// Hash of the Legal Entity Identifier.
    pub lei_hash: Uint256,
    /// Hash of the corporate name.
    pub corporate_name_hash: Uint256,
    /// Original asset type string (stored as metadata).
    pub asset_type: String,
    /// Original LEI string (stored as metadata).
    pub lei: String,
    /// Original corporate name (stored as metadata).
    pub corporate_name: String,
}

/// Build `mintInstitutionalAsset` arguments from operator inputs.
pub fn mint_institutional_asset_params(
    recipient: &str,
    amount: &str,
    principal_amount: &str,
    asset_type: &str,
    lei: &str,
    corporate_name: &str,
) -> Result<MintInstitutionalAssetParams, IrwaError> {
    let gleif = gleif_params(lei, corporate_name);
    Ok(MintInstitutionalAssetParams {
        recipient: recipient.to_string(),
        amount: amount.to_string(),
        principal_amount: principal_amount.to_string(),
        asset_type_id: asset_type.parse::<AssetType>()?.code(),
        lei_hash: gleif.lei_hash,
        corporate_name_hash: gleif.corporate_name_hash,
        asset_type: asset_type.to_string(),
        lei: lei.to_string(),
        corporate_name: corporate_name.to_string(),
    })
}

/// Arguments for `mintInstitutionalAssetPYUSD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintPyusdAssetParams {
    /// Recipient address.
    pub recipient: String,
    /// Token amount.
    pub amount: String,
    /// PYUSD payment amount in base units.
    pub pyusd_amount: String,
    /// ISO numeric code of the buyer's country.
    pub from_country_code: u32,
    /// ISO numeric code of the seller's country.
    pub to_country_code: u32,
    /// Original buyer country string (stored as metadata).
    pub buyer_country: String,
    /// Original seller country string (stored as metadata).
    pub seller_country: String,
}

/// Build `mintInstitutionalAssetPYUSD` arguments from operator inputs.
pub fn mint_pyusd_asset_params(
    recipient: &str,
    amount: &str,
    pyusd_amount: &str,
    buyer_country: &str,
    seller_country: &str,
) -> Result<MintPyusdAssetParams, IrwaError> {
    let xb = cross_border_payment_params(buyer_country, seller_country, pyusd_amount)?;
    Ok(MintPyusdAssetParams {
        recipient: recipient.to_string(),
        amount: amount.to_string(),
        pyusd_amount: pyusd_amount.to_string(),
        from_country_code: xb.from_country_code,
        to_country_code: xb.to_country_code,
        buyer_country: buyer_country.to_string(),
        seller_country: seller_country.to_string(),
    })
}
