//! # Code Tables — Strongly-Typed String→Integer Mappings
//!
//! Four independent tables, each an enum with a fixed numeric code per
//! variant. No key appears in more than one table; no code repeats
//! within a table. Parsing is case-insensitive; an unknown key is an
//! [`IrwaError::UnknownIdentifier`] naming the table and the key, never
//! a silent default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use irwa_core::IrwaError;

/// Asset classes for tokenized real-world assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetType {
    /// Government treasury instruments.
    Treasury,
    /// Corporate debt.
    Corporate,
    /// Municipal bonds.
    Municipal,
    /// Commercial real estate.
    Commercial,
    /// Residential real estate.
    Residential,
    /// Physical commodities.
    Commodity,
    /// Equity instruments.
    Equity,
    /// Generic bond instruments.
    Bond,
}

impl AssetType {
    /// All asset types in canonical (code) order.
    pub fn all() -> &'static [AssetType] {
        &[
            Self::Treasury,
            Self::Corporate,
            Self::Municipal,
            Self::Commercial,
            Self::Residential,
            Self::Commodity,
            Self::Equity,
            Self::Bond,
        ]
    }

    /// The numeric code carried in on-chain arguments.
    pub fn code(self) -> u32 {
        match self {
            Self::Treasury => 1,
            Self::Corporate => 2,
            Self::Municipal => 3,
            Self::Commercial => 4,
            Self::Residential => 5,
            Self::Commodity => 6,
            Self::Equity => 7,
            Self::Bond => 8,
        }
    }

    /// The uppercase table key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Treasury => "TREASURY",
            Self::Corporate => "CORPORATE",
            Self::Municipal => "MUNICIPAL",
            Self::Commercial => "COMMERCIAL",
            Self::Residential => "RESIDENTIAL",
            Self::Commodity => "COMMODITY",
            Self::Equity => "EQUITY",
            Self::Bond => "BOND",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = IrwaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TREASURY" => Ok(Self::Treasury),
            "CORPORATE" => Ok(Self::Corporate),
            "MUNICIPAL" => Ok(Self::Municipal),
            "COMMERCIAL" => Ok(Self::Commercial),
            "RESIDENTIAL" => Ok(Self::Residential),
            "COMMODITY" => Ok(Self::Commodity),
            "EQUITY" => Ok(Self::Equity),
            "BOND" => Ok(Self::Bond),
            _ => Err(IrwaError::UnknownIdentifier {
                table: "asset type",
                key: s.to_string(),
            }),
        }
    }
}

/// Market regimes used by liquidity scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketCondition {
    /// Sustained upward trend.
    Bull,
    /// Sustained downward trend.
    Bear,
    /// Low volatility, sideways.
    Stable,
    /// Elevated volatility.
    Volatile,
    /// Market-wide stress event.
    Crisis,
    /// Post-crisis normalization.
    Recovery,
}

impl MarketCondition {
    /// All market conditions in canonical (code) order.
    pub fn all() -> &'static [MarketCondition] {
        &[
            Self::Bull,
            Self::Bear,
            Self::Stable,
            Self::Volatile,
            Self::Crisis,
            Self::Recovery,
        ]
    }

    /// The numeric code carried in on-chain arguments.
    pub fn code(self) -> u32 {
        match self {
            Self::Bull => 1,
            Self::Bear => 2,
            Self::Stable => 3,
            Self::Volatile => 4,
            Self::Crisis => 5,
            Self::Recovery => 6,
        }
    }

    /// The uppercase table key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bull => "BULL",
            Self::Bear => "BEAR",
            Self::Stable => "STABLE",
            Self::Volatile => "VOLATILE",
            Self::Crisis => "CRISIS",
            Self::Recovery => "RECOVERY",
        }
    }
}

impl std::fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketCondition {
    type Err = IrwaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BULL" => Ok(Self::Bull),
            "BEAR" => Ok(Self::Bear),
            "STABLE" => Ok(Self::Stable),
            "VOLATILE" => Ok(Self::Volatile),
            "CRISIS" => Ok(Self::Crisis),
            "RECOVERY" => Ok(Self::Recovery),
            _ => Err(IrwaError::UnknownIdentifier {
                table: "market condition",
                key: s.to_string(),
            }),
        }
    }
}

/// Supported jurisdictions for cross-border payment rules.
///
/// Codes are ISO-3166-1 numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    /// United States.
    Us,
    /// United Kingdom.
    Gb,
    /// Germany.
    De,
    /// France.
    Fr,
    /// Japan.
    Jp,
    /// Singapore.
    Sg,
    /// Hong Kong.
    Hk,
    /// Australia.
    Au,
    /// Canada.
    Ca,
    /// Switzerland.
    Ch,
}

impl Country {
    /// All supported countries in table order.
    pub fn all() -> &'static [Country] {
        &[
            Self::Us,
            Self::Gb,
            Self::De,
            Self::Fr,
            Self::Jp,
            Self::Sg,
            Self::Hk,
            Self::Au,
            Self::Ca,
            Self::Ch,
        ]
    }

    /// The ISO-3166-1 numeric code.
    pub fn code(self) -> u32 {
        match self {
            Self::Us => 840,
            Self::Gb => 826,
            Self::De => 276,
            Self::Fr => 250,
            Self::Jp => 392,
            Self::Sg => 702,
            Self::Hk => 344,
            Self::Au => 36,
            Self::Ca => 124,
            Self::Ch => 756,
        }
    }

    /// The uppercase ISO-3166-1 alpha-2 key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Gb => "GB",
            Self::De => "DE",
            Self::Fr => "FR",
            Self::Jp => "JP",
            Self::Sg => "SG",
            Self::Hk => "HK",
            Self::Au => "AU",
            Self::Ca => "CA",
            Self::Ch => "CH",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = IrwaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "US" => Ok(Self::Us),
            "GB" => Ok(Self::Gb),
            "DE" => Ok(Self::De),
            "FR" => Ok(Self::Fr),
            "JP" => Ok(Self::Jp),
            "SG" => Ok(Self::Sg),
            "HK" => Ok(Self::Hk),
            "AU" => Ok(Self::Au),
            "CA" => Ok(Self::Ca),
            "CH" => Ok(Self::Ch),
            _ => Err(IrwaError::UnknownIdentifier {
                table: "country code",
                key: s.to_string(),
            }),
        }
    }
}

/// Categories for asset metadata scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetadataCategory {
    /// Financial disclosures.
    Financial,
    /// Legal documentation.
    Legal,
    /// Compliance attestations.
    Compliance,
    /// Operational records.
    Operational,
    /// Technical specifications.
    Technical,
}

impl MetadataCategory {
    /// All metadata categories in canonical (code) order.
    pub fn all() -> &'static [MetadataCategory] {
        &[
            Self::Financial,
            Self::Legal,
            Self::Compliance,
            Self::Operational,
            Self::Technical,
        ]
    }

    /// The numeric code carried in on-chain arguments.
    pub fn code(self) -> u32 {
        match self {
            Self::Financial => 1,
            Self::Legal => 2,
            Self::Compliance => 3,
            Self::Operational => 4,
            Self::Technical => 5,
        }
    }

    /// The uppercase table key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Financial => "FINANCIAL",
            Self::Legal => "LEGAL",
            Self::Compliance => "COMPLIANCE",
            Self::Operational => "OPERATIONAL",
            Self::Technical => "TECHNICAL",
        }
    }
}

impl std::fmt::Display for MetadataCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataCategory {
    type Err = IrwaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FINANCIAL" => Ok(Self::Financial),
            "LEGAL" => Ok(Self::Legal),
            "COMPLIANCE" => Ok(Self::Compliance),
            "OPERATIONAL" => Ok(Self::Operational),
            "TECHNICAL" => Ok(Self::Technical),
            _ => Err(IrwaError::UnknownIdentifier {
                table: "metadata category",
                key: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_sizes() {
        assert_eq!(AssetType::all().len(), 8);
        assert_eq!(MarketCondition::all().len(), 6);
        assert_eq!(Country::all().len(), 10);
        assert_eq!(MetadataCategory::all().len(), 5);
    }

    #[test]
    fn asset_type_codes_are_fixed() {
        assert_eq!("treasury".parse::<AssetType>().unwrap().code(), 1);
        assert_eq!("CORPORATE".parse::<AssetType>().unwrap().code(), 2);
        assert_eq!("Bond".parse::<AssetType>().unwrap().code(), 8);
    }

    #[test]
    fn country_codes_are_iso_numeric() {
        assert_eq!("us".parse::<Country>().unwrap().code(), 840);
        assert_eq!("gb".parse::<Country>().unwrap().code(), 826);
        assert_eq!("AU".parse::<Country>().unwrap().code(), 36);
        assert_eq!("ch".parse::<Country>().unwrap().code(), 756);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        for t in AssetType::all() {
            assert_eq!(t.as_str().to_lowercase().parse::<AssetType>().unwrap(), *t);
        }
        for c in MarketCondition::all() {
            assert_eq!(
                c.as_str().to_lowercase().parse::<MarketCondition>().unwrap(),
                *c
            );
        }
        for c in Country::all() {
            assert_eq!(c.as_str().to_lowercase().parse::<Country>().unwrap(), *c);
        }
        for m in MetadataCategory::all() {
            assert_eq!(
                m.as_str().to_lowercase().parse::<MetadataCategory>().unwrap(),
                *m
            );
        }
    }

    #[test]
    fn unknown_keys_error_with_table_and_key() {
        let err = "crypto".parse::<AssetType>().unwrap_err();
        match err {
            IrwaError::UnknownIdentifier { table, key } => {
                assert_eq!(table, "asset type");
                assert_eq!(key, "crypto");
            }
            other => panic!("expected UnknownIdentifier, got {other:?}"),
        }
        assert!("SIDEWAYS".parse::<MarketCondition>().is_err());
        assert!("ZZ".parse::<Country>().is_err());
        assert!("MARKETING".parse::<MetadataCategory>().is_err());
    }

    #[test]
    fn codes_are_unique_within_each_table() {
        let codes: HashSet<u32> = AssetType::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes.len(), AssetType::all().len());
        let codes: HashSet<u32> = MarketCondition::all().iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), MarketCondition::all().len());
        let codes: HashSet<u32> = Country::all().iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), Country::all().len());
        let codes: HashSet<u32> = MetadataCategory::all().iter().map(|m| m.code()).collect();
        assert_eq!(codes.len(), MetadataCategory::all().len());
    }

    #[test]
    fn keys_are_disjoint_across_tables() {
        let mut seen = HashSet::new();
        for k in AssetType::all().iter().map(|t| t.as_str()) {
            assert!(seen.insert(k), "duplicate key {k}");
        }
        for k in MarketCondition::all().iter().map(|c| c.as_str()) {
            assert!(seen.insert(k), "duplicate key {k}");
        }
        for k in Country::all().iter().map(|c| c.as_str()) {
            assert!(seen.insert(k), "duplicate key {k}");
        }
        for k in MetadataCategory::all().iter().map(|m| m.as_str()) {
            assert!(seen.insert(k), "duplicate key {k}");
        }
    }

    #[test]
    fn serde_uses_uppercase_keys() {
        assert_eq!(
            serde_json::to_string(&AssetType::Treasury).unwrap(),
            "\"TREASURY\""
        );
        assert_eq!(serde_json::to_string(&Country::Us).unwrap(), "\"US\"");
    }

    #[test]
    fn display_matches_as_str() {
        for t in AssetType::all() {
            assert_eq!(t.to_string(), t.as_str());
        }
        for c in Country::all() {
            assert_eq!(c.to_string(), c.as_str());
        }
    }
}
