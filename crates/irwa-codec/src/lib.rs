//! # irwa-codec — Parameter Codec
//!
//! Pure functions, no I/O, no external calls. Translates the
//! human-readable strings operators write in policy files and demo
//! scripts into the numeric identifiers on-chain functions expect:
//!
//! - **Code tables** — four strongly-typed enums ([`AssetType`],
//!   [`MarketCondition`], [`Country`], [`MetadataCategory`]) with
//!   case-insensitive parsing. Unknown keys are errors, never defaults.
//! - **Content hashing** — strings in none of the tables (LEIs, names,
//!   URIs) become deterministic 256-bit integers via
//!   [`irwa_core::content_hash`].
//! - **Rule wrappers** — typed argument sets for each policy rule family,
//!   with the exact camelCase field names the rules engine expects.

pub mod contract;
pub mod convert;
pub mod rules;
pub mod tables;

pub use contract::{
    mint_institutional_asset_params, mint_pyusd_asset_params, MintInstitutionalAssetParams,
    MintPyusdAssetParams,
};
pub use convert::convert_params;
pub use tables::{AssetType, Country, MarketCondition, MetadataCategory};
