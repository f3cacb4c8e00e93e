//! # Content Digests as 256-bit Integers
//!
//! On-chain policy rules compare string-valued inputs (LEIs, corporate
//! names, metadata URIs) against precomputed hash values carried in
//! `uint256` contract fields. [`content_hash()`] is the single digest
//! path: SHA-256 over the UTF-8 encoding of the input, interpreted as a
//! big-endian 256-bit unsigned integer.
//!
//! ## Determinism Invariant
//!
//! The same input must produce the same [`Uint256`] on every run and
//! every platform. This is the core testable contract of the codec —
//! a drifting digest silently breaks every deployed policy rule that
//! compares against it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::IrwaError;

/// A 256-bit unsigned integer, stored big-endian.
///
/// Serializes as its exact decimal string — `uint256` arguments travel
/// as decimal strings in policy JSON because JSON numbers cannot hold
/// 256 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// The zero value.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Construct from big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The big-endian byte representation.
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Parse from a hex string with optional `0x` prefix, at most 64
    /// digits, left-padded with zeros. This is the `bytes32` → `uint256`
    /// conversion used for document hashes already in hex form.
    pub fn from_hex(s: &str) -> Result<Self, IrwaError> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        if hex.is_empty() || hex.len() > 64 {
            return Err(IrwaError::Validation(format!(
                "uint256 hex value must be 1..=64 hex digits: {s:?}"
            )));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IrwaError::Validation(format!(
                "uint256 hex value contains non-hex characters: {s:?}"
            )));
        }
        let padded = format!("{hex:0>64}");
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            // Indexing is safe: `padded` is exactly 64 ASCII hex chars.
            let pair = &padded[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|_| IrwaError::Validation(format!("invalid hex pair: {pair:?}")))?;
        }
        Ok(Self(bytes))
    }

    /// Parse from an exact decimal string.
    pub fn from_decimal(s: &str) -> Result<Self, IrwaError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IrwaError::Validation(format!(
                "uint256 decimal value must be ASCII digits: {s:?}"
            )));
        }
        let mut bytes = [0u8; 32];
        for digit in s.bytes() {
            // bytes = bytes * 10 + digit, big-endian with carry.
            let mut carry = u32::from(digit - b'0');
            for b in bytes.iter_mut().rev() {
                let cur = u32::from(*b) * 10 + carry;
                *b = (cur & 0xff) as u8;
                carry = cur >> 8;
            }
            if carry != 0 {
                return Err(IrwaError::Validation(format!(
                    "decimal value exceeds 256 bits: {s:?}"
                )));
            }
        }
        Ok(Self(bytes))
    }

    /// Render as 64 lowercase hex digits without prefix.
    pub fn to_hex(self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Render as an exact decimal string.
    pub fn to_decimal(self) -> String {
        let mut scratch: Vec<u8> = self.0.to_vec();
        let mut digits = Vec::new();
        loop {
            // Divide scratch by 10, collecting the remainder digit.
            let mut rem: u32 = 0;
            for b in scratch.iter_mut() {
                let cur = rem * 256 + u32::from(*b);
                *b = (cur / 10) as u8;
                rem = cur % 10;
            }
            digits.push(b'0' + rem as u8);
            while scratch.first() == Some(&0) {
                scratch.remove(0);
            }
            if scratch.is_empty() {
                break;
            }
        }
        digits.reverse();
        // Digits are ASCII by construction.
        String::from_utf8_lossy(&digits).into_owned()
    }
}

impl std::fmt::Display for Uint256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl Serialize for Uint256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Uint256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Uint256::from_decimal(&raw).map_err(serde::de::Error::custom)
    }
}

/// Hash a content string to a 256-bit integer.
///
/// SHA-256 over the UTF-8 bytes of `input`, big-endian. Stable across
/// runs and platforms; distinct inputs yield distinct outputs with
/// overwhelming probability.
pub fn content_hash(input: &str) -> Uint256 {
    let hash = Sha256::digest(input.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Uint256::from_be_bytes(bytes)
}
