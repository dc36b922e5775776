// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! 4-byte function selector lookup
//!
//! This module provides a trait-based architecture for resolving function
//! selectors to human-readable signatures. The workflow:
//!
//! 1. Parse user input into a [`Selector`] (exactly `0x` + 8 hex digits)
//! 2. Hand it to a [`SignatureSource`] implementation
//! 3. Receive candidate [`FunctionSignature`]s, most likely match first
//!
//! [`OpenchainClient`] is the bundled implementation against the public
//! openchain.xyz signature database. Implement [`SignatureSource`] to plug in
//! another database (or a mock in tests).

use std::fmt;
use std::str::FromStr;

use alloy_primitives::hex;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::SignatureLookupError;

mod openchain;

pub use openchain::OpenchainClient;

/// A 4-byte function selector: the first four bytes of the keccak-256 hash
/// of a canonical function signature.
///
/// Parses from exactly `0x` (or `0X`) followed by 8 hex digits; anything
/// shorter, longer, or non-hex is rejected. Displays as lowercase `0x`-hex,
/// the form signature databases key on.
///
/// # Example
///
/// ```
/// use ethcast::Selector;
///
/// let selector: Selector = "0xa9059cbb".parse().unwrap();
/// assert_eq!(selector.to_string(), "0xa9059cbb");
/// assert!("0xa9059cb".parse::<Selector>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; 4]);

impl Selector {
    /// Create a selector from its raw bytes.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// The raw selector bytes.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl FromStr for Selector {
    type Err = SignatureLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| SignatureLookupError::invalid_selector(s))?;

        if hex_part.len() != 8 {
            return Err(SignatureLookupError::invalid_selector(s));
        }

        let mut bytes = [0u8; 4];
        hex::decode_to_slice(hex_part, &mut bytes)
            .map_err(|_| SignatureLookupError::invalid_selector(s))?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// One candidate signature for a selector, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// The canonical signature text, e.g. `transfer(address,uint256)`
    pub name: String,
    /// Whether the database marks this entry as filtered (likely junk or a
    /// collision submitted to poison lookups)
    #[serde(default)]
    pub filtered: bool,
}

/// Trait for resolving function selectors against a signature database.
///
/// The trait is object-safe, allowing runtime pluggability via
/// `Box<dyn SignatureSource>`, and async because every real database lives
/// behind the network. Tests implement it with canned responses.
#[async_trait]
pub trait SignatureSource: Send + Sync {
    /// Resolve a selector to its candidate function signatures.
    ///
    /// An unknown selector resolves to an empty list, not an error; errors
    /// are reserved for transport and protocol failures.
    async fn lookup_function(
        &self,
        selector: Selector,
    ) -> Result<Vec<FunctionSignature>, SignatureLookupError>;
}
