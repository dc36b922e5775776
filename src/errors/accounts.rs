// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for mnemonic generation and HD account derivation.

/// Errors that can occur when generating mnemonics or deriving accounts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// The phrase is not a valid BIP-39 English mnemonic.
    #[error("Invalid mnemonic: {reason}")]
    InvalidMnemonic {
        /// Description of what made the phrase invalid
        reason: String,
    },

    /// BIP-32 key derivation failed.
    ///
    /// This is effectively unreachable for the standard Ethereum path with a
    /// valid seed, but the underlying library surfaces it and so do we.
    #[error("Key derivation failed: {reason}")]
    DerivationFailed {
        /// Description of the derivation failure
        reason: String,
    },
}

impl AccountError {
    /// Create an `InvalidMnemonic` error with a description.
    pub fn invalid_mnemonic(reason: impl Into<String>) -> Self {
        AccountError::InvalidMnemonic {
            reason: reason.into(),
        }
    }

    /// Create a `DerivationFailed` error with a description.
    pub fn derivation_failed(reason: impl Into<String>) -> Self {
        AccountError::DerivationFailed {
            reason: reason.into(),
        }
    }
}
