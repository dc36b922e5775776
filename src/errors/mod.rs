// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the ethcast library.
//!
//! This module provides strongly-typed errors for all public APIs in ethcast.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   (`ConversionError`, `SignatureLookupError`, etc.)
//! - **Unified error type** (`EthcastError`) for convenience when you don't
//!   need to distinguish between error sources
//!
//! # Architecture
//!
//! Each major module has its own error type:
//! - [`ConversionError`] - Errors from the unit conversion engine
//! - [`SignatureLookupError`] - Errors from 4-byte selector lookups
//! - [`TokenListError`] - Errors from token list fetching and caching
//! - [`AccountError`] - Errors from mnemonic generation and HD derivation
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use ethcast::{ConversionError, UnitTable};
//!
//! let units = UnitTable::mainnet();
//! match units.convert("ether", "wei", "1.2.3") {
//!     Ok(wei) => println!("{wei}"),
//!     Err(ConversionError::InvalidValue { value }) => {
//!         eprintln!("not a decimal string: {value}");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use ethcast::{EthcastError, UnitTable};
//!
//! fn one_ether_in_wei() -> Result<String, EthcastError> {
//!     // Module errors convert automatically via From implementations.
//!     Ok(UnitTable::mainnet().convert("ether", "wei", "1")?)
//! }
//! ```

mod accounts;
mod conversion;
mod signatures;
mod tokens;

pub use accounts::AccountError;
pub use conversion::ConversionError;
pub use signatures::SignatureLookupError;
pub use tokens::TokenListError;

/// Unified error type for all ethcast operations.
///
/// This enum wraps all module-specific error types, providing a convenient
/// way to handle errors when you don't need to distinguish between different
/// error sources.
///
/// All module-specific error types automatically convert to `EthcastError`
/// via `From` implementations, so you can use `?` to propagate errors
/// naturally.
#[derive(Debug, thiserror::Error)]
pub enum EthcastError {
    /// Error from the unit conversion engine.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error from 4-byte selector lookups.
    #[error("Signature lookup error: {0}")]
    SignatureLookup(#[from] SignatureLookupError),

    /// Error from token list fetching or caching.
    #[error("Token list error: {0}")]
    TokenList(#[from] TokenListError),

    /// Error from mnemonic generation or account derivation.
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}
