// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ethereum developer utilities.
//!
//! This crate packages the small lookups and conversions that come up
//! constantly in EVM development:
//!
//! - **Unit conversion** ([`UnitTable`]): convert decimal amounts between
//!   wei, gwei, satoshi, micro and ether using arbitrary-precision decimal
//!   arithmetic (no floating point anywhere in the path).
//! - **Well-known constants** ([`constants`]): zero address, max uint256,
//!   the native-token placeholder address, the default developer mnemonic.
//! - **Selector lookup** ([`OpenchainClient`]): resolve a 4-byte function
//!   selector to candidate signatures via the openchain.xyz database.
//! - **Token directory** ([`TokenStore`]): a searchable token list fetched
//!   from coingecko and cached on disk with a time-based TTL.
//! - **Throwaway accounts** ([`AccountSet`]): fresh BIP-39 mnemonics with
//!   BIP-44 derived addresses and private keys, for local testing only.
//!
//! # Example
//!
//! ```
//! use ethcast::UnitTable;
//!
//! let units = UnitTable::mainnet();
//! let wei = units.convert("ether", "wei", "1.5").unwrap();
//! assert_eq!(wei, "1500000000000000000");
//! ```

pub mod accounts;
pub mod config;
pub mod constants;
mod errors;
pub mod signatures;
pub mod tokens;
pub mod units;

pub use accounts::{derive_accounts, generate_mnemonic, AccountSet, DerivedAccount};
pub use config::{EthcastConfig, EthcastConfigBuilder};
pub use errors::{
    AccountError, ConversionError, EthcastError, SignatureLookupError, TokenListError,
};
pub use signatures::{FunctionSignature, OpenchainClient, Selector, SignatureSource};
pub use tokens::{CoingeckoClient, Token, TokenCache, TokenDirectory, TokenListSource, TokenStore};
pub use units::{FieldValues, Unit, UnitTable};
