// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Throwaway HD-wallet accounts
//!
//! Generates fresh BIP-39 mnemonics and derives Ethereum accounts along the
//! standard BIP-44 path `m/44'/60'/0'/0/{index}`, returning EIP-55
//! checksummed addresses with their private keys.
//!
//! These accounts are for local development and testing. The private keys
//! are handed back as plain strings on purpose: there is no keystore and no
//! encryption. Seed material is zeroized after derivation; the returned keys
//! are the caller's problem.
//!
//! # Example
//!
//! ```
//! use ethcast::AccountSet;
//!
//! let set = AccountSet::random(3).unwrap();
//! assert_eq!(set.mnemonic.split_whitespace().count(), 12);
//! assert_eq!(set.accounts.len(), 3);
//! assert!(set.accounts[0].address.starts_with("0x"));
//! ```

use alloy_primitives::{hex, keccak256, Address};
use bip32::{DerivationPath, XPrv};
use bip39::{Language, Mnemonic};
use k256::ecdsa::SigningKey;
use rand::RngCore;
use zeroize::Zeroize;

use crate::errors::AccountError;

/// Number of accounts derived when no count is given.
pub const DEFAULT_ACCOUNT_COUNT: u32 = 10;

/// BIP-44 Ethereum account path prefix; the address index is appended.
const ETH_DERIVATION_PREFIX: &str = "m/44'/60'/0'/0";

/// One derived account: its path index, EIP-55 address, and private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAccount {
    /// Address index within the derivation path
    pub index: u32,
    /// EIP-55 checksummed address
    pub address: String,
    /// 0x-prefixed 32-byte private key hex
    pub private_key: String,
}

/// A mnemonic together with the accounts derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSet {
    /// The BIP-39 phrase the accounts derive from
    pub mnemonic: String,
    /// Derived accounts, in path index order
    pub accounts: Vec<DerivedAccount>,
}

impl AccountSet {
    /// Generate a fresh mnemonic and derive `count` accounts from it.
    pub fn random(count: u32) -> Result<Self, AccountError> {
        let mnemonic = generate_mnemonic()?;
        let accounts = derive_accounts(&mnemonic, count)?;
        Ok(Self { mnemonic, accounts })
    }

    /// Derive `count` accounts from an existing phrase.
    pub fn from_mnemonic(phrase: &str, count: u32) -> Result<Self, AccountError> {
        let accounts = derive_accounts(phrase, count)?;
        Ok(Self {
            mnemonic: phrase.to_owned(),
            accounts,
        })
    }
}

/// Generate a new 12-word BIP-39 English mnemonic (128 bits of OS entropy).
pub fn generate_mnemonic() -> Result<String, AccountError> {
    let mut entropy = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| AccountError::invalid_mnemonic(e.to_string()))?;
    entropy.zeroize();
    Ok(mnemonic.to_string())
}

/// Derive `count` Ethereum accounts from a mnemonic along
/// `m/44'/60'/0'/0/{0..count}`.
///
/// Derivation is deterministic: the same phrase always yields the same
/// accounts, in the same order.
///
/// # Errors
///
/// Returns [`AccountError::InvalidMnemonic`] when the phrase fails BIP-39
/// validation and [`AccountError::DerivationFailed`] if the key derivation
/// itself fails.
pub fn derive_accounts(phrase: &str, count: u32) -> Result<Vec<DerivedAccount>, AccountError> {
    let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
        .map_err(|e| AccountError::invalid_mnemonic(e.to_string()))?;

    let mut seed = mnemonic.to_seed("");
    let accounts = (0..count).map(|index| derive_account(&seed, index)).collect();
    seed.zeroize();

    accounts
}

fn derive_account(seed: &[u8], index: u32) -> Result<DerivedAccount, AccountError> {
    let path: DerivationPath = format!("{ETH_DERIVATION_PREFIX}/{index}")
        .parse()
        .map_err(|e: bip32::Error| AccountError::derivation_failed(e.to_string()))?;

    let xprv = XPrv::derive_from_path(seed, &path)
        .map_err(|e| AccountError::derivation_failed(e.to_string()))?;

    let mut private_key_bytes: [u8; 32] = xprv.to_bytes().into();
    let signing_key = SigningKey::from_bytes(&private_key_bytes.into())
        .map_err(|e| AccountError::derivation_failed(e.to_string()))?;

    // Keccak-256 of the uncompressed public key without the 0x04 prefix;
    // the last 20 bytes are the address.
    let public_key = signing_key.verifying_key().to_encoded_point(false);
    let digest = keccak256(&public_key.as_bytes()[1..]);
    let address = Address::from_slice(&digest[12..]);

    let account = DerivedAccount {
        index,
        address: address.to_checksum(None),
        private_key: format!("0x{}", hex::encode(private_key_bytes)),
    };
    private_key_bytes.zeroize();

    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DEV_MNEMONIC;

    #[test]
    fn test_dev_mnemonic_account_zero() {
        // The first Hardhat/Anvil developer account is public knowledge
        let accounts = derive_accounts(DEFAULT_DEV_MNEMONIC, 1).unwrap();
        assert_eq!(
            accounts[0].address,
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
        assert_eq!(
            accounts[0].private_key,
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
        );
    }

    #[test]
    fn test_dev_mnemonic_account_one() {
        let accounts = derive_accounts(DEFAULT_DEV_MNEMONIC, 2).unwrap();
        assert_eq!(accounts[1].index, 1);
        assert_eq!(
            accounts[1].address,
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
        );
        assert_eq!(
            accounts[1].private_key,
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let first = derive_accounts(DEFAULT_DEV_MNEMONIC, 5).unwrap();
        let second = derive_accounts(DEFAULT_DEV_MNEMONIC, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_derived_addresses_are_distinct() {
        let accounts = derive_accounts(DEFAULT_DEV_MNEMONIC, DEFAULT_ACCOUNT_COUNT).unwrap();
        assert_eq!(accounts.len(), 10);

        let mut addresses: Vec<&str> = accounts.iter().map(|a| a.address.as_str()).collect();
        addresses.sort_unstable();
        addresses.dedup();
        assert_eq!(addresses.len(), 10);
    }

    #[test]
    fn test_generate_mnemonic_is_twelve_valid_words() {
        let phrase = generate_mnemonic().unwrap();
        assert_eq!(phrase.split_whitespace().count(), 12);
        // The generated phrase must itself derive cleanly
        assert!(derive_accounts(&phrase, 1).is_ok());
    }

    #[test]
    fn test_random_sets_differ() {
        let a = AccountSet::random(1).unwrap();
        let b = AccountSet::random(1).unwrap();
        assert_ne!(a.mnemonic, b.mnemonic);
        assert_ne!(a.accounts[0].address, b.accounts[0].address);
    }

    #[test]
    fn test_invalid_mnemonic_rejected() {
        let result = derive_accounts("definitely not a valid mnemonic phrase", 1);
        assert!(matches!(result, Err(AccountError::InvalidMnemonic { .. })));
    }

    #[test]
    fn test_private_key_format() {
        let accounts = derive_accounts(DEFAULT_DEV_MNEMONIC, 1).unwrap();
        let key = &accounts[0].private_key;
        assert!(key.starts_with("0x"));
        assert_eq!(key.len(), 66);
        assert!(key[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
