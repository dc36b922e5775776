// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known Ethereum constants
//!
//! This module centralizes the magic values every EVM developer ends up
//! pasting from memory: the zero address, the native-token placeholder used
//! by router and aggregator APIs, integer bounds, and the default developer
//! mnemonic shipped by Hardhat and Anvil.

use alloy_primitives::{address, Address, B256, I256, U256};

/// The zero address, `0x0000000000000000000000000000000000000000`.
///
/// Used as a burn target and as the "no address" sentinel in many contracts.
pub const ADDRESS_ZERO: Address = Address::ZERO;

/// Placeholder address conventionally used for the chain's native asset
/// (ETH, BNB, MATIC, ...) in router and aggregator APIs.
///
/// Address: 0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE
pub const NATIVE_TOKEN_PLACEHOLDER: Address =
    address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// The zero hash, 32 zero bytes.
pub const HASH_ZERO: B256 = B256::ZERO;

/// Number of wei in one ether (10^18).
pub const WEI_PER_ETHER: U256 = U256::from_limbs([0x0de0_b6b3_a764_0000, 0, 0, 0]);

/// The largest value representable by a `uint256` (2^256 - 1).
///
/// The canonical "infinite approval" amount.
pub const MAX_UINT256: U256 = U256::MAX;

/// The largest value representable by an `int256` (2^255 - 1).
pub const MAX_INT256: I256 = I256::MAX;

/// The default developer mnemonic used by Hardhat and Anvil local networks.
///
/// Every key derived from this phrase is public knowledge. Never send real
/// funds to its accounts.
pub const DEFAULT_DEV_MNEMONIC: &str =
    "test test test test test test test test test test test junk";

/// All well-known constants as `(label, display value)` pairs, in a fixed
/// display order.
///
/// Addresses render EIP-55 checksummed, integers render as plain base-10
/// strings.
///
/// # Example
///
/// ```
/// let constants = ethcast::constants::well_known();
/// assert_eq!(constants[0].0, "AddressZero");
/// assert_eq!(constants[0].1, "0x0000000000000000000000000000000000000000");
/// ```
pub fn well_known() -> Vec<(&'static str, String)> {
    vec![
        ("AddressZero", ADDRESS_ZERO.to_string()),
        ("NativeToken", NATIVE_TOKEN_PLACEHOLDER.to_string()),
        ("HashZero", HASH_ZERO.to_string()),
        ("WeiPerEther", WEI_PER_ETHER.to_string()),
        ("MaxUint256", MAX_UINT256.to_string()),
        ("MaxInt256", MAX_INT256.to_string()),
        ("Default Mnemonic", DEFAULT_DEV_MNEMONIC.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wei_per_ether() {
        assert_eq!(WEI_PER_ETHER.to_string(), "1000000000000000000");
        assert_eq!(WEI_PER_ETHER, U256::from(10u64).pow(U256::from(18u64)));
    }

    #[test]
    fn test_max_uint256() {
        assert_eq!(
            MAX_UINT256.to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    #[test]
    fn test_max_int256() {
        assert_eq!(
            MAX_INT256.to_string(),
            "57896044618658097711785492504343953926634992332820282019728792003956564819967"
        );
    }

    #[test]
    fn test_native_token_placeholder_checksum() {
        // Display must reproduce the canonical EIP-55 form used by routers
        assert_eq!(
            NATIVE_TOKEN_PLACEHOLDER.to_string(),
            "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE"
        );
    }

    #[test]
    fn test_hash_zero() {
        assert_eq!(
            HASH_ZERO.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_well_known_order() {
        let labels: Vec<&str> = well_known().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "AddressZero",
                "NativeToken",
                "HashZero",
                "WeiPerEther",
                "MaxUint256",
                "MaxInt256",
                "Default Mnemonic",
            ]
        );
    }

    #[test]
    fn test_default_dev_mnemonic_word_count() {
        assert_eq!(DEFAULT_DEV_MNEMONIC.split_whitespace().count(), 12);
    }
}
