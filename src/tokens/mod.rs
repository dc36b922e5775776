// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token directory with a time-based cache
//!
//! This module maintains a searchable directory of tokens and the chains
//! they are deployed on, fed by a [`TokenListSource`] (coingecko by default)
//! and cached on disk so the multi-megabyte list is fetched at most once per
//! TTL window.
//!
//! # Architecture
//!
//! - [`Token`] - one listed token with its per-platform contract addresses
//! - [`TokenListSource`] - trait seam over the upstream list provider
//! - [`TokenDirectory`] - filtered, ordered, searchable view of a list
//! - [`TokenCache`] - the on-disk JSON cache with its fetch timestamp
//! - [`TokenStore`] - refresh policy tying the three together
//!
//! # Example
//!
//! ```rust,no_run
//! use ethcast::{CoingeckoClient, TokenStore};
//!
//! # async fn example() -> Result<(), ethcast::TokenListError> {
//! let store = TokenStore::new(CoingeckoClient::new(), "tokens.json");
//! let directory = store.directory().await?;
//! for token in directory.search("usdc").iter().take(5) {
//!     println!("{} ({})", token.name, token.symbol.to_uppercase());
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::TokenListError;

mod cache;
mod coingecko;
mod store;

pub use cache::TokenCache;
pub use coingecko::CoingeckoClient;
pub use store::TokenStore;

/// One listed token: upstream id, ticker symbol, display name, and the
/// contract address on every platform (chain) it is deployed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Upstream list identifier, e.g. `usd-coin`
    pub id: String,
    /// Ticker symbol, lowercase as delivered upstream
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Platform name -> contract address on that platform
    #[serde(default, deserialize_with = "deserialize_platforms")]
    pub platforms: BTreeMap<String, String>,
}

impl Token {
    /// Number of platforms this token is deployed on.
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Case-insensitive substring match against name and symbol.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.symbol.to_lowercase().contains(&query)
    }
}

/// The upstream list occasionally carries empty platform keys or null
/// addresses; drop those entries so "has at least one platform" means
/// something.
fn deserialize_platforms<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Option<String>> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(platform, address)| match address {
            Some(address) if !platform.is_empty() && !address.is_empty() => {
                Some((platform, address))
            }
            _ => None,
        })
        .collect())
}

/// Trait for fetching the raw token list from an upstream provider.
///
/// Implementations return the unfiltered upstream list;
/// [`TokenDirectory::from_tokens`] applies the filtering and ordering rules.
/// Tests implement this trait with canned lists.
#[async_trait]
pub trait TokenListSource: Send + Sync {
    /// Fetch the complete token list.
    async fn fetch_token_list(&self) -> Result<Vec<Token>, TokenListError>;
}

/// A filtered, ordered, searchable view of a token list.
///
/// Construction drops tokens without any platform deployment (natives and
/// dead listings) and orders the rest by descending platform count, so the
/// most widely deployed tokens list first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenDirectory {
    tokens: Vec<Token>,
}

impl TokenDirectory {
    /// Build a directory from a raw upstream list.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| t.platform_count() > 0)
            .collect();
        // Stable sort keeps upstream order within equal platform counts
        tokens.sort_by(|a, b| b.platform_count().cmp(&a.platform_count()));
        Self { tokens }
    }

    /// All tokens, most widely deployed first.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in the directory.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens whose name or symbol contains `query`, case-insensitively.
    ///
    /// An empty query matches everything, preserving the directory order.
    pub fn search(&self, query: &str) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.matches(query)).collect()
    }

    /// At most the first `n` tokens of the directory.
    pub fn top(&self, n: usize) -> &[Token] {
        &self.tokens[..n.min(self.tokens.len())]
    }
}
