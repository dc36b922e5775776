// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! On-disk JSON cache for the token list
//!
//! The upstream list is several megabytes and changes slowly; this cache
//! persists it next to the fetch timestamp so restarts don't re-download a
//! list that is still fresh.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::TokenListError;
use crate::tokens::Token;

/// A cached token list and the moment it was fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCache {
    fetched_at: DateTime<Utc>,
    tokens: Vec<Token>,
}

impl TokenCache {
    /// Wrap a freshly fetched list, timestamped now.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            fetched_at: Utc::now(),
            tokens,
        }
    }

    /// Wrap a list with an explicit fetch timestamp.
    pub fn with_fetched_at(tokens: Vec<Token>, fetched_at: DateTime<Utc>) -> Self {
        Self { fetched_at, tokens }
    }

    /// When the cached list was fetched.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// The cached tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the cache, returning the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Whether the cached list is older than `ttl`.
    ///
    /// A fetch timestamp in the future (clock skew) counts as fresh.
    pub fn is_stale(&self, ttl: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => age >= ttl,
            // TTL too large for chrono means it can never be exceeded
            Err(_) => false,
        }
    }

    /// Load a cache file, returning `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// [`TokenListError::CacheIo`] for I/O failures other than a missing
    /// file, [`TokenListError::CacheCorrupt`] when the file exists but does
    /// not deserialize.
    pub async fn load(path: impl AsRef<Path>) -> Result<Option<Self>, TokenListError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "Token cache file does not exist");
            return Ok(None);
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| TokenListError::cache_io(path, e))?;

        let cache: Self = serde_json::from_slice(&data)
            .map_err(|e| TokenListError::cache_corrupt(path, e))?;

        info!(
            path = %path.display(),
            tokens = cache.tokens.len(),
            fetched_at = %cache.fetched_at,
            "Loaded token cache"
        );
        Ok(Some(cache))
    }

    /// Persist the cache to `path`, replacing any previous contents.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), TokenListError> {
        let path = path.as_ref();
        let data =
            serde_json::to_vec(self).map_err(|e| TokenListError::cache_corrupt(path, e))?;

        tokio::fs::write(path, data)
            .await
            .map_err(|e| TokenListError::cache_io(path, e))?;

        debug!(path = %path.display(), tokens = self.tokens.len(), "Saved token cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> Token {
        Token {
            id: "usd-coin".to_string(),
            symbol: "usdc".to_string(),
            name: "USDC".to_string(),
            platforms: [(
                "ethereum".to_string(),
                "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            )]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn test_fresh_cache_is_not_stale() {
        let cache = TokenCache::new(vec![sample_token()]);
        assert!(!cache.is_stale(Duration::from_secs(60)));
    }

    #[test]
    fn test_old_cache_is_stale() {
        let fetched_at = Utc::now() - chrono::Duration::hours(25);
        let cache = TokenCache::with_fetched_at(vec![sample_token()], fetched_at);
        assert!(cache.is_stale(Duration::from_secs(24 * 60 * 60)));
    }

    #[test]
    fn test_future_timestamp_counts_as_fresh() {
        let fetched_at = Utc::now() + chrono::Duration::hours(1);
        let cache = TokenCache::with_fetched_at(vec![sample_token()], fetched_at);
        assert!(!cache.is_stale(Duration::from_secs(1)));
    }

    #[test]
    fn test_serialization_round_trip() {
        let cache = TokenCache::new(vec![sample_token()]);
        let json = serde_json::to_string(&cache).unwrap();
        let restored: TokenCache = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.fetched_at(), cache.fetched_at());
        assert_eq!(restored.tokens(), cache.tokens());
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let loaded = TokenCache::load(&path).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        let cache = TokenCache::new(vec![sample_token()]);
        cache.save(&path).await.unwrap();

        let loaded = TokenCache::load(&path).await.unwrap().unwrap();
        assert_eq!(loaded.tokens(), cache.tokens());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        let result = TokenCache::load(&path).await;
        assert!(matches!(result, Err(TokenListError::CacheCorrupt { .. })));
    }
}
