// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Refresh policy tying the token list source, directory, and cache together.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{EthcastConfig, DEFAULT_TOKEN_CACHE_TTL};
use crate::errors::TokenListError;
use crate::tokens::{TokenCache, TokenDirectory, TokenListSource};

/// Serves the token directory, hitting the upstream source at most once per
/// TTL window.
///
/// The policy mirrors what a well-behaved client of a rate-limited public
/// list should do:
///
/// 1. a fresh cache is served without touching the network;
/// 2. a stale or missing cache triggers a fetch, and the result is persisted;
/// 3. when the fetch fails but any cache exists (however stale), the cache is
///    served and the failure is only logged; the error surfaces solely when
///    there is nothing at all to show.
#[derive(Debug)]
pub struct TokenStore<S> {
    source: S,
    cache_path: Box<Path>,
    cache_ttl: Duration,
}

impl<S: TokenListSource> TokenStore<S> {
    /// Create a store with the default 24-hour TTL.
    pub fn new(source: S, cache_path: impl AsRef<Path>) -> Self {
        Self {
            source,
            cache_path: cache_path.as_ref().into(),
            cache_ttl: DEFAULT_TOKEN_CACHE_TTL,
        }
    }

    /// Create a store using the TTL from `config`.
    pub fn with_config(source: S, cache_path: impl AsRef<Path>, config: &EthcastConfig) -> Self {
        Self {
            source,
            cache_path: cache_path.as_ref().into(),
            cache_ttl: config.token_cache_ttl,
        }
    }

    /// The TTL after which a cached list is considered stale.
    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Get the token directory, refreshing from upstream only when needed.
    ///
    /// # Errors
    ///
    /// Fails only when the upstream fetch fails *and* no cached list exists,
    /// or when the fetched list cannot be persisted.
    pub async fn directory(&self) -> Result<TokenDirectory, TokenListError> {
        // A corrupt cache is treated as missing rather than fatal; the next
        // successful fetch rewrites it.
        let cached = match TokenCache::load(&self.cache_path).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable token cache");
                None
            }
        };

        if let Some(cache) = &cached {
            if !cache.is_stale(self.cache_ttl) {
                debug!(
                    fetched_at = %cache.fetched_at(),
                    "Serving token directory from fresh cache"
                );
                return Ok(TokenDirectory::from_tokens(cache.tokens().to_vec()));
            }
        }

        match self.refresh().await {
            Ok(directory) => Ok(directory),
            Err(e) => match cached {
                Some(cache) => {
                    warn!(
                        error = %e,
                        fetched_at = %cache.fetched_at(),
                        "Token list fetch failed, serving stale cache"
                    );
                    Ok(TokenDirectory::from_tokens(cache.into_tokens()))
                }
                None => Err(e),
            },
        }
    }

    /// Fetch from upstream unconditionally and persist the result.
    pub async fn refresh(&self) -> Result<TokenDirectory, TokenListError> {
        let tokens = self.source.fetch_token_list().await?;
        let cache = TokenCache::new(tokens);
        cache.save(&self.cache_path).await?;

        info!(tokens = cache.tokens().len(), "Token list refreshed");
        Ok(TokenDirectory::from_tokens(cache.into_tokens()))
    }
}
