// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! [`TokenListSource`] implementation backed by the public coingecko API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::config::EthcastConfig;
use crate::errors::TokenListError;
use crate::tokens::{Token, TokenListSource};

/// HTTP client for the coingecko coins list.
///
/// Fetches the full list with `include_platform=true` so every token carries
/// its per-chain contract addresses. The list endpoint is unauthenticated
/// and aggressively rate-limited upstream, which is why
/// [`TokenStore`](crate::TokenStore) caches the result for a day.
#[derive(Debug, Clone)]
pub struct CoingeckoClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl CoingeckoClient {
    /// Create a client against the default coingecko endpoint.
    pub fn new() -> Self {
        Self::with_config(&EthcastConfig::default())
    }

    /// Create a client using the endpoint and timeout from `config`.
    pub fn with_config(config: &EthcastConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.token_list_endpoint.clone(),
            timeout: config.http_timeout,
        }
    }
}

impl Default for CoingeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenListSource for CoingeckoClient {
    async fn fetch_token_list(&self) -> Result<Vec<Token>, TokenListError> {
        debug!(endpoint = %self.endpoint, "Fetching token list");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("include_platform", "true")])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TokenListError::fetch_failed("token list request", e))?
            .error_for_status()
            .map_err(|e| TokenListError::fetch_failed("token list request", e))?;

        let tokens: Vec<Token> = response
            .json()
            .await
            .map_err(TokenListError::decode_failed)?;

        debug!(tokens = tokens.len(), "Token list fetched");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_coins_list_payload() {
        let raw = r#"[
            {
                "id": "usd-coin",
                "symbol": "usdc",
                "name": "USDC",
                "platforms": {
                    "ethereum": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                    "polygon-pos": "0x3c499c542cef5e3811e1192ce70d8cc03d5c3359"
                }
            },
            {
                "id": "bitcoin",
                "symbol": "btc",
                "name": "Bitcoin",
                "platforms": {}
            }
        ]"#;

        let tokens: Vec<Token> = serde_json::from_str(raw).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].platform_count(), 2);
        assert_eq!(tokens[1].platform_count(), 0);
    }
}
