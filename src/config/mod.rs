// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for ethcast's network-backed utilities.
//!
//! The conversion engine and constants need no configuration; this module
//! controls the HTTP endpoints, request timeout, and token cache TTL used by
//! the selector lookup and token directory clients.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use ethcast::EthcastConfig;
//!
//! // openchain.xyz + coingecko, 5 second timeout, 24 hour cache TTL
//! let config = EthcastConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use ethcast::EthcastConfigBuilder;
//! use std::time::Duration;
//!
//! let config = EthcastConfigBuilder::new()
//!     .http_timeout(Duration::from_secs(10))
//!     .token_cache_ttl(Duration::from_secs(3600))
//!     .build();
//! ```

use std::time::Duration;

use url::Url;

/// Default signature database lookup endpoint (openchain.xyz).
pub const SIGNATURE_DATABASE_URL: &str = "https://api.openchain.xyz/signature-database/v1/lookup";

/// Default token list endpoint (coingecko, platform addresses included via
/// query parameter).
pub const TOKEN_LIST_URL: &str = "https://api.coingecko.com/api/v3/coins/list";

/// Default timeout applied to every HTTP request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Default time-to-live for the on-disk token list cache.
pub const DEFAULT_TOKEN_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for ethcast's network clients.
///
/// Use [`EthcastConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct EthcastConfig {
    /// Signature database lookup endpoint
    pub signature_endpoint: Url,

    /// Token list endpoint
    pub token_list_endpoint: Url,

    /// Timeout for HTTP requests
    /// Default: 5 seconds (public APIs, fail fast)
    pub http_timeout: Duration,

    /// How long a cached token list is served before a refresh is attempted
    /// Default: 24 hours
    pub token_cache_ttl: Duration,
}

impl Default for EthcastConfig {
    fn default() -> Self {
        Self {
            signature_endpoint: Url::parse(SIGNATURE_DATABASE_URL)
                .expect("default signature endpoint is a valid URL"),
            token_list_endpoint: Url::parse(TOKEN_LIST_URL)
                .expect("default token list endpoint is a valid URL"),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            token_cache_ttl: DEFAULT_TOKEN_CACHE_TTL,
        }
    }
}

/// Builder for [`EthcastConfig`]
///
/// # Example
///
/// ```rust
/// use ethcast::EthcastConfigBuilder;
/// use std::time::Duration;
/// use url::Url;
///
/// let config = EthcastConfigBuilder::new()
///     .signature_endpoint(Url::parse("https://sig-db.internal/v1/lookup").unwrap())
///     .http_timeout(Duration::from_secs(2))
///     .build();
/// ```
pub struct EthcastConfigBuilder {
    config: EthcastConfig,
}

impl Default for EthcastConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EthcastConfigBuilder {
    /// Create a new builder starting from the default configuration.
    pub fn new() -> Self {
        Self {
            config: EthcastConfig::default(),
        }
    }

    /// Set the signature database lookup endpoint.
    pub fn signature_endpoint(mut self, endpoint: Url) -> Self {
        self.config.signature_endpoint = endpoint;
        self
    }

    /// Set the token list endpoint.
    pub fn token_list_endpoint(mut self, endpoint: Url) -> Self {
        self.config.token_list_endpoint = endpoint;
        self
    }

    /// Set the timeout applied to every HTTP request.
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    /// Set how long a cached token list is considered fresh.
    pub fn token_cache_ttl(mut self, ttl: Duration) -> Self {
        self.config.token_cache_ttl = ttl;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> EthcastConfig {
        self.config
    }
}
