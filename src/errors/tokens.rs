// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for token list fetching and caching.

use std::path::PathBuf;

/// Errors that can occur when fetching the token list or maintaining its
/// on-disk cache.
#[derive(Debug, thiserror::Error)]
pub enum TokenListError {
    /// The HTTP request to the token list provider failed.
    ///
    /// Note that [`TokenStore`](crate::TokenStore) falls back to a stale
    /// cache when this occurs; the error only surfaces when no cached list
    /// exists at all.
    #[error("Token list request failed during {operation}")]
    FetchFailed {
        /// Description of the operation that failed
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response body could not be decoded as a token list.
    #[error("Failed to decode token list response")]
    DecodeFailed {
        /// The underlying decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading or writing the cache file failed.
    #[error("Cache I/O failed for {path}")]
    CacheIo {
        /// Path of the cache file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The cache file exists but does not contain a valid cached token list.
    #[error("Cache file {path} is corrupt")]
    CacheCorrupt {
        /// Path of the cache file
        path: PathBuf,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl TokenListError {
    /// Helper to create a `FetchFailed` error from any error type.
    pub fn fetch_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TokenListError::FetchFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `DecodeFailed` error from any error type.
    pub fn decode_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        TokenListError::DecodeFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create a `CacheIo` error for a cache file path.
    pub fn cache_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TokenListError::CacheIo {
            path: path.into(),
            source,
        }
    }

    /// Helper to create a `CacheCorrupt` error for a cache file path.
    pub fn cache_corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        TokenListError::CacheCorrupt {
            path: path.into(),
            source,
        }
    }
}
