// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for 4-byte selector lookups.

/// Errors that can occur when resolving a function selector against a
/// signature database.
///
/// Transport failures carry the operation that was attempted plus the
/// underlying error as a `source`, so callers can log useful context without
/// string-matching on messages.
#[derive(Debug, thiserror::Error)]
pub enum SignatureLookupError {
    /// The input is not a valid 4-byte selector.
    ///
    /// Selectors are exactly `0x` followed by 8 hex digits.
    #[error("Not a 4-byte selector: {input:?}")]
    InvalidSelector {
        /// The rejected input string
        input: String,
    },

    /// The HTTP request to the signature database failed.
    ///
    /// Covers connection failures, timeouts, and non-success status codes.
    #[error("Signature database request failed during {operation}")]
    RequestFailed {
        /// Description of the operation that failed (e.g., "lookup 0xa9059cbb")
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Failed to decode signature database response")]
    DecodeFailed {
        /// The underlying decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The signature database answered but reported a failed lookup
    /// (`ok: false`).
    #[error("Signature database rejected the lookup for {selector}")]
    LookupRejected {
        /// The selector that was being resolved
        selector: String,
    },
}

impl SignatureLookupError {
    /// Create an `InvalidSelector` error for a rejected input string.
    pub fn invalid_selector(input: impl Into<String>) -> Self {
        SignatureLookupError::InvalidSelector {
            input: input.into(),
        }
    }

    /// Helper to create a `RequestFailed` error from any error type.
    pub fn request_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SignatureLookupError::RequestFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `DecodeFailed` error from any error type.
    pub fn decode_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        SignatureLookupError::DecodeFailed {
            source: Box::new(source),
        }
    }
}
