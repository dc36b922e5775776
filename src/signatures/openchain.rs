// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! [`SignatureSource`] implementation backed by the openchain.xyz public
//! signature database.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::EthcastConfig;
use crate::errors::SignatureLookupError;
use crate::signatures::{FunctionSignature, Selector, SignatureSource};

/// HTTP client for the openchain.xyz signature database.
///
/// Lookups are unauthenticated GETs against the public lookup endpoint with
/// `filter=false`, so filtered (likely-poisoned) entries are returned too and
/// callers can decide how to present them.
///
/// # Example
///
/// ```rust,no_run
/// use ethcast::{OpenchainClient, Selector, SignatureSource};
///
/// # async fn example() -> Result<(), ethcast::SignatureLookupError> {
/// let client = OpenchainClient::new();
/// let selector: Selector = "0xa9059cbb".parse()?;
/// for sig in client.lookup_function(selector).await? {
///     println!("{}", sig.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenchainClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl OpenchainClient {
    /// Create a client against the default openchain.xyz endpoint.
    pub fn new() -> Self {
        Self::with_config(&EthcastConfig::default())
    }

    /// Create a client using the endpoint and timeout from `config`.
    pub fn with_config(config: &EthcastConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.signature_endpoint.clone(),
            timeout: config.http_timeout,
        }
    }
}

impl Default for OpenchainClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignatureSource for OpenchainClient {
    async fn lookup_function(
        &self,
        selector: Selector,
    ) -> Result<Vec<FunctionSignature>, SignatureLookupError> {
        let key = selector.to_string();
        let operation = format!("lookup {key}");

        debug!(selector = %key, endpoint = %self.endpoint, "Querying signature database");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("function", key.as_str()), ("filter", "false")])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| SignatureLookupError::request_failed(operation.clone(), e))?
            .error_for_status()
            .map_err(|e| SignatureLookupError::request_failed(operation, e))?;

        let body: LookupResponse = response
            .json()
            .await
            .map_err(SignatureLookupError::decode_failed)?;

        if !body.ok {
            return Err(SignatureLookupError::LookupRejected { selector: key });
        }

        // Unknown selectors come back as a null (or absent) entry.
        let signatures = body
            .result
            .function
            .get(&key)
            .cloned()
            .flatten()
            .unwrap_or_default();

        debug!(selector = %key, count = signatures.len(), "Signature lookup complete");

        Ok(signatures)
    }
}

/// Wire shape of an openchain.xyz lookup response.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    ok: bool,
    #[serde(default)]
    result: LookupResult,
}

#[derive(Debug, Default, Deserialize)]
struct LookupResult {
    #[serde(default)]
    function: HashMap<String, Option<Vec<FunctionSignature>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lookup_response() {
        let raw = r#"{
            "ok": true,
            "result": {
                "event": {},
                "function": {
                    "0xa9059cbb": [
                        { "name": "transfer(address,uint256)", "filtered": false },
                        { "name": "many_msg_babbage(bytes1)", "filtered": true }
                    ]
                }
            }
        }"#;

        let body: LookupResponse = serde_json::from_str(raw).unwrap();
        assert!(body.ok);

        let entries = body.result.function["0xa9059cbb"].as_ref().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "transfer(address,uint256)");
        assert!(!entries[0].filtered);
        assert!(entries[1].filtered);
    }

    #[test]
    fn test_decode_unknown_selector_is_null() {
        let raw = r#"{
            "ok": true,
            "result": { "function": { "0xdeadbeef": null } }
        }"#;

        let body: LookupResponse = serde_json::from_str(raw).unwrap();
        assert!(body.result.function["0xdeadbeef"].is_none());
    }

    #[test]
    fn test_decode_missing_filtered_defaults_false() {
        let raw = r#"{
            "ok": true,
            "result": { "function": { "0x313ce567": [ { "name": "decimals()" } ] } }
        }"#;

        let body: LookupResponse = serde_json::from_str(raw).unwrap();
        let entries = body.result.function["0x313ce567"].as_ref().unwrap();
        assert!(!entries[0].filtered);
    }
}
