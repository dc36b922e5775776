// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for ethcast integration tests
//!
//! Provides mock implementations of the source traits so the store and
//! lookup logic can be exercised without any network access.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ethcast::{
    FunctionSignature, Selector, SignatureLookupError, SignatureSource, Token, TokenListError,
    TokenListSource,
};

/// Mock SignatureSource with canned per-selector responses.
///
/// Selectors that were never configured resolve to an empty list, matching
/// the behavior of the real database for unknown selectors.
pub struct MockSignatureSource {
    responses: HashMap<Selector, Vec<FunctionSignature>>,
    fail: bool,
}

impl MockSignatureSource {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fail: false,
        }
    }

    /// Configure the signatures returned for a selector.
    pub fn with_signatures(mut self, selector: Selector, names: &[(&str, bool)]) -> Self {
        self.responses.insert(
            selector,
            names
                .iter()
                .map(|(name, filtered)| FunctionSignature {
                    name: name.to_string(),
                    filtered: *filtered,
                })
                .collect(),
        );
        self
    }

    /// Make every lookup fail with a transport error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl SignatureSource for MockSignatureSource {
    async fn lookup_function(
        &self,
        selector: Selector,
    ) -> Result<Vec<FunctionSignature>, SignatureLookupError> {
        if self.fail {
            return Err(SignatureLookupError::request_failed(
                format!("lookup {selector}"),
                std::io::Error::other("mock transport failure"),
            ));
        }
        Ok(self.responses.get(&selector).cloned().unwrap_or_default())
    }
}

/// Mock TokenListSource serving a queue of canned responses.
///
/// Each fetch consumes the next queued response; an exhausted queue fails
/// the same way a dead network would. Clones share the queue and the call
/// counter, so tests can hand one clone to a store and keep the other for
/// assertions.
#[derive(Clone)]
pub struct MockTokenListSource {
    inner: Arc<MockTokenListInner>,
}

struct MockTokenListInner {
    responses: Mutex<VecDeque<Result<Vec<Token>, TokenListError>>>,
    calls: Mutex<usize>,
}

impl MockTokenListSource {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MockTokenListInner {
                responses: Mutex::new(VecDeque::new()),
                calls: Mutex::new(0),
            }),
        }
    }

    /// Queue a successful fetch returning `tokens`.
    pub fn with_tokens(self, tokens: Vec<Token>) -> Self {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Ok(tokens));
        self
    }

    /// Queue a failing fetch.
    pub fn with_failure(self) -> Self {
        self.inner.responses.lock().unwrap().push_back(Err(
            TokenListError::fetch_failed(
                "token list request",
                std::io::Error::other("mock transport failure"),
            ),
        ));
        self
    }

    /// Number of fetches the store performed against this mock.
    pub fn call_count(&self) -> usize {
        *self.inner.calls.lock().unwrap()
    }
}

#[async_trait]
impl TokenListSource for MockTokenListSource {
    async fn fetch_token_list(&self) -> Result<Vec<Token>, TokenListError> {
        *self.inner.calls.lock().unwrap() += 1;
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TokenListError::fetch_failed(
                    "token list request",
                    std::io::Error::other("mock response queue exhausted"),
                ))
            })
    }
}

/// Build a token with the given platform deployments.
pub fn make_token(id: &str, symbol: &str, name: &str, platforms: &[(&str, &str)]) -> Token {
    Token {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        platforms: platforms
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

/// A small, realistic token list: two multi-chain tokens, one single-chain,
/// and one with no deployments at all.
pub fn sample_token_list() -> Vec<Token> {
    vec![
        make_token("bitcoin", "btc", "Bitcoin", &[]),
        make_token(
            "usd-coin",
            "usdc",
            "USDC",
            &[
                ("ethereum", "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
                ("polygon-pos", "0x3c499c542cef5e3811e1192ce70d8cc03d5c3359"),
                ("base", "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913"),
            ],
        ),
        make_token(
            "tether",
            "usdt",
            "Tether",
            &[
                ("ethereum", "0xdac17f958d2ee523a2206206994597c13d831ec7"),
                ("tron", "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"),
            ],
        ),
        make_token(
            "wrapped-ether",
            "weth",
            "Wrapped Ether",
            &[("ethereum", "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")],
        ),
    ]
}
