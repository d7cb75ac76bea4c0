// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! The cache-under-test capability and deterministic stand-ins.
//!
//! The harness drives any cache through the two-method [`CacheUnderTest`]
//! contract and only observes presence/absence of a looked-up value. How the
//! cache matches queries to stored keys (exact, semantic, anything else) is
//! entirely its own business.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;

/// Failure raised by a cache-under-test operation.
///
/// The harness never inspects the message beyond attaching it to the phase
/// diagnostic, so implementations are free to stringify whatever internal
/// error they have.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CacheFault(pub String);

impl CacheFault {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Two-method capability contract for the cache under test.
pub trait CacheUnderTest {
    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`CacheFault`] on internal failure (index/backend error).
    fn put(&mut self, key: &str, value: &str) -> Result<(), CacheFault>;

    /// Look up a value for `query`. `None` means a miss.
    ///
    /// # Errors
    ///
    /// Returns a [`CacheFault`] on internal failure.
    fn get(&mut self, query: &str) -> Result<Option<String>, CacheFault>;
}

/// Exact-match LRU cache used as the baseline fixture by the `cache_bench`
/// binary. Intentionally has no similarity matching at all: paraphrased
/// lookups miss, so it marks the floor a semantic cache has to beat.
pub struct ExactLruCache {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl ExactLruCache {
    /// Create a cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(4096)),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn promote(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }
}

impl CacheUnderTest for ExactLruCache {
    fn put(&mut self, key: &str, value: &str) -> Result<(), CacheFault> {
        if self.entries.insert(key.to_string(), value.to_string()).is_some() {
            self.promote(key);
            return Ok(());
        }

        self.order.push_back(key.to_string());
        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        Ok(())
    }

    fn get(&mut self, query: &str) -> Result<Option<String>, CacheFault> {
        let hit = self.entries.get(query).cloned();
        if hit.is_some() {
            self.promote(query);
        }
        Ok(hit)
    }
}

/// Deterministic double: hits exactly the queries in its configured hit set
/// and records every `put` call, in order. Lets the harness phases and the
/// metrics engine be tested without any real cache behind them.
#[derive(Debug, Default)]
pub struct ScriptedCache {
    hits: HashMap<String, String>,
    /// Keys passed to `put`, in call order.
    pub puts: Vec<String>,
    fail_put_on: Option<String>,
    fail_get_on: Option<String>,
}

impl ScriptedCache {
    /// A cache that answers `value` for each query in `hits` and misses
    /// everything else.
    #[must_use]
    pub fn with_hits<I, S>(hits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hits: hits
                .into_iter()
                .map(|q| (q.into(), "scripted answer".to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// A cache that misses every query.
    #[must_use]
    pub fn always_miss() -> Self {
        Self::default()
    }

    /// Make every `put` of `key` fail.
    #[must_use]
    pub fn failing_put(mut self, key: impl Into<String>) -> Self {
        self.fail_put_on = Some(key.into());
        self
    }

    /// Make every `get` of `query` fail.
    #[must_use]
    pub fn failing_get(mut self, query: impl Into<String>) -> Self {
        self.fail_get_on = Some(query.into());
        self
    }
}

impl CacheUnderTest for ScriptedCache {
    fn put(&mut self, key: &str, _value: &str) -> Result<(), CacheFault> {
        if self.fail_put_on.as_deref() == Some(key) {
            return Err(CacheFault::new("scripted put failure"));
        }
        self.puts.push(key.to_string());
        Ok(())
    }

    fn get(&mut self, query: &str) -> Result<Option<String>, CacheFault> {
        if self.fail_get_on.as_deref() == Some(query) {
            return Err(CacheFault::new("scripted get failure"));
        }
        Ok(self.hits.get(query).cloned())
    }
}
