// ABOUTME: Per-client token bucket admission control for inbound API traffic
// ABOUTME: Buckets live in a sharded DashMap and are refilled once per elapsed window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Admission Control
//!
//! Every client identity owns one bucket of `capacity` tokens. A bucket is
//! created on the first request from its identity and refilled to capacity
//! each time a full window has elapsed since its creation. Each admitted
//! request consumes one token.

use crate::config::RateLimitConfig;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Token state for one client identity
#[derive(Debug, Clone, Copy)]
pub struct AdmissionBucket {
    /// Tokens left in the current window
    pub tokens: u32,
    /// Start of the current window
    pub window_start: Instant,
}

impl AdmissionBucket {
    const fn full(capacity: u32, now: Instant) -> Self {
        Self {
            tokens: capacity,
            window_start: now,
        }
    }

    /// Reset to capacity if one or more windows elapsed, keeping windows
    /// aligned to the bucket's creation instant
    fn refill(&mut self, capacity: u32, config: &RateLimitConfig, now: Instant) {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < config.window {
            return;
        }

        let window_nanos = config.window.as_nanos().max(1);
        let windows = elapsed.as_nanos() / window_nanos;
        let advance = u32::try_from(windows)
            .ok()
            .and_then(|n| config.window.checked_mul(n));
        self.window_start = advance
            .and_then(|d| self.window_start.checked_add(d))
            .unwrap_or(now);
        self.tokens = capacity;
    }
}

/// Result of one admission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionDecision {
    /// Whether the request may proceed
    pub allowed: bool,
    /// Bucket capacity
    pub limit: u32,
    /// Tokens left after this attempt
    pub remaining: u32,
    /// Seconds the client should wait before retrying
    pub retry_after_secs: u64,
}

/// Process-wide admission controller keyed by client identity
#[derive(Clone)]
pub struct AdmissionController {
    buckets: Arc<DashMap<String, AdmissionBucket>>,
    config: RateLimitConfig,
}

impl AdmissionController {
    /// Create a controller with the given policy
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: Arc::new(DashMap::new()),
            config,
        }
    }

    /// Number of identities seen so far
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }

    /// Try to consume one token for `identity` now
    #[must_use]
    pub fn try_acquire(&self, identity: &str) -> AdmissionDecision {
        self.try_acquire_at(identity, Instant::now())
    }

    /// Try to consume one token for `identity` at `now`
    ///
    /// The read-modify-write runs under the `DashMap` entry guard, so
    /// concurrent callers for the same identity never share a token.
    #[must_use]
    pub fn try_acquire_at(&self, identity: &str, now: Instant) -> AdmissionDecision {
        let capacity = self.config.capacity;

        let mut entry = self
            .buckets
            .entry(identity.to_owned())
            .or_insert_with(|| AdmissionBucket::full(capacity, now));
        let bucket = entry.value_mut();
        bucket.refill(capacity, &self.config, now);

        let allowed = bucket.tokens > 0;
        if allowed {
            bucket.tokens -= 1;
        }
        let remaining = bucket.tokens;
        drop(entry);

        if !allowed {
            debug!(client = %identity, "Admission rejected, bucket empty");
        }

        AdmissionDecision {
            allowed,
            limit: capacity,
            remaining,
            retry_after_secs: self.config.retry_after_secs,
        }
    }
}

impl Default for AdmissionController {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
