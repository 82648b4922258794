// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-key sliding-window rate limiting.
//!
//! The chat flow throttles how many questions one user may ask per window.
//! The store is a trait so callers inject it: the in-memory
//! [`SlidingWindowLimiter`] for a single process, or something backed by a
//! shared store when several servers answer the same users. Nothing here is a
//! module-level singleton.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

/// A counter store keyed by caller identity.
pub trait RateLimitStore: Send + Sync {
    /// Record a hit for `key` if fewer than `max_count` hits fall within the
    /// last `window`. Returns whether the hit was allowed. Denied hits are
    /// not recorded.
    fn check_and_record(&self, key: &str, window: Duration, max_count: usize) -> bool;
}

/// Key count at which the first idle-key sweep runs.
const SWEEP_MIN_KEYS: usize = 1024;

/// In-memory sliding window: one deque of hit timestamps per key.
///
/// Idle keys are swept once the key count reaches a high-water mark, which
/// then resets to twice the surviving count. Memory stays proportional to
/// the keys active within one window without callers invoking [`prune`].
///
/// [`prune`]: SlidingWindowLimiter::prune
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    state: Mutex<WindowState>,
}

#[derive(Debug)]
struct WindowState {
    hits: HashMap<String, VecDeque<Instant>>,
    sweep_at: usize,
}

impl Default for SlidingWindowLimiter {
    fn default() -> Self {
        Self {
            state: Mutex::new(WindowState {
                hits: HashMap::new(),
                sweep_at: SWEEP_MIN_KEYS,
            }),
        }
    }
}

fn retain_active(hits: &mut HashMap<String, VecDeque<Instant>>, window: Duration, now: Instant) {
    hits.retain(|_, timestamps| {
        timestamps
            .back()
            .is_some_and(|&newest| now.saturating_duration_since(newest) < window)
    });
}

impl SlidingWindowLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// [`RateLimitStore::check_and_record`] at an explicit point in time.
    pub fn check_and_record_at(
        &self,
        key: &str,
        window: Duration,
        max_count: usize,
        now: Instant,
    ) -> bool {
        if max_count == 0 {
            return false;
        }

        let mut guard = self.state.lock();
        let state = &mut *guard;

        if state.hits.len() >= state.sweep_at {
            let before = state.hits.len();
            retain_active(&mut state.hits, window, now);
            state.sweep_at = (state.hits.len() * 2).max(SWEEP_MIN_KEYS);
            debug!(before, after = state.hits.len(), "swept idle rate-limit keys");
        }

        let timestamps = state.hits.entry(key.to_string()).or_default();

        while let Some(&oldest) = timestamps.front() {
            if now.saturating_duration_since(oldest) >= window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        if timestamps.len() >= max_count {
            debug!(key, max_count, "rate limited");
            return false;
        }

        timestamps.push_back(now);
        true
    }

    /// Drop keys whose every hit is older than `window`.
    pub fn prune(&self, window: Duration, now: Instant) {
        retain_active(&mut self.state.lock().hits, window, now);
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.state.lock().hits.len()
    }
}

impl RateLimitStore for SlidingWindowLimiter {
    fn check_and_record(&self, key: &str, window: Duration, max_count: usize) -> bool {
        self.check_and_record_at(key, window, max_count, Instant::now())
    }
}
