// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sliding-window request limiter keyed by client.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

pub const DEFAULT_MAX_REQUESTS: u32 = 50;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Stale clients are dropped once every this many checks.
const PRUNE_EVERY: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
	pub max_requests: u32,
	pub window: Duration,
}

impl Default for RateLimitConfig {
	fn default() -> Self {
		Self {
			max_requests: DEFAULT_MAX_REQUESTS,
			window: DEFAULT_WINDOW,
		}
	}
}

#[derive(Debug, Default)]
struct LimiterState {
	hits: HashMap<String, VecDeque<Instant>>,
	checks: u64,
}

#[derive(Debug)]
pub struct RateLimiter {
	config: RateLimitConfig,
	state: Mutex<LimiterState>,
}

impl RateLimiter {
	pub fn new(config: RateLimitConfig) -> Self {
		Self {
			config,
			state: Mutex::new(LimiterState::default()),
		}
	}

	pub fn config(&self) -> RateLimitConfig {
		self.config
	}

	/// Record a request from `client` now. Returns false when the client has
	/// already used its allowance for the current window.
	pub fn check(&self, client: &str) -> bool {
		self.check_at(client, Instant::now())
	}

	pub fn check_at(&self, client: &str, now: Instant) -> bool {
		let mut state = self.state.lock();

		state.checks += 1;
		if state.checks % PRUNE_EVERY == 0 {
			prune(&mut state.hits, now, self.config.window);
		}

		let hits = state.hits.entry(client.to_string()).or_default();
		evict_expired(hits, now, self.config.window);

		if hits.len() >= self.config.max_requests as usize {
			return false;
		}
		hits.push_back(now);
		true
	}

	/// Drop clients with no request inside the window ending at `now`.
	pub fn prune_at(&self, now: Instant) {
		prune(&mut self.state.lock().hits, now, self.config.window);
	}

	/// Number of clients currently tracked.
	pub fn tracked_clients(&self) -> usize {
		self.state.lock().hits.len()
	}
}

impl Default for RateLimiter {
	fn default() -> Self {
		Self::new(RateLimitConfig::default())
	}
}

/// Timestamps strictly inside `(now - window, now]` are kept.
fn evict_expired(hits: &mut VecDeque<Instant>, now: Instant, window: Duration) {
	while let Some(&oldest) = hits.front() {
		if now.saturating_duration_since(oldest) >= window {
			hits.pop_front();
		} else {
			break;
		}
	}
}

fn prune(hits: &mut HashMap<String, VecDeque<Instant>>, now: Instant, window: Duration) {
	let before = hits.len();
	hits.retain(|_, client_hits| {
		evict_expired(client_hits, now, window);
		!client_hits.is_empty()
	});
	debug!(removed = before - hits.len(), remaining = hits.len(), "pruned rate limit entries");
}
