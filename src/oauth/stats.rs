// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for token provider activity.
#[derive(Debug, Default)]
pub struct TokenMetrics {
	authorizations: AtomicU64,
	refreshes: AtomicU64,
	cache_hits: AtomicU64,
	failures: AtomicU64,
}
impl TokenMetrics {
	/// Returns the number of password grants sent.
	pub fn authorizations(&self) -> u64 {
		self.authorizations.load(Ordering::Relaxed)
	}

	/// Returns the number of refresh grants sent.
	pub fn refreshes(&self) -> u64 {
		self.refreshes.load(Ordering::Relaxed)
	}

	/// Returns the number of calls answered from the cached token.
	pub fn cache_hits(&self) -> u64 {
		self.cache_hits.load(Ordering::Relaxed)
	}

	/// Returns the number of grants that failed.
	pub fn failures(&self) -> u64 {
		self.failures.load(Ordering::Relaxed)
	}

	pub(crate) fn record_authorization(&self) {
		self.authorizations.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_refresh(&self) {
		self.refreshes.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_cache_hit(&self) {
		self.cache_hits.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failures.fetch_add(1, Ordering::Relaxed);
	}
}
