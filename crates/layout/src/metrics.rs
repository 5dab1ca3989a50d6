//! Layout counters for observability.
//!
//! Counters use relaxed ordering; they are only read for debug displays and tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Running totals for one balloon layout.
#[derive(Debug, Default)]
pub struct LayoutMetrics {
	/// Relayout passes executed, immediate or deferred.
	pub relayouts: AtomicU64,
	/// Balloons evicted to restore a single column.
	pub evictions: AtomicU64,
	/// Deferred relayouts fired by the debounce timer.
	pub debounced_relayouts: AtomicU64,
	/// Relayout requests folded into a pass already running.
	pub coalesced_requests: AtomicU64,
}

impl LayoutMetrics {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn inc_relayout(&self) {
		self.relayouts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn inc_eviction(&self) {
		self.evictions.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn inc_debounced(&self) {
		self.debounced_relayouts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn inc_coalesced(&self) {
		self.coalesced_requests.fetch_add(1, Ordering::Relaxed);
	}

	pub fn relayouts(&self) -> u64 {
		self.relayouts.load(Ordering::Relaxed)
	}

	pub fn evictions(&self) -> u64 {
		self.evictions.load(Ordering::Relaxed)
	}

	pub fn debounced_relayouts(&self) -> u64 {
		self.debounced_relayouts.load(Ordering::Relaxed)
	}

	pub fn coalesced_requests(&self) -> u64 {
		self.coalesced_requests.load(Ordering::Relaxed)
	}
}
