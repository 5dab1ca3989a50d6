//! Cancel-and-reschedule debounce for deferred relayout.
//!
//! [`Debouncer`] holds at most one pending request. Scheduling again replaces
//! it, so a burst of triggers collapses into a single firing `delay` after the
//! last one. The host drives it by asking [`Debouncer::fire_due`] with the
//! current time.

use std::time::{Duration, Instant};

/// Default quiet interval before a deferred relayout runs.
pub const DEFAULT_RELAYOUT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Identifies one scheduled request; superseded handles never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
	pub const fn generation(self) -> u64 {
		self.0
	}
}

#[derive(Debug, Clone, Copy)]
struct Pending {
	handle: TimerHandle,
	due: Instant,
}

/// Single-slot deferred task timer.
#[derive(Debug)]
pub struct Debouncer {
	delay: Duration,
	generation: u64,
	pending: Option<Pending>,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_RELAYOUT_DEBOUNCE)
	}
}

impl Debouncer {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			generation: 0,
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Cancels any pending request and arms a new one due at `now + delay`.
	pub fn schedule(&mut self, now: Instant) -> TimerHandle {
		self.generation = self.generation.wrapping_add(1);
		let handle = TimerHandle(self.generation);
		self.pending = Some(Pending {
			handle,
			due: now + self.delay,
		});
		handle
	}

	/// Drops the pending request. Returns true if one was armed.
	pub fn cancel(&mut self) -> bool {
		self.pending.take().is_some()
	}

	/// Returns true while `handle` is the armed request.
	pub fn is_pending(&self, handle: TimerHandle) -> bool {
		self.pending.is_some_and(|pending| pending.handle == handle)
	}

	/// Deadline of the armed request, if any.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.map(|pending| pending.due)
	}

	/// Disarms and returns the request whose deadline has passed.
	pub fn fire_due(&mut self, now: Instant) -> Option<TimerHandle> {
		match self.pending {
			Some(pending) if now >= pending.due => {
				self.pending = None;
				Some(pending.handle)
			}
			_ => None,
		}
	}
}
