//! Balloon layout coordinator.
//!
//! [`BalloonLayout`] owns the ordered balloon sequence for one container and
//! runs a relayout pass whenever a balloon is added or an entry asks for one.
//! Container resizes and host disposals go through a debounce slot instead; an
//! owner drives it with [`BalloonLayout::tick`] or the async [`crate::drive`]
//! loop.
//!
//! # Re-entrancy
//!
//! Balloons and host callbacks may call back into the layout while a pass is
//! running (a `hide` that disposes, a `set_bounds` that requests relayout). No
//! `RefCell` borrow is held across such calls. A relayout requested during a
//! pass is folded into a single follow-up pass.

mod cycle;
mod state;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Instant;

use tokio::sync::Notify;
use tracing::{debug, trace, warn};

use self::state::LayoutState;
use crate::balloon::{BalloonHandle, DisposeHook};
use crate::clock::{Clock, SystemClock};
use crate::config::LayoutConfig;
use crate::container::Container;
use crate::debounce::Debouncer;
use crate::entry::{LayoutCallback, LayoutEntry};
use crate::error::{ConfigError, LayoutError, Result};
use crate::metrics::LayoutMetrics;
use crate::spacing::SpacingRule;

/// Upper bound on follow-up passes triggered from inside a pass.
const MAX_PASSES: usize = 8;

/// Coordinates the placement of notification balloons in one container.
///
/// Cloning yields another handle to the same layout.
#[derive(Clone)]
pub struct BalloonLayout {
	inner: Rc<Inner>,
}

struct Inner {
	container: Rc<dyn Container>,
	config: LayoutConfig,
	spacing: SpacingRule,
	clock: Rc<dyn Clock>,
	state: RefCell<LayoutState>,
	debounce: RefCell<Debouncer>,
	running: Cell<bool>,
	rerun: Cell<bool>,
	pending_show: RefCell<Vec<BalloonHandle>>,
	wake: Notify,
	metrics: LayoutMetrics,
}

impl BalloonLayout {
	/// Creates a layout over `container` using the system clock.
	pub fn new(container: Rc<dyn Container>, config: LayoutConfig) -> std::result::Result<Self, ConfigError> {
		Self::with_clock(container, config, Rc::new(SystemClock))
	}

	/// Creates a layout whose debounce reads time from `clock`.
	///
	/// Rejects the same configs [`LayoutConfig::from_toml`] does. Subscribes to
	/// container resizes; each one queues a deferred relayout.
	pub fn with_clock(
		container: Rc<dyn Container>,
		config: LayoutConfig,
		clock: Rc<dyn Clock>,
	) -> std::result::Result<Self, ConfigError> {
		config.validate()?;
		let layout = Self {
			inner: Rc::new(Inner {
				spacing: config.spacing(),
				debounce: RefCell::new(Debouncer::new(config.debounce())),
				container,
				config,
				clock,
				state: RefCell::new(LayoutState::default()),
				running: Cell::new(false),
				rerun: Cell::new(false),
				pending_show: RefCell::new(Vec::new()),
				wake: Notify::new(),
				metrics: LayoutMetrics::new(),
			}),
		};

		let weak = layout.weak();
		layout.inner.container.subscribe_resize(Box::new(move || {
			if let Some(layout) = Self::upgrade(&weak) {
				layout.queue_relayout();
			}
		}));

		debug!(debounce_ms = layout.inner.config.debounce_ms, "layout.create");
		Ok(layout)
	}

	/// Appends `balloon`, relayouts immediately and shows it.
	///
	/// When `entry` is given it is wired to this layout's close-all and
	/// relayout operations and the balloon joins the shared width. Called
	/// from inside a running pass, the balloon is shown once the follow-up
	/// pass has placed it.
	pub fn add(&self, balloon: impl Into<BalloonHandle>, entry: Option<Rc<LayoutEntry>>) -> Result<()> {
		let balloon = balloon.into();
		if self.contains(&balloon) {
			return Err(LayoutError::AlreadyTracked);
		}

		if let Some(entry) = &entry {
			entry.wire(self.close_all_callback(), self.relayout_callback());
		}
		balloon.on_dispose(self.dispose_hook(&balloon));

		let has_entry = entry.is_some();
		self.inner.state.borrow_mut().push(balloon.clone(), entry);
		trace!(has_entry, len = self.len(), "layout.add");

		self.inner.pending_show.borrow_mut().push(balloon);
		self.relayout_now();
		Ok(())
	}

	/// Adds a balloon that does not take part in the shared width.
	pub fn add_plain(&self, balloon: impl Into<BalloonHandle>) -> Result<()> {
		self.add(balloon, None)
	}

	/// Stops tracking `balloon`, hiding it first when `hide` is set.
	///
	/// Untracked balloons are ignored. Does not relayout.
	pub fn remove(&self, balloon: &BalloonHandle, hide: bool) {
		let removed = self.inner.state.borrow_mut().remove(balloon);
		if !removed {
			return;
		}
		trace!(hide, len = self.len(), "layout.remove");
		if hide {
			balloon.hide();
		}
	}

	pub fn is_empty(&self) -> bool {
		self.inner.state.borrow().balloons.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.state.borrow().balloons.len()
	}

	pub fn contains(&self, balloon: &BalloonHandle) -> bool {
		self.inner.state.borrow().contains(balloon)
	}

	/// Tracked balloons, oldest first.
	pub fn balloons(&self) -> Vec<BalloonHandle> {
		self.inner.state.borrow().balloons.clone()
	}

	/// Width shared by all balloons while any of them owns an entry.
	pub fn shared_width(&self) -> Option<i32> {
		self.inner.state.borrow().shared_width
	}

	/// Requests a deferred relayout, replacing any pending request.
	pub fn queue_relayout(&self) {
		let now = self.inner.clock.now();
		let handle = self.inner.debounce.borrow_mut().schedule(now);
		trace!(generation = handle.generation(), "layout.debounce.schedule");
		self.inner.wake.notify_one();
	}

	/// Removes and hides every balloon, oldest first.
	pub fn close_all(&self) {
		let balloons = self.balloons();
		debug!(count = balloons.len(), "layout.close_all");
		for balloon in &balloons {
			self.remove(balloon, true);
		}
	}

	/// Runs a relayout pass now.
	///
	/// Called from inside a running pass, the request is recorded and the
	/// running pass repeats once it finishes.
	pub fn relayout_now(&self) {
		let inner = &self.inner;
		if inner.running.replace(true) {
			inner.rerun.set(true);
			inner.metrics.inc_coalesced();
			trace!("layout.relayout.coalesced");
			return;
		}
		{
			let _running = RunningGuard(&inner.running);
			for pass in 1..=MAX_PASSES {
				inner.rerun.set(false);
				self.run_pass();
				if !inner.rerun.get() {
					break;
				}
				if pass == MAX_PASSES {
					warn!(passes = pass, "layout.relayout.reentry_limit");
				}
			}
		}
		self.show_pending();
	}

	/// Shows balloons added since the last completed pass, oldest first.
	///
	/// Balloons evicted or removed before their first placement stay hidden.
	fn show_pending(&self) {
		loop {
			let next = {
				let mut pending = self.inner.pending_show.borrow_mut();
				if pending.is_empty() { None } else { Some(pending.remove(0)) }
			};
			let Some(balloon) = next else {
				return;
			};
			if self.contains(&balloon) {
				balloon.show(&*self.inner.container);
			}
		}
	}

	/// Fires the deferred relayout if its quiet interval has elapsed.
	///
	/// Returns true when a pass ran.
	pub fn tick(&self) -> bool {
		let now = self.inner.clock.now();
		let fired = self.inner.debounce.borrow_mut().fire_due(now);
		let Some(handle) = fired else {
			return false;
		};
		trace!(generation = handle.generation(), "layout.debounce.fire");
		self.inner.metrics.inc_debounced();
		self.relayout_now();
		true
	}

	/// When the pending deferred relayout becomes due.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.inner.debounce.borrow().deadline()
	}

	pub fn config(&self) -> &LayoutConfig {
		&self.inner.config
	}

	pub fn metrics(&self) -> &LayoutMetrics {
		&self.inner.metrics
	}

	/// Signalled whenever a deferred relayout is scheduled.
	pub(crate) fn wake(&self) -> &Notify {
		&self.inner.wake
	}

	fn weak(&self) -> Weak<Inner> {
		Rc::downgrade(&self.inner)
	}

	fn upgrade(weak: &Weak<Inner>) -> Option<Self> {
		weak.upgrade().map(|inner| Self { inner })
	}

	fn close_all_callback(&self) -> LayoutCallback {
		let weak = self.weak();
		Rc::new(move || {
			if let Some(layout) = Self::upgrade(&weak) {
				layout.close_all();
			}
		})
	}

	fn relayout_callback(&self) -> LayoutCallback {
		let weak = self.weak();
		Rc::new(move || {
			if let Some(layout) = Self::upgrade(&weak) {
				layout.relayout_now();
			}
		})
	}

	/// Host-side disposal: forget the balloon without hiding it again.
	fn dispose_hook(&self, balloon: &BalloonHandle) -> DisposeHook {
		let layout = self.weak();
		let balloon = balloon.downgrade();
		Box::new(move || {
			let Some(layout) = Self::upgrade(&layout) else {
				return;
			};
			if let Some(balloon) = balloon.upgrade() {
				layout.remove(&balloon, false);
			}
			layout.queue_relayout();
		})
	}
}

impl fmt::Debug for BalloonLayout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.inner.state.borrow();
		f.debug_struct("BalloonLayout")
			.field("balloons", &state.balloons.len())
			.field("entries", &state.entries.len())
			.field("shared_width", &state.shared_width)
			.field("pending", &self.inner.debounce.borrow().deadline().is_some())
			.finish()
	}
}

/// Clears the running flag even if a balloon callback panics.
struct RunningGuard<'a>(&'a Cell<bool>);

impl Drop for RunningGuard<'_> {
	fn drop(&mut self) {
		self.0.set(false);
	}
}
