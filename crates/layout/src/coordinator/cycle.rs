//! One relayout pass: measure, pack, evict, place.

use billow_primitives::Rect;
use tracing::{debug, trace};

use super::BalloonLayout;
use crate::balloon::BalloonHandle;
use crate::container::SurfaceAnchor;
use crate::measure::{EntryMap, MeasureCache};
use crate::pack::Packing;
use crate::place::{Slot, place};
use crate::spacing::GapMode;

impl BalloonLayout {
	/// Runs a single pass over a snapshot of the sequence.
	///
	/// Evicts the oldest balloons until the rest fit in one column, then
	/// writes bounds to every survivor. Balloons are called with no state
	/// borrowed.
	pub(super) fn run_pass(&self) {
		let inner = &self.inner;
		inner.metrics.inc_relayout();

		let (mut balloons, mut entries) = inner.state.borrow().snapshot();
		if balloons.is_empty() {
			trace!("layout.relayout.empty");
			return;
		}

		let mut cache = MeasureCache::calculate(&balloons, &entries);
		self.store_shared_width(&cache);

		let available = Rect::sized(inner.container.size()).inset(inner.config.insets);
		trace!(balloons = balloons.len(), available_height = available.height, "layout.relayout");

		let mut slots = measure_slots(&balloons, &entries, &cache);
		let mut packing = Packing::pack(&heights(&slots), available.height);

		while packing.is_overflowing() {
			let oldest = balloons.remove(0);
			entries.remove(&oldest);
			cache.refresh_shared_width(&balloons, &entries);
			slots = measure_slots(&balloons, &entries, &cache);

			inner.metrics.inc_eviction();
			debug!(columns = packing.column_count(), remaining = balloons.len(), "layout.evict");
			self.remove(&oldest, true);
			self.store_shared_width(&cache);

			packing = Packing::pack(&heights(&slots), available.height);
		}

		let anchor = SurfaceAnchor::resolve(&*inner.container, inner.config.edge_padding);
		let mode = if entries.is_empty() { GapMode::Flat } else { GapMode::Stacked };
		let bounds = place(&slots, &packing, anchor, &inner.spacing, mode);

		for (balloon, rect) in balloons.iter().zip(bounds) {
			// A callback earlier in this loop may have removed it.
			if self.contains(balloon) {
				balloon.set_bounds(rect);
			}
		}
	}

	/// Publishes the pass's shared width, keeping it `None` while no entry is tracked.
	fn store_shared_width(&self, cache: &MeasureCache) {
		let mut state = self.inner.state.borrow_mut();
		state.shared_width = if state.entries.is_empty() { None } else { cache.shared_width() };
	}
}

fn measure_slots(balloons: &[BalloonHandle], entries: &EntryMap, cache: &MeasureCache) -> Vec<Slot> {
	balloons
		.iter()
		.map(|balloon| Slot {
			size: cache.effective_size(balloon, entries),
			shadow: balloon.shadow(),
		})
		.collect()
}

fn heights(slots: &[Slot]) -> Vec<i32> {
	slots.iter().map(|slot| slot.size.height).collect()
}
