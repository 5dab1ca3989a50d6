use std::rc::Rc;
use std::time::Duration;

use billow_primitives::{Insets, Rect, Size};

use crate::balloon::BalloonHandle;
use crate::entry::LayoutEntry;
use crate::error::LayoutError;
use crate::test_support::{FakeBalloon, Harness};

fn handle(fake: &Rc<FakeBalloon>) -> BalloonHandle {
	BalloonHandle::from(Rc::clone(fake))
}

/// Must leave every tracked balloon in a single column after a relayout pass.
///
/// * Enforced in: `Packing::is_overflowing`, `BalloonLayout::run_pass`
/// * Failure symptom: Balloons spill into a second column over the editor content.
#[cfg_attr(test, test)]
pub(crate) fn test_relayout_leaves_single_column() {
	let h = Harness::new();
	let fakes: Vec<_> = [120, 200, 90, 160, 140].into_iter().map(|height| h.add(Size::new(300, height))).collect();

	let visible: Vec<Rect> = fakes
		.iter()
		.filter(|fake| h.layout.contains(&handle(fake)))
		.filter_map(|fake| fake.bounds())
		.collect();

	assert!(visible.iter().all(|rect| rect.x == 496), "all survivors share one column: {visible:?}");
	let used: i32 = visible.iter().map(|rect| rect.height).sum();
	assert!(used <= 480);
}

/// Must evict the oldest balloon first and hide it.
///
/// * Enforced in: `BalloonLayout::run_pass`, `BalloonLayout::remove`
/// * Failure symptom: A fresh notification disappears while stale ones stay visible.
#[cfg_attr(test, test)]
pub(crate) fn test_eviction_takes_oldest_first() {
	let h = Harness::new();
	let a = h.add(Size::new(300, 200));
	let b = h.add(Size::new(300, 200));
	let c = h.add(Size::new(300, 200));

	assert_eq!(a.hide_count(), 1);
	assert_eq!(b.hide_count(), 0);
	assert_eq!(c.hide_count(), 0);
	assert_eq!(h.layout.balloons(), vec![handle(&b), handle(&c)]);
}

/// Must keep a shared width only while at least one balloon owns a layout entry.
///
/// * Enforced in: `MeasureCache::calculate`, `LayoutState::remove`, `BalloonLayout::run_pass`
/// * Failure symptom: Plain balloons stay stretched after the last stacked notification closes.
#[cfg_attr(test, test)]
pub(crate) fn test_shared_width_tracks_entries() {
	let h = Harness::new();
	h.add(Size::new(280, 40));
	assert_eq!(h.layout.shared_width(), None);

	let stacked = FakeBalloon::new(Size::new(320, 40));
	h.layout.add(handle(&stacked), Some(LayoutEntry::new())).unwrap();
	assert_eq!(h.layout.shared_width(), Some(320));

	h.layout.remove(&handle(&stacked), true);
	assert_eq!(h.layout.shared_width(), None);
}

/// Must not hold layout state borrowed while calling into balloons or host callbacks.
///
/// * Enforced in: `BalloonLayout::run_pass`, `BalloonLayout::remove`, `BalloonLayout::close_all`
/// * Failure symptom: `BorrowMutError` panic when a balloon disposes itself on hide.
#[cfg_attr(test, test)]
pub(crate) fn test_reentrant_callbacks_do_not_panic() {
	let h = Harness::new();
	let entry = LayoutEntry::new();
	let fakes: Vec<_> = (0..3).map(|_| FakeBalloon::new(Size::new(300, 100))).collect();
	for fake in &fakes {
		fake.dispose_when_hidden();
		let layout = h.layout.clone();
		fake.on_next_set_bounds(move || {
			layout.queue_relayout();
			layout.relayout_now();
		});
		h.layout.add(handle(fake), Some(Rc::clone(&entry))).unwrap();
	}

	entry.close_all();

	assert!(h.layout.is_empty());
	assert!(fakes.iter().all(|fake| fake.hide_count() == 1));
}

/// Must run one deferred relayout per burst of requests, after the quiet interval.
///
/// * Enforced in: `Debouncer::schedule`, `BalloonLayout::tick`
/// * Failure symptom: Balloons flicker through intermediate positions while a window is dragged.
#[cfg_attr(test, test)]
pub(crate) fn test_debounce_fires_once_per_burst() {
	let h = Harness::new();
	h.add(Size::new(300, 100));

	for _ in 0..10 {
		h.layout.queue_relayout();
		h.advance(Duration::from_millis(20));
		assert!(!h.layout.tick());
	}
	h.advance(Duration::from_millis(200));
	assert!(h.layout.tick());
	assert_eq!(h.layout.metrics().debounced_relayouts(), 1);
}

/// Must not track the same balloon twice.
///
/// * Enforced in: `BalloonLayout::add`
/// * Failure symptom: One balloon occupies two slots and pushes others out.
#[cfg_attr(test, test)]
pub(crate) fn test_duplicate_add_rejected() {
	let h = Harness::new();
	let fake = h.add(Size::new(300, 100));

	assert_eq!(h.layout.add_plain(handle(&fake)), Err(LayoutError::AlreadyTracked));
	assert_eq!(h.layout.len(), 1);
}

/// Must place shadow-inclusive bounds of one column without vertical overlap when shadows are small.
///
/// * Enforced in: `place`, `SpacingRule::stacked_gap_between`
/// * Failure symptom: Stacked notifications draw over each other.
#[cfg_attr(test, test)]
pub(crate) fn test_column_bounds_do_not_overlap() {
	let h = Harness::new();
	let entry = LayoutEntry::new();
	let shadows = [Some(Insets::new(4, 5, 5, 5)), None, Some(Insets::new(2, 3, 3, 3)), None];
	let fakes: Vec<_> = shadows
		.iter()
		.map(|shadow| {
			let fake = FakeBalloon::new(Size::new(300, 80));
			fake.set_shadow(*shadow);
			h.layout.add(handle(&fake), Some(Rc::clone(&entry))).unwrap();
			fake
		})
		.collect();

	let bounds: Vec<Rect> = fakes.iter().filter_map(|fake| fake.bounds()).collect();
	assert_eq!(bounds.len(), shadows.len());
	for pair in bounds.windows(2) {
		assert!(!pair[0].overlaps_vertically(&pair[1]), "{pair:?}");
	}
}
