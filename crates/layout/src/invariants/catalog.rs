//! Invariant catalog for [`crate::BalloonLayout`].
#![allow(dead_code)]

/// Must leave every tracked balloon in a single column after a relayout pass.
///
/// - Enforced in: [`crate::pack::Packing::is_overflowing`], `BalloonLayout::run_pass`
/// - Tested by: [`crate::invariants::test_relayout_leaves_single_column`]
/// - Failure symptom: Balloons spill into a second column over the editor content.
pub(crate) const SINGLE_COLUMN_AFTER_RELAYOUT: () = ();

/// Must evict the oldest balloon first and hide it.
///
/// - Enforced in: `BalloonLayout::run_pass`, [`crate::BalloonLayout::remove`]
/// - Tested by: [`crate::invariants::test_eviction_takes_oldest_first`]
/// - Failure symptom: A fresh notification disappears while stale ones stay visible.
pub(crate) const EVICT_OLDEST_FIRST: () = ();

/// Must keep a shared width only while at least one balloon owns a layout entry.
///
/// - Enforced in: [`crate::MeasureCache::calculate`], `LayoutState::remove`, `BalloonLayout::run_pass`
/// - Tested by: [`crate::invariants::test_shared_width_tracks_entries`]
/// - Failure symptom: Plain balloons stay stretched after the last stacked notification closes.
pub(crate) const SHARED_WIDTH_ONLY_WITH_ENTRIES: () = ();

/// Must not hold layout state borrowed while calling into balloons or host callbacks.
///
/// - Enforced in: `BalloonLayout::run_pass`, [`crate::BalloonLayout::remove`], [`crate::BalloonLayout::close_all`], [`crate::LayoutEntry::close_all`]
/// - Tested by: [`crate::invariants::test_reentrant_callbacks_do_not_panic`]
/// - Failure symptom: `BorrowMutError` panic when a balloon disposes itself on hide.
pub(crate) const NO_BORROW_ACROSS_BALLOON_CALLS: () = ();

/// Must run one deferred relayout per burst of requests, after the quiet interval.
///
/// - Enforced in: [`crate::Debouncer::schedule`], [`crate::BalloonLayout::tick`]
/// - Tested by: [`crate::invariants::test_debounce_fires_once_per_burst`]
/// - Failure symptom: Balloons flicker through intermediate positions while a window is dragged.
pub(crate) const DEBOUNCE_COALESCES_REQUESTS: () = ();

/// Must not track the same balloon twice.
///
/// - Enforced in: [`crate::BalloonLayout::add`]
/// - Tested by: [`crate::invariants::test_duplicate_add_rejected`]
/// - Failure symptom: One balloon occupies two slots and pushes others out.
pub(crate) const NO_DUPLICATE_BALLOONS: () = ();

/// Must place shadow-inclusive bounds of one column without vertical overlap when shadows are small.
///
/// - Enforced in: [`crate::place::place`], [`crate::SpacingRule::stacked_gap_between`]
/// - Tested by: [`crate::invariants::test_column_bounds_do_not_overlap`]
/// - Failure symptom: Stacked notifications draw over each other.
pub(crate) const SHADOW_BOUNDS_NEVER_OVERLAP: () = ();
