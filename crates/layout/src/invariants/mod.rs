//! Machine-checkable invariant catalog and proof entrypoints for balloon layout.
#![allow(dead_code)]

pub(crate) mod catalog;

#[allow(unused_imports)]
pub(crate) use catalog::{
	DEBOUNCE_COALESCES_REQUESTS, EVICT_OLDEST_FIRST, NO_BORROW_ACROSS_BALLOON_CALLS, NO_DUPLICATE_BALLOONS,
	SHADOW_BOUNDS_NEVER_OVERLAP, SHARED_WIDTH_ONLY_WITH_ENTRIES, SINGLE_COLUMN_AFTER_RELAYOUT,
};

#[cfg(doc)]
pub(crate) fn test_relayout_leaves_single_column() {}

#[cfg(doc)]
pub(crate) fn test_eviction_takes_oldest_first() {}

#[cfg(doc)]
pub(crate) fn test_shared_width_tracks_entries() {}

#[cfg(doc)]
pub(crate) fn test_reentrant_callbacks_do_not_panic() {}

#[cfg(doc)]
pub(crate) fn test_debounce_fires_once_per_burst() {}

#[cfg(doc)]
pub(crate) fn test_duplicate_add_rejected() {}

#[cfg(doc)]
pub(crate) fn test_column_bounds_do_not_overlap() {}

#[cfg(test)]
mod proofs;

#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use proofs::{
	test_column_bounds_do_not_overlap, test_debounce_fires_once_per_burst, test_duplicate_add_rejected,
	test_eviction_takes_oldest_first, test_reentrant_callbacks_do_not_panic, test_relayout_leaves_single_column,
	test_shared_width_tracks_entries,
};
