//! Measurement cache: one size query per balloon per layout pass.

use std::rc::Rc;

use billow_primitives::Size;
use rustc_hash::FxHashMap;

use crate::balloon::BalloonHandle;
use crate::entry::LayoutEntry;

/// Layout entries keyed by balloon identity.
pub type EntryMap = FxHashMap<BalloonHandle, Rc<LayoutEntry>>;

/// Sizes measured at the start of a layout pass.
///
/// `shared_width` is `Some` only when at least one balloon owns a
/// [`LayoutEntry`]; it is then the widest preferred width among all balloons.
#[derive(Debug, Default)]
pub struct MeasureCache {
	shared_width: Option<i32>,
	preferred: FxHashMap<BalloonHandle, Size>,
}

impl MeasureCache {
	/// Queries every balloon once and refreshes entry heights.
	pub fn calculate(balloons: &[BalloonHandle], entries: &EntryMap) -> Self {
		let mut preferred = FxHashMap::default();
		preferred.reserve(balloons.len());

		for balloon in balloons {
			let size = balloon.preferred_size();
			if let Some(entry) = entries.get(balloon) {
				entry.set_height(size.height);
			}
			preferred.insert(balloon.clone(), size);
		}

		let mut cache = Self {
			shared_width: None,
			preferred,
		};
		cache.refresh_shared_width(balloons, entries);
		cache
	}

	pub fn shared_width(&self) -> Option<i32> {
		self.shared_width
	}

	/// Recomputes the shared width over `balloons` from the stored sizes.
	///
	/// Used after eviction so survivors stop inheriting an evicted balloon's
	/// width. Balloons are not queried again.
	pub fn refresh_shared_width(&mut self, balloons: &[BalloonHandle], entries: &EntryMap) {
		let widest = balloons
			.iter()
			.filter_map(|balloon| self.preferred.get(balloon))
			.map(|size| size.width)
			.max()
			.unwrap_or(0);
		self.shared_width = (!entries.is_empty()).then_some(widest);
	}

	/// Size the packer and positioner use for `balloon`.
	///
	/// Entry owners get the shared width and their cached entry height.
	/// Others keep their preferred height, widened to the shared width when
	/// one exists.
	pub fn effective_size(&self, balloon: &BalloonHandle, entries: &EntryMap) -> Size {
		let preferred = self
			.preferred
			.get(balloon)
			.copied()
			.unwrap_or_else(|| balloon.preferred_size());

		match entries.get(balloon) {
			Some(entry) => Size::new(self.shared_width.unwrap_or(preferred.width), entry.height()),
			None => match self.shared_width {
				Some(width) => Size::new(width, preferred.height),
				None => preferred,
			},
		}
	}
}
