//! Vertical spacing between stacked balloons.

use billow_primitives::Insets;

/// Default padding above a shadowless topmost balloon.
pub const DEFAULT_TOP_PADDING: i32 = 4;
/// Default gap between balloons when any of them owns a layout entry.
pub const DEFAULT_STACKED_GAP: i32 = 10;
/// Default gap after each balloon when none owns a layout entry.
pub const DEFAULT_FLAT_GAP: i32 = 2;

/// How consecutive balloons in a column are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapMode {
	/// No balloon owns a layout entry: a fixed gap after every balloon.
	Flat,
	/// Stacked notifications: a shadow-aware gap between neighbours only.
	Stacked,
}

/// Pixel constants driving vertical placement within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingRule {
	pub top_padding: i32,
	pub stacked_gap: i32,
	pub flat_gap: i32,
}

impl Default for SpacingRule {
	fn default() -> Self {
		Self {
			top_padding: DEFAULT_TOP_PADDING,
			stacked_gap: DEFAULT_STACKED_GAP,
			flat_gap: DEFAULT_FLAT_GAP,
		}
	}
}

impl SpacingRule {
	/// Y of the topmost balloon's bounds.
	///
	/// A shadowed balloon is raised by its top shadow so its body sits at the
	/// chrome offset; a plain one is pushed down by the top padding.
	pub fn column_top(&self, chrome_offset: i32, first_shadow: Option<Insets>) -> i32 {
		match first_shadow {
			Some(shadow) => chrome_offset - shadow.top,
			None => chrome_offset + self.top_padding,
		}
	}

	/// Gap between two neighbouring stacked balloons.
	///
	/// Shadow halos overlap into the gap so the visible bodies keep a
	/// consistent distance.
	pub fn stacked_gap_between(&self, current: Option<Insets>, next: Option<Insets>) -> i32 {
		let overlap = match (current, next) {
			(Some(current), None) => current.bottom,
			(None, Some(next)) => 2 * next.top,
			(Some(current), Some(next)) => current.bottom + next.top,
			(None, None) => 0,
		};
		self.stacked_gap - overlap
	}

	/// Advance after a balloon, beyond its own height.
	///
	/// `next` is `None` for the last balloon of a column; `Some(shadow)` carries
	/// the next balloon's shadow, if any.
	pub fn gap_after(&self, mode: GapMode, current: Option<Insets>, next: Option<Option<Insets>>) -> i32 {
		match (mode, next) {
			(GapMode::Flat, _) => self.flat_gap,
			(GapMode::Stacked, Some(next)) => self.stacked_gap_between(current, next),
			(GapMode::Stacked, None) => 0,
		}
	}
}
