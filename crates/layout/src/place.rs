//! Absolute bounds for packed balloons.
//!
//! Columns grow right-to-left from the surface anchor. Inside a column,
//! balloons stack top-to-bottom and their visible bodies are right-aligned to
//! the column edge; shadows extend the bounds outward.

use billow_primitives::{Insets, Rect, Size};

use crate::container::SurfaceAnchor;
use crate::pack::Packing;
use crate::spacing::{GapMode, SpacingRule};

/// What placement needs to know about one balloon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
	/// Effective body size from the measurement cache.
	pub size: Size,
	/// Shadow insets when the balloon has a shadow.
	pub shadow: Option<Insets>,
}

/// Width of each column: the widest body among its members.
pub fn column_widths(slots: &[Slot], packing: &Packing) -> Vec<i32> {
	packing
		.columns()
		.iter()
		.map(|column| slots[column.clone()].iter().map(|slot| slot.size.width).max().unwrap_or(0))
		.collect()
}

/// Computes shadow-inclusive bounds for every slot, indexed like `slots`.
pub fn place(slots: &[Slot], packing: &Packing, anchor: SurfaceAnchor, rule: &SpacingRule, mode: GapMode) -> Vec<Rect> {
	let mut bounds = vec![Rect::ZERO; slots.len()];
	let mut column_x = anchor.x;

	for (column, width) in packing.columns().iter().zip(column_widths(slots, packing)) {
		column_x -= width;

		let members = &slots[column.clone()];
		let Some(first) = members.first() else {
			continue;
		};

		let mut y = rule.column_top(anchor.chrome_offset, first.shadow);
		for (offset, slot) in members.iter().enumerate() {
			let shadow = slot.shadow.unwrap_or(Insets::ZERO);
			let size = slot.size.grow(shadow);
			let x = column_x + width - size.width + shadow.left;

			bounds[column.start + offset] = Rect::new(x, y, size.width, size.height);

			y = y.saturating_add(size.height);
			let next = members.get(offset + 1).map(|next| next.shadow);
			y = y.saturating_add(rule.gap_after(mode, slot.shadow, next));
		}
	}

	bounds
}
