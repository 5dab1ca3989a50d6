//! Greedy column packing.
//!
//! Balloons are scanned oldest-first and accumulated into the current column
//! until the next one would exceed the available height. Columns are
//! contiguous runs of the input order, so they are represented as index ranges.

use std::ops::Range;

/// Result of packing a sequence of heights into columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing {
	columns: Vec<Range<usize>>,
}

impl Packing {
	/// Packs `heights` into columns no taller than `available_height`.
	///
	/// A balloon taller than the whole available height is placed alone in its
	/// own column rather than split. An empty input yields one empty column.
	pub fn pack(heights: &[i32], available_height: i32) -> Self {
		let mut columns = Vec::new();
		let mut start = 0;
		let mut column_height: i32 = 0;

		for (index, &height) in heights.iter().enumerate() {
			if index > start && column_height.saturating_add(height) > available_height {
				columns.push(start..index);
				start = index;
				column_height = 0;
			}
			column_height = column_height.saturating_add(height);
		}
		columns.push(start..heights.len());

		Self { columns }
	}

	/// Index ranges of each column, first column first.
	pub fn columns(&self) -> &[Range<usize>] {
		&self.columns
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	/// Returns true when the balloons do not fit a single column.
	pub fn is_overflowing(&self) -> bool {
		self.columns.len() > 1
	}
}
