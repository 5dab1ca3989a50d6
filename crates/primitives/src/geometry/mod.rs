//! Signed pixel geometry shared by layout and host seams.
//!
//! All values are `i32` pixels. Coordinates may go negative (a balloon shadow
//! can hang above the surface origin), sizes are expected to be non-negative
//! but are never clamped implicitly except where a method says so.


/// A point in surface coordinates, y growing downward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}

impl Point {
	/// The surface origin.
	pub const ORIGIN: Self = Self { x: 0, y: 0 };

	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// Width and height in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
	pub width: i32,
	pub height: i32,
}

impl Size {
	pub const ZERO: Self = Self { width: 0, height: 0 };

	pub const fn new(width: i32, height: i32) -> Self {
		Self { width, height }
	}

	/// Removes `insets` from both axes, saturating each axis at zero.
	pub const fn shrink(self, insets: Insets) -> Self {
		let width = self.width - insets.horizontal();
		let height = self.height - insets.vertical();
		Self {
			width: if width < 0 { 0 } else { width },
			height: if height < 0 { 0 } else { height },
		}
	}

	/// Adds `insets` to both axes.
	pub const fn grow(self, insets: Insets) -> Self {
		Self {
			width: self.width.saturating_add(insets.horizontal()),
			height: self.height.saturating_add(insets.vertical()),
		}
	}
}

/// Per-edge pixel margins, in CSS order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Insets {
	pub top: i32,
	pub right: i32,
	pub bottom: i32,
	pub left: i32,
}

impl Insets {
	pub const ZERO: Self = Self::uniform(0);

	pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
		Self {
			top,
			right,
			bottom,
			left,
		}
	}

	/// Same margin on every edge.
	pub const fn uniform(value: i32) -> Self {
		Self::new(value, value, value, value)
	}

	/// Sum of the left and right margins.
	pub const fn horizontal(&self) -> i32 {
		self.left.saturating_add(self.right)
	}

	/// Sum of the top and bottom margins.
	pub const fn vertical(&self) -> i32 {
		self.top.saturating_add(self.bottom)
	}

	/// Returns true when no edge is negative.
	pub const fn is_non_negative(&self) -> bool {
		self.top >= 0 && self.right >= 0 && self.bottom >= 0 && self.left >= 0
	}
}

/// An axis-aligned rectangle with exclusive right and bottom edges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
	pub x: i32,
	pub y: i32,
	pub width: i32,
	pub height: i32,
}

impl Rect {
	pub const ZERO: Self = Self::new(0, 0, 0, 0);

	pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Builds a rect from its top-left corner and size.
	pub const fn from_parts(origin: Point, size: Size) -> Self {
		Self::new(origin.x, origin.y, size.width, size.height)
	}

	/// A rect of `size` at the origin.
	pub const fn sized(size: Size) -> Self {
		Self::from_parts(Point::ORIGIN, size)
	}

	pub const fn left(&self) -> i32 {
		self.x
	}

	pub const fn right(&self) -> i32 {
		self.x + self.width
	}

	pub const fn top(&self) -> i32 {
		self.y
	}

	pub const fn bottom(&self) -> i32 {
		self.y + self.height
	}

	pub const fn origin(&self) -> Point {
		Point::new(self.x, self.y)
	}

	pub const fn size(&self) -> Size {
		Size::new(self.width, self.height)
	}

	/// Returns true if the rect covers no pixels.
	pub const fn is_empty(&self) -> bool {
		self.width <= 0 || self.height <= 0
	}

	/// Moves the rect so its top-left corner sits at `origin`.
	#[must_use]
	pub const fn at(self, origin: Point) -> Self {
		Self::from_parts(origin, self.size())
	}

	/// Shrinks the rect by `insets`; the result never has negative dimensions.
	#[must_use]
	pub const fn inset(self, insets: Insets) -> Self {
		Self::from_parts(
			Point::new(self.x + insets.left, self.y + insets.top),
			self.size().shrink(insets),
		)
	}

	/// Grows the rect outward by `insets`.
	#[must_use]
	pub const fn outset(self, insets: Insets) -> Self {
		Self::from_parts(
			Point::new(self.x - insets.left, self.y - insets.top),
			self.size().grow(insets),
		)
	}

	/// Returns true if `point` lies inside, using inclusive origin and exclusive max edges.
	pub const fn contains(&self, point: Point) -> bool {
		point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
	}

	/// Returns true if the vertical spans of both rects share at least one row.
	pub const fn overlaps_vertically(&self, other: &Rect) -> bool {
		self.top() < other.bottom() && other.top() < self.bottom()
	}

	/// Returns true if both rects share at least one pixel.
	pub const fn intersects(&self, other: &Rect) -> bool {
		self.left() < other.right()
			&& other.left() < self.right()
			&& self.overlaps_vertically(other)
			&& !self.is_empty()
			&& !other.is_empty()
	}
}
