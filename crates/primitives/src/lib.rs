//! Core geometry types for balloon layout: points, sizes, rectangles and insets.

/// Signed pixel geometry.
pub mod geometry;

pub use geometry::{Insets, Point, Rect, Size};
