//! Host container seam and the anchor derived from it.

use billow_primitives::{Point, Rect, Size};

/// Callback the container runs after every resize.
pub type ResizeListener = Box<dyn Fn()>;

/// The surface balloons are laid out on, plus the chrome around it.
pub trait Container {
	/// Current size of the layered surface balloons are drawn into.
	fn size(&self) -> Size;

	/// Screen position of the layered surface, or `None` while it is not showing.
	fn screen_origin(&self) -> Option<Point>;

	/// Screen position of the root container, or `None` while it is not showing.
	fn root_screen_origin(&self) -> Option<Point>;

	/// Nested pane hosting tool windows below the toolbars, if there is one.
	fn tool_pane(&self) -> Option<ToolPane> {
		None
	}

	/// Registers `listener` to run on every resize of the layered surface.
	fn subscribe_resize(&self, listener: ResizeListener);
}

/// Geometry of the nested tool pane, when the container has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPane {
	/// Screen position of the pane, or `None` while it is not showing.
	pub screen_origin: Option<Point>,
	/// Bounds of the pane's own layered surface, relative to the pane.
	pub layer_bounds: Rect,
}

/// Where columns start: the trailing x edge and the top offset below chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceAnchor {
	/// Right edge the first column is aligned against.
	pub x: i32,
	/// Vertical distance from the layered surface top to the content area.
	pub chrome_offset: i32,
}

impl SurfaceAnchor {
	/// Reads the anchor from `container`, keeping `edge_padding` free at the trailing edge.
	///
	/// Hidden surfaces report no screen position; they count as offset zero.
	pub fn resolve(container: &dyn Container, edge_padding: i32) -> Self {
		let pane = container.tool_pane();

		let content_y = match pane {
			Some(pane) => pane.screen_origin.map_or(0, |p| p.y),
			None => container.root_screen_origin().map_or(0, |p| p.y),
		};
		let layer_y = container.screen_origin().map_or(0, |p| p.y);

		let trailing = match pane {
			Some(pane) => pane.layer_bounds.right(),
			None => container.size().width,
		};

		Self {
			x: trailing - edge_padding,
			chrome_offset: content_y - layer_y,
		}
	}
}
