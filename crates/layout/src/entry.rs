//! Per-balloon layout records shared between the host and the layout.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback injected by the layout into a [`LayoutEntry`].
pub type LayoutCallback = Rc<dyn Fn()>;

/// Opt-in record for balloons that take part in coordinated layout.
///
/// The host attaches an entry when adding a stackable balloon. The layout
/// caches the balloon's height here and wires two callbacks so host UI (for
/// example a "close all notifications" action) can drive the layout without
/// holding a reference to it.
#[derive(Default)]
pub struct LayoutEntry {
	height: Cell<i32>,
	close_all: RefCell<Option<LayoutCallback>>,
	relayout: RefCell<Option<LayoutCallback>>,
}

impl LayoutEntry {
	pub fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	/// Balloon height cached by the last measurement pass.
	pub fn height(&self) -> i32 {
		self.height.get()
	}

	pub(crate) fn set_height(&self, height: i32) {
		self.height.set(height);
	}

	/// Returns true once a layout has injected its callbacks.
	pub fn is_wired(&self) -> bool {
		self.close_all.borrow().is_some() && self.relayout.borrow().is_some()
	}

	/// Closes every balloon tracked by the owning layout. No-op until wired.
	pub fn close_all(&self) {
		let callback = self.close_all.borrow().clone();
		if let Some(callback) = callback {
			callback();
		}
	}

	/// Re-measures and re-positions the owning layout immediately. No-op until wired.
	pub fn request_relayout(&self) {
		let callback = self.relayout.borrow().clone();
		if let Some(callback) = callback {
			callback();
		}
	}

	pub(crate) fn wire(&self, close_all: LayoutCallback, relayout: LayoutCallback) {
		*self.close_all.borrow_mut() = Some(close_all);
		*self.relayout.borrow_mut() = Some(relayout);
	}
}

impl fmt::Debug for LayoutEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LayoutEntry")
			.field("height", &self.height.get())
			.field("wired", &self.is_wired())
			.finish()
	}
}
