//! Balloon capability seam.
//!
//! The layout never renders or animates a balloon. It only asks for sizes and
//! shadow metadata, writes bounds, and toggles visibility through [`Balloon`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::{Rc, Weak};

use billow_primitives::{Insets, Rect, Size};

use crate::container::Container;

/// Cleanup closure a balloon runs once when its host disposes of it.
pub type DisposeHook = Box<dyn FnOnce()>;

/// A transient overlay notification widget owned by the host UI.
///
/// All methods take `&self`; implementors use interior mutability. Any method
/// may call back into the layout that tracks the balloon.
pub trait Balloon {
	/// Size the balloon would like to occupy, excluding its shadow.
	fn preferred_size(&self) -> Size;

	/// Returns true if the balloon paints a drop shadow around its body.
	fn has_shadow(&self) -> bool;

	/// Extra margin the drop shadow occupies on each edge.
	///
	/// Only consulted when [`Balloon::has_shadow`] is true.
	fn shadow_insets(&self) -> Insets;

	/// Places the balloon, shadow included, in container coordinates.
	fn set_bounds(&self, bounds: Rect);

	/// Makes the balloon visible inside `container`.
	fn show(&self, container: &dyn Container);

	/// Hides the balloon.
	fn hide(&self);

	/// Registers a hook the host must run when it disposes of the balloon.
	fn on_dispose(&self, hook: DisposeHook);

	/// Shadow insets when the balloon has a shadow.
	fn shadow(&self) -> Option<Insets> {
		self.has_shadow().then(|| self.shadow_insets())
	}
}

/// Shared handle to a tracked balloon.
///
/// Equality and hashing use the allocation address, so two handles are equal
/// only when they point at the same balloon.
#[derive(Clone)]
pub struct BalloonHandle(Rc<dyn Balloon>);

impl BalloonHandle {
	pub fn new(balloon: Rc<dyn Balloon>) -> Self {
		Self(balloon)
	}

	pub(crate) fn downgrade(&self) -> WeakBalloon {
		WeakBalloon(Rc::downgrade(&self.0))
	}

	fn addr(&self) -> *const () {
		Rc::as_ptr(&self.0) as *const ()
	}
}

impl<B: Balloon + 'static> From<Rc<B>> for BalloonHandle {
	fn from(balloon: Rc<B>) -> Self {
		Self(balloon)
	}
}

impl Deref for BalloonHandle {
	type Target = dyn Balloon;

	fn deref(&self) -> &Self::Target {
		&*self.0
	}
}

impl PartialEq for BalloonHandle {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.addr(), other.addr())
	}
}

impl Eq for BalloonHandle {}

impl Hash for BalloonHandle {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.addr().hash(state);
	}
}

impl fmt::Debug for BalloonHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("BalloonHandle").field(&self.addr()).finish()
	}
}

/// Non-owning balloon reference held by disposal hooks.
///
/// A balloon stores its own dispose hook, so a strong reference would keep
/// it alive forever.
pub(crate) struct WeakBalloon(Weak<dyn Balloon>);

impl WeakBalloon {
	pub(crate) fn upgrade(&self) -> Option<BalloonHandle> {
		self.0.upgrade().map(BalloonHandle)
	}
}
