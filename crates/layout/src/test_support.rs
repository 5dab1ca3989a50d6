//! Recording fakes for the balloon and container seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use billow_primitives::{Insets, Point, Rect, Size};

use crate::balloon::{Balloon, BalloonHandle, DisposeHook};
use crate::clock::ManualClock;
use crate::config::LayoutConfig;
use crate::container::{Container, ResizeListener, ToolPane};
use crate::coordinator::BalloonLayout;

/// Shared record of balloon visibility calls, in order.
pub(crate) type EventLog = Rc<RefCell<Vec<String>>>;

#[derive(Default)]
pub(crate) struct FakeBalloon {
	size: Cell<Size>,
	shadow: Cell<Option<Insets>>,
	bounds: Cell<Option<Rect>>,
	bounds_writes: Cell<usize>,
	size_queries: Cell<usize>,
	shows: Cell<usize>,
	bounds_at_show: Cell<Option<Rect>>,
	hides: Cell<usize>,
	dispose_hook: RefCell<Option<DisposeHook>>,
	dispose_on_hide: Cell<bool>,
	on_set_bounds: RefCell<Option<Box<dyn FnOnce()>>>,
	log: RefCell<Option<(String, EventLog)>>,
}

impl FakeBalloon {
	pub(crate) fn new(size: Size) -> Rc<Self> {
		let balloon = Self::default();
		balloon.size.set(size);
		Rc::new(balloon)
	}

	pub(crate) fn handle(size: Size) -> BalloonHandle {
		BalloonHandle::from(Self::new(size))
	}

	pub(crate) fn resize(&self, size: Size) {
		self.size.set(size);
	}

	pub(crate) fn set_shadow(&self, shadow: Option<Insets>) {
		self.shadow.set(shadow);
	}

	/// Makes `hide` run the dispose hook, like hosts that dispose on close.
	pub(crate) fn dispose_when_hidden(&self) {
		self.dispose_on_hide.set(true);
	}

	/// Runs `action` inside the next `set_bounds` call.
	pub(crate) fn on_next_set_bounds(&self, action: impl FnOnce() + 'static) {
		*self.on_set_bounds.borrow_mut() = Some(Box::new(action));
	}

	pub(crate) fn attach_log(&self, name: &str, log: &EventLog) {
		*self.log.borrow_mut() = Some((name.to_string(), Rc::clone(log)));
	}

	/// Runs the registered dispose hook, as the host would.
	pub(crate) fn dispose(&self) {
		let hook = self.dispose_hook.borrow_mut().take();
		if let Some(hook) = hook {
			hook();
		}
	}

	pub(crate) fn bounds(&self) -> Option<Rect> {
		self.bounds.get()
	}

	pub(crate) fn bounds_writes(&self) -> usize {
		self.bounds_writes.get()
	}

	pub(crate) fn size_queries(&self) -> usize {
		self.size_queries.get()
	}

	/// Bounds the balloon held when it was last shown.
	pub(crate) fn bounds_at_show(&self) -> Option<Rect> {
		self.bounds_at_show.get()
	}

	pub(crate) fn show_count(&self) -> usize {
		self.shows.get()
	}

	pub(crate) fn hide_count(&self) -> usize {
		self.hides.get()
	}

	fn record(&self, event: &str) {
		if let Some((name, log)) = &*self.log.borrow() {
			log.borrow_mut().push(format!("{event} {name}"));
		}
	}
}

impl Balloon for FakeBalloon {
	fn preferred_size(&self) -> Size {
		self.size_queries.set(self.size_queries.get() + 1);
		self.size.get()
	}

	fn has_shadow(&self) -> bool {
		self.shadow.get().is_some()
	}

	fn shadow_insets(&self) -> Insets {
		self.shadow.get().unwrap_or_default()
	}

	fn set_bounds(&self, bounds: Rect) {
		self.bounds.set(Some(bounds));
		self.bounds_writes.set(self.bounds_writes.get() + 1);
		let action = self.on_set_bounds.borrow_mut().take();
		if let Some(action) = action {
			action();
		}
	}

	fn show(&self, _container: &dyn Container) {
		self.shows.set(self.shows.get() + 1);
		self.bounds_at_show.set(self.bounds.get());
		self.record("show");
	}

	fn hide(&self) {
		self.hides.set(self.hides.get() + 1);
		self.record("hide");
		if self.dispose_on_hide.get() {
			self.dispose();
		}
	}

	fn on_dispose(&self, hook: DisposeHook) {
		*self.dispose_hook.borrow_mut() = Some(hook);
	}
}

#[derive(Default)]
pub(crate) struct FakeContainer {
	size: Cell<Size>,
	screen_origin: Cell<Option<Point>>,
	root_screen_origin: Cell<Option<Point>>,
	tool_pane: Cell<Option<ToolPane>>,
	listeners: RefCell<Vec<ResizeListener>>,
}

impl FakeContainer {
	pub(crate) fn new(size: Size) -> Self {
		let container = Self::default();
		container.size.set(size);
		container
	}

	pub(crate) fn with_screen_origins(self, layer: Option<Point>, root: Option<Point>) -> Self {
		self.screen_origin.set(layer);
		self.root_screen_origin.set(root);
		self
	}

	pub(crate) fn with_tool_pane(self, pane: ToolPane) -> Self {
		self.tool_pane.set(Some(pane));
		self
	}

	/// Changes the size and notifies every resize listener.
	pub(crate) fn resize(&self, size: Size) {
		self.size.set(size);
		for listener in self.listeners.borrow().iter() {
			listener();
		}
	}
}

impl Container for FakeContainer {
	fn size(&self) -> Size {
		self.size.get()
	}

	fn screen_origin(&self) -> Option<Point> {
		self.screen_origin.get()
	}

	fn root_screen_origin(&self) -> Option<Point> {
		self.root_screen_origin.get()
	}

	fn tool_pane(&self) -> Option<ToolPane> {
		self.tool_pane.get()
	}

	fn subscribe_resize(&self, listener: ResizeListener) {
		self.listeners.borrow_mut().push(listener);
	}
}

/// A layout over a fake container driven by a manual clock.
pub(crate) struct Harness {
	pub(crate) layout: BalloonLayout,
	pub(crate) container: Rc<FakeContainer>,
	pub(crate) clock: Rc<ManualClock>,
}

impl Harness {
	/// 800x500 container with 10px insets: 480px of available height.
	pub(crate) fn new() -> Self {
		Self::with_container(FakeContainer::new(Size::new(800, 500)), Insets::uniform(10))
	}

	pub(crate) fn with_container(container: FakeContainer, insets: Insets) -> Self {
		let container = Rc::new(container);
		let clock = Rc::new(ManualClock::new());
		let layout = BalloonLayout::with_clock(
			Rc::clone(&container) as Rc<dyn Container>,
			LayoutConfig::default().with_insets(insets),
			Rc::clone(&clock) as Rc<dyn crate::clock::Clock>,
		)
		.expect("default config is valid");
		Self {
			layout,
			container,
			clock,
		}
	}

	/// Adds a plain balloon of `size` and returns its fake.
	pub(crate) fn add(&self, size: Size) -> Rc<FakeBalloon> {
		let fake = FakeBalloon::new(size);
		self.layout
			.add(BalloonHandle::from(Rc::clone(&fake)), None)
			.expect("fresh balloon");
		fake
	}

	pub(crate) fn advance(&self, by: Duration) {
		self.clock.advance(by);
	}
}
