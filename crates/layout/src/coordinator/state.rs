use std::rc::Rc;

use crate::balloon::BalloonHandle;
use crate::entry::LayoutEntry;
use crate::measure::EntryMap;

/// Balloons tracked by one layout, oldest first.
///
/// The sequence never holds duplicates, every entry key is in the sequence,
/// and `shared_width` is `Some` only while `entries` is non-empty.
#[derive(Debug, Default)]
pub(crate) struct LayoutState {
	pub(super) balloons: Vec<BalloonHandle>,
	pub(super) entries: EntryMap,
	pub(super) shared_width: Option<i32>,
}

impl LayoutState {
	pub(super) fn contains(&self, balloon: &BalloonHandle) -> bool {
		self.balloons.contains(balloon)
	}

	pub(super) fn push(&mut self, balloon: BalloonHandle, entry: Option<Rc<LayoutEntry>>) {
		if let Some(entry) = entry {
			self.entries.insert(balloon.clone(), entry);
		}
		self.balloons.push(balloon);
	}

	/// Drops `balloon` from the sequence and the entry map.
	///
	/// Returns false if it was not tracked.
	pub(super) fn remove(&mut self, balloon: &BalloonHandle) -> bool {
		let Some(index) = self.balloons.iter().position(|b| b == balloon) else {
			return false;
		};
		self.balloons.remove(index);
		if self.entries.remove(balloon).is_some() && self.entries.is_empty() {
			self.shared_width = None;
		}
		true
	}

	/// Copies the sequence and entry map for a pass that calls out to balloons.
	pub(super) fn snapshot(&self) -> (Vec<BalloonHandle>, EntryMap) {
		(self.balloons.clone(), self.entries.clone())
	}
}
