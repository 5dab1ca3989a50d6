//! Async driver for deferred relayouts.
//!
//! [`drive`] sleeps until the pending debounce deadline and fires it, waking
//! early whenever a new request replaces the deadline. The layout is not
//! `Send`, so the driver runs on a [`tokio::task::LocalSet`].

use tokio::time::{Instant, sleep_until};
use tracing::trace;

use crate::coordinator::BalloonLayout;

/// Fires deferred relayouts for `layout` as they become due.
///
/// Runs until the task is aborted or dropped. The layout should read time from
/// a [`crate::TokioClock`] so deadlines agree with the runtime timer.
pub async fn drive(layout: BalloonLayout) {
	trace!("layout.driver.start");
	loop {
		let Some(deadline) = layout.next_deadline() else {
			layout.wake().notified().await;
			continue;
		};

		tokio::select! {
			() = sleep_until(Instant::from_std(deadline)) => {
				layout.tick();
			}
			() = layout.wake().notified() => {}
		}
	}
}
