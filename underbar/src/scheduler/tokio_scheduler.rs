use super::{Scheduler, Task};
use anyhow::{Context, Result, ensure};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Runs deferred tasks on a tokio runtime.
///
/// Each scheduled task becomes a detached tokio task that sleeps for the requested wait and then runs.
/// The runtime must have its time driver enabled.
///
/// On a multi-thread runtime a task may run on any worker thread, concurrently with the code that
/// scheduled it. Build the runtime with `current_thread` to keep every deferred task on the thread
/// that drives the runtime.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
	handle: Handle,
}

impl TokioScheduler {
	pub fn new(handle: Handle) -> Self {
		Self { handle }
	}

	/// Uses the runtime the caller is running on.
	///
	/// # Errors
	/// Fails when called outside of a tokio runtime.
	pub fn current() -> Result<Self> {
		let handle = Handle::try_current().context("delayed tasks need a running tokio runtime")?;
		Ok(Self::new(handle))
	}
}

impl Scheduler for TokioScheduler {
	fn schedule(&self, wait: Duration, task: Task) -> Result<()> {
		ensure!(
			Instant::now().checked_add(wait).is_some(),
			"a wait of {wait:?} overflows the clock"
		);
		self.handle.spawn(async move {
			tokio::time::sleep(wait).await;
			task();
		});
		log::trace!("spawned task to run in {wait:?}");
		Ok(())
	}
}
