//! One-shot deferred execution.
//!
//! A [`Scheduler`] runs a zero-argument task once, no earlier than a requested delay. There is no
//! cancellation: once scheduled, a task runs unless the process ends first.
//!
//! - [`TimerQueue`] is a single-threaded event loop driven explicitly by its owner.
//! - [`TokioScheduler`] hands tasks to a tokio runtime.

mod timer_queue;
mod tokio_scheduler;

pub use timer_queue::TimerQueue;
pub use tokio_scheduler::TokioScheduler;

use anyhow::Result;
use std::{sync::Arc, time::Duration};

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler {
	/// Arranges for `task` to run exactly once, after at least `wait` has elapsed.
	///
	/// Fails without scheduling anything if the request cannot be honored.
	fn schedule(&self, wait: Duration, task: Task) -> Result<()>;
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
	fn schedule(&self, wait: Duration, task: Task) -> Result<()> {
		(**self).schedule(wait, task)
	}
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
	fn schedule(&self, wait: Duration, task: Task) -> Result<()> {
		(**self).schedule(wait, task)
	}
}
