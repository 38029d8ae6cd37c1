use super::{Scheduler, Task};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::{
	cmp::{Ordering, Reverse},
	collections::BinaryHeap,
	fmt::{self, Debug},
	thread,
	time::{Duration, Instant},
};

/// A single-threaded timer queue.
///
/// Tasks are kept ordered by deadline, and by submission order among equal deadlines. Nothing runs
/// until the owner drives the queue with [`run_due`](Self::run_due) or
/// [`run_until_idle`](Self::run_until_idle), so every task executes on the thread that drives it. The
/// internal lock is released before a task runs, which lets tasks schedule further tasks.
///
/// Dropping the queue drains it: the thread that drops it waits for and runs every task still
/// pending, so an accepted task always runs once. If the thread is already unwinding from a panic,
/// the remaining tasks are discarded and their number is logged as a warning.
///
/// # Examples
/// ```
/// use std::{sync::{Arc, atomic::{AtomicUsize, Ordering}}, time::Duration};
/// use underbar::{Scheduler, TimerQueue};
///
/// let queue = TimerQueue::new();
/// let hits = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&hits);
/// queue.schedule(Duration::from_millis(5), Box::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// })).unwrap();
///
/// assert_eq!(queue.run_until_idle(), 1);
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct TimerQueue {
	state: Mutex<QueueState>,
}

#[derive(Default)]
struct QueueState {
	entries: BinaryHeap<Reverse<Entry>>,
	next_sequence: u64,
}

struct Entry {
	deadline: Instant,
	sequence: u64,
	task: Task,
}

impl Entry {
	fn order_key(&self) -> (Instant, u64) {
		(self.deadline, self.sequence)
	}
}

impl PartialEq for Entry {
	fn eq(&self, other: &Self) -> bool {
		self.order_key() == other.order_key()
	}
}

impl Eq for Entry {}

impl PartialOrd for Entry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Entry {
	fn cmp(&self, other: &Self) -> Ordering {
		self.order_key().cmp(&other.order_key())
	}
}

impl TimerQueue {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of tasks waiting to run.
	pub fn pending(&self) -> usize {
		self.state.lock().entries.len()
	}

	/// Runs every task whose deadline has passed and returns how many ran.
	///
	/// Tasks scheduled by a running task are picked up as soon as they are due.
	pub fn run_due(&self) -> usize {
		let mut count = 0;
		while let Some(task) = self.pop_due(Instant::now()) {
			task();
			count += 1;
		}
		if count > 0 {
			log::trace!("timer queue ran {count} due task(s)");
		}
		count
	}

	/// Runs tasks, sleeping until each deadline, until the queue is empty. Returns how many ran.
	pub fn run_until_idle(&self) -> usize {
		let mut count = 0;
		while let Some(deadline) = self.next_deadline() {
			let now = Instant::now();
			if deadline > now {
				thread::sleep(deadline - now);
			}
			count += self.run_due();
		}
		log::debug!("timer queue idle after running {count} task(s)");
		count
	}

	fn next_deadline(&self) -> Option<Instant> {
		self.state.lock().entries.peek().map(|Reverse(entry)| entry.deadline)
	}

	fn pop_due(&self, now: Instant) -> Option<Task> {
		let mut state = self.state.lock();
		if state.entries.peek()?.0.deadline > now {
			return None;
		}
		state.entries.pop().map(|Reverse(entry)| entry.task)
	}
}

impl Scheduler for TimerQueue {
	fn schedule(&self, wait: Duration, task: Task) -> Result<()> {
		let deadline = Instant::now()
			.checked_add(wait)
			.with_context(|| format!("a wait of {wait:?} overflows the clock"))?;
		let mut state = self.state.lock();
		let sequence = state.next_sequence;
		state.next_sequence += 1;
		state.entries.push(Reverse(Entry {
			deadline,
			sequence,
			task,
		}));
		log::trace!("scheduled task #{sequence} to run in {wait:?}");
		Ok(())
	}
}

impl Drop for TimerQueue {
	fn drop(&mut self) {
		let pending = self.pending();
		if pending == 0 {
			return;
		}
		if thread::panicking() {
			log::warn!("timer queue dropped while panicking, discarding {pending} pending task(s)");
			return;
		}
		log::debug!("timer queue dropped with {pending} pending task(s), draining");
		self.run_until_idle();
	}
}

impl Debug for TimerQueue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TimerQueue").field("pending", &self.pending()).finish()
	}
}
