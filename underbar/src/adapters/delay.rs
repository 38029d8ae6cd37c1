use crate::Scheduler;
use anyhow::Result;
use std::time::Duration;

/// Calls `func(args)` once, after at least `wait` has elapsed, through `scheduler`.
///
/// Nothing is returned to the caller: no handle, no result, and no way to cancel. The function's
/// return value is discarded when it eventually runs. An accepted call runs once even if a
/// [`TimerQueue`](crate::TimerQueue) is dropped before it is driven, since dropping drains the queue.
///
/// # Errors
/// Fails, without scheduling anything, if the scheduler rejects the request.
///
/// # Examples
/// ```
/// use std::{sync::mpsc, time::Duration};
/// use underbar::{TimerQueue, delay};
///
/// let queue = TimerQueue::new();
/// let (sender, receiver) = mpsc::channel();
/// delay(&queue, move |(a, b): (&str, &str)| sender.send(format!("{a}{b}")), Duration::from_millis(5), ("a", "b")).unwrap();
///
/// assert!(receiver.try_recv().is_err());
/// queue.run_until_idle();
/// assert_eq!(receiver.try_recv().unwrap(), "ab");
/// ```
pub fn delay<S, F, A, R>(scheduler: &S, func: F, wait: Duration, args: A) -> Result<()>
where
	S: Scheduler + ?Sized,
	F: FnOnce(A) -> R + Send + 'static,
	A: Send + 'static,
{
	scheduler.schedule(
		wait,
		Box::new(move || {
			func(args);
			log::trace!("delayed call finished");
		}),
	)?;
	log::debug!("delayed a call by {wait:?}");
	Ok(())
}

/// Like [`delay`] for a fallible function.
///
/// An error returned by `func` cannot reach the caller of `delay_try`, which has long returned; it is
/// logged as a warning instead.
pub fn delay_try<S, F, A>(scheduler: &S, func: F, wait: Duration, args: A) -> Result<()>
where
	S: Scheduler + ?Sized,
	F: FnOnce(A) -> Result<()> + Send + 'static,
	A: Send + 'static,
{
	delay(
		scheduler,
		move |args| {
			if let Err(error) = func(args) {
				log::warn!("delayed call failed: {error:#}");
			}
		},
		wait,
		args,
	)
}
