use anyhow::Result;

/// Wraps `func` so it is computed at most once.
///
/// # Examples
/// ```
/// use underbar::once;
///
/// let mut calls = 0;
/// let mut init = once(|(a, b): (i32, i32)| {
///     calls += 1;
///     a + b
/// });
/// assert_eq!(init.call((1, 2)), 3);
/// assert_eq!(init.call((10, 20)), 3);
/// drop(init);
/// assert_eq!(calls, 1);
/// ```
pub fn once<F, R>(func: F) -> Once<F, R> {
	Once { func, result: None }
}

/// A function that fires at most once and then keeps returning its first result.
///
/// The adapter starts out pending. The first successful call stores the result and marks it fired;
/// every later call returns a clone of the stored result and ignores its arguments.
pub struct Once<F, R> {
	func: F,
	result: Option<R>,
}

impl<F, R> Once<F, R> {
	pub fn is_fired(&self) -> bool {
		self.result.is_some()
	}

	/// Invokes the wrapped function on the first call, returns the stored result afterwards.
	pub fn call<A>(&mut self, args: A) -> R
	where
		F: FnMut(A) -> R,
		R: Clone,
	{
		if let Some(result) = &self.result {
			return result.clone();
		}
		let result = (self.func)(args);
		log::trace!("once: fired");
		self.result = Some(result.clone());
		result
	}

	/// Like [`call`](Self::call) for a fallible function.
	///
	/// An error is returned unchanged and leaves the adapter pending, so the next call tries again.
	pub fn try_call<A>(&mut self, args: A) -> Result<R>
	where
		F: FnMut(A) -> Result<R>,
		R: Clone,
	{
		if let Some(result) = &self.result {
			return Ok(result.clone());
		}
		let result = (self.func)(args)?;
		log::trace!("once: fired");
		self.result = Some(result.clone());
		Ok(result)
	}

	/// Turns the adapter into a plain closure with the same behavior.
	pub fn into_fn<A>(mut self) -> impl FnMut(A) -> R
	where
		F: FnMut(A) -> R,
		R: Clone,
	{
		move |args| self.call(args)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::bail;
	use std::cell::Cell;

	#[test]
	fn computes_once_and_returns_same_value() {
		let counter = Cell::new(0);
		let mut increment = once(|()| {
			counter.set(counter.get() + 1);
			counter.get()
		});
		assert!(!increment.is_fired());
		for _ in 0..5 {
			assert_eq!(increment.call(()), 1);
		}
		assert!(increment.is_fired());
		assert_eq!(counter.get(), 1);
	}

	#[test]
	fn later_arguments_are_ignored() {
		let mut square = once(|x: u64| x * x);
		assert_eq!(square.call(4), 16);
		assert_eq!(square.call(5), 16);
		assert_eq!(square.call(0), 16);
	}

	#[test]
	fn instances_do_not_share_state() {
		let mut first = once(|x: i32| x);
		let mut second = once(|x: i32| x);
		assert_eq!(first.call(1), 1);
		assert_eq!(second.call(2), 2);
		assert_eq!(first.call(3), 1);
	}

	#[test]
	fn failed_call_stays_pending() {
		let attempts = Cell::new(0);
		let mut connect = once(|host: &str| -> Result<String> {
			attempts.set(attempts.get() + 1);
			if attempts.get() == 1 {
				bail!("{host} unreachable");
			}
			Ok(format!("connected to {host}"))
		});
		assert_eq!(connect.try_call("a").unwrap_err().to_string(), "a unreachable");
		assert!(!connect.is_fired());
		assert_eq!(connect.try_call("b").unwrap(), "connected to b");
		assert_eq!(connect.try_call("c").unwrap(), "connected to b");
		assert_eq!(attempts.get(), 2);
	}

	#[test]
	fn into_fn_keeps_behavior() {
		let mut f = once(|s: &str| s.len()).into_fn::<&str>();
		assert_eq!(f("abc"), 3);
		assert_eq!(f("abcdef"), 3);
	}
}
