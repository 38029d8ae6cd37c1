use crate::{Collection, Truthy, identity};
use anyhow::{Result, bail};

impl<'a, V, K> Collection<'a, V, K> {
	/// Folds the collection into a single value, starting from `seed`.
	///
	/// Each step computes `accumulator = iterator(accumulator, element)`, beginning with the first
	/// element.
	///
	/// # Examples
	/// ```
	/// use underbar::Collection;
	///
	/// let numbers = vec![1, 2, 3];
	/// let total = Collection::from(&numbers).accumulate_from(0, |total, n| total + n);
	/// assert_eq!(total, 6);
	/// ```
	pub fn accumulate_from<A, F>(&self, seed: A, mut iterator: F) -> A
	where
		F: FnMut(A, &'a V) -> A,
	{
		let mut accumulator = seed;
		for (_, item) in self.iter() {
			accumulator = iterator(accumulator, item);
		}
		accumulator
	}

	/// Like [`accumulate_from`](Self::accumulate_from), but stops at the first error returned by
	/// `iterator`.
	pub fn accumulate_from_try<A, F>(&self, seed: A, mut iterator: F) -> Result<A>
	where
		F: FnMut(A, &'a V) -> Result<A>,
	{
		let mut accumulator = seed;
		for (_, item) in self.iter() {
			accumulator = iterator(accumulator, item)?;
		}
		Ok(accumulator)
	}

	/// Folds the collection without a seed.
	///
	/// The first visited element becomes the initial accumulator and is never passed to `iterator`.
	/// A single-element collection therefore returns that element without calling `iterator`. The
	/// collection itself is left untouched.
	///
	/// # Errors
	/// Fails if the collection is empty, since there is nothing to start from.
	///
	/// # Examples
	/// ```
	/// use underbar::Collection;
	///
	/// let single = vec![5];
	/// let result = Collection::from(&single).accumulate(|total, n| total + n * n).unwrap();
	/// assert_eq!(result, 5);
	/// ```
	pub fn accumulate<F>(&self, mut iterator: F) -> Result<V>
	where
		V: Clone,
		F: FnMut(V, &'a V) -> V,
	{
		let mut items = self.iter();
		let Some((_, first)) = items.next() else {
			bail!("cannot accumulate an empty collection without a seed");
		};
		Ok(items.fold(first.clone(), |accumulator, (_, item)| iterator(accumulator, item)))
	}

	/// Like [`accumulate`](Self::accumulate), but stops at the first error returned by `iterator`.
	pub fn accumulate_try<F>(&self, mut iterator: F) -> Result<V>
	where
		V: Clone,
		F: FnMut(V, &'a V) -> Result<V>,
	{
		let mut items = self.iter();
		let Some((_, first)) = items.next() else {
			bail!("cannot accumulate an empty collection without a seed");
		};
		items.try_fold(first.clone(), |accumulator, (_, item)| iterator(accumulator, item))
	}

	/// Returns `true` if any element equals `target`.
	pub fn contains(&self, target: &V) -> bool
	where
		V: PartialEq,
	{
		self.accumulate_from(false, |was_found, item| was_found || item == target)
	}

	/// Returns `true` if `predicate` is truthy for every element; vacuously `true` when empty.
	///
	/// Once an element fails, `predicate` is not called for the remaining elements.
	pub fn every<F, P>(&self, mut predicate: F) -> bool
	where
		F: FnMut(&'a V) -> P,
		P: Truthy,
	{
		self.accumulate_from(true, |all, item| all && predicate(item).is_truthy())
	}

	/// Like [`every`](Self::every), with a fallible predicate. Elements after the first failing one
	/// are not visited, so their errors are never seen.
	pub fn every_try<F, P>(&self, mut predicate: F) -> Result<bool>
	where
		F: FnMut(&'a V) -> Result<P>,
		P: Truthy,
	{
		self.accumulate_from_try(true, |all, item| Ok(all && predicate(item)?.is_truthy()))
	}

	/// Returns `true` if every element is itself truthy.
	pub fn every_truthy(&self) -> bool
	where
		V: Truthy,
	{
		self.every(identity)
	}

	/// Returns `true` if `predicate` is truthy for at least one element; `false` when empty.
	pub fn some<F, P>(&self, mut predicate: F) -> bool
	where
		F: FnMut(&'a V) -> P,
		P: Truthy,
	{
		!self.every(|item| !predicate(item).is_truthy())
	}

	/// Like [`some`](Self::some), with a fallible predicate.
	pub fn some_try<F, P>(&self, mut predicate: F) -> Result<bool>
	where
		F: FnMut(&'a V) -> Result<P>,
		P: Truthy,
	{
		Ok(!self.every_try(|item| Ok(!predicate(item)?.is_truthy()))?)
	}

	/// Returns `true` if at least one element is itself truthy.
	pub fn some_truthy(&self) -> bool
	where
		V: Truthy,
	{
		self.some(identity)
	}
}
