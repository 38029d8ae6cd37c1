use super::index_of;
use crate::{Collection, Truthy};
use anyhow::Result;

impl<'a, V, K> Collection<'a, V, K>
where
	V: Clone,
{
	/// Returns, in visitation order, every element for which `predicate` is truthy.
	///
	/// # Examples
	/// ```
	/// use underbar::Collection;
	///
	/// let numbers = vec![1, 2, 3, 4, 5, 6];
	/// assert_eq!(Collection::from(&numbers).select(|n| n % 2 == 0), [2, 4, 6]);
	/// ```
	pub fn select<F, P>(&self, mut predicate: F) -> Vec<V>
	where
		F: FnMut(&'a V) -> P,
		P: Truthy,
	{
		let mut results = Vec::new();
		self.enumerate(|item, _, _| {
			if predicate(item).is_truthy() {
				results.push(item.clone());
			}
		});
		results
	}

	/// Like [`select`](Self::select), with a fallible predicate.
	pub fn select_try<F, P>(&self, mut predicate: F) -> Result<Vec<V>>
	where
		F: FnMut(&'a V) -> Result<P>,
		P: Truthy,
	{
		let mut results = Vec::new();
		self.enumerate_try(|item, _, _| {
			if predicate(item)?.is_truthy() {
				results.push(item.clone());
			}
			Ok(())
		})?;
		Ok(results)
	}

	/// Returns every element for which `predicate` is falsy; the complement of [`select`](Self::select).
	pub fn reject<F, P>(&self, mut predicate: F) -> Vec<V>
	where
		F: FnMut(&'a V) -> P,
		P: Truthy,
	{
		self.select(|item| !predicate(item).is_truthy())
	}

	/// Like [`reject`](Self::reject), with a fallible predicate.
	pub fn reject_try<F, P>(&self, mut predicate: F) -> Result<Vec<V>>
	where
		F: FnMut(&'a V) -> Result<P>,
		P: Truthy,
	{
		self.select_try(|item| Ok(!predicate(item)?.is_truthy()))
	}
}

/// Returns the first occurrence of every distinct value, in the order they first appear.
///
/// # Examples
/// ```
/// use underbar::dedupe;
///
/// assert_eq!(dedupe(&[1, 2, 1, 3, 2]), [1, 2, 3]);
/// ```
pub fn dedupe<V>(sequence: &[V]) -> Vec<V>
where
	V: Clone + PartialEq,
{
	Collection::<V>::Sequence(sequence).accumulate_from(Vec::new(), |mut results, item| {
		if index_of(&results, item).is_none() {
			results.push(item.clone());
		}
		results
	})
}
