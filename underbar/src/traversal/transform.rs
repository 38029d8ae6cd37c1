use crate::{Collection, Key};
use anyhow::Result;
use std::{collections::HashMap, hash::Hash};

impl<'a, V, K> Collection<'a, V, K> {
	/// Collects `callback(value, key, collection)` for every element into a new sequence.
	///
	/// The result is always a sequence in visitation order, even when the collection is a mapping.
	///
	/// # Examples
	/// ```
	/// use underbar::Collection;
	///
	/// let numbers = vec![1, 2, 3];
	/// let doubled = Collection::from(&numbers).transform(|n, _, _| n * 2);
	/// assert_eq!(doubled, [2, 4, 6]);
	/// ```
	pub fn transform<F, R>(&self, mut callback: F) -> Vec<R>
	where
		F: FnMut(&'a V, Key<'a, K>, &Self) -> R,
	{
		let mut results = Vec::with_capacity(self.len());
		self.enumerate(|item, key, collection| results.push(callback(item, key, collection)));
		results
	}

	/// Like [`transform`](Self::transform), but stops at the first error returned by `callback`.
	pub fn transform_try<F, R>(&self, mut callback: F) -> Result<Vec<R>>
	where
		F: FnMut(&'a V, Key<'a, K>, &Self) -> Result<R>,
	{
		let mut results = Vec::with_capacity(self.len());
		self.enumerate_try(|item, key, collection| {
			results.push(callback(item, key, collection)?);
			Ok(())
		})?;
		Ok(results)
	}
}

/// Extracts the value stored under `property` from every record of a collection.
///
/// Records lacking the property yield `None`.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use underbar::{Collection, pluck};
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("age", "40")]),
///     HashMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&Collection::from(&people), &"age"), [Some("40"), None]);
/// ```
pub fn pluck<Q, T, K>(collection: &Collection<'_, HashMap<Q, T>, K>, property: &Q) -> Vec<Option<T>>
where
	Q: Eq + Hash,
	T: Clone,
{
	collection.transform(|record, _, _| record.get(property).cloned())
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::bail;
	use itertools::Itertools;

	#[test]
	fn transform_sequence_with_index() {
		let letters = vec!['a', 'b', 'c'];
		let labelled = Collection::from(&letters).transform(|c, key, _| format!("{}{c}", key.index().unwrap()));
		assert_eq!(labelled, ["0a", "1b", "2c"]);
	}

	#[test]
	fn transform_mapping_returns_sequence() {
		let mapping = HashMap::from([("one".to_string(), 1), ("two".to_string(), 2)]);
		let pairs = Collection::from(&mapping).transform(|value, key, _| format!("{}={value}", key.name().unwrap()));
		assert_eq!(pairs.into_iter().sorted().collect::<Vec<_>>(), ["one=1", "two=2"]);
	}

	#[test]
	fn transform_empty_is_empty() {
		let empty: Vec<u8> = vec![];
		assert!(Collection::from(&empty).transform(|v, _, _| *v).is_empty());
	}

	#[test]
	fn transform_try_discards_partial_result() {
		let values = vec![1, 2, 3];
		let mut calls = 0;
		let result = Collection::from(&values).transform_try(|v, _, _| {
			calls += 1;
			if *v > 1 {
				bail!("too big: {v}");
			}
			Ok(v * 10)
		});
		assert_eq!(result.unwrap_err().to_string(), "too big: 2");
		assert_eq!(calls, 2);
	}

	#[test]
	fn pluck_reads_property_of_each_record() {
		let records = vec![
			HashMap::from([("id", 1), ("size", 10)]),
			HashMap::from([("id", 2)]),
			HashMap::from([("id", 3), ("size", 30)]),
		];
		let collection = Collection::from(&records);
		assert_eq!(pluck(&collection, &"size"), [Some(10), None, Some(30)]);
		assert_eq!(pluck(&collection, &"id"), [Some(1), Some(2), Some(3)]);
	}
}
