use crate::{Collection, Key};
use anyhow::Result;

impl<'a, V, K> Collection<'a, V, K> {
	/// Calls `callback(value, key, collection)` for every element.
	///
	/// Sequences are visited in ascending index order without skipping. Mappings are visited
	/// exhaustively, in no guaranteed order.
	///
	/// # Examples
	/// ```
	/// use underbar::{Collection, Key};
	///
	/// let words = vec!["a", "b"];
	/// let mut seen = Vec::new();
	/// Collection::from(&words).enumerate(|word, key, collection| {
	///     seen.push((key.index(), *word, collection.len()));
	/// });
	/// assert_eq!(seen, [(Some(0), "a", 2), (Some(1), "b", 2)]);
	/// ```
	pub fn enumerate<F>(&self, mut callback: F)
	where
		F: FnMut(&'a V, Key<'a, K>, &Self),
	{
		for (key, value) in self.iter() {
			callback(value, key, self);
		}
	}

	/// Like [`enumerate`](Self::enumerate), but stops at the first error returned by `callback`.
	pub fn enumerate_try<F>(&self, mut callback: F) -> Result<()>
	where
		F: FnMut(&'a V, Key<'a, K>, &Self) -> Result<()>,
	{
		for (key, value) in self.iter() {
			callback(value, key, self)?;
		}
		Ok(())
	}
}

/// Returns the lowest index whose element equals `target`, or `None` if there is none.
///
/// # Examples
/// ```
/// use underbar::index_of;
///
/// assert_eq!(index_of(&[3, 5, 7], &5), Some(1));
/// assert_eq!(index_of(&[3, 5, 7], &9), None);
/// ```
pub fn index_of<V: PartialEq>(sequence: &[V], target: &V) -> Option<usize> {
	let mut result = None;
	Collection::<V>::Sequence(sequence).enumerate(|item, key, _| {
		if result.is_none() && item == target {
			result = key.index();
		}
	});
	result
}
