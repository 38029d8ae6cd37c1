//! The two collection shapes the traversal engine understands.
//!
//! A [`Collection`] is either an ordered sequence or a key-value mapping. Every traversal operation takes
//! a `Collection` and dispatches on its shape internally, so the caller never branches on it.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use underbar::{Collection, Key};
//!
//! let letters = vec!['a', 'b'];
//! let keys: Vec<Key<'_, String>> = Collection::from(&letters).iter().map(|(key, _)| key).collect();
//! assert_eq!(keys, [Key::Index(0), Key::Index(1)]);
//!
//! let ages = HashMap::from([("ada".to_string(), 36)]);
//! let collection = Collection::from(&ages);
//! assert!(collection.is_mapping());
//! assert_eq!(collection.len(), 1);
//! ```

mod truthy;

pub use truthy::Truthy;

use std::{
	collections::{HashMap, hash_map},
	fmt::{self, Debug},
	iter::{Enumerate, FusedIterator},
	slice,
};

/// A borrowed ordered sequence or key-value mapping.
///
/// Operations never mutate the underlying data. Mapping keys default to `String`.
pub enum Collection<'a, V, K = String> {
	/// Indexed `0..len`, visited in ascending index order.
	Sequence(&'a [V]),
	/// Unique keys, visited in the map's enumeration order.
	Mapping(&'a HashMap<K, V>),
}

/// The position of a value inside a [`Collection`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Key<'a, K> {
	/// Index into a sequence.
	Index(usize),
	/// Key of a mapping entry.
	Name(&'a K),
}

impl<'a, K> Key<'a, K> {
	pub fn index(&self) -> Option<usize> {
		match *self {
			Key::Index(index) => Some(index),
			Key::Name(_) => None,
		}
	}

	pub fn name(&self) -> Option<&'a K> {
		match *self {
			Key::Index(_) => None,
			Key::Name(name) => Some(name),
		}
	}
}

impl<K> Clone for Key<'_, K> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<K> Copy for Key<'_, K> {}

impl<'a, V, K> Collection<'a, V, K> {
	/// Number of elements (sequence length or number of mapping entries).
	pub fn len(&self) -> usize {
		match self {
			Self::Sequence(sequence) => sequence.len(),
			Self::Mapping(mapping) => mapping.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_sequence(&self) -> bool {
		matches!(self, Self::Sequence(_))
	}

	pub fn is_mapping(&self) -> bool {
		matches!(self, Self::Mapping(_))
	}

	/// Iterates over `(key, value)` pairs in visitation order.
	///
	/// Sequences yield ascending indices. Mappings yield every key exactly once, in no guaranteed order.
	pub fn iter(&self) -> Iter<'a, V, K> {
		match self {
			Self::Sequence(sequence) => Iter::Sequence(sequence.iter().enumerate()),
			Self::Mapping(mapping) => Iter::Mapping(mapping.iter()),
		}
	}
}

impl<V, K> Clone for Collection<'_, V, K> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<V, K> Copy for Collection<'_, V, K> {}

impl<V, K> Debug for Collection<'_, V, K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let shape = match self {
			Self::Sequence(_) => "Sequence",
			Self::Mapping(_) => "Mapping",
		};
		f.debug_struct("Collection")
			.field("shape", &shape)
			.field("length", &self.len())
			.finish()
	}
}

impl<'a, V> From<&'a [V]> for Collection<'a, V> {
	fn from(sequence: &'a [V]) -> Self {
		Collection::Sequence(sequence)
	}
}

impl<'a, V> From<&'a Vec<V>> for Collection<'a, V> {
	fn from(sequence: &'a Vec<V>) -> Self {
		Collection::Sequence(sequence.as_slice())
	}
}

impl<'a, V, const N: usize> From<&'a [V; N]> for Collection<'a, V> {
	fn from(sequence: &'a [V; N]) -> Self {
		Collection::Sequence(sequence.as_slice())
	}
}

impl<'a, V, K> From<&'a HashMap<K, V>> for Collection<'a, V, K> {
	fn from(mapping: &'a HashMap<K, V>) -> Self {
		Collection::Mapping(mapping)
	}
}

impl<'a, V, K> IntoIterator for Collection<'a, V, K> {
	type Item = (Key<'a, K>, &'a V);
	type IntoIter = Iter<'a, V, K>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the `(key, value)` pairs of a [`Collection`].
pub enum Iter<'a, V, K> {
	Sequence(Enumerate<slice::Iter<'a, V>>),
	Mapping(hash_map::Iter<'a, K, V>),
}

impl<'a, V, K> Iterator for Iter<'a, V, K> {
	type Item = (Key<'a, K>, &'a V);

	fn next(&mut self) -> Option<Self::Item> {
		match self {
			Self::Sequence(iter) => iter.next().map(|(index, value)| (Key::Index(index), value)),
			Self::Mapping(iter) => iter.next().map(|(key, value)| (Key::Name(key), value)),
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match self {
			Self::Sequence(iter) => iter.size_hint(),
			Self::Mapping(iter) => iter.size_hint(),
		}
	}
}

impl<V, K> ExactSizeIterator for Iter<'_, V, K> {}

impl<V, K> FusedIterator for Iter<'_, V, K> {}
