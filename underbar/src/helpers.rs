//! Small slicing helpers and the identity function.

/// Returns its argument unchanged.
///
/// Serves as the default predicate wherever a caller does not supply one.
pub fn identity<T>(value: T) -> T {
	value
}

/// The first element, if any.
pub fn first<V>(sequence: &[V]) -> Option<&V> {
	sequence.first()
}

/// The first `n` elements, or the whole sequence if it is shorter.
pub fn first_n<V>(sequence: &[V], n: usize) -> &[V] {
	&sequence[..n.min(sequence.len())]
}

/// The last element, if any.
pub fn last<V>(sequence: &[V]) -> Option<&V> {
	sequence.last()
}

/// The last `n` elements, or the whole sequence if it is shorter.
///
/// # Examples
/// ```
/// use underbar::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), [2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), [1, 2, 3]);
/// ```
pub fn last_n<V>(sequence: &[V], n: usize) -> &[V] {
	&sequence[sequence.len() - n.min(sequence.len())..]
}
