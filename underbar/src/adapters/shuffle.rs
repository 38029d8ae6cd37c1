use rand::Rng;

/// Returns a uniformly random permutation of `sequence`, leaving the input untouched.
///
/// # Examples
/// ```
/// use underbar::shuffle;
///
/// let deck = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&deck);
/// shuffled.sort();
/// assert_eq!(shuffled, deck);
/// ```
pub fn shuffle<V: Clone>(sequence: &[V]) -> Vec<V> {
	shuffle_with(sequence, &mut rand::rng())
}

/// Like [`shuffle`], drawing from the given random number generator.
///
/// Elements are picked uniformly from a shrinking working copy and appended to the output until the
/// working copy is empty. The range is never empty when drawing, and a single remaining element is
/// always the one picked.
pub fn shuffle_with<V, R>(sequence: &[V], rng: &mut R) -> Vec<V>
where
	V: Clone,
	R: Rng,
{
	let mut remaining = sequence.to_vec();
	let mut shuffled = Vec::with_capacity(remaining.len());
	while !remaining.is_empty() {
		let index = rng.random_range(0..remaining.len());
		shuffled.push(remaining.swap_remove(index));
	}
	shuffled
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Config;
	use rstest::rstest;
	use std::collections::HashMap;

	fn sorted(mut values: Vec<i32>) -> Vec<i32> {
		values.sort_unstable();
		values
	}

	#[rstest]
	#[case(vec![])]
	#[case(vec![7])]
	#[case(vec![1, 2])]
	#[case(vec![3, 1, 3, 2, 1])]
	#[case((0..100).collect())]
	fn returns_a_permutation(#[case] input: Vec<i32>) {
		let before = input.clone();
		let output = shuffle(&input);
		assert_eq!(input, before);
		assert_eq!(output.len(), input.len());
		assert_eq!(sorted(output), sorted(input));
	}

	#[test]
	fn seeded_shuffles_are_reproducible() {
		let config = Config {
			random_seed: Some(1234),
			..Config::default()
		};
		let input: Vec<i32> = (0..20).collect();
		let a = shuffle_with(&input, &mut config.rng());
		let b = shuffle_with(&input, &mut config.rng());
		assert_eq!(a, b);
	}

	#[test]
	fn every_position_is_reachable() {
		let config = Config {
			random_seed: Some(99),
			..Config::default()
		};
		let mut rng = config.rng();
		let input = [0, 1, 2, 3];
		let mut counts: HashMap<(i32, usize), usize> = HashMap::new();
		let rounds = 4000;
		for _ in 0..rounds {
			for (position, value) in shuffle_with(&input, &mut rng).into_iter().enumerate() {
				*counts.entry((value, position)).or_default() += 1;
			}
		}
		// Uniform draws put each value at each position about a quarter of the time.
		for value in input {
			for position in 0..input.len() {
				let hits = counts.get(&(value, position)).copied().unwrap_or(0);
				assert!((800..1200).contains(&hits), "value {value} at {position}: {hits}");
			}
		}
	}
}
