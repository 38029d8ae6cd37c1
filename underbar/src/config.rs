//! Settings shared by the function adapters.
//!
//! ```
//! use underbar::Config;
//!
//! let config = Config { random_seed: Some(7), ..Config::default() };
//! assert_eq!(config.key_separator, ", ");
//! ```

use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;

/// Separator appended after every argument text when building memoize cache keys.
pub const DEFAULT_KEY_SEPARATOR: &str = ", ";

#[derive(Clone, Debug)]
pub struct Config {
	/// Appended after the text of every argument when building a memoization key.
	pub key_separator: String,
	/// Seed for reproducible shuffles; `None` seeds from the operating system.
	pub random_seed: Option<u64>,
}

impl Config {
	pub fn arc(self) -> Arc<Self> {
		Arc::new(self)
	}

	/// Creates the random number generator described by `random_seed`.
	pub fn rng(&self) -> StdRng {
		match self.random_seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
			random_seed: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::Rng;

	#[test]
	fn defaults() {
		let config = Config::default();
		assert_eq!(config.key_separator, ", ");
		assert_eq!(config.random_seed, None);
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let config = Config {
			random_seed: Some(42),
			..Config::default()
		}
		.arc();
		let a: Vec<u32> = (0..8).map(|_| config.rng().random_range(0..1000)).collect();
		let mut first = config.rng();
		let mut second = config.rng();
		let b: Vec<u32> = (0..8).map(|_| first.random_range(0..1000)).collect();
		let c: Vec<u32> = (0..8).map(|_| second.random_range(0..1000)).collect();
		assert_eq!(b, c);
		assert!(a.iter().all(|v| *v == a[0]));
	}
}
