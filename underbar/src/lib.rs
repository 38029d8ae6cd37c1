//! Collection traversal primitives and function adapters.
//!
//! The traversal engine works uniformly over ordered sequences and key-value mappings through the
//! [`Collection`] type, so callers never branch on which shape they hold. The function adapters wrap a
//! caller-supplied function and change how it is invoked: at most once ([`Once`]), cached by argument
//! list ([`Memoize`]), deferred through a [`Scheduler`] ([`delay`]). [`shuffle`] returns a random
//! permutation of a sequence.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use underbar::{Collection, dedupe, index_of};
//!
//! let numbers = vec![1, 2, 3];
//! let sum = Collection::from(&numbers).accumulate_from(0, |total, n| total + n);
//! assert_eq!(sum, 6);
//!
//! let prices = HashMap::from([("apple".to_string(), 3), ("pear".to_string(), 5)]);
//! assert!(Collection::from(&prices).every(|price| *price > 2));
//!
//! assert_eq!(index_of(&[3, 5, 7], &5), Some(1));
//! assert_eq!(dedupe(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
//! ```

pub mod adapters;
pub mod collection;
pub mod config;
pub mod helpers;
pub mod scheduler;
pub mod traversal;

pub use adapters::*;
pub use collection::*;
pub use config::Config;
pub use helpers::*;
pub use scheduler::*;
pub use traversal::*;
