use crate::{Collection, Config};
use anyhow::Result;
use std::{
	collections::HashMap,
	fmt::{self, Debug, Display},
};

/// Positional arguments that can be turned into a cache key.
///
/// Every argument is keyed by its `Display` text, so composite values only get as much distinction as
/// their text carries. Two argument lists whose texts concatenate to the same key share a cache entry.
pub trait ArgumentList {
	/// The text of every positional argument, in order.
	fn texts(&self) -> Vec<String>;
}

impl ArgumentList for () {
	fn texts(&self) -> Vec<String> {
		Vec::new()
	}
}

macro_rules! impl_argument_list_for_scalars {
	($($t:ty),*) => {
		$(impl ArgumentList for $t {
			fn texts(&self) -> Vec<String> {
				vec![self.to_string()]
			}
		})*
	};
}

impl_argument_list_for_scalars!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str, String
);

impl<T: ArgumentList + ?Sized> ArgumentList for &T {
	fn texts(&self) -> Vec<String> {
		(**self).texts()
	}
}

macro_rules! impl_argument_list_for_tuples {
	($(($($name:ident),+)),+) => {
		$(impl<$($name: Display),+> ArgumentList for ($($name,)+) {
			#[allow(non_snake_case)]
			fn texts(&self) -> Vec<String> {
				let ($($name,)+) = self;
				vec![$($name.to_string()),+]
			}
		})+
	};
}

impl_argument_list_for_tuples!(
	(A),
	(A, B),
	(A, B, C),
	(A, B, C, D),
	(A, B, C, D, E),
	(A, B, C, D, E, F),
	(A, B, C, D, E, F, G),
	(A, B, C, D, E, F, G, H)
);

impl<T: Display> ArgumentList for [T] {
	fn texts(&self) -> Vec<String> {
		self.iter().map(ToString::to_string).collect()
	}
}

impl<T: Display> ArgumentList for Vec<T> {
	fn texts(&self) -> Vec<String> {
		self.as_slice().texts()
	}
}

/// Wraps `func` so it is computed once per distinct argument list.
///
/// # Examples
/// ```
/// use underbar::memoize;
///
/// let mut calls = 0;
/// let mut area = memoize(|(w, h): (u32, u32)| {
///     calls += 1;
///     w * h
/// });
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((4, 3)), 12);
/// drop(area);
/// assert_eq!(calls, 2);
/// ```
pub fn memoize<F, R>(func: F) -> Memoize<F, R> {
	Memoize::with_config(func, &Config::default())
}

/// A function that caches its results by argument list.
///
/// The cache belongs to this instance alone. The first result computed for a key is kept for the
/// lifetime of the instance and is never invalidated. The wrapped function is expected to be pure.
pub struct Memoize<F, R> {
	func: F,
	cache: HashMap<String, R>,
	separator: String,
}

impl<F, R> Memoize<F, R> {
	/// Creates the adapter using the key separator from `config`.
	pub fn with_config(func: F, config: &Config) -> Self {
		Self {
			func,
			cache: HashMap::new(),
			separator: config.key_separator.clone(),
		}
	}

	/// Number of cached results.
	pub fn cache_len(&self) -> usize {
		self.cache.len()
	}

	/// Whether a result for `args` is already cached.
	pub fn is_cached<A: ArgumentList + ?Sized>(&self, args: &A) -> bool {
		self.cache.contains_key(&self.cache_key(args))
	}

	/// Returns the cached result for `args`, computing and storing it on the first call.
	pub fn call<A>(&mut self, args: A) -> R
	where
		A: ArgumentList,
		F: FnMut(A) -> R,
		R: Clone,
	{
		let key = self.cache_key(&args);
		if let Some(result) = self.cache.get(&key) {
			log::trace!("memoize: hit for {key:?}");
			return result.clone();
		}
		log::trace!("memoize: miss for {key:?}");
		let result = (self.func)(args);
		self.cache.entry(key).or_insert(result).clone()
	}

	/// Like [`call`](Self::call) for a fallible function.
	///
	/// Errors are returned unchanged and never cached.
	pub fn try_call<A>(&mut self, args: A) -> Result<R>
	where
		A: ArgumentList,
		F: FnMut(A) -> Result<R>,
		R: Clone,
	{
		let key = self.cache_key(&args);
		if let Some(result) = self.cache.get(&key) {
			log::trace!("memoize: hit for {key:?}");
			return Ok(result.clone());
		}
		log::trace!("memoize: miss for {key:?}");
		let result = (self.func)(args)?;
		Ok(self.cache.entry(key).or_insert(result).clone())
	}

	/// Turns the adapter into a plain closure that keeps the cache.
	pub fn into_fn<A>(mut self) -> impl FnMut(A) -> R
	where
		A: ArgumentList,
		F: FnMut(A) -> R,
		R: Clone,
	{
		move |args| self.call(args)
	}

	fn cache_key<A: ArgumentList + ?Sized>(&self, args: &A) -> String {
		let texts = args.texts();
		let mut key = String::new();
		Collection::<String>::Sequence(&texts).enumerate(|text, _, _| {
			key.push_str(text);
			key.push_str(&self.separator);
		});
		key
	}
}

impl<F, R> Debug for Memoize<F, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Memoize")
			.field("cached", &self.cache.len())
			.field("separator", &self.separator)
			.finish()
	}
}
