//! Function adapters.
//!
//! Each adapter wraps a caller-supplied function and owns whatever state it needs (a fired flag with the
//! stored result, or a cache). That state is private to the adapter instance and lives exactly as long as
//! the adapter.
//!
//! | Adapter | Behavior |
//! |---------|----------|
//! | [`once`] | computes on the first call, returns the stored result afterwards |
//! | [`memoize`] | computes once per distinct argument list |
//! | [`delay`] | runs the function once, later, through a [`Scheduler`](crate::Scheduler) |
//! | [`shuffle`] | random permutation of a sequence |
//!
//! Functions receive their positional arguments as a single value, usually a tuple.

mod delay;
mod memoize;
mod once;
mod shuffle;

pub use delay::{delay, delay_try};
pub use memoize::{ArgumentList, Memoize, memoize};
pub use once::{Once, once};
pub use shuffle::{shuffle, shuffle_with};
