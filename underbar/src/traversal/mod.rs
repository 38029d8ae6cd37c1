//! Traversal engine.
//!
//! Every operation accepts a [`Collection`](crate::Collection) and behaves the same whether it holds a
//! sequence or a mapping. Operations that only make sense for ordered data ([`index_of`], [`dedupe`])
//! take a slice.
//!
//! | Operation | Built on |
//! |-----------|----------|
//! | `enumerate` | collection iteration |
//! | `index_of`, `select`, `transform` | `enumerate` |
//! | `reject` | `select` |
//! | `dedupe`, `contains`, `every` | `accumulate_from` |
//! | `some` | `every` |
//!
//! Every callback that may fail has a `*_try` counterpart. The first error stops the traversal and is
//! returned to the caller unchanged; any partial result is dropped.

mod accumulate;
mod enumerate;
mod filter;
mod transform;

pub use enumerate::index_of;
pub use filter::dedupe;
pub use transform::pluck;
