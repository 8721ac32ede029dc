#![forbid(unsafe_code)]
//! rowsift-ops: operation factories (select/filter_in/sort_by/format/limit/or/and).
//!
//! Design intent:
//! - Keep this crate pure and synchronous; factories are higher-order
//!   functions returning [`Transform`] values.
//! - A transform owns no mutable state and may be applied any number of
//!   times, including concurrently, against different collections.
//! - The executor in `rowsift-exec` decides *when* each transform runs; the
//!   kind tag on every transform exists only for that ordering step.

pub mod combine;
pub mod filter;
pub mod format;
pub mod limit;
pub mod select;
pub mod sort;
pub mod transform;

pub use combine::{and, or};
pub use filter::filter_in;
pub use format::format;
pub use limit::limit;
pub use select::select;
pub use sort::{sort_by, Order};
pub use transform::Transform;
