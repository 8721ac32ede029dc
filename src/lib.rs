#![forbid(unsafe_code)]
//! rowsift: an in-memory query combinator engine.
//!
//! Build transforms with the operation factories, then hand them to
//! [`execute`] (or an [`Engine`] with a custom [`ApplyOrder`]) together with
//! a collection of records. Transforms are applied in a canonical,
//! kind-determined order regardless of the order they were supplied in, and
//! the caller's collection is never mutated.
//!
//! ```
//! use rowsift::{execute, filter_in, limit, select, sort_by, Order, Record};
//!
//! let friends = vec![
//!     Record::new().with("name", "Sam").with("age", 29),
//!     Record::new().with("name", "Alex").with("age", 30),
//!     Record::new().with("name", "Kim").with("age", 29),
//! ];
//!
//! let result = execute(
//!     &friends,
//!     &[
//!         select(["name"]),
//!         filter_in("age", [29]),
//!         sort_by("name", Order::Asc),
//!         limit(1),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(result, vec![Record::new().with("name", "Kim")]);
//! ```

pub use rowsift_core::{ApplyOrder, Collection, Error, OpKind, Record, Result, Value};
pub use rowsift_exec::{execute, Engine};
pub use rowsift_ops::{and, filter_in, format, limit, or, select, sort_by, Order, Transform};
