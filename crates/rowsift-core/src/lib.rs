#![forbid(unsafe_code)]
//! rowsift-core: values, records, operation kinds, apply-order config, errors.
//!
//! Pure data and comparison logic only. The operation factories live in
//! `rowsift-ops` and the executor in `rowsift-exec`; this crate has no
//! knowledge of either.

pub mod config;
pub mod error;
pub mod kind;
pub mod prelude;
pub mod record;
pub mod value;

pub use config::ApplyOrder;
pub use error::{Error, Result};
pub use kind::OpKind;
pub use record::{Collection, Record};
pub use value::Value;
