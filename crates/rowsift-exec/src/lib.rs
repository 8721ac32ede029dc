#![forbid(unsafe_code)]
//! rowsift-exec: the query executor.
//!
//! Takes a source collection and an unordered set of transforms, copies the
//! source, reorders the transforms by the configured apply order, and folds
//! them left-to-right over the copy.

pub mod engine;

pub use engine::{execute, Engine};
