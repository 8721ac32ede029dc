//! Convenient re-exports for downstream crates.

pub use crate::config::ApplyOrder;
pub use crate::error::{Error, Result};
pub use crate::kind::OpKind;
pub use crate::record::{Collection, Record};
pub use crate::value::Value;
