//! Collection truncation.

use rowsift_core::prelude::{Error, OpKind};

use crate::transform::Transform;

/// Keep the first `count` records.
///
/// A count beyond the collection length returns the collection unchanged; a
/// negative count is a programming error and fails the enclosing execution
/// with [`Error::InvalidArgument`] when the transform is applied.
pub fn limit(count: i64) -> Transform {
    Transform::new(OpKind::Limit, move |mut input| {
        if count < 0 {
            return Err(Error::InvalidArgument(format!(
                "limit count must be non-negative, got {count}"
            )));
        }
        input.truncate(count as usize);
        Ok(input)
    })
}
