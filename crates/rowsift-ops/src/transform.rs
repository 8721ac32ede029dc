//! The `Transform` type every factory produces.

use std::fmt;

use rowsift_core::prelude::{Collection, OpKind, Result};

type ApplyFn = dyn Fn(Collection) -> Result<Collection> + Send + Sync;

/// A tagged collection-to-collection function.
///
/// The tag is the operation kind used by the executor's ordering step and
/// carries no other state. Applying a transform consumes the input collection
/// and returns a new (or the same, mutated-in-place) owned collection; the
/// executor guarantees the input is a private copy, so in-place mutation by
/// sort/format never touches caller data.
pub struct Transform {
    kind: OpKind,
    apply: Box<ApplyFn>,
}

impl Transform {
    pub(crate) fn new<F>(kind: OpKind, apply: F) -> Self
    where
        F: Fn(Collection) -> Result<Collection> + Send + Sync + 'static,
    {
        Self {
            kind,
            apply: Box::new(apply),
        }
    }

    /// The operation kind this transform was built by.
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// Run the transform over an owned collection.
    ///
    /// Errors from the underlying operation (e.g. a negative limit count)
    /// propagate unmodified.
    pub fn apply(&self, input: Collection) -> Result<Collection> {
        (self.apply)(input)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
