//! Engine: copy the source, reorder transforms, fold.
//!
//! Behavior:
//! - The caller's collection is never touched; each call works on a private
//!   deep copy (records own all their data, so cloning the slice is a deep
//!   copy).
//! - Transforms are stable-sorted by their kind's slot in the [`ApplyOrder`];
//!   equal and unranked priorities keep the caller-supplied relative order,
//!   with unranked kinds applied after every ranked one.
//! - The fold stops at the first transform error; no partial result is
//!   returned.

use rowsift_core::prelude::{ApplyOrder, Collection, Record, Result};
use rowsift_ops::Transform;

/// Engine owns the apply order; it has no other state and is freely shared.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    order: ApplyOrder,
}

impl Engine {
    pub fn new(order: ApplyOrder) -> Self {
        Self { order }
    }

    pub fn apply_order(&self) -> &ApplyOrder {
        &self.order
    }

    /// Run `transforms` over a private copy of `source`.
    ///
    /// The supplied transform order is irrelevant: application order is
    /// decided by the engine's apply order alone. Transforms are borrowed and
    /// stay reusable across calls.
    pub fn execute(&self, source: &[Record], transforms: &[Transform]) -> Result<Collection> {
        // Indices, not the transforms themselves, get reordered; transforms
        // are not Clone and callers keep ownership.
        let mut schedule: Vec<usize> = (0..transforms.len()).collect();
        schedule.sort_by_key(|&i| {
            self.order
                .priority(transforms[i].kind())
                .unwrap_or(usize::MAX)
        });
        tracing::trace!(
            transforms = transforms.len(),
            ?schedule,
            "reordered transforms by apply order"
        );

        let mut acc: Collection = source.to_vec();
        for &i in &schedule {
            let transform = &transforms[i];
            let before = acc.len();
            acc = transform.apply(acc)?;
            tracing::debug!(
                op = %transform.kind(),
                rows_in = before,
                rows_out = acc.len(),
                "applied transform"
            );
        }
        Ok(acc)
    }
}

/// Run `transforms` over `source` under the default apply order.
pub fn execute(source: &[Record], transforms: &[Transform]) -> Result<Collection> {
    Engine::default().execute(source, transforms)
}
