//! Apply-order configuration that the executor reorders transforms with.
//!
//! This is an explicit value handed to (or defaulted by) the engine, not a
//! module-level constant, so test suites can substitute alternate orderings
//! without global mutation.

use serde::{Deserialize, Serialize};

use crate::kind::OpKind;

/// The canonical order operation kinds are applied in, lowest slot first.
///
/// Kinds absent from the order are unranked: the executor applies them after
/// every ranked kind, keeping their caller-supplied relative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOrder {
    slots: Vec<OpKind>,
}

impl ApplyOrder {
    pub fn new(slots: Vec<OpKind>) -> Self {
        Self { slots }
    }

    /// Priority of a kind under this order; `None` for unranked kinds.
    ///
    /// Combinator kinds are resolved through [`OpKind::slot`] first, so `or`
    /// and `and` rank wherever `filter_in` does.
    pub fn priority(&self, kind: OpKind) -> Option<usize> {
        let slot = kind.slot();
        self.slots.iter().position(|k| *k == slot)
    }

    pub fn slots(&self) -> &[OpKind] {
        &self.slots
    }
}

impl Default for ApplyOrder {
    /// Filters narrow first, then sort, then limit, then presentation
    /// (format, select).
    fn default() -> Self {
        Self::new(vec![
            OpKind::FilterIn,
            OpKind::SortBy,
            OpKind::Limit,
            OpKind::Format,
            OpKind::Select,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ranks_filters_before_presentation() {
        let order = ApplyOrder::default();
        assert!(order.priority(OpKind::FilterIn) < order.priority(OpKind::Format));
        assert!(order.priority(OpKind::Format) < order.priority(OpKind::Select));
    }

    #[test]
    fn combinators_share_the_filter_slot() {
        let order = ApplyOrder::default();
        assert_eq!(order.priority(OpKind::Or), order.priority(OpKind::FilterIn));
        assert_eq!(order.priority(OpKind::And), order.priority(OpKind::FilterIn));
    }

    #[test]
    fn custom_order_can_leave_kinds_unranked() {
        let order = ApplyOrder::new(vec![OpKind::Select, OpKind::Limit]);
        assert_eq!(order.priority(OpKind::Select), Some(0));
        assert_eq!(order.priority(OpKind::SortBy), None);
    }
}
