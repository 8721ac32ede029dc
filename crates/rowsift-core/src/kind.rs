//! Operation kinds: the identity tags carried by transforms.
//!
//! Tags exist purely so the executor can reorder transforms by the apply
//! order; they carry no other state.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Select,
    FilterIn,
    SortBy,
    Limit,
    Format,
    Or,
    And,
}

impl OpKind {
    /// The priority slot this kind ranks at.
    ///
    /// `Or` and `And` are filter-shaped (they narrow the collection), so they
    /// rank at the `FilterIn` slot; every other kind is its own slot.
    pub fn slot(self) -> OpKind {
        match self {
            OpKind::Or | OpKind::And => OpKind::FilterIn,
            other => other,
        }
    }

    /// Stable human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Select => "select",
            OpKind::FilterIn => "filter_in",
            OpKind::SortBy => "sort_by",
            OpKind::Limit => "limit",
            OpKind::Format => "format",
            OpKind::Or => "or",
            OpKind::And => "and",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
