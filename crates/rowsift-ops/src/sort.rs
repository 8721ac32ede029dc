//! Stable single-field sorting.

use serde::{Deserialize, Serialize};

use rowsift_core::prelude::{OpKind, Value};

use crate::transform::Transform;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

/// Sort the collection by `field` using [`Value::total_cmp`].
///
/// The sort is stable: records with equal keys keep their original relative
/// order, in both directions (descending reverses the comparator, not the
/// collection). Records missing the field sort as `Null`, i.e. first
/// ascending and last descending. Sorting happens in place on the owned
/// collection handed in by the executor.
pub fn sort_by(field: impl Into<String>, order: Order) -> Transform {
    let field = field.into();

    Transform::new(OpKind::SortBy, move |mut input| {
        input.sort_by(|a, b| {
            let left = a.get(&field).unwrap_or(&Value::Null);
            let right = b.get(&field).unwrap_or(&Value::Null);
            let cmp = left.total_cmp(right);
            match order {
                Order::Asc => cmp,
                Order::Desc => cmp.reverse(),
            }
        });
        Ok(input)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowsift_core::prelude::Record;

    #[test]
    fn sorts_ascending_and_descending() {
        let input = vec![
            Record::new().with("a", 2),
            Record::new().with("a", 1),
            Record::new().with("a", 3),
        ];
        let asc = sort_by("a", Order::Asc).apply(input.clone()).expect("sort");
        assert_eq!(asc[0].get("a"), Some(&Value::Int(1)));
        assert_eq!(asc[2].get("a"), Some(&Value::Int(3)));

        let desc = sort_by("a", Order::Desc).apply(input).expect("sort");
        assert_eq!(desc[0].get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn ties_keep_original_order() {
        let input = vec![
            Record::new().with("a", 1).with("id", 1),
            Record::new().with("a", 1).with("id", 2),
        ];
        let out = sort_by("a", Order::Asc).apply(input).expect("sort");
        assert_eq!(out[0].get("id"), Some(&Value::Int(1)));
        assert_eq!(out[1].get("id"), Some(&Value::Int(2)));
    }

    #[test]
    fn missing_field_sorts_as_null() {
        let input = vec![Record::new().with("a", 1), Record::new().with("b", 9)];
        let out = sort_by("a", Order::Asc).apply(input).expect("sort");
        assert!(!out[0].contains_field("a"));
        assert_eq!(out[1].get("a"), Some(&Value::Int(1)));
    }
}
