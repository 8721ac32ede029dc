//! Membership filtering over one field.

use rowsift_core::prelude::{OpKind, Value};

use crate::transform::Transform;

/// Keep records whose `field` value is a member of `values`.
///
/// Membership is value equality. Records missing the field never match; an
/// empty value set keeps nothing. Neither case is an error.
pub fn filter_in<I, V>(field: impl Into<String>, values: I) -> Transform
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let field = field.into();
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();

    Transform::new(OpKind::FilterIn, move |mut input| {
        input.retain(|record| {
            record
                .get(&field)
                .is_some_and(|v| values.iter().any(|candidate| candidate == v))
        });
        Ok(input)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowsift_core::prelude::Record;

    #[test]
    fn keeps_only_matching_values() {
        let input = vec![Record::new().with("a", 1), Record::new().with("a", 3)];
        let out = filter_in("a", [1, 2]).apply(input).expect("filter");
        assert_eq!(out, vec![Record::new().with("a", 1)]);
    }

    #[test]
    fn missing_field_never_matches() {
        let input = vec![Record::new().with("b", 1)];
        let out = filter_in("a", [1]).apply(input).expect("filter");
        assert!(out.is_empty());
    }

    #[test]
    fn empty_value_set_keeps_nothing() {
        let input = vec![Record::new().with("a", 1)];
        let out = filter_in("a", Vec::<Value>::new()).apply(input).expect("filter");
        assert!(out.is_empty());
    }
}
