//! Field projection.

use rowsift_core::prelude::{OpKind, Record};

use crate::transform::Transform;

/// Project each record down to the requested fields.
///
/// Requested fields that a record does not carry are silently omitted; the
/// output record holds the intersection of the request and the record's own
/// field set. Projection is idempotent for a fixed field list.
pub fn select<I, S>(fields: I) -> Transform
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();

    Transform::new(OpKind::Select, move |input| {
        Ok(input
            .into_iter()
            .map(|record| {
                let mut projected = Record::new();
                for field in &fields {
                    if let Some(value) = record.get(field) {
                        projected.insert(field.clone(), value.clone());
                    }
                }
                projected
            })
            .collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowsift_core::prelude::Record;

    #[test]
    fn absent_fields_are_omitted() {
        let input = vec![Record::new().with("a", 1).with("c", 3)];
        let out = select(["a", "b"]).apply(input).expect("select");
        assert_eq!(out, vec![Record::new().with("a", 1)]);
    }

    #[test]
    fn empty_field_list_yields_empty_records() {
        let input = vec![Record::new().with("a", 1)];
        let out = select(Vec::<String>::new()).apply(input).expect("select");
        assert_eq!(out, vec![Record::new()]);
    }
}
