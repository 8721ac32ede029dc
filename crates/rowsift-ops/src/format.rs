//! Per-field value formatting.

use rowsift_core::prelude::{OpKind, Value};

use crate::transform::Transform;

/// Replace `field`'s value with `formatter(value)` where the field is present.
///
/// Records missing the field pass through unchanged. The formatter sees the
/// owned value and returns its replacement; it runs once per record per
/// application.
pub fn format<F>(field: impl Into<String>, formatter: F) -> Transform
where
    F: Fn(Value) -> Value + Send + Sync + 'static,
{
    let field = field.into();

    Transform::new(OpKind::Format, move |mut input| {
        for record in &mut input {
            if let Some(value) = record.remove(&field) {
                record.insert(field.clone(), formatter(value));
            }
        }
        Ok(input)
    })
}
