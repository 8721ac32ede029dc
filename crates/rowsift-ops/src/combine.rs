//! Boolean set-combinators over sub-filters.
//!
//! Both combinators run every part against the *same* collection the combined
//! transform receives, then keep records of that collection by membership in
//! the part results. Output order is always the input order, so the union is
//! de-duplicated for free: each input record is kept at most once.

use rowsift_core::prelude::{Collection, OpKind, Record, Result};

use crate::transform::Transform;

/// Set union: keep records matched by at least one part.
///
/// Each part is applied to the original input of the combined transform, not
/// to another part's output. Membership is record value equality. An empty
/// part list is the neutral "matches nothing": the result is empty.
pub fn or(parts: Vec<Transform>) -> Transform {
    Transform::new(OpKind::Or, move |input| {
        let kept = membership(&parts, &input, |prev, hit| prev || hit, false)?;
        Ok(retain_marked(input, &kept))
    })
}

/// Set intersection: keep records matched by every part.
///
/// Order of the combined transform's input is preserved. An empty part list
/// is the neutral "matches everything": the input passes through.
pub fn and(parts: Vec<Transform>) -> Transform {
    Transform::new(OpKind::And, move |input| {
        let kept = membership(&parts, &input, |prev, hit| prev && hit, true)?;
        Ok(retain_marked(input, &kept))
    })
}

/// Apply each part to a copy of `input` and fold per-record membership flags.
///
/// Part errors (e.g. an invalid limit nested inside a combinator) propagate
/// unmodified.
fn membership(
    parts: &[Transform],
    input: &[Record],
    fold: impl Fn(bool, bool) -> bool,
    init: bool,
) -> Result<Vec<bool>> {
    let mut kept = vec![init; input.len()];
    for part in parts {
        let matched = part.apply(input.to_vec())?;
        for (flag, record) in kept.iter_mut().zip(input) {
            let hit = matched.iter().any(|m| m == record);
            *flag = fold(*flag, hit);
        }
    }
    Ok(kept)
}

fn retain_marked(input: Collection, kept: &[bool]) -> Collection {
    input
        .into_iter()
        .zip(kept)
        .filter(|(_, keep)| **keep)
        .map(|(record, _)| record)
        .collect()
}
