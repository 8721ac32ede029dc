//! Canonical ordering: the caller-supplied transform order never matters.

use rowsift::{
    execute, filter_in, format, limit, select, sort_by, ApplyOrder, Engine, OpKind, Order, Record,
    Value,
};

fn numbers() -> Vec<Record> {
    (1..=6)
        .map(|i| Record::new().with("n", i).with("parity", i % 2))
        .collect()
}

#[test]
fn filter_always_runs_before_format() {
    let source = numbers();
    let stringify = || {
        format("parity", |v| match v {
            Value::Int(i) => Value::Str(i.to_string()),
            other => other,
        })
    };

    let a = execute(&source, &[stringify(), filter_in("parity", [0])]).expect("execute");
    let b = execute(&source, &[filter_in("parity", [0]), stringify()]).expect("execute");
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
}

#[test]
fn every_permutation_of_a_pipeline_agrees() {
    let source = numbers();
    let build = || {
        vec![
            select(["n"]),
            filter_in("parity", [1]),
            sort_by("n", Order::Desc),
            limit(2),
        ]
    };

    let canonical = execute(&source, &build()).expect("execute");
    assert_eq!(
        canonical,
        vec![Record::new().with("n", 5), Record::new().with("n", 3)]
    );

    // Rotate the transform list; results must not change.
    for rotation in 1..4 {
        let mut transforms = build();
        transforms.rotate_left(rotation);
        let result = execute(&source, &transforms).expect("execute");
        assert_eq!(result, canonical, "rotation {rotation} diverged");
    }
}

#[test]
fn transforms_in_the_same_slot_keep_caller_order() {
    let source = numbers();
    // Two filters share the filter_in slot; either order leaves the same
    // survivors, and the stable sort keeps the caller's sequence.
    let a = execute(
        &source,
        &[filter_in("parity", [0]), filter_in("n", [2, 3, 4])],
    )
    .expect("execute");
    assert_eq!(
        a,
        vec![
            Record::new().with("n", 2).with("parity", 0),
            Record::new().with("n", 4).with("parity", 0),
        ]
    );
}

#[test]
fn engine_accepts_a_substitute_order() {
    let source = numbers();
    // Presentation-first ordering: select strips "parity" before the filter
    // can see it, so nothing survives.
    let engine = Engine::new(ApplyOrder::new(vec![
        OpKind::Select,
        OpKind::FilterIn,
        OpKind::SortBy,
        OpKind::Limit,
        OpKind::Format,
    ]));
    let result = engine
        .execute(&source, &[select(["n"]), filter_in("parity", [0])])
        .expect("execute");
    assert!(result.is_empty());
}

#[test]
fn apply_order_round_trips_through_serde() {
    let order = ApplyOrder::default();
    let json = serde_json::to_string(&order).expect("serialize");
    assert_eq!(
        json,
        r#"{"slots":["filter_in","sort_by","limit","format","select"]}"#
    );
    let back: ApplyOrder = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, order);
}

#[test]
fn records_load_from_json_documents() {
    let doc = serde_json::json!([
        {"name": "Sam", "age": 29},
        {"name": "Alex", "age": 30}
    ]);
    let collection: Vec<Record> = serde_json::from_value(doc).expect("deserialize");
    let result = execute(&collection, &[filter_in("age", [30])]).expect("execute");
    assert_eq!(result, vec![Record::new().with("name", "Alex").with("age", 30)]);
}
