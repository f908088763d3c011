use fitjson::{FieldDescriptor, Options, Record};
use proptest::prelude::*;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Child {
    num: i64,
}

impl Record for Child {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![FieldDescriptor::number("Num", self.num)]
    }
}

#[derive(Debug, Clone)]
struct Parent {
    test_id: i64,
    label: String,
    ints: Vec<i64>,
    child: Option<Child>,
    values: Vec<Child>,
}

impl Record for Parent {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::number("TestId", self.test_id),
            FieldDescriptor::scalar("Label", self.label.as_str()).wire("lbl"),
            FieldDescriptor::scalar_list("Ints", self.ints.iter().copied()),
            FieldDescriptor::record("Child", self.child.as_ref()),
            FieldDescriptor::record_list("Values", &self.values),
        ]
    }
}

const KEY_SETS: [&[&str]; 5] = [
    &["TestId", "test_id"],
    &["lbl"],
    &["Ints", "ints"],
    &["Child", "child"],
    &["Values", "values"],
];

fn child_strategy() -> impl Strategy<Value = Child> {
    any::<i64>().prop_map(|num| Child { num })
}

fn parent_strategy() -> impl Strategy<Value = Parent> {
    (
        any::<i64>(),
        "[a-z]{0,8}",
        prop::collection::vec(any::<i64>(), 0..4),
        prop::option::of(child_strategy()),
        prop::collection::vec(child_strategy(), 0..6),
    )
        .prop_map(|(test_id, label, ints, child, values)| Parent {
            test_id,
            label,
            ints,
            child,
            values,
        })
}

// Values that never trip numeric coercion.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::from(n.to_string())),
    ]
}

fn element_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        leaf_strategy(),
        prop::collection::btree_map(
            prop_oneof![Just("num".to_string()), Just("Num".to_string())],
            leaf_strategy(),
            0..2,
        )
        .prop_map(|m| Value::Object(m.into_iter().collect())),
    ]
}

fn input_strategy() -> impl Strategy<Value = Value> {
    let keys = prop_oneof![
        Just("test_id"),
        Just("TestId"),
        Just("ints"),
        Just("child"),
        Just("values"),
        Just("unrelated"),
    ]
    .prop_map(str::to_string);
    let value = prop_oneof![
        leaf_strategy(),
        element_strategy(),
        prop::collection::vec(element_strategy(), 0..10).prop_map(Value::Array),
    ];
    prop::collection::btree_map(keys, value, 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

proptest! {
    #[test]
    fn every_field_appears_once(parent in parent_strategy(), input in input_strategy()) {
        let out = fitjson::normalize_value(&parent, &input, &Options::default()).unwrap();
        let obj = out.as_object().unwrap();
        prop_assert_eq!(obj.len(), KEY_SETS.len());
        for keys in KEY_SETS {
            prop_assert_eq!(keys.iter().filter(|k| obj.contains_key(**k)).count(), 1);
        }
    }

    #[test]
    fn record_lists_keep_their_length(parent in parent_strategy(), input in input_strategy()) {
        let out = fitjson::normalize_value(&parent, &input, &Options::default()).unwrap();
        let list = out.get("values").or_else(|| out.get("Values")).unwrap();
        prop_assert_eq!(list.as_array().unwrap().len(), parent.values.len());
    }

    #[test]
    fn scalar_lists_are_the_current_list(parent in parent_strategy(), input in input_strategy()) {
        let out = fitjson::normalize_value(&parent, &input, &Options::default()).unwrap();
        let list = out.get("ints").or_else(|| out.get("Ints")).unwrap();
        prop_assert_eq!(list, &json!(parent.ints));
    }

    #[test]
    fn normalizing_is_idempotent(parent in parent_strategy(), input in input_strategy()) {
        let once = fitjson::normalize_value(&parent, &input, &Options::default()).unwrap();
        let twice = fitjson::normalize_value(&parent, &once, &Options::default()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
