#![no_main]
use libfuzzer_sys::fuzz_target;
use fitjson::{Options, SchemaRecord};

const SCHEMA: &str = r#"{"fields": [
    {"identifier": "TestId", "kind": "number", "value": 1},
    {"identifier": "Ratio", "kind": "number", "value": 0.5},
    {"identifier": "Name", "wire": "name", "text": "json_name", "kind": "scalar", "value": "x"},
    {"identifier": "Ints", "kind": "scalar_list", "value": [1, 2]},
    {"identifier": "Child", "kind": "record", "value": {"fields": [
        {"identifier": "Num", "kind": "number", "value": 3}
    ]}},
    {"identifier": "Values", "kind": "record_list", "value": [
        {"fields": [{"identifier": "Num", "kind": "number"}]},
        null
    ]}
]}"#;

fuzz_target!(|data: &[u8]| {
    let schema: SchemaRecord = SCHEMA.parse().expect("fixed schema");
    let Ok(out) = fitjson::normalize_slice(&schema, data, &Options::default()) else {
        return;
    };
    // Normalized output is a fixed point.
    let again = fitjson::normalize_slice(&schema, &out, &Options::default())
        .expect("normalized output must normalize");
    assert_eq!(out, again);
});
