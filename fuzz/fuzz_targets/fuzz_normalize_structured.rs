#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use fitjson::{Options, SchemaRecord};
use serde_json::{Map, Number, Value};
use arbitrary::Arbitrary;

const MAX_DEPTH: usize = 5;
const MAX_ARRAY_SIZE: usize = 8;
const MAX_OBJECT_SIZE: usize = 8;
const KEYS: &[&str] = &["test_id", "TestId", "name", "json_name", "ints", "child", "values", "num", "Num"];

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_json_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 8 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Number(Number::from(u.arbitrary::<i64>()?)),
            3 => Value::String(u.arbitrary::<i64>()?.to_string()),
            4 => Value::String(u.arbitrary()?),
            5 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_json_value(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut obj = Map::new();
                for _ in 0..size {
                    let key = *u.choose(KEYS)?;
                    let fv: FuzzValue = u.arbitrary()?;
                    obj.insert(key.to_string(), fv.to_json_value(u, depth + 1)?);
                }
                Value::Object(obj)
            }
        })
    }
}

const SCHEMA: &str = r#"{"fields": [
    {"identifier": "TestId", "kind": "number", "value": 1},
    {"identifier": "Name", "wire": "name", "text": "json_name", "kind": "scalar", "value": "x"},
    {"identifier": "Ints", "kind": "scalar_list", "value": [1, 2]},
    {"identifier": "Child", "kind": "record", "value": {"fields": [
        {"identifier": "Num", "kind": "number", "value": 3}
    ]}},
    {"identifier": "Values", "kind": "record_list", "value": [
        {"fields": [{"identifier": "Num", "kind": "number"}]},
        {"fields": [{"identifier": "Num", "kind": "number"}]}
    ]}
]}"#;

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    let Ok(root) = u.arbitrary::<FuzzValue>() else { return };
    let Ok(input) = root.to_json_value(&mut u, 0) else { return };

    let schema: SchemaRecord = SCHEMA.parse().expect("fixed schema");
    let Ok(out) = fitjson::normalize_value(&schema, &input, &Options::default()) else {
        return;
    };
    let obj = out.as_object().expect("normalized output is an object");
    assert_eq!(obj.len(), schema.fields.len());
    let values = obj.get("values").or_else(|| obj.get("Values")).expect("values present");
    assert_eq!(values.as_array().map(Vec::len), Some(2));
});
