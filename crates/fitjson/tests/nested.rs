use fitjson::{FieldDescriptor, Options, Record, Tags};
use serde_json::json;

struct Args;

impl Record for Args {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        Vec::new()
    }
}

struct NestedValue {
    ptr_value: Option<Args>,
}

impl Record for NestedValue {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![FieldDescriptor::record("PtrValue", self.ptr_value.as_ref())]
    }
}

struct NestedStruct {
    test_id: i64,
    nested_value: Option<NestedValue>,
}

impl Record for NestedStruct {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::number("TestId", self.test_id),
            FieldDescriptor::record("NestedValue", self.nested_value.as_ref()),
        ]
    }
}

#[test]
fn absent_nested_record() -> Result<(), Box<dyn std::error::Error>> {
    let s = NestedStruct {
        test_id: 123,
        nested_value: None,
    };
    let out = fitjson::normalize_value(&s, &json!({"test_id": "123"}), &Options::default())?;
    assert_eq!(out, json!({"test_id": 123, "NestedValue": null}));
    Ok(())
}

#[test]
fn present_nested_record_with_empty_input() -> Result<(), Box<dyn std::error::Error>> {
    let s = NestedStruct {
        test_id: 123,
        nested_value: Some(NestedValue { ptr_value: None }),
    };
    let out = fitjson::normalize_value(
        &s,
        &json!({"test_id": "123", "nested_value": {}}),
        &Options::default(),
    )?;
    assert_eq!(out, json!({"test_id": 123, "nested_value": {"PtrValue": null}}));
    Ok(())
}

#[test]
fn present_nested_record_with_scalar_input() -> Result<(), Box<dyn std::error::Error>> {
    let s = NestedStruct {
        test_id: 1,
        nested_value: Some(NestedValue {
            ptr_value: Some(Args),
        }),
    };
    let out = fitjson::normalize_value(&s, &json!({"nested_value": 5}), &Options::default())?;
    assert_eq!(out, json!({"TestId": 1, "nested_value": {"PtrValue": {}}}));
    Ok(())
}

struct SomeArgs;

impl Record for SomeArgs {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        Vec::new()
    }
}

#[derive(Default)]
struct ChildValue {
    test_id: i64,
    string_value: String,
    int_array: Vec<i64>,
    args: Option<SomeArgs>,
}

impl Record for ChildValue {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::number("TestId", self.test_id),
            FieldDescriptor::scalar("StringValue", self.string_value.as_str()),
            FieldDescriptor::scalar_list("IntArray", self.int_array.iter().copied()),
            FieldDescriptor::record("Args", self.args.as_ref()),
        ]
    }
}

#[derive(Default)]
struct ComplexNestedValue {
    test_id: i64,
    string_value: String,
    int_array: Vec<i64>,
    child_value_arr: Vec<ChildValue>,
    child_value1: Option<ChildValue>,
}

impl Record for ComplexNestedValue {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::number("TestId", self.test_id),
            FieldDescriptor::scalar("StringValue", self.string_value.as_str()),
            FieldDescriptor::scalar_list("IntArray", self.int_array.iter().copied()),
            FieldDescriptor::record_list("ChildValueArr", &self.child_value_arr),
            FieldDescriptor::record("ChildValue1", self.child_value1.as_ref()),
        ]
    }
}

struct ComplexNestedStruct {
    test_id: i64,
    string_value: String,
    int_array: Vec<i64>,
    complex_nested_value: Option<ComplexNestedValue>,
    complex_nested_value1: Option<ComplexNestedValue>,
    complex_nested_value2: Option<ComplexNestedValue>,
}

impl Record for ComplexNestedStruct {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::number("TestId", self.test_id),
            FieldDescriptor::scalar("StringValue", self.string_value.as_str()).tags(
                Tags::from_annotations(
                    Some("varint,1,opt,name=s_value"),
                    Some("json_s_value,omitempty"),
                ),
            ),
            FieldDescriptor::scalar_list("IntArray", self.int_array.iter().copied()).tags(
                Tags::from_annotations(
                    Some("varint,1,opt,name=new_name"),
                    Some("json_new_name,omitempty"),
                ),
            ),
            FieldDescriptor::record("ComplexNestedValue", self.complex_nested_value.as_ref()),
            FieldDescriptor::record("ComplexNestedValue1", self.complex_nested_value1.as_ref())
                .tags(Tags::from_annotations(
                    Some("varint,1,opt,name=c_n_v1"),
                    Some("c_n_v111,omitempty"),
                )),
            FieldDescriptor::record("ComplexNestedValue2", self.complex_nested_value2.as_ref())
                .tags(Tags::from_annotations(
                    Some("varint,1,opt"),
                    Some("c_n_v2,omitempty"),
                )),
        ]
    }
}

#[test]
fn complex_nested_struct_with_tags() -> Result<(), Box<dyn std::error::Error>> {
    let cv = ChildValue {
        test_id: 123,
        string_value: "a string".into(),
        ..Default::default()
    };
    let cv1 = ChildValue {
        test_id: 456,
        args: Some(SomeArgs),
        ..Default::default()
    };
    let cv2 = ChildValue {
        test_id: 789,
        int_array: vec![44, 55, 66],
        ..Default::default()
    };
    let cnv = ComplexNestedValue {
        test_id: 456,
        int_array: vec![11, 22, 33],
        child_value_arr: vec![cv1, cv2],
        child_value1: Some(cv),
        ..Default::default()
    };
    let s = ComplexNestedStruct {
        test_id: 0,
        string_value: "struct string".into(),
        int_array: vec![],
        complex_nested_value: Some(cnv),
        complex_nested_value1: None,
        complex_nested_value2: None,
    };

    let input = r#"{"s_value":"struct string", "complex_nested_value":{"test_id":"456",
        "int_array":["11","22","33"], "child_value_arr":[{"test_id":"456","args":{}},
        {"test_id":"789","int_array":["44","55","66"]}],
        "child_value1":{"test_id":"123","string_value":"a string"}}}"#;
    let out: serde_json::Value =
        serde_json::from_str(&fitjson::normalize_str(&s, input, &Options::default())?)?;

    assert_eq!(
        out,
        json!({
            "TestId": 0,
            "c_n_v1": null,
            "c_n_v2": null,
            "complex_nested_value": {
                "StringValue": "",
                "child_value1": {
                    "Args": null,
                    "IntArray": [],
                    "string_value": "a string",
                    "test_id": 123
                },
                "child_value_arr": [
                    {
                        "IntArray": [],
                        "StringValue": "",
                        "args": {},
                        "test_id": 456
                    },
                    {
                        "Args": null,
                        "StringValue": "",
                        "int_array": [44, 55, 66],
                        "test_id": 789
                    }
                ],
                "int_array": [11, 22, 33],
                "test_id": 456
            },
            "new_name": [],
            "s_value": "struct string"
        })
    );
    Ok(())
}
