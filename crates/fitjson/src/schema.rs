//! Records described by JSON descriptor files instead of Rust types.
//!
//! ```json
//! {"fields": [
//!   {"identifier": "TestId", "kind": "number", "value": 123},
//!   {"identifier": "Ratio", "kind": "float"},
//!   {"identifier": "Name", "wire": "name", "kind": "scalar", "value": "x"},
//!   {"identifier": "Child", "kind": "record", "value": {"fields": []}},
//!   {"identifier": "Values", "kind": "record_list", "value": [{"fields": []}, null]}
//! ]}
//! ```
//!
//! Unknown kinds load fine and fail when normalized, so that one descriptor
//! file can be shared with tools that know more kinds.

use std::io::Read;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::annotation;
use crate::error::{Error, Result};
use crate::path::FieldPath;
use crate::record::{FieldDescriptor, FieldValue, Record, Tags};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecord {
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    identifier: String,
    kind: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    wire: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    wire_tag: Option<String>,
    #[serde(default)]
    text_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRecord {
    pub fields: Vec<SchemaField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub identifier: String,
    pub wire: Option<String>,
    pub text: Option<String>,
    pub value: SchemaValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaValue {
    Number(Number),
    Float(f64),
    Scalar(Value),
    Record(Option<Box<SchemaRecord>>),
    ScalarList(Vec<Value>),
    RecordList(Vec<Option<SchemaRecord>>),
    Unsupported(String),
}

impl SchemaRecord {
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawRecord = serde_json::from_value(value)?;
        from_raw(raw, &FieldPath::root())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawRecord = serde_json::from_reader(reader)?;
        from_raw(raw, &FieldPath::root())
    }
}

impl FromStr for SchemaRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw: RawRecord = serde_json::from_str(s)?;
        from_raw(raw, &FieldPath::root())
    }
}

impl Record for SchemaRecord {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        self.fields
            .iter()
            .map(|f| {
                let value = match &f.value {
                    SchemaValue::Number(n) => FieldValue::Number(n.clone()),
                    SchemaValue::Float(x) => FieldValue::Float(*x),
                    SchemaValue::Scalar(v) => FieldValue::Scalar(v.clone()),
                    SchemaValue::Record(r) => {
                        FieldValue::Record(r.as_deref().map(|r| r as &dyn Record))
                    }
                    SchemaValue::ScalarList(items) => FieldValue::ScalarList(items.clone()),
                    SchemaValue::RecordList(items) => FieldValue::RecordList(
                        items
                            .iter()
                            .map(|r| r.as_ref().map(|r| r as &dyn Record))
                            .collect(),
                    ),
                    SchemaValue::Unsupported(kind) => FieldValue::Unsupported(kind.as_str()),
                };
                FieldDescriptor::new(&f.identifier, value).tags(Tags {
                    wire: f.wire.as_deref(),
                    text: f.text.as_deref(),
                })
            })
            .collect()
    }
}

fn schema_error(path: &FieldPath<'_>, message: impl Into<String>) -> Error {
    Error::Schema {
        path: path.to_string(),
        message: message.into(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn from_raw(raw: RawRecord, path: &FieldPath<'_>) -> Result<SchemaRecord> {
    let mut fields = Vec::with_capacity(raw.fields.len());
    for field in raw.fields {
        let RawField {
            identifier,
            kind,
            value,
            wire,
            text,
            wire_tag,
            text_tag,
        } = field;
        let value = {
            let field_path = path.key(&identifier);
            value_from_raw(&kind, value, &field_path)?
        };
        let wire = wire.or_else(|| {
            wire_tag
                .as_deref()
                .and_then(annotation::wire_name)
                .map(str::to_owned)
        });
        let text = text.or_else(|| {
            text_tag
                .as_deref()
                .and_then(annotation::text_name)
                .map(str::to_owned)
        });
        fields.push(SchemaField {
            identifier,
            wire,
            text,
            value,
        });
    }
    Ok(SchemaRecord { fields })
}

fn value_from_raw(kind: &str, value: Value, path: &FieldPath<'_>) -> Result<SchemaValue> {
    match kind {
        "number" => match value {
            Value::Null => Ok(SchemaValue::Number(Number::from(0))),
            Value::Number(n) => Ok(SchemaValue::Number(n)),
            other => Err(schema_error(
                path,
                format!("kind `number` needs a number value, found {}", type_name(&other)),
            )),
        },
        "float" => match value {
            Value::Null => Ok(SchemaValue::Float(0.0)),
            Value::Number(n) => match n.as_f64() {
                Some(x) => Ok(SchemaValue::Float(x)),
                None => Err(schema_error(path, format!("kind `float` cannot hold {}", n))),
            },
            other => Err(schema_error(
                path,
                format!("kind `float` needs a number value, found {}", type_name(&other)),
            )),
        },
        "scalar" => match value {
            Value::Array(_) | Value::Object(_) => Err(schema_error(
                path,
                format!("kind `scalar` needs a plain value, found {}", type_name(&value)),
            )),
            v => Ok(SchemaValue::Scalar(v)),
        },
        "record" => match value {
            Value::Null => Ok(SchemaValue::Record(None)),
            v @ Value::Object(_) => {
                let raw: RawRecord =
                    serde_json::from_value(v).map_err(|e| schema_error(path, e.to_string()))?;
                Ok(SchemaValue::Record(Some(Box::new(from_raw(raw, path)?))))
            }
            other => Err(schema_error(
                path,
                format!("kind `record` needs an object or null, found {}", type_name(&other)),
            )),
        },
        "scalar_list" => match value {
            Value::Null => Ok(SchemaValue::ScalarList(Vec::new())),
            Value::Array(items) => {
                if let Some(bad) = items
                    .iter()
                    .find(|v| matches!(v, Value::Array(_) | Value::Object(_)))
                {
                    return Err(schema_error(
                        path,
                        format!("kind `scalar_list` cannot hold {} elements", type_name(bad)),
                    ));
                }
                Ok(SchemaValue::ScalarList(items))
            }
            other => Err(schema_error(
                path,
                format!("kind `scalar_list` needs an array, found {}", type_name(&other)),
            )),
        },
        "record_list" => match value {
            Value::Null => Ok(SchemaValue::RecordList(Vec::new())),
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (i, item) in items.into_iter().enumerate() {
                    let item_path = path.index(i);
                    match item {
                        Value::Null => records.push(None),
                        v @ Value::Object(_) => {
                            let raw: RawRecord = serde_json::from_value(v)
                                .map_err(|e| schema_error(&item_path, e.to_string()))?;
                            records.push(Some(from_raw(raw, &item_path)?));
                        }
                        other => {
                            return Err(schema_error(
                                &item_path,
                                format!(
                                    "kind `record_list` needs objects or null, found {}",
                                    type_name(&other)
                                ),
                            ));
                        }
                    }
                }
                Ok(SchemaValue::RecordList(records))
            }
            other => Err(schema_error(
                path,
                format!("kind `record_list` needs an array, found {}", type_name(&other)),
            )),
        },
        other => Ok(SchemaValue::Unsupported(other.to_owned())),
    }
}
