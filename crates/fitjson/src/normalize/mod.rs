//! The recursive merge of an input object onto a record's shape.
//!
//! Every field of the record is emitted exactly once. A field found in the
//! input takes the input's value (numbers un-quoted, nested records merged);
//! a field missing from the input takes the record's current value. Nested
//! records and record lists recurse even when the input has nothing for them,
//! so that their fields still get the right keys and defaults.

mod coerce;
mod resolve;

use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::path::FieldPath;
use crate::record::{FieldValue, Record};

/// Normalize `record` against `input`. A missing input object behaves like `{}`.
pub(crate) fn normalize_record<R: Record + ?Sized>(
    record: &R,
    input: Option<&Map<String, Value>>,
    options: &Options,
    path: &FieldPath<'_>,
) -> Result<Map<String, Value>> {
    let fields = record.fields();
    let mut out = Map::with_capacity(fields.len());
    for field in &fields {
        let resolved = resolve::resolve(field.identifier, &field.tags, input, options);
        let value = {
            let field_path = path.key(&resolved.write_key);
            merge_field(&field.value, resolved.input, options, &field_path)?
        };
        trace!(
            field = field.identifier,
            key = %resolved.write_key,
            matched = resolved.input.is_some(),
            "normalized field"
        );
        out.insert(resolved.write_key.into_owned(), value);
    }
    Ok(out)
}

fn merge_field(
    current: &FieldValue<'_>,
    input: Option<&Value>,
    options: &Options,
    path: &FieldPath<'_>,
) -> Result<Value> {
    match current {
        FieldValue::Number(n) => match input {
            None => Ok(Value::Number(n.clone())),
            Some(Value::String(s)) if options.coerce_numbers => coerce::parse_number(s, n)
                .map(Value::Number)
                .ok_or_else(|| Error::NumericCoercion {
                    path: path.to_string(),
                    value: s.clone(),
                }),
            Some(other) => Ok(other.clone()),
        },
        FieldValue::Float(x) => match input {
            None => Ok(Number::from_f64(*x).map_or(Value::Null, Value::Number)),
            Some(Value::String(s)) if options.coerce_numbers => coerce::parse_float(s)
                .map(Value::Number)
                .ok_or_else(|| Error::NumericCoercion {
                    path: path.to_string(),
                    value: s.clone(),
                }),
            Some(other) => Ok(other.clone()),
        },
        FieldValue::Scalar(v) => Ok(input.unwrap_or(v).clone()),
        FieldValue::Record(None) => Ok(Value::Null),
        FieldValue::Record(Some(nested)) => {
            normalize_record(*nested, input.and_then(Value::as_object), options, path)
                .map(Value::Object)
        }
        // The in-memory list wins whenever the key is present; elements are not coerced.
        FieldValue::ScalarList(items) => Ok(Value::Array(items.clone())),
        FieldValue::RecordList(items) => {
            let input_items = input.and_then(Value::as_array);
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = path.index(i);
                let merged = match item {
                    None => Value::Null,
                    Some(element) => {
                        let element_input = input_items
                            .and_then(|a| a.get(i))
                            .and_then(Value::as_object);
                        Value::Object(normalize_record(
                            *element,
                            element_input,
                            options,
                            &item_path,
                        )?)
                    }
                };
                out.push(merged);
            }
            Ok(Value::Array(out))
        }
        FieldValue::Unsupported(kind) => Err(Error::UnsupportedKind {
            path: path.to_string(),
            kind: (*kind).to_string(),
        }),
    }
}
