#![doc = include_str!("../README.md")]

pub mod annotation;
pub mod error;
pub mod options;
pub mod record;
pub mod schema;

mod normalize;
mod path;

pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::record::{FieldDescriptor, FieldKind, FieldValue, Record, Tags};
pub use crate::schema::{SchemaField, SchemaRecord, SchemaValue};

use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::path::FieldPath;

/// Normalize a parsed document against `record`.
///
/// The result has exactly the record's fields. A document that is not an
/// object contributes nothing, as if it were `{}`.
pub fn normalize_value<R: Record + ?Sized>(
    record: &R,
    input: &Value,
    options: &Options,
) -> Result<Value> {
    let object = input.as_object();
    debug!(
        input_keys = object.map_or(0, |m| m.len()),
        object = object.is_some(),
        "normalizing document"
    );
    normalize::normalize_record(record, object, options, &FieldPath::root()).map(Value::Object)
}

pub fn normalize_str<R: Record + ?Sized>(record: &R, s: &str, options: &Options) -> Result<String> {
    let input: Value = serde_json::from_str(s)?;
    let out = normalize_value(record, &input, options)?;
    Ok(serde_json::to_string(&out)?)
}

pub fn normalize_slice<R: Record + ?Sized>(
    record: &R,
    bytes: &[u8],
    options: &Options,
) -> Result<Vec<u8>> {
    let input: Value = serde_json::from_slice(bytes)?;
    let out = normalize_value(record, &input, options)?;
    Ok(serde_json::to_vec(&out)?)
}

pub fn normalize_reader<R: Record + ?Sized, Rd: Read>(
    record: &R,
    reader: Rd,
    options: &Options,
) -> Result<Value> {
    let input: Value = serde_json::from_reader(reader)?;
    normalize_value(record, &input, options)
}

/// The record's current state in normalized form.
pub fn to_value<R: Record + ?Sized>(record: &R) -> Result<Value> {
    normalize::normalize_record(record, None, &Options::default(), &FieldPath::root())
        .map(Value::Object)
}

pub fn to_string<R: Record + ?Sized>(record: &R) -> Result<String> {
    let v = to_value(record)?;
    Ok(serde_json::to_string(&v)?)
}

/// Normalize `s` against `current`, then decode the result with serde.
pub fn decode<T: Record + DeserializeOwned>(current: &T, s: &str, options: &Options) -> Result<T> {
    let input: Value = serde_json::from_str(s)?;
    let v = normalize_value(current, &input, options)?;
    let t = serde_json::from_value(v)?;
    Ok(t)
}
