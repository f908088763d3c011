//! Quoted-number coercion.
//!
//! Clients that cannot hold 64-bit integers exactly send them as strings;
//! these are turned back into JSON numbers here. The field's current value
//! decides the target: floats parse as `f64`, everything else as an integer.

use serde_json::Number;

pub(crate) fn parse_number(text: &str, current: &Number) -> Option<Number> {
    if current.is_f64() {
        return parse_float(text);
    }
    parse_i64(text)
        .map(Number::from)
        .or_else(|| parse_u64(text).map(Number::from))
}

/// Finite floats only; `"NaN"` and `"inf"` have no JSON form.
pub(crate) fn parse_float(text: &str) -> Option<Number> {
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

#[cfg(feature = "perf_lexical")]
fn parse_i64(text: &str) -> Option<i64> {
    lexical_core::parse::<i64>(text.as_bytes()).ok()
}

#[cfg(not(feature = "perf_lexical"))]
fn parse_i64(text: &str) -> Option<i64> {
    text.parse().ok()
}

#[cfg(feature = "perf_lexical")]
fn parse_u64(text: &str) -> Option<u64> {
    lexical_core::parse::<u64>(text.as_bytes()).ok()
}

#[cfg(not(feature = "perf_lexical"))]
fn parse_u64(text: &str) -> Option<u64> {
    text.parse().ok()
}
