//! Which input key a field reads from, and which key it is written under.
//!
//! Reads try, in order: the wire name, the text name, then the snake_case
//! folding of the identifier. Writes use the declared name when there is one;
//! otherwise the folded name if that is what matched, else the bare identifier.

use std::borrow::Cow;

use heck::ToSnakeCase;
use serde_json::{Map, Value};

use crate::options::Options;
use crate::record::Tags;

#[derive(Debug)]
pub(crate) struct Resolution<'a, 'i> {
    pub(crate) input: Option<&'i Value>,
    pub(crate) write_key: Cow<'a, str>,
}

pub(crate) fn fold_identifier(identifier: &str) -> String {
    identifier.to_snake_case()
}

pub(crate) fn resolve<'a, 'i>(
    identifier: &'a str,
    tags: &Tags<'a>,
    input: Option<&'i Map<String, Value>>,
    options: &Options,
) -> Resolution<'a, 'i> {
    let declared = tags.declared();
    let lookup = |key: &str| input.and_then(|m| m.get(key));

    for name in [tags.wire_name(), tags.text_name()].into_iter().flatten() {
        if let Some(value) = lookup(name) {
            return Resolution {
                input: Some(value),
                write_key: Cow::Borrowed(declared.unwrap_or(name)),
            };
        }
    }

    if options.fold_names {
        let folded = fold_identifier(identifier);
        if let Some(value) = lookup(folded.as_str()) {
            return Resolution {
                input: Some(value),
                write_key: match declared {
                    Some(name) => Cow::Borrowed(name),
                    None => Cow::Owned(folded),
                },
            };
        }
    }

    Resolution {
        input: None,
        write_key: Cow::Borrowed(declared.unwrap_or(identifier)),
    }
}
