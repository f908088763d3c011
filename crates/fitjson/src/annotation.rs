//! Declared-name extraction from raw annotation strings.

/// Name from a wire-protocol tag: the `name=` option, e.g.
/// `varint,1,opt,name=test_name_proto` -> `test_name_proto`.
pub fn wire_name(tag: &str) -> Option<&str> {
    tag.split(',')
        .find_map(|option| option.trim().strip_prefix("name="))
        .filter(|name| !name.is_empty())
}

/// Name from a text-serialization tag: the first segment, e.g.
/// `test_name_json,omitempty` -> `test_name_json`. A bare `-` means no name.
pub fn text_name(tag: &str) -> Option<&str> {
    if tag == "-" {
        return None;
    }
    let name = tag.split(',').next()?.trim();
    (!name.is_empty()).then_some(name)
}
