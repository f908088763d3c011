//! Field paths for error messages, e.g. `values[1].test_id`.

use core::fmt;

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Root,
    Key(&'a str),
    Index(usize),
}

/// A path kept on the stack while recursing; rendered only when an error needs it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldPath<'a> {
    parent: Option<&'a FieldPath<'a>>,
    segment: Segment<'a>,
}

impl<'a> FieldPath<'a> {
    pub(crate) const fn root() -> Self {
        Self {
            parent: None,
            segment: Segment::Root,
        }
    }

    pub(crate) fn key(&'a self, key: &'a str) -> FieldPath<'a> {
        FieldPath {
            parent: Some(self),
            segment: Segment::Key(key),
        }
    }

    pub(crate) fn index(&'a self, index: usize) -> FieldPath<'a> {
        FieldPath {
            parent: Some(self),
            segment: Segment::Index(index),
        }
    }
}

impl fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = Vec::new();
        let mut cur = Some(self);
        while let Some(p) = cur {
            segments.push(p.segment);
            cur = p.parent;
        }
        let mut wrote = false;
        for segment in segments.iter().rev() {
            match segment {
                Segment::Root => {}
                Segment::Key(key) => {
                    if wrote {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                    wrote = true;
                }
                Segment::Index(i) => {
                    write!(f, "[{}]", i)?;
                    wrote = true;
                }
            }
        }
        if !wrote {
            f.write_str("$")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_keys_and_indices() {
        let root = FieldPath::root();
        assert_eq!(root.to_string(), "$");

        let values = root.key("values");
        let first = values.index(1);
        let leaf = first.key("test_id");
        assert_eq!(leaf.to_string(), "values[1].test_id");
    }
}
