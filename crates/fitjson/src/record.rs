//! Record shapes as seen by the normalizer.
//!
//! A [`Record`] reports its fields in declaration order, each with the name it
//! was declared under, optional external names and its current value. The
//! variant of [`FieldValue`] fixes how the field is normalized.

use core::fmt;

use serde_json::{Number, Value};

use crate::annotation;

/// Anything that can describe its own fields.
pub trait Record {
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        (**self).fields()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Scalar,
    Record,
    ScalarList,
    RecordList,
}

/// External names declared for a field.
///
/// `wire` is the primary convention (a protocol tag), `text` the secondary one
/// (a text-serialization tag). Empty names count as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tags<'a> {
    pub wire: Option<&'a str>,
    pub text: Option<&'a str>,
}

impl<'a> Tags<'a> {
    /// Build tags from raw annotation strings, e.g.
    /// `("varint,1,opt,name=s_value", "json_s_value,omitempty")`.
    pub fn from_annotations(wire_tag: Option<&'a str>, text_tag: Option<&'a str>) -> Self {
        Self {
            wire: wire_tag.and_then(annotation::wire_name),
            text: text_tag.and_then(annotation::text_name),
        }
    }

    pub fn wire_name(&self) -> Option<&'a str> {
        self.wire.filter(|name| !name.is_empty())
    }

    pub fn text_name(&self) -> Option<&'a str> {
        self.text.filter(|name| !name.is_empty())
    }

    /// The name output is written under when one is declared: wire first, then text.
    pub fn declared(&self) -> Option<&'a str> {
        self.wire_name().or_else(|| self.text_name())
    }
}

pub enum FieldValue<'a> {
    Number(Number),
    /// A float field. Values JSON cannot hold (NaN, ±inf) render as `null`,
    /// but the field still coerces quoted input as a float.
    Float(f64),
    /// Strings, booleans and anything else copied through as-is.
    Scalar(Value),
    /// `None` is the absent-record sentinel and renders as `null`.
    Record(Option<&'a dyn Record>),
    ScalarList(Vec<Value>),
    RecordList(Vec<Option<&'a dyn Record>>),
    /// A field whose type maps to no known kind; carries the type name.
    Unsupported(&'a str),
}

impl FieldValue<'_> {
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldValue::Number(_) | FieldValue::Float(_) => Some(FieldKind::Numeric),
            FieldValue::Scalar(_) => Some(FieldKind::Scalar),
            FieldValue::Record(_) => Some(FieldKind::Record),
            FieldValue::ScalarList(_) => Some(FieldKind::ScalarList),
            FieldValue::RecordList(_) => Some(FieldKind::RecordList),
            FieldValue::Unsupported(_) => None,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            FieldValue::Float(x) => f.debug_tuple("Float").field(x).finish(),
            FieldValue::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
            FieldValue::Record(r) => f
                .debug_tuple("Record")
                .field(&r.map(|_| ".."))
                .finish(),
            FieldValue::ScalarList(items) => f.debug_tuple("ScalarList").field(items).finish(),
            FieldValue::RecordList(items) => f
                .debug_tuple("RecordList")
                .field(&items.len())
                .finish(),
            FieldValue::Unsupported(name) => f.debug_tuple("Unsupported").field(name).finish(),
        }
    }
}

#[derive(Debug)]
pub struct FieldDescriptor<'a> {
    /// The field's name exactly as declared, e.g. `TestId`.
    pub identifier: &'a str,
    pub tags: Tags<'a>,
    pub value: FieldValue<'a>,
}

impl<'a> FieldDescriptor<'a> {
    pub fn new(identifier: &'a str, value: FieldValue<'a>) -> Self {
        Self {
            identifier,
            tags: Tags::default(),
            value,
        }
    }

    pub fn number(identifier: &'a str, value: impl Into<Number>) -> Self {
        Self::new(identifier, FieldValue::Number(value.into()))
    }

    pub fn float(identifier: &'a str, value: f64) -> Self {
        Self::new(identifier, FieldValue::Float(value))
    }

    pub fn scalar(identifier: &'a str, value: impl Into<Value>) -> Self {
        Self::new(identifier, FieldValue::Scalar(value.into()))
    }

    pub fn record<R: Record>(identifier: &'a str, value: Option<&'a R>) -> Self {
        Self::new(
            identifier,
            FieldValue::Record(value.map(|r| r as &'a dyn Record)),
        )
    }

    pub fn scalar_list<I>(identifier: &'a str, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::new(
            identifier,
            FieldValue::ScalarList(items.into_iter().map(Into::into).collect()),
        )
    }

    pub fn record_list<R, I>(identifier: &'a str, items: I) -> Self
    where
        R: Record + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        Self::new(
            identifier,
            FieldValue::RecordList(
                items
                    .into_iter()
                    .map(|r| Some(r as &'a dyn Record))
                    .collect(),
            ),
        )
    }

    pub fn optional_record_list<R, I>(identifier: &'a str, items: I) -> Self
    where
        R: Record + 'a,
        I: IntoIterator<Item = Option<&'a R>>,
    {
        Self::new(
            identifier,
            FieldValue::RecordList(
                items
                    .into_iter()
                    .map(|r| r.map(|r| r as &'a dyn Record))
                    .collect(),
            ),
        )
    }

    pub fn unsupported(identifier: &'a str, type_name: &'a str) -> Self {
        Self::new(identifier, FieldValue::Unsupported(type_name))
    }

    pub fn wire(mut self, name: &'a str) -> Self {
        self.tags.wire = Some(name);
        self
    }

    pub fn text(mut self, name: &'a str) -> Self {
        self.tags.text = Some(name);
        self
    }

    pub fn tags(mut self, tags: Tags<'a>) -> Self {
        self.tags = tags;
        self
    }

    pub fn kind(&self) -> Option<FieldKind> {
        self.value.kind()
    }
}
