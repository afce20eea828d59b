//! Static descriptions of field types, and their classification into codec dispatch classes.

use crate::error::SchemaError;
use crate::schema::{Record, ensure_compiled};
use std::any::TypeId;
use std::fmt;

/// The static type tree of a field's declared Rust type.
///
/// Produced by [`crate::FieldValue::shape`]. A `Shape` is only inspected while a schema is being
/// compiled, never on the encode/decode path.
#[derive(Clone)]
pub enum Shape {
    /// A value that is converted as a whole, without looking inside.
    Scalar(&'static str),
    Record(RecordShape),
    Optional(Box<Shape>),
    Sequence(Box<Shape>),
    Set(Box<Shape>),
    /// A string-keyed map.
    Mapping(Box<Shape>),
}

impl Shape {
    pub fn scalar(ty: &'static str) -> Self {
        Self::Scalar(ty)
    }

    pub fn record<R: Record>() -> Self {
        Self::Record(RecordShape::of::<R>())
    }

    pub fn optional(inner: Shape) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn sequence(inner: Shape) -> Self {
        Self::Sequence(Box::new(inner))
    }

    pub fn set(inner: Shape) -> Self {
        Self::Set(Box::new(inner))
    }

    pub fn mapping(inner: Shape) -> Self {
        Self::Mapping(Box::new(inner))
    }

    fn kind(&self) -> &'static str {
        match self {
            Shape::Scalar(ty) => *ty,
            Shape::Record(r) => r.name,
            Shape::Optional(_) => "optional",
            Shape::Sequence(_) => "sequence",
            Shape::Set(_) => "set",
            Shape::Mapping(_) => "mapping",
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(ty) => write!(f, "{ty}"),
            Shape::Record(r) => write!(f, "{}", r.name),
            Shape::Optional(inner) => write!(f, "optional<{inner:?}>"),
            Shape::Sequence(inner) => write!(f, "sequence<{inner:?}>"),
            Shape::Set(inner) => write!(f, "set<{inner:?}>"),
            Shape::Mapping(inner) => write!(f, "mapping<string,{inner:?}>"),
        }
    }
}

/// A nested record type, as seen from the field that holds it.
#[derive(Clone)]
pub struct RecordShape {
    name: &'static str,
    type_id: TypeId,
    ensure: fn() -> Result<(), SchemaError>,
}

impl RecordShape {
    pub fn of<R: Record>() -> Self {
        Self {
            name: R::NAME,
            type_id: TypeId::of::<R>(),
            ensure: ensure_compiled::<R>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Compiles the nested record's schema, unless it is already being compiled further up
    /// the stack (a recursive type).
    pub(crate) fn ensure(&self) -> Result<(), SchemaError> {
        (self.ensure)()
    }
}

/// What a container holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Scalar(&'static str),
    Record(&'static str),
}

/// How a field is encoded and decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    Scalar(&'static str),
    Record(&'static str),
    Sequence(Element),
    Set(Element),
    Mapping(Element),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub class: FieldClass,
    pub optional: bool,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            f.write_str("optional<")?;
        }
        let element = |e: &Element| match e {
            Element::Scalar(_) => "scalar",
            Element::Record(_) => "record",
        };
        match &self.class {
            FieldClass::Scalar(_) => f.write_str("scalar")?,
            FieldClass::Record(_) => f.write_str("record")?,
            FieldClass::Sequence(e) => write!(f, "sequence<{}>", element(e))?,
            FieldClass::Set(e) => write!(f, "set<{}>", element(e))?,
            FieldClass::Mapping(e) => write!(f, "mapping<string,{}>", element(e))?,
        }
        if self.optional {
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Classifies the declared type of `record.field`.
///
/// Nested record types are compiled as a side effect, so that a malformed nested type is
/// reported when its parent is compiled.
pub fn classify(
    record: &'static str,
    field: &'static str,
    shape: &Shape,
) -> Result<Classification, SchemaError> {
    let unsupported = |reason| SchemaError::UnsupportedType {
        record,
        field,
        ty: shape.kind(),
        reason,
    };

    let (shape, optional) = match shape {
        Shape::Optional(inner) => (&**inner, true),
        other => (other, false),
    };

    let element = |inner: &Shape| -> Result<Element, SchemaError> {
        match inner {
            Shape::Scalar(ty) => Ok(Element::Scalar(*ty)),
            Shape::Record(r) => {
                r.ensure()?;
                Ok(Element::Record(r.name))
            }
            Shape::Optional(_) => Err(unsupported("container of optional values")),
            Shape::Sequence(_) | Shape::Set(_) | Shape::Mapping(_) => {
                Err(unsupported("container of containers"))
            }
        }
    };

    let class = match shape {
        Shape::Scalar(ty) => FieldClass::Scalar(*ty),
        Shape::Record(r) => {
            r.ensure()?;
            FieldClass::Record(r.name)
        }
        Shape::Sequence(inner) => FieldClass::Sequence(element(inner)?),
        Shape::Set(inner) => FieldClass::Set(element(inner)?),
        Shape::Mapping(inner) => FieldClass::Mapping(element(inner)?),
        Shape::Optional(_) => return Err(unsupported("optional of an optional")),
    };

    Ok(Classification { class, optional })
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn class_of(shape: Shape) -> String {
        classify("Owner", "field", &shape)
            .map(|c| c.to_string())
            .unwrap_or_else(|e| e.to_string())
    }

    #[test]
    fn scalars_and_containers() {
        assert_eq!(class_of(Shape::scalar("u64")), "scalar");
        assert_eq!(
            class_of(Shape::optional(Shape::scalar("String"))),
            "optional<scalar>"
        );
        assert_eq!(
            class_of(Shape::sequence(Shape::scalar("String"))),
            "sequence<scalar>"
        );
        assert_eq!(class_of(Shape::set(Shape::scalar("i32"))), "set<scalar>");
        assert_eq!(
            class_of(Shape::optional(Shape::mapping(Shape::scalar("String")))),
            "optional<mapping<string,scalar>>"
        );
    }

    #[test]
    fn nested_optional_is_rejected() {
        let shape = Shape::optional(Shape::optional(Shape::scalar("bool")));
        assert_snapshot!(class_of(shape), @"field `Owner.field` has unsupported type `optional`: optional of an optional");
    }

    #[test]
    fn container_of_containers_is_rejected() {
        let shape = Shape::sequence(Shape::mapping(Shape::scalar("String")));
        assert_snapshot!(class_of(shape), @"field `Owner.field` has unsupported type `sequence`: container of containers");
    }

    #[test]
    fn container_of_optionals_is_rejected() {
        let shape = Shape::optional(Shape::set(Shape::optional(Shape::scalar("u32"))));
        assert_snapshot!(class_of(shape), @"field `Owner.field` has unsupported type `optional`: container of optional values");
    }

    #[test]
    fn shapes_print_their_tree() {
        let shape = Shape::optional(Shape::mapping(Shape::sequence(Shape::scalar("f64"))));
        assert_eq!(
            format!("{shape:?}"),
            "optional<mapping<string,sequence<f64>>>"
        );
    }
}
