/// Declares a record type: the struct, its [`Record`](crate::Record) impl, and its
/// [`FieldValue`](crate::FieldValue) impl, so it can be nested in other records.
///
/// Each field is written `name: Type`, optionally followed by `as "wireName"` when the key in
/// encoded maps differs from the Rust name, and by `= expr` to give it a default. Ancestors go
/// in an `extends { field: Type, ... }` clause; each is stored in a field of that name, and its
/// schema fields become fields of the declared type unless the type declares a field with the
/// same wire name itself.
///
/// ```
/// use ytdata_codec::{Record, record};
///
/// record! {
///     pub struct Resource {
///         pub kind: Option<String>,
///         pub id: String,
///     }
/// }
///
/// record! {
///     pub struct Playlist extends { base: Resource } {
///         pub kind: String = "youtube#playlist".to_string(),
///         pub item_count: u32 as "itemCount" = 0,
///     }
/// }
///
/// let map = serde_json::json!({"id": "PL1", "itemCount": "12"});
/// let playlist = Playlist::decode(map.as_object().unwrap()).unwrap();
/// assert_eq!(playlist.base.id, "PL1");
/// assert_eq!(playlist.kind, "youtube#playlist");
/// assert_eq!(playlist.item_count, 12);
///
/// let names: Vec<_> = Playlist::schema().unwrap().field_names().collect();
/// assert_eq!(names, ["kind", "itemCount", "id"]);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident
        $(extends { $($(#[$bmeta:meta])* $base:ident: $bty:ty),+ $(,)? })?
        {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident: $fty:ty $(as $wire:literal)? $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $($(
                $(#[$bmeta])*
                pub $base: $bty,
            )+)?
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($($base: ::core::default::Default::default(),)+)?
                    $($field: $crate::__record_default!($fty $(, $default)?),)*
                }
            }
        }

        impl $crate::Record for $name {
            const NAME: &'static str = ::core::stringify!($name);

            #[allow(unused_variables)]
            fn describe(schema: &mut $crate::SchemaBuilder<Self>) {
                $(
                    schema.field::<$fty>(
                        $crate::__record_wire_name!($field $(, $wire)?),
                        |r| &r.$field,
                        |r| &mut r.$field,
                        $crate::__record_field_default!($fty $(, $default)?),
                    );
                )*
                $($(
                    schema.inherit::<$bty>(|r| &r.$base, |r| &mut r.$base);
                )+)?
            }

            fn schema_cell() -> &'static $crate::SchemaCell<Self> {
                static CELL: $crate::SchemaCell<$name> = $crate::SchemaCell::new();
                &CELL
            }
        }

        impl $crate::FieldValue for $name {
            fn shape() -> $crate::Shape {
                $crate::record_shape::<Self>()
            }

            fn to_value(&self) -> ::core::result::Result<$crate::Value, $crate::SchemaError> {
                $crate::encode_record(self)
            }

            fn from_value(
                value: &$crate::Value,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                $crate::decode_record(value)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_wire_name {
    ($field:ident) => {
        ::core::stringify!($field)
    };
    ($field:ident, $wire:literal) => {
        $wire
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_default {
    ($fty:ty) => {
        <$fty as ::core::default::Default>::default()
    };
    ($fty:ty, $default:expr) => {
        $default
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field_default {
    ($fty:ty) => {
        ::core::option::Option::None
    };
    ($fty:ty, $default:expr) => {{
        let default: fn() -> $fty = || $default;
        ::core::option::Option::Some(default)
    }};
}

#[cfg(test)]
mod tests {
    use crate::shape::{Element, FieldClass};
    use crate::{Record, SchemaError};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;

    record! {
        /// A thumbnail.
        pub struct Thumb {
            pub url: String,
            pub width: Option<u32>,
        }
    }

    record! {
        pub struct Gallery {
            pub title: String as "displayTitle" = "untitled".to_string(),
            pub thumbs: Vec<Thumb>,
            pub by_size: Option<HashMap<String, Thumb>> as "bySize",
        }
    }

    record! {
        pub struct Broken {
            pub nested: Option<Option<String>>,
        }
    }

    record! {
        pub struct HoldsBroken {
            pub name: String,
            pub inner: Option<Broken>,
        }
    }

    #[test]
    fn wire_names_and_classes() {
        let schema = Gallery::schema().unwrap();
        assert_eq!(schema.name(), "Gallery");
        assert_eq!(
            schema.field_names().collect::<Vec<_>>(),
            ["displayTitle", "thumbs", "bySize"]
        );
        assert_eq!(
            schema.field("thumbs").unwrap().classification().class,
            FieldClass::Sequence(Element::Record("Thumb"))
        );
        let by_size = schema.field("bySize").unwrap().classification();
        assert!(by_size.optional);
        assert_eq!(by_size.class, FieldClass::Mapping(Element::Record("Thumb")));
    }

    #[test]
    fn defaults_apply_to_construction_and_decode() {
        assert_eq!(Gallery::default().title, "untitled");
        let g = Gallery::decode(json!({"thumbs": []}).as_object().unwrap()).unwrap();
        assert_eq!(g, Gallery::default());
    }

    #[test]
    fn nested_errors_have_full_paths() {
        let input = json!({"thumbs": [{"url": "a"}, {"width": 5}]});
        let e = Gallery::decode(input.as_object().unwrap()).unwrap_err();
        assert_eq!(e.record(), "Thumb");
        assert_eq!(e.field(), "url");
        assert_eq!(e.path(), "thumbs[1].url");
    }

    #[test]
    fn malformed_nested_type_fails_the_parent() {
        let expected = SchemaError::UnsupportedType {
            record: "Broken",
            field: "nested",
            ty: "optional",
            reason: "optional of an optional",
        };
        assert_eq!(HoldsBroken::schema().unwrap_err(), expected);
        assert_eq!(Broken::schema().unwrap_err(), expected);
    }
}
