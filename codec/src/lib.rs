//! A schema-driven codec between typed records and JSON objects.
//!
//! A record type declares its fields once (usually with [`record!`]). The first time the type
//! is encoded or decoded, that declaration is compiled into a [`Schema`]: an ordered table of
//! fields, each with its classification (scalar, record, optional, sequence, set, mapping) and
//! a pair of converters built for the field's concrete type. The schema is cached for the life
//! of the process and shared by every caller, so later calls do no type inspection at all.
//!
//! ```
//! use ytdata_codec::{Record, record};
//!
//! record! {
//!     pub struct Snippet {
//!         pub title: String,
//!         pub description: String,
//!     }
//! }
//!
//! record! {
//!     pub struct Item {
//!         pub id: String,
//!         pub snippet: Snippet,
//!     }
//! }
//!
//! let input = serde_json::json!({
//!     "id": "123456",
//!     "snippet": {"title": "Test Title", "description": "Test Description"},
//! });
//! let item = Item::decode(input.as_object().unwrap()).unwrap();
//! assert_eq!(item.snippet.title, "Test Title");
//! assert_eq!(serde_json::Value::Object(item.encode().unwrap()), input);
//! ```
//!
//! Decoding is lenient where the YouTube Data API is: numbers sent as strings are parsed, and
//! `null` is treated like an absent key. It is strict everywhere else. A required field that is
//! missing, or a value that cannot be converted, fails with a [`DecodeError`] naming the record,
//! the field, and the path to it.

mod duration;
mod error;
mod macros;
mod schema;
mod shape;
mod value;

pub use duration::parse_duration;
pub use error::{DecodeError, DecodeReason, InvalidDurationError, SchemaError};
pub use schema::{Field, Record, Schema, SchemaBuilder, SchemaCell};
pub use shape::{Classification, Element, FieldClass, RecordShape, Shape, classify};
pub use value::{FieldValue, decode_record, encode_record, record_shape};

pub use serde_json::{Map, Value};

/// Encodes a record into a JSON object.
pub fn encode<R: Record>(record: &R) -> Result<Map<String, Value>, SchemaError> {
    record.encode()
}

/// Decodes a record of type `R` from a JSON object.
pub fn decode<R: Record>(map: &Map<String, Value>) -> Result<R, DecodeError> {
    R::decode(map)
}
