use serde_json::Value;

/// A record type whose declaration cannot be turned into a schema.
///
/// These are raised the first time a record type is used, before any data flows through it,
/// and are cached alongside the schema: every later use of the same type yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("record `{record}` declares field `{field}` more than once")]
    DuplicateField {
        record: &'static str,
        field: &'static str,
    },

    #[error("field `{record}.{field}` has unsupported type `{ty}`: {reason}")]
    UnsupportedType {
        record: &'static str,
        field: &'static str,
        ty: &'static str,
        reason: &'static str,
    },
}

/// Why a single value could not be decoded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeReason {
    #[error("required field is missing")]
    Missing,

    #[error("expected {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: String,
    },

    #[error("cannot convert {found} to {target}")]
    Coercion { target: &'static str, found: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// A key/value map that does not fit the record type it was decoded into.
///
/// The error names the record type that declares the offending field, the field's wire name,
/// and the full path from the root of the decoded value, e.g. `items[0].statistics.viewCount`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    record: &'static str,
    field: &'static str,
    path: String,
    reason: DecodeReason,
}

impl DecodeError {
    /// An error about a value that is not (yet) attributed to a field.
    pub fn new(reason: DecodeReason) -> Self {
        Self {
            record: "",
            field: "",
            path: String::new(),
            reason,
        }
    }

    pub fn missing(record: &'static str, field: &'static str) -> Self {
        Self {
            record,
            field,
            path: field.to_string(),
            reason: DecodeReason::Missing,
        }
    }

    pub fn invalid_type(expected: &'static str, found: &Value) -> Self {
        Self::new(DecodeReason::InvalidType {
            expected,
            found: describe_value(found),
        })
    }

    pub fn coercion(target: &'static str, found: &Value) -> Self {
        Self::new(DecodeReason::Coercion {
            target,
            found: describe_value(found),
        })
    }

    /// The record type that declares the field that failed to decode.
    pub fn record(&self) -> &'static str {
        self.record
    }

    /// The wire name of the field that failed to decode.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Path from the decoded root to the failing value.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn reason(&self) -> &DecodeReason {
        &self.reason
    }

    /// Whether this failure stems from a broken record declaration rather than the payload.
    pub fn is_schema_error(&self) -> bool {
        matches!(self.reason, DecodeReason::Schema(_))
    }

    /// Attributes the error to `record.field`, unless a more deeply nested field already
    /// claimed it, and prefixes the path with the field name.
    pub(crate) fn in_field(mut self, record: &'static str, field: &'static str) -> Self {
        if self.field.is_empty() {
            self.record = record;
            self.field = field;
        }
        self.path = if self.path.is_empty() {
            field.to_string()
        } else if self.path.starts_with('[') {
            format!("{field}{}", self.path)
        } else {
            format!("{field}.{}", self.path)
        };
        self
    }

    pub(crate) fn at_index(mut self, index: usize) -> Self {
        self.path = if self.path.is_empty() || self.path.starts_with('[') {
            format!("[{index}]{}", self.path)
        } else {
            format!("[{index}].{}", self.path)
        };
        self
    }

    pub(crate) fn at_key(mut self, key: &str) -> Self {
        self.path = if self.path.is_empty() || self.path.starts_with('[') {
            format!("[{key:?}]{}", self.path)
        } else {
            format!("[{key:?}].{}", self.path)
        };
        self
    }

    /// Re-attributes an error raised directly at an inherited field to the derived record.
    pub(crate) fn inherited_by(mut self, base: &'static str, derived: &'static str) -> Self {
        if self.record == base && self.path == self.field {
            self.record = derived;
        }
        self
    }

}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field.is_empty() {
            write!(f, "cannot decode value: {}", self.reason)
        } else if self.path == self.field {
            write!(
                f,
                "cannot decode field `{}` of `{}`: {}",
                self.field, self.record, self.reason
            )
        } else {
            write!(
                f,
                "cannot decode field `{}` of `{}` at `{}`: {}",
                self.field, self.record, self.path, self.reason
            )
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

impl From<SchemaError> for DecodeError {
    fn from(e: SchemaError) -> Self {
        Self::new(DecodeReason::Schema(e))
    }
}

/// The input to [`crate::parse_duration`] is not an ISO 8601 duration of the supported form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ISO 8601 duration string: {input:?}")]
pub struct InvalidDurationError {
    pub(crate) input: String,
}

impl InvalidDurationError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) => format!("number `{n}`"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn top_level_missing_field() {
        let e = DecodeError::missing("Video", "id");
        assert_snapshot!(e.to_string(), @"cannot decode field `id` of `Video`: required field is missing");
    }

    #[test]
    fn nested_path_keeps_innermost_owner() {
        let e = DecodeError::coercion("u64", &json!("many"))
            .in_field("VideoStatistics", "viewCount")
            .in_field("Video", "statistics")
            .at_index(3)
            .in_field("VideoListResponse", "items");

        assert_eq!(e.record(), "VideoStatistics");
        assert_eq!(e.field(), "viewCount");
        assert_eq!(e.path(), "items[3].statistics.viewCount");
        assert_snapshot!(e.to_string(), @r#"cannot decode field `viewCount` of `VideoStatistics` at `items[3].statistics.viewCount`: cannot convert string "many" to u64"#);
    }

    #[test]
    fn mapping_keys_are_quoted() {
        let e = DecodeError::invalid_type("object", &json!(7))
            .at_key("en")
            .in_field("Channel", "localizations");
        assert_eq!(e.path(), r#"localizations["en"]"#);
    }

    #[test]
    fn inherited_errors_name_the_derived_record() {
        let e = DecodeError::missing("BaseResource", "id").inherited_by("BaseResource", "Channel");
        assert_eq!(e.record(), "Channel");

        // errors from deeper down are left alone
        let e = DecodeError::missing("Thumbnail", "url")
            .in_field("BaseResource", "thumb")
            .inherited_by("BaseResource", "Channel");
        assert_eq!(e.record(), "Thumbnail");
    }
}
