use http::StatusCode;
use ytdata_codec::{DecodeError, Record, Value, record};

/// Message used when the API fails without saying why.
pub(crate) const UNKNOWN_ERROR: &str = "Unknown YouTube Data API error";

/// Everything that can go wrong when talking to the YouTube Data API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    IncorrectParams(#[from] ParamsError),

    #[error("YouTube Data API quota exceeded (HTTP {status}): {message}")]
    QuotaExceeded { status: u16, message: String },

    #[error("forbidden by the YouTube Data API (HTTP {status}): {message}")]
    Forbidden { status: u16, message: String },

    #[error("HTTP error {status}: {message}")]
    Service {
        status: u16,
        reason: Option<String>,
        message: String,
    },

    #[error("request to the YouTube Data API failed")]
    Transport(#[from] reqwest::Error),

    #[error("YouTube Data API returned a malformed payload")]
    Decode(#[from] DecodeError),

    #[error("client has been closed")]
    Closed,
}

impl Error {
    /// The HTTP status the API answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::QuotaExceeded { status, .. }
            | Error::Forbidden { status, .. }
            | Error::Service { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Maps a non-success response body to the matching error.
    ///
    /// The body is expected to look like
    /// `{"error": {"code": 403, "message": "...", "errors": [{"reason": "quotaExceeded", ...}]}}`.
    pub(crate) fn from_response(status: StatusCode, body: Option<&Value>) -> Self {
        let status = status.as_u16();
        let Some(body) = body
            .and_then(Value::as_object)
            .and_then(|map| ErrorResponse::decode(map).ok())
            .and_then(|response| response.error)
        else {
            return Error::Service {
                status,
                reason: None,
                message: UNKNOWN_ERROR.to_string(),
            };
        };

        let first = body.errors.into_iter().next().unwrap_or_default();
        let message = body
            .message
            .or(first.message)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        match first.reason.as_deref() {
            Some("quotaExceeded") => Error::QuotaExceeded { status, message },
            Some("forbidden") => Error::Forbidden { status, message },
            _ => Error::Service {
                status,
                reason: first.reason,
                message,
            },
        }
    }

    pub(crate) fn unreadable_body(status: StatusCode, what: impl std::fmt::Display) -> Self {
        Error::Service {
            status: status.as_u16(),
            reason: None,
            message: format!("cannot read response body: {what}"),
        }
    }
}

/// A request whose parameters the API would reject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParamsError {
    #[error("specify one of {} for {resource}", .options.join(", "))]
    MissingSelector {
        resource: &'static str,
        options: &'static [&'static str],
    },

    #[error("{} are mutually exclusive for {resource}", .given.join(", "))]
    ConflictingSelectors {
        resource: &'static str,
        given: Vec<&'static str>,
    },

    #[error("parts {} are not supported by {resource}", .parts.join(", "))]
    UnsupportedParts {
        resource: &'static str,
        parts: Vec<String>,
    },

    #[error("{0}")]
    Invalid(String),
}

impl From<derive_builder::UninitializedFieldError> for ParamsError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        ParamsError::Invalid(e.to_string())
    }
}

record! {
    struct ErrorResponse {
        error: Option<ErrorBody>,
    }
}

record! {
    struct ErrorBody {
        code: Option<u32>,
        message: Option<String>,
        errors: Vec<ErrorDetail> = Vec::new(),
    }
}

record! {
    struct ErrorDetail {
        message: Option<String>,
        domain: Option<String>,
        reason: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use serde_json::json;

    fn map(status: u16, body: Value) -> Error {
        Error::from_response(StatusCode::from_u16(status).unwrap(), Some(&body))
    }

    #[test]
    fn quota() {
        let e = map(
            403,
            json!({"error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{
                    "message": "The request cannot be completed because you have exceeded your quota.",
                    "domain": "youtube.quota",
                    "reason": "quotaExceeded"
                }]
            }}),
        );
        assert!(matches!(e, Error::QuotaExceeded { status: 403, .. }));
        assert_snapshot!(e.to_string(), @"YouTube Data API quota exceeded (HTTP 403): The request cannot be completed because you have exceeded your quota.");
    }

    #[test]
    fn forbidden() {
        let e = map(
            403,
            json!({"error": {"code": 403, "errors": [{"message": "nope", "reason": "forbidden"}]}}),
        );
        assert_snapshot!(e.to_string(), @"forbidden by the YouTube Data API (HTTP 403): nope");
    }

    #[test]
    fn other_reasons_are_service_errors() {
        let e = map(
            400,
            json!({"error": {"code": 400, "message": "Invalid filter", "errors": [{"reason": "badRequest"}]}}),
        );
        let Error::Service { status, reason, message } = e else {
            panic!("expected a service error");
        };
        assert_eq!(status, 400);
        assert_eq!(reason.as_deref(), Some("badRequest"));
        assert_eq!(message, "Invalid filter");
    }

    #[test]
    fn unknown_bodies() {
        for body in [json!({}), json!("oops"), json!({"error": {"code": "x"}}), json!({"error": null})] {
            let e = map(500, body);
            insta::allow_duplicates! {
                assert_snapshot!(e.to_string(), @"HTTP error 500: Unknown YouTube Data API error");
            }
        }
        let e = Error::from_response(StatusCode::BAD_GATEWAY, None);
        assert_eq!(e.status(), Some(502));
    }

    #[test]
    fn params_messages() {
        let e = ParamsError::MissingSelector {
            resource: "videos",
            options: &["chart", "id", "myRating"],
        };
        assert_snapshot!(e.to_string(), @"specify one of chart, id, myRating for videos");
        let e = ParamsError::ConflictingSelectors {
            resource: "channels",
            given: vec!["forHandle", "mine"],
        };
        assert_snapshot!(e.to_string(), @"forHandle, mine are mutually exclusive for channels");
    }
}
