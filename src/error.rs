use std::fmt;

/// Result alias used by every public operation of the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure an operation can surface. Nothing is retried or swallowed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request could not be sent, or the server replied with an error status.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL is not a valid URL.
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The body is not a JSON envelope with a usable `result`.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A required field is missing or carries the wrong JSON type.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// A numeric hex field could not be converted to an integer.
    #[error(transparent)]
    Parse(#[from] HexParseError),
}

/// JSON shape of the `result` member an endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    String,
    Object,
    Array,
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultShape::String => "string",
            ResultShape::Object => "object",
            ResultShape::Array => "array of objects",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("response body is a JSON {found}, expected an object")]
    NotAnObject { found: &'static str },

    #[error("response has no `result` key")]
    MissingResult,

    #[error("`result` is a JSON {found}, expected {expected}")]
    UnexpectedShape {
        expected: ResultShape,
        found: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` is a JSON {found}, expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl MappingError {
    /// Path of the field the error refers to, e.g. `logs[1].removed`.
    pub fn field(&self) -> &str {
        match self {
            MappingError::MissingField { field } | MappingError::WrongType { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexParseErrorKind {
    MissingPrefix,
    NoDigits,
    InvalidDigit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {input:?} as a hex quantity: {}", describe(.kind))]
pub struct HexParseError {
    pub input: String,
    pub kind: HexParseErrorKind,
}

fn describe(kind: &HexParseErrorKind) -> &'static str {
    match kind {
        HexParseErrorKind::MissingPrefix => "missing `0x` prefix",
        HexParseErrorKind::NoDigits => "no digits after `0x`",
        HexParseErrorKind::InvalidDigit => "contains a non-hex character",
    }
}
