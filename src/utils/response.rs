use serde_json::{Map, Value};

use crate::error::{DecodeError, ResultShape};
use crate::utils::fields::{json_type, Fields};

/// The `result` member of a response envelope, classified by JSON shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPayload {
    /// Single-value endpoints: ABI text, quantities, transaction hashes.
    Text(String),
    /// Structured endpoints: transaction, block, receipt.
    Fields(Map<String, Value>),
    /// Batched endpoints such as source-code lookups.
    Records(Vec<Map<String, Value>>),
}

/// Decode a response body and pull out its `result` member.
///
/// Decoding is all-or-nothing: invalid JSON, a missing `result`, or a
/// `result` that is neither a string, an object nor an array of objects
/// is a [`DecodeError`]. Other envelope members (`jsonrpc`, `id`,
/// `status`, `message`) are ignored.
pub fn decode_result(body: &[u8]) -> Result<ResultPayload, DecodeError> {
    let envelope: Value = serde_json::from_slice(body).map_err(DecodeError::InvalidJson)?;
    let mut envelope = match envelope {
        Value::Object(map) => map,
        other => {
            return Err(DecodeError::NotAnObject {
                found: json_type(&other),
            })
        }
    };
    let result = envelope.remove("result").ok_or(DecodeError::MissingResult)?;

    match result {
        Value::String(text) => Ok(ResultPayload::Text(text)),
        Value::Object(map) => Ok(ResultPayload::Fields(map)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(DecodeError::UnexpectedShape {
                    expected: ResultShape::Array,
                    found: json_type(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ResultPayload::Records),
        other => Err(DecodeError::UnexpectedShape {
            expected: ResultShape::Object,
            found: json_type(&other),
        }),
    }
}

impl ResultPayload {
    fn shape_name(&self) -> &'static str {
        match self {
            ResultPayload::Text(_) => "string",
            ResultPayload::Fields(_) => "object",
            ResultPayload::Records(_) => "array",
        }
    }

    fn mismatch(&self, expected: ResultShape) -> DecodeError {
        DecodeError::UnexpectedShape {
            expected,
            found: self.shape_name(),
        }
    }

    pub fn into_text(self) -> Result<String, DecodeError> {
        match self {
            ResultPayload::Text(text) => Ok(text),
            other => Err(other.mismatch(ResultShape::String)),
        }
    }

    pub fn into_fields(self) -> Result<Fields, DecodeError> {
        match self {
            ResultPayload::Fields(map) => Ok(Fields::new(map)),
            other => Err(other.mismatch(ResultShape::Object)),
        }
    }

    pub fn into_records(self) -> Result<Vec<Fields>, DecodeError> {
        match self {
            ResultPayload::Records(records) => Ok(records.into_iter().map(Fields::new).collect()),
            other => Err(other.mismatch(ResultShape::Array)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_result() {
        let payload = decode_result(br#"{"jsonrpc":"2.0","id":83,"result":"0xc36b29"}"#).unwrap();
        assert_eq!(payload, ResultPayload::Text("0xc36b29".to_string()));
        assert_eq!(payload.into_text().unwrap(), "0xc36b29");
    }

    #[test]
    fn object_result() {
        let payload = decode_result(br#"{"result":{"hash":"0x01"}}"#).unwrap();
        let fields = payload.into_fields().unwrap();
        assert_eq!(fields.required_str("hash").unwrap(), "0x01");
    }

    #[test]
    fn array_result_keeps_order() {
        let body = br#"{"status":"1","message":"OK","result":[{"n":"a"},{"n":"b"}]}"#;
        let records = decode_result(body).unwrap().into_records().unwrap();
        let names: Vec<_> = records.iter().map(|r| r.required_str("n").unwrap()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn missing_result_is_an_error() {
        let error = decode_result(br#"{"jsonrpc":"2.0","id":1}"#).unwrap_err();
        assert!(matches!(error, DecodeError::MissingResult));

        let error = decode_result(br#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000}}"#).unwrap_err();
        assert!(matches!(error, DecodeError::MissingResult));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            decode_result(b"<html>rate limited</html>").unwrap_err(),
            DecodeError::InvalidJson(_)
        ));
        assert!(matches!(decode_result(b"").unwrap_err(), DecodeError::InvalidJson(_)));
    }

    #[test]
    fn envelope_must_be_an_object() {
        assert!(matches!(
            decode_result(br#"["result"]"#).unwrap_err(),
            DecodeError::NotAnObject { found: "array" }
        ));
    }

    #[test]
    fn null_result_is_rejected() {
        assert!(matches!(
            decode_result(br#"{"result":null}"#).unwrap_err(),
            DecodeError::UnexpectedShape { found: "null", .. }
        ));
    }

    #[test]
    fn array_of_scalars_is_rejected() {
        assert!(matches!(
            decode_result(br#"{"result":["0x1"]}"#).unwrap_err(),
            DecodeError::UnexpectedShape {
                expected: ResultShape::Array,
                found: "string"
            }
        ));
    }

    #[test]
    fn shape_must_match_the_endpoint() {
        let payload = decode_result(br#"{"result":"Invalid API Key"}"#).unwrap();
        assert!(matches!(
            payload.into_fields().unwrap_err(),
            DecodeError::UnexpectedShape {
                expected: ResultShape::Object,
                found: "string"
            }
        ));

        let payload = decode_result(br#"{"result":{"a":"b"}}"#).unwrap();
        assert!(matches!(
            payload.into_records().unwrap_err(),
            DecodeError::UnexpectedShape {
                expected: ResultShape::Array,
                found: "object"
            }
        ));

        let payload = decode_result(br#"{"result":[]}"#).unwrap();
        assert!(matches!(
            payload.into_text().unwrap_err(),
            DecodeError::UnexpectedShape {
                expected: ResultShape::String,
                ..
            }
        ));
    }
}
