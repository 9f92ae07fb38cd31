use num_bigint::BigUint;
use serde_json::{Map, Value};

use crate::error::{Error, MappingError};
use crate::utils::hex::decode_quantity;

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A decoded JSON object with typed, path-aware accessors.
///
/// Field mappers read every value through these accessors so that a
/// missing key or a wrong JSON type turns into a [`MappingError`] naming
/// the field (`logs[1].removed` for nested records). Strings are returned
/// verbatim: no trimming, no case folding, no zero stripping.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    map: Map<String, Value>,
    path: String,
}

impl Fields {
    pub fn new(map: Map<String, Value>) -> Self {
        Self {
            map,
            path: String::new(),
        }
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn wrong_type(&self, key: &str, expected: &'static str, found: &Value) -> MappingError {
        MappingError::WrongType {
            field: self.path_of(key),
            expected,
            found: json_type(found),
        }
    }

    fn get(&self, key: &str) -> Result<&Value, MappingError> {
        self.map.get(key).ok_or_else(|| MappingError::MissingField {
            field: self.path_of(key),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn required_str(&self, key: &str) -> Result<&str, MappingError> {
        match self.get(key)? {
            Value::String(s) => Ok(s),
            other => Err(self.wrong_type(key, "string", other)),
        }
    }

    pub fn required_string(&self, key: &str) -> Result<String, MappingError> {
        self.required_str(key).map(str::to_owned)
    }

    /// A key that may be left out entirely. Absent and `null` both map to `None`.
    pub fn optional_string(&self, key: &str) -> Result<Option<String>, MappingError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.wrong_type(key, "string", other)),
        }
    }

    /// A key that must be present but whose value may be `null`.
    pub fn nullable_string(&self, key: &str) -> Result<Option<String>, MappingError> {
        match self.get(key)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(self.wrong_type(key, "string or null", other)),
        }
    }

    pub fn required_bool(&self, key: &str) -> Result<bool, MappingError> {
        match self.get(key)? {
            Value::Bool(b) => Ok(*b),
            other => Err(self.wrong_type(key, "boolean", other)),
        }
    }

    /// An array of strings, order preserved.
    pub fn required_strings(&self, key: &str) -> Result<Vec<String>, MappingError> {
        let items = match self.get(key)? {
            Value::Array(items) => items,
            other => return Err(self.wrong_type(key, "array", other)),
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(self.wrong_type(&format!("{key}[{i}]"), "string", other)),
            })
            .collect()
    }

    /// A hex quantity converted to an exact integer.
    pub fn required_quantity(&self, key: &str) -> Result<BigUint, Error> {
        let raw = self.required_str(key)?;
        Ok(decode_quantity(raw)?)
    }

    /// An array of nested objects, order preserved, each carrying its own path.
    pub fn required_records(&self, key: &str) -> Result<Vec<Fields>, MappingError> {
        let items = match self.get(key)? {
            Value::Array(items) => items,
            other => return Err(self.wrong_type(key, "array", other)),
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let path = self.path_of(&format!("{key}[{i}]"));
                match item {
                    Value::Object(map) => Ok(Fields {
                        map: map.clone(),
                        path,
                    }),
                    other => Err(MappingError::WrongType {
                        field: path,
                        expected: "object",
                        found: json_type(other),
                    }),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => Fields::new(map),
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn strings_are_copied_verbatim() {
        let f = fields(json!({"to": "0x4bd5900Cb274ef15b153066D736bf3e83A9ba44e", "nonce": "0x04a99df972bd8412"}));
        assert_eq!(f.required_str("to").unwrap(), "0x4bd5900Cb274ef15b153066D736bf3e83A9ba44e");
        assert_eq!(f.required_string("nonce").unwrap(), "0x04a99df972bd8412");
    }

    #[test]
    fn missing_key_names_the_field() {
        let f = fields(json!({}));
        assert_eq!(
            f.required_str("blockHash").unwrap_err(),
            MappingError::MissingField {
                field: "blockHash".to_string()
            }
        );
    }

    #[test]
    fn wrong_type_is_reported() {
        let f = fields(json!({"gas": 21000, "removed": "false"}));
        assert_eq!(
            f.required_str("gas").unwrap_err(),
            MappingError::WrongType {
                field: "gas".to_string(),
                expected: "string",
                found: "number"
            }
        );
        assert_eq!(f.required_bool("removed").unwrap_err().field(), "removed");
    }

    #[test]
    fn optional_string_distinguishes_absent_from_present() {
        let f = fields(json!({"maxFeePerGas": "0x1f6ea08600", "maxPriorityFeePerGas": null}));
        assert_eq!(f.optional_string("maxFeePerGas").unwrap().as_deref(), Some("0x1f6ea08600"));
        assert_eq!(f.optional_string("maxPriorityFeePerGas").unwrap(), None);
        assert_eq!(f.optional_string("accessList").unwrap(), None);
    }

    #[test]
    fn nullable_string_still_requires_the_key() {
        let f = fields(json!({"contractAddress": null}));
        assert_eq!(f.nullable_string("contractAddress").unwrap(), None);
        assert!(matches!(
            f.nullable_string("to").unwrap_err(),
            MappingError::MissingField { .. }
        ));
    }

    #[test]
    fn string_arrays_keep_order_and_report_bad_items() {
        let f = fields(json!({"uncles": ["0xb", "0xa"], "topics": ["0x1", 2]}));
        assert_eq!(f.required_strings("uncles").unwrap(), ["0xb", "0xa"]);
        assert_eq!(f.required_strings("topics").unwrap_err().field(), "topics[1]");
    }

    #[test]
    fn quantity_parse_failure_carries_input() {
        let f = fields(json!({"blockNumber": "cf2420"}));
        match f.required_quantity("blockNumber").unwrap_err() {
            Error::Parse(e) => assert_eq!(e.input, "cf2420"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nested_records_carry_their_path() {
        let f = fields(json!({"logs": [{"removed": false}, {"removed": 0}]}));
        let logs = f.required_records("logs").unwrap();
        assert!(!logs[0].required_bool("removed").unwrap());
        assert_eq!(logs[1].required_bool("removed").unwrap_err().field(), "logs[1].removed");

        let f = fields(json!({"logs": ["0x1"]}));
        assert_eq!(f.required_records("logs").unwrap_err().field(), "logs[0]");
    }
}
