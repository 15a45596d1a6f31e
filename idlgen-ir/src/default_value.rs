//! Typed default values.

use serde::Deserialize;
use thiserror::Error;

/// A default value attached to a constant, argument or dictionary member.
///
/// The variant fully determines how the value is serialized into a literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDefault")]
pub enum DefaultValue {
    Boolean(bool),
    String(String),
    /// Numeric token text as produced by the parser (e.g. `"42"`, `"0x1F"`, `"-1.5"`).
    Number(String),
    Null,
    NaN,
    Infinity {
        negative: bool,
    },
    /// An empty sequence. Non-empty default sequences are not supported.
    Sequence,
}

impl DefaultValue {
    /// Create a numeric default from its token text.
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    /// Create a string default.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// The tag name the parser uses for this kind of default.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Null => "null",
            Self::NaN => "NaN",
            Self::Infinity { .. } => "Infinity",
            Self::Sequence => "sequence",
        }
    }
}

/// Scalar payload of a raw default, as it appears in parser output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<RawScalar>),
}

/// Untyped default value in the `{ type, value, negative }` shape of parser output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDefault {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: Option<RawScalar>,
    #[serde(default)]
    pub negative: Option<bool>,
}

impl RawDefault {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            negative: None,
        }
    }

    pub fn with_value(mut self, value: RawScalar) -> Self {
        self.value = Some(value);
        self
    }

    pub fn negative(mut self, negative: bool) -> Self {
        self.negative = Some(negative);
        self
    }
}

/// Failure to interpret a raw default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefaultValueError {
    #[error("unexpected default type: {0}")]
    UnsupportedKind(String),
    #[error("default of type {kind} requires a {expected} value")]
    MalformedValue {
        kind: String,
        expected: &'static str,
    },
}

impl TryFrom<RawDefault> for DefaultValue {
    type Error = DefaultValueError;

    fn try_from(raw: RawDefault) -> Result<Self, Self::Error> {
        let malformed = |expected| DefaultValueError::MalformedValue {
            kind: raw.kind.clone(),
            expected,
        };

        match raw.kind.as_str() {
            "boolean" => match raw.value {
                Some(RawScalar::Bool(b)) => Ok(Self::Boolean(b)),
                _ => Err(malformed("boolean")),
            },
            "string" => match &raw.value {
                Some(RawScalar::Text(s)) => Ok(Self::String(s.clone())),
                _ => Err(malformed("string")),
            },
            "number" => match &raw.value {
                Some(RawScalar::Text(s)) => Ok(Self::Number(s.clone())),
                Some(RawScalar::Int(i)) => Ok(Self::Number(i.to_string())),
                Some(RawScalar::Float(f)) => Ok(Self::Number(f.to_string())),
                _ => Err(malformed("numeric")),
            },
            "null" => Ok(Self::Null),
            "NaN" => Ok(Self::NaN),
            "Infinity" => Ok(Self::Infinity {
                negative: raw.negative.unwrap_or(false),
            }),
            // Elements are discarded; only empty sequences are emitted.
            "sequence" => Ok(Self::Sequence),
            other => Err(DefaultValueError::UnsupportedKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<DefaultValue, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_deserialize_scalars() {
        assert_eq!(
            parse(r#"{"type":"boolean","value":true}"#).unwrap(),
            DefaultValue::Boolean(true)
        );
        assert_eq!(
            parse(r#"{"type":"string","value":"auto"}"#).unwrap(),
            DefaultValue::string("auto")
        );
        assert_eq!(
            parse(r#"{"type":"number","value":"0x1F"}"#).unwrap(),
            DefaultValue::number("0x1F")
        );
        assert_eq!(
            parse(r#"{"type":"number","value":7}"#).unwrap(),
            DefaultValue::number("7")
        );
    }

    #[test]
    fn test_deserialize_keywords() {
        assert_eq!(parse(r#"{"type":"null"}"#).unwrap(), DefaultValue::Null);
        assert_eq!(parse(r#"{"type":"NaN"}"#).unwrap(), DefaultValue::NaN);
        assert_eq!(
            parse(r#"{"type":"Infinity","negative":true}"#).unwrap(),
            DefaultValue::Infinity { negative: true }
        );
        assert_eq!(
            parse(r#"{"type":"Infinity","negative":null}"#).unwrap(),
            DefaultValue::Infinity { negative: false }
        );
    }

    #[test]
    fn test_sequence_elements_discarded() {
        assert_eq!(
            parse(r#"{"type":"sequence","value":[1,2]}"#).unwrap(),
            DefaultValue::Sequence
        );
    }

    #[test]
    fn test_unsupported_kind() {
        let err = DefaultValue::try_from(RawDefault::new("dictionary")).unwrap_err();
        assert_eq!(err, DefaultValueError::UnsupportedKind("dictionary".into()));
        assert_eq!(err.to_string(), "unexpected default type: dictionary");
    }

    #[test]
    fn test_malformed_value() {
        let raw = RawDefault::new("boolean").with_value(RawScalar::Text("yes".into()));
        assert!(matches!(
            DefaultValue::try_from(raw),
            Err(DefaultValueError::MalformedValue { .. })
        ));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DefaultValue::NaN.kind(), "NaN");
        assert_eq!(DefaultValue::Infinity { negative: true }.kind(), "Infinity");
        assert_eq!(DefaultValue::Sequence.kind(), "sequence");
    }
}
