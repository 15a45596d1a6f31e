//! Default value to literal serialization.
//!
//! The output of [`serialize`] is a JavaScript expression that evaluates to
//! the described value.

use idlgen_ir::{DefaultValue, RawDefault};
use serde_json::Value;

use crate::Result;

/// Quote `s` as a string literal, escaping quotes, backslashes and control characters.
pub fn quote(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Serialize a typed default value into its literal text.
///
/// ```
/// use idlgen_codegen::literal::serialize;
/// use idlgen_ir::DefaultValue;
///
/// assert_eq!(serialize(&DefaultValue::string("a\"b")), r#""a\"b""#);
/// assert_eq!(serialize(&DefaultValue::Infinity { negative: true }), "-Infinity");
/// ```
pub fn serialize(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Boolean(b) => Value::Bool(*b).to_string(),
        DefaultValue::String(s) => quote(s),
        DefaultValue::Number(text) => text.clone(),
        DefaultValue::Null | DefaultValue::NaN => value.kind().to_string(),
        DefaultValue::Infinity { negative } => {
            format!("{}Infinity", if *negative { "-" } else { "" })
        }
        DefaultValue::Sequence => "[]".to_string(),
    }
}

/// Validate the tag of a raw default and serialize it.
///
/// Fails with [`Error::UnsupportedDefaultKind`](crate::Error::UnsupportedDefaultKind)
/// for tags outside the recognized set.
pub fn serialize_raw(raw: &RawDefault) -> Result<String> {
    let value = DefaultValue::try_from(raw.clone())?;
    Ok(serialize(&value))
}
