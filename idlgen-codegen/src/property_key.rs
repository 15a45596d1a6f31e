//! Property key access expressions and display names.

use idlgen_ir::PropertyKey;

use crate::{Error, Result, literal::quote};

/// Resolve a symbol description to its `Symbol.<name>` reference.
///
/// Accepts both the bare description (`Symbol.iterator`) and the form a
/// symbol stringifies to (`Symbol(Symbol.iterator)`).
fn symbol_name(description: &str) -> Result<&str> {
    let desc = description
        .strip_prefix("Symbol(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(description);

    match desc.strip_prefix("Symbol.") {
        Some(rest) if !rest.is_empty() => Ok(desc),
        _ => Err(Error::UnsupportedSymbol {
            description: description.to_string(),
        }),
    }
}

/// Property name usable after a dot or as an object literal key.
///
/// All IDL identifiers are valid property names except those containing `-`.
fn property_name(name: &str) -> String {
    if name.contains('-') {
        quote(name)
    } else {
        name.to_string()
    }
}

/// Expression referencing the key in an object literal or descriptor map.
///
/// ```
/// use idlgen_codegen::property_key::access_expression;
/// use idlgen_ir::PropertyKey;
///
/// assert_eq!(access_expression(&"length".into()).unwrap(), "length");
/// assert_eq!(access_expression(&"aria-label".into()).unwrap(), "\"aria-label\"");
/// assert_eq!(
///     access_expression(&PropertyKey::well_known("iterator")).unwrap(),
///     "[Symbol.iterator]"
/// );
/// ```
pub fn access_expression(key: &PropertyKey) -> Result<String> {
    match key {
        PropertyKey::Text(name) => Ok(property_name(name)),
        PropertyKey::Symbol(description) => Ok(format!("[{}]", symbol_name(description)?)),
    }
}

/// Human-readable form of the key for error text.
pub fn display_name(key: &PropertyKey) -> Result<String> {
    match key {
        PropertyKey::Text(name) => Ok(quote(name)),
        PropertyKey::Symbol(description) => Ok(symbol_name(description)?.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_key() {
        let key = PropertyKey::text("textContent");
        assert_eq!(access_expression(&key).unwrap(), "textContent");
        assert_eq!(display_name(&key).unwrap(), "\"textContent\"");
    }

    #[test]
    fn test_hyphenated_text_key() {
        let key = PropertyKey::text("background-color");
        assert_eq!(access_expression(&key).unwrap(), "\"background-color\"");
        assert_eq!(display_name(&key).unwrap(), "\"background-color\"");
    }

    #[test]
    fn test_well_known_symbol() {
        let key = PropertyKey::well_known("toStringTag");
        assert_eq!(access_expression(&key).unwrap(), "[Symbol.toStringTag]");
        assert_eq!(display_name(&key).unwrap(), "Symbol.toStringTag");
    }

    #[test]
    fn test_stringified_symbol_form() {
        let key = PropertyKey::symbol("Symbol(Symbol.asyncIterator)");
        assert_eq!(access_expression(&key).unwrap(), "[Symbol.asyncIterator]");
        assert_eq!(display_name(&key).unwrap(), "Symbol.asyncIterator");
    }

    #[test]
    fn test_user_symbol_rejected() {
        for description in ["mySymbol", "Symbol(mySymbol)", "Symbol.", ""] {
            let err = access_expression(&PropertyKey::symbol(description)).unwrap_err();
            assert!(matches!(err, Error::UnsupportedSymbol { .. }), "{description}");
            assert!(display_name(&PropertyKey::symbol(description)).is_err());
        }
    }
}
