//! Property keys.

/// Key of a property on a generated object.
///
/// Symbolic keys carry the symbol's description rather than a runtime
/// identity. Only well-known symbols (`Symbol.<name>`) are supported by the
/// codegen; anything else is rejected when the key is stringified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// A textual property name.
    Text(String),
    /// A symbol, identified by its description (e.g. `Symbol.iterator`).
    Symbol(String),
}

impl PropertyKey {
    pub fn text(name: impl Into<String>) -> Self {
        Self::Text(name.into())
    }

    /// A symbol key from an arbitrary description.
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(description.into())
    }

    /// A well-known symbol, e.g. `well_known("iterator")` for `Symbol.iterator`.
    pub fn well_known(name: &str) -> Self {
        Self::Symbol(format!("Symbol.{}", name))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        Self::Text(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        Self::Text(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known() {
        assert_eq!(
            PropertyKey::well_known("iterator"),
            PropertyKey::Symbol("Symbol.iterator".to_string())
        );
        assert!(PropertyKey::well_known("toStringTag").is_symbol());
    }

    #[test]
    fn test_from_str_is_text() {
        let key: PropertyKey = "length".into();
        assert_eq!(key, PropertyKey::text("length"));
        assert!(!key.is_symbol());
    }
}
