//! `Object.defineProperties` statement builder.

use idlgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// `Object.defineProperties(target, { key: descriptor, ... });`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefineProperties {
    target: String,
    properties: Vec<(String, String)>,
}

impl DefineProperties {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property. `key` must already be an access expression and
    /// `descriptor` an object literal.
    pub fn property(mut self, key: impl Into<String>, descriptor: impl Into<String>) -> Self {
        self.properties.push((key.into(), descriptor.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for DefineProperties {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return Vec::new();
        }
        vec![CodeFragment::block(
            format!("Object.defineProperties({}, {{", self.target),
            self.properties
                .iter()
                .map(|(key, desc)| CodeFragment::line(format!("{}: {},", key, desc)))
                .collect(),
            Some("});".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(DefineProperties::new("Foo").build(), "");
    }

    #[test]
    fn test_properties() {
        let code = DefineProperties::new("Foo.prototype")
            .property("[Symbol.toStringTag]", "{ value: \"Foo\", configurable: true }")
            .property("\"x-y\"", "{ value: 1 }")
            .build();
        assert_eq!(
            code,
            "Object.defineProperties(Foo.prototype, {\n  [Symbol.toStringTag]: { value: \"Foo\", configurable: true },\n  \"x-y\": { value: 1 },\n});\n"
        );
    }
}
