//! Import and declaration ledger for composed fragments.
//!
//! Every generation call owns one [`Registry`]. The caller merges it into a
//! larger registry before emitting the module preamble. A name may be bound
//! only once; binding it again to something different is an error, so
//! independently generated fragments can never shadow each other.

use indexmap::IndexMap;
use tracing::trace;

use crate::{CodeBuilder, CodegenConfig, Error, Result};

/// Derive an identifier from a module specifier.
///
/// Runs of `/`, `.` and `-` become a single space, the result is trimmed,
/// and remaining spaces become underscores.
///
/// ```
/// use idlgen_codegen::registry::to_key;
///
/// assert_eq!(to_key("./utils.js"), "utils_js");
/// assert_eq!(to_key("webidl-conversions"), "webidl_conversions");
/// assert_eq!(to_key("../helpers/strings"), "helpers_strings");
/// ```
pub fn to_key(specifier: &str) -> String {
    let mut key = String::with_capacity(specifier.len());
    let mut in_separator = false;
    for c in specifier.chars() {
        if matches!(c, '/' | '.' | '-') {
            if !in_separator {
                key.push(' ');
            }
            in_separator = true;
        } else {
            key.push(c);
            in_separator = false;
        }
    }
    key.trim().replace(' ', "_")
}

/// Ledger of import bindings and local declarations.
///
/// Both maps keep insertion order so emitted output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    source_extension: String,
    imports: IndexMap<String, String>,
    declarations: IndexMap<String, String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&CodegenConfig::default())
    }
}

impl Registry {
    pub fn new(config: &CodegenConfig) -> Self {
        Self {
            source_extension: config.source_extension.clone(),
            imports: IndexMap::new(),
            declarations: IndexMap::new(),
        }
    }

    /// Register an import under the identifier derived from the specifier.
    pub fn add(&mut self, specifier: &str) -> Result<String> {
        self.add_as(specifier, &to_key(specifier))
    }

    /// Register an import under an explicit identifier.
    ///
    /// Extensionless relative specifiers get the configured source extension.
    /// Re-adding the same pair is a no-op.
    pub fn add_as(&mut self, specifier: &str, identifier: &str) -> Result<String> {
        let specifier = if specifier.starts_with('.') && !specifier.ends_with(&self.source_extension)
        {
            format!("{}{}", specifier, self.source_extension)
        } else {
            specifier.to_string()
        };

        if let Some(existing) = self.imports.get(identifier) {
            if *existing != specifier {
                return Err(Error::ImportClash {
                    identifier: identifier.to_string(),
                    existing: existing.clone(),
                    adding: specifier,
                });
            }
            return Ok(identifier.to_string());
        }

        trace!(identifier, %specifier, "registering import");
        self.imports.insert(identifier.to_string(), specifier);
        Ok(identifier.to_string())
    }

    /// Register an import of a sibling module of the current generation unit.
    pub fn add_relative(&mut self, module: &str) -> Result<String> {
        self.add(&format!("./{}", module))
    }

    /// Register a local declaration `const key = expr;`.
    pub fn add_declaration(&mut self, key: &str, expr: &str) -> Result<()> {
        if let Some(existing) = self.declarations.get(key) {
            if existing != expr {
                return Err(Error::DeclarationClash {
                    identifier: key.to_string(),
                    existing: existing.clone(),
                    adding: expr.to_string(),
                });
            }
            return Ok(());
        }

        trace!(key, expr, "registering declaration");
        self.declarations.insert(key.to_string(), expr.to_string());
        Ok(())
    }

    /// Copy all of `other`'s declarations, then its imports, into `self`.
    ///
    /// Every entry goes through the same collision checks as a direct add.
    /// Merging `None` does nothing.
    pub fn merge<'a>(&mut self, other: impl Into<Option<&'a Registry>>) -> Result<()> {
        let Some(other) = other.into() else {
            return Ok(());
        };
        trace!(
            imports = other.imports.len(),
            declarations = other.declarations.len(),
            "merging registry"
        );

        for (key, expr) in &other.declarations {
            self.add_declaration(key, expr)?;
        }
        for (identifier, specifier) in &other.imports {
            self.add_as(specifier, identifier)?;
        }
        Ok(())
    }

    /// Look up the specifier bound to an identifier.
    pub fn import(&self, identifier: &str) -> Option<&str> {
        self.imports.get(identifier).map(String::as_str)
    }

    /// Look up the initializer bound to a declaration.
    pub fn declaration(&self, key: &str) -> Option<&str> {
        self.declarations.get(key).map(String::as_str)
    }

    pub fn imports(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.declarations.is_empty()
    }

    /// Render import statements followed by declarations, each in insertion order.
    pub fn emit(&self) -> String {
        let mut builder = CodeBuilder::js();
        for (identifier, specifier) in &self.imports {
            builder.push_line(&format!("import {} from \"{}\";", identifier, specifier));
        }
        if !self.imports.is_empty() && !self.declarations.is_empty() {
            builder.push_blank();
        }
        for (key, expr) in &self.declarations {
            builder.push_line(&format!("const {} = {};", key, expr));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_key() {
        assert_eq!(to_key("./Node"), "Node");
        assert_eq!(to_key("../living/helpers/internal-constants.js"), "living_helpers_internal_constants_js");
        assert_eq!(to_key("webidl-conversions"), "webidl_conversions");
        assert_eq!(to_key("utils"), "utils");
    }

    #[test]
    fn test_add_derives_identifier_and_extension() {
        let mut registry = Registry::default();
        let id = registry.add("./utils").unwrap();
        assert_eq!(id, "utils");
        assert_eq!(registry.import("utils"), Some("./utils.js"));
    }

    #[test]
    fn test_bare_specifier_keeps_text() {
        let mut registry = Registry::default();
        let id = registry.add("webidl-conversions").unwrap();
        assert_eq!(id, "webidl_conversions");
        assert_eq!(registry.import(&id), Some("webidl-conversions"));
    }

    #[test]
    fn test_existing_extension_not_doubled() {
        let mut registry = Registry::default();
        registry.add_as("./Node.js", "Node").unwrap();
        assert_eq!(registry.import("Node"), Some("./Node.js"));
    }

    #[test]
    fn test_configured_extension() {
        let config = CodegenConfig {
            source_extension: ".mjs".to_string(),
            ..Default::default()
        };
        let mut registry = Registry::new(&config);
        registry.add_relative("Event").unwrap();
        assert_eq!(registry.import("Event"), Some("./Event.mjs"));
    }

    #[test]
    fn test_add_relative() {
        let mut registry = Registry::default();
        assert_eq!(registry.add_relative("EventTarget").unwrap(), "EventTarget");
        assert_eq!(registry.import("EventTarget"), Some("./EventTarget.js"));
    }

    #[test]
    fn test_re_adding_same_pair_is_noop() {
        let mut registry = Registry::default();
        registry.add_as("./a.js", "a").unwrap();
        let before = registry.clone();
        registry.add_as("./a.js", "a").unwrap();
        registry.add_as("./a", "a").unwrap();
        assert_eq!(registry, before);
    }

    #[test]
    fn test_import_clash_in_either_order() {
        for (first, second) in [("./a.js", "./b.js"), ("./b.js", "./a.js")] {
            let mut registry = Registry::default();
            registry.add_as(first, "x").unwrap();
            let err = registry.add_as(second, "x").unwrap_err();
            assert!(matches!(err, Error::ImportClash { .. }));
            assert_eq!(
                err.to_string(),
                format!("import name clash: x; was {first}, adding: {second}")
            );
            assert_eq!(registry.import("x"), Some(first));
        }
    }

    #[test]
    fn test_declaration_clash() {
        let mut registry = Registry::default();
        registry.add_declaration("ctor", "Foo.prototype").unwrap();
        registry.add_declaration("ctor", "Foo.prototype").unwrap();
        let err = registry.add_declaration("ctor", "Bar.prototype").unwrap_err();
        assert!(matches!(err, Error::DeclarationClash { ref identifier, .. } if identifier == "ctor"));
    }

    #[test]
    fn test_merge() {
        let mut a = Registry::default();
        a.add_relative("Node").unwrap();

        let mut b = Registry::default();
        b.add_relative("Node").unwrap();
        b.add("webidl-conversions").unwrap();
        b.add_declaration("Impl", "utils.implSymbol").unwrap();

        a.merge(&b).unwrap();
        assert_eq!(
            a.imports().collect::<Vec<_>>(),
            vec![
                ("Node", "./Node.js"),
                ("webidl_conversions", "webidl-conversions")
            ]
        );
        assert_eq!(a.declaration("Impl"), Some("utils.implSymbol"));
    }

    #[test]
    fn test_merge_none_is_noop() {
        let mut registry = Registry::default();
        registry.add_relative("Node").unwrap();
        let before = registry.clone();
        registry.merge(None::<&Registry>).unwrap();
        assert_eq!(registry, before);
    }

    #[test]
    fn test_merge_conflict_matches_direct_add() {
        let mut a = Registry::default();
        a.add_as("./a.js", "x").unwrap();
        let mut b = Registry::default();
        b.add_as("./b.js", "x").unwrap();

        let mut direct = a.clone();
        let direct_err = direct.add_as("./b.js", "x").unwrap_err();
        let merge_err = a.merge(&b).unwrap_err();
        assert_eq!(merge_err.to_string(), direct_err.to_string());
    }

    #[test]
    fn test_emit_order() {
        let mut registry = Registry::default();
        registry.add("webidl-conversions").unwrap();
        registry.add_relative("utils").unwrap();
        registry.add_declaration("implSymbol", "utils.implSymbol").unwrap();
        registry.add_declaration("ctorRegistry", "utils.ctorRegistrySymbol").unwrap();

        assert_eq!(
            registry.emit(),
            "import webidl_conversions from \"webidl-conversions\";\n\
             import utils from \"./utils.js\";\n\
             \n\
             const implSymbol = utils.implSymbol;\n\
             const ctorRegistry = utils.ctorRegistrySymbol;\n"
        );
    }

    #[test]
    fn test_emit_empty() {
        assert_eq!(Registry::default().emit(), "");
        assert!(Registry::default().is_empty());
    }
}
