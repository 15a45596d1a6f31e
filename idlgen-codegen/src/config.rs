//! Generation settings.

use serde::Deserialize;

use crate::{Error, Indent, Result};

/// Settings shared by every generation call.
///
/// Can be loaded from TOML, either as a bare table or nested under `[codegen]`:
///
/// ```
/// use idlgen_codegen::CodegenConfig;
///
/// let config = CodegenConfig::from_toml_str(
///     r#"
///     [codegen]
///     source_extension = ".mjs"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.source_extension, ".mjs");
/// assert_eq!(config.indent, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Extension appended to extensionless relative import specifiers.
    pub source_extension: String,
    /// Spaces per indentation level.
    pub indent: u8,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            source_extension: ".js".to_string(),
            indent: 2,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NestedDocument {
    codegen: CodegenConfig,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigDocument {
    Nested(NestedDocument),
    Bare(CodegenConfig),
}

impl CodegenConfig {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let document: ConfigDocument = toml::from_str(src).map_err(Error::Config)?;
        Ok(match document {
            ConfigDocument::Nested(document) => document.codegen,
            ConfigDocument::Bare(config) => config,
        })
    }

    pub fn indent(&self) -> Indent {
        Indent::spaces(self.indent)
    }
}
