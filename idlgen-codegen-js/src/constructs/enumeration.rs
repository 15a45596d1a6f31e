use std::collections::HashSet;
use std::fmt::Display;

use idlgen_codegen::{CodeBuilder, CodegenConfig, Error, Registry, Result};
use idlgen_ir::{ConstructKind, EnumerationDescriptor};
use tracing::debug;

use super::Generated;
use crate::ast::{ArrowFn, Const, Export};

/// Context label used when the caller of `convert` supplies none.
pub const DEFAULT_CONTEXT: &str = "The provided value";

/// The `TypeError` thrown by a generated `convert` for a value outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{context} '{value}' is not a valid enumeration value for {enumeration}")]
pub struct TypeConversionError {
    pub context: String,
    pub value: String,
    pub enumeration: String,
}

/// Generator for `enum` declarations.
///
/// Emits a module exporting the set of valid values and a `convert`
/// function that stringifies its input first and then checks membership.
pub struct Enumeration<'a> {
    config: &'a CodegenConfig,
    descriptor: &'a EnumerationDescriptor,
}

impl<'a> Enumeration<'a> {
    pub fn new(config: &'a CodegenConfig, descriptor: &'a EnumerationDescriptor) -> Self {
        Self { config, descriptor }
    }

    pub fn kind(&self) -> ConstructKind {
        ConstructKind::Enumeration
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    fn check_unique(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.descriptor.values.len());
        for value in &self.descriptor.values {
            if !seen.insert(value.as_str()) {
                return Err(Error::DuplicateEnumerationValue {
                    name: self.descriptor.name.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Emit the enumeration module.
    ///
    /// Fails with [`Error::DuplicateEnumerationValue`] before emitting anything
    /// if a value is listed twice.
    pub fn generate(&self) -> Result<Generated> {
        debug!(
            enumeration = %self.descriptor.name,
            values = self.descriptor.values.len(),
            "generating enumeration"
        );
        self.check_unique()?;

        let values = serde_json::Value::from(self.descriptor.values.clone()).to_string();
        let throw = format!(
            "throw new globalObject.TypeError(`${{context}} '${{string}}' is not a valid enumeration value for {}`);",
            self.descriptor.name
        );
        let convert = ArrowFn::new(format!(
            "globalObject, value, {{ context = \"{}\" }} = {{}}",
            DEFAULT_CONTEXT
        ))
        .line("const string = `${value}`;")
        .block(
            "if (!enumerationValues.has(string)) {",
            &[throw.as_str()],
        )
        .line("return string;");

        let mut builder = CodeBuilder::from_config(self.config);
        builder
            .emit(&Const::new("enumerationValues", format!("new Set({})", values)))
            .push_blank()
            .emit(&Const::arrow("convert", convert))
            .push_blank()
            .emit(&Export::default_object(["convert", "enumerationValues"]));

        debug!(
            enumeration = %self.descriptor.name,
            kind = self.kind().as_str(),
            "enumeration generated"
        );
        Ok(Generated {
            source: builder.build(),
            registry: Registry::new(self.config),
        })
    }

    /// What the generated `convert` does for `value`: coerce to a string,
    /// then test membership.
    pub fn convert(
        &self,
        value: impl Display,
        context: Option<&str>,
    ) -> std::result::Result<String, TypeConversionError> {
        let string = value.to_string();
        if self.descriptor.values.contains(&string) {
            Ok(string)
        } else {
            Err(TypeConversionError {
                context: context.unwrap_or(DEFAULT_CONTEXT).to_string(),
                value: string,
                enumeration: self.descriptor.name.clone(),
            })
        }
    }
}
