//! `export const` declaration builder.

use idlgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::ArrowFn;

#[derive(Debug, Clone, PartialEq)]
enum Initializer {
    Expr(String),
    Arrow(ArrowFn),
}

/// Builder for exported `const` declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Const {
    name: String,
    init: Initializer,
}

impl Const {
    /// `export const name = value;`
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            init: Initializer::Expr(value.into()),
        }
    }

    /// `export const name = (params) => { ... };`
    pub fn arrow(name: impl Into<String>, func: ArrowFn) -> Self {
        Self {
            name: name.into(),
            init: Initializer::Arrow(func),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.init {
            Initializer::Expr(value) => {
                vec![CodeFragment::line(format!(
                    "export const {} = {};",
                    self.name, value
                ))]
            }
            Initializer::Arrow(func) => vec![CodeFragment::block(
                format!("export const {} = {}", self.name, func.header()),
                func.body.clone(),
                Some("};".to_string()),
            )],
        }
    }
}
