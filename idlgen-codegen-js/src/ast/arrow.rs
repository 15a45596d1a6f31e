//! Arrow function builder.

use idlgen_codegen::CodeFragment;

/// An arrow function with a block body, used as a `const` initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFn {
    pub params: String,
    pub body: Vec<CodeFragment>,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            body: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a nested `header { ... }` block to the body.
    pub fn block(mut self, header: impl Into<String>, lines: &[&str]) -> Self {
        self.body.push(CodeFragment::block(
            header,
            lines.iter().map(|l| CodeFragment::line(*l)).collect(),
            Some("}".to_string()),
        ));
        self
    }

    /// The `(params) => {` opening, to be prefixed by whatever binds the function.
    pub fn header(&self) -> String {
        format!("({}) => {{", self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(ArrowFn::new("a, b").header(), "(a, b) => {");
        assert_eq!(ArrowFn::new("").header(), "() => {");
    }

    #[test]
    fn test_body_fragments() {
        let f = ArrowFn::new("x")
            .block("if (!x) {", &["return 0;"])
            .line("return x;");
        assert_eq!(f.body.len(), 2);
        assert_eq!(f.body[1], CodeFragment::line("return x;"));
    }
}
