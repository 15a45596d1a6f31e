//! Export statement builder.

use idlgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// `export default { a, b };` with shorthand properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    names: Vec<String>,
}

impl Export {
    pub fn default_object(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = if self.names.is_empty() {
            "export default {};".to_string()
        } else {
            format!("export default {{ {} }};", self.names.join(", "))
        };
        vec![CodeFragment::line(line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_default_object() {
        assert_eq!(
            Export::default_object(["convert", "enumerationValues"]).build(),
            "export default { convert, enumerationValues };\n"
        );
        assert_eq!(
            Export::default_object(Vec::<String>::new()).build(),
            "export default {};\n"
        );
    }
}
