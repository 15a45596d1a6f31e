//! Reserved word handling for generated identifiers.

/// Words that cannot be used as binding identifiers in strict-mode modules.
pub const RESERVED_WORDS: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

pub fn is_keyword(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Make a name safe to bind by suffixing reserved words with `_`.
pub fn safe_name(name: &str) -> String {
    if is_keyword(name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// Render a parameter list, skipping empty names and escaping reserved words.
///
/// ```
/// use idlgen_codegen::naming::format_args;
///
/// assert_eq!(format_args(["in", "", "listener"]), "in_, listener");
/// ```
pub fn format_args<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .filter(|name| !name.is_empty())
        .map(safe_name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("default"));
        assert!(is_keyword("arguments"));
        assert!(!is_keyword("value"));
        assert!(!is_keyword("Default"));
    }

    #[test]
    fn test_safe_name() {
        assert_eq!(safe_name("in"), "in_");
        assert_eq!(safe_name("options"), "options");
    }

    #[test]
    fn test_format_args_empty() {
        assert_eq!(format_args([]), "");
        assert_eq!(format_args(["", ""]), "");
    }

    #[test]
    fn test_format_args_order_preserved() {
        assert_eq!(
            format_args(["target", "new", "options"]),
            "target, new_, options"
        );
    }
}
