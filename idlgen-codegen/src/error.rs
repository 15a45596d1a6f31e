use idlgen_ir::DefaultValueError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal generation-time errors.
///
/// Each one aborts the generation call that raised it. A descriptor that
/// triggers one of these indicates a bug upstream of the generator.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("duplicates found in {name}'s enumeration values: \"{value}\"")]
    #[diagnostic(
        code(idlgen::duplicate_enum_value),
        help("remove the repeated value from the enum declaration")
    )]
    DuplicateEnumerationValue { name: String, value: String },

    #[error("unexpected default type: {kind}")]
    #[diagnostic(code(idlgen::unsupported_default))]
    UnsupportedDefaultKind { kind: String },

    #[error("default of type {kind} requires a {expected} value")]
    #[diagnostic(code(idlgen::malformed_default))]
    MalformedDefault { kind: String, expected: &'static str },

    #[error("unsupported property name {description}")]
    #[diagnostic(
        code(idlgen::unsupported_symbol),
        help("only well-known symbols of the form `Symbol.<name>` can be used as property keys")
    )]
    UnsupportedSymbol { description: String },

    #[error("import name clash: {identifier}; was {existing}, adding: {adding}")]
    #[diagnostic(code(idlgen::import_clash))]
    ImportClash {
        identifier: String,
        existing: String,
        adding: String,
    },

    #[error("variable name clash: {identifier}; was {existing}, adding: {adding}")]
    #[diagnostic(code(idlgen::declaration_clash))]
    DeclarationClash {
        identifier: String,
        existing: String,
        adding: String,
    },

    #[error("invalid codegen configuration")]
    #[diagnostic(code(idlgen::config))]
    Config(#[source] toml::de::Error),
}

impl From<DefaultValueError> for Error {
    fn from(err: DefaultValueError) -> Self {
        match err {
            DefaultValueError::UnsupportedKind(kind) => Error::UnsupportedDefaultKind { kind },
            DefaultValueError::MalformedValue { kind, expected } => {
                Error::MalformedDefault { kind, expected }
            }
        }
    }
}
