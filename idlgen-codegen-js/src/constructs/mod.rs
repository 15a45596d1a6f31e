//! Generators for individual IDL constructs.

mod constant;
mod enumeration;
mod interface_mixin;

pub use constant::Constant;
pub use enumeration::{Enumeration, TypeConversionError};
pub use interface_mixin::InterfaceMixin;

use idlgen_codegen::Registry;

/// Output of a generator that emits a standalone fragment.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The emitted source text.
    pub source: String,
    /// Imports and declarations the fragment relies on.
    pub registry: Registry,
}
