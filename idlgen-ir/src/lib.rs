//! Descriptor types for the idlgen binding code generator.
//!
//! This crate provides the already-parsed, read-only descriptors that the
//! code generators consume. Descriptors are produced upstream by an interface
//! description parser and are never mutated by the generators.
//!
//! # Architecture
//!
//! ```text
//! IDL source → parser (external) → idlgen-ir (descriptors) → codegen → fragments
//! ```
//!
//! The descriptor types are designed to be:
//! - Target-agnostic (no knowledge of how fragments are rendered)
//! - Deserializable from the JSON shape the parser emits
//! - Self-contained (no dependencies beyond serde and thiserror)

mod construct;
mod default_value;
mod property_key;

pub use construct::{
    ConstantDescriptor, ConstructKind, EnumerationDescriptor, ExtendedAttribute,
    InterfaceDescriptor, MemberSpecial, MixinDescriptor, find_ext_attr, has_ce_reactions,
};
pub use default_value::{DefaultValue, DefaultValueError, RawDefault, RawScalar};
pub use property_key::PropertyKey;
