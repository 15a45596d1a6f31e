//! JavaScript construct generators for the idlgen binding code generator.
//!
//! Each generator consumes one descriptor from `idlgen-ir` and produces a
//! source fragment plus the [`Registry`] contribution the fragment needs.
//! Callers merge contributions into the registry of the module they are
//! assembling.
//!
//! ```
//! use idlgen_codegen::CodegenConfig;
//! use idlgen_codegen_js::Enumeration;
//! use idlgen_ir::EnumerationDescriptor;
//!
//! let config = CodegenConfig::default();
//! let descriptor = EnumerationDescriptor::new("ShadowRootMode", ["open", "closed"]);
//! let generated = Enumeration::new(&config, &descriptor).generate().unwrap();
//!
//! assert!(generated.source.contains(r#"new Set(["open","closed"])"#));
//! assert!(generated.registry.is_empty());
//! ```
//!
//! # Generated Output
//!
//! - Enumerations: a module exporting `enumerationValues` and `convert`
//! - Constants: `Object.defineProperties` entries on the interface and its prototype
//! - Reflected attributes: accessor bodies via [`ReflectedType`]

mod reflector;
mod surface;

pub mod ast;
pub mod constructs;

pub use constructs::{Constant, Enumeration, Generated, InterfaceMixin, TypeConversionError};
pub use idlgen_codegen::{Error, Registry, Result};
pub use reflector::{AttributeWrite, ReflectedType, ReflectedValue};
pub use surface::{InterfaceSurface, MemberTable, Whence, is_on_instance};
