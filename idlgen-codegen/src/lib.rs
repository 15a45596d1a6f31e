//! Code emission kernel for the idlgen binding code generator.
//!
//! This crate provides the building blocks shared by the construct generators
//! in `idlgen-codegen-js`. Everything here is a pure function of its inputs:
//! no I/O, no global state.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, CodeFragment, etc.)
//! - [`literal`] - Default value to literal serialization
//! - [`property_key`] - Property key access expressions and display names
//! - [`descriptor`] - Minimal property descriptor patches
//! - [`registry`] - Import/declaration ledger with collision detection
//! - [`naming`] - Reserved word handling and argument lists
//! - [`config`] - Generation settings

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod literal;
pub mod naming;
pub mod property_key;
pub mod registry;

mod error;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use config::CodegenConfig;
pub use descriptor::{DEFAULT_DEFINE_DESCRIPTOR, DescriptorOverrides, PropertyDescriptorShape, PropertyKind};
pub use error::{Error, Result};
pub use registry::Registry;
