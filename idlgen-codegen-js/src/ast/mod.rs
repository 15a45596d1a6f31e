//! JavaScript syntax builders used by the construct generators.
//!
//! These render through [`CodeBuilder`](idlgen_codegen::CodeBuilder) via
//! the [`Renderable`](idlgen_codegen::Renderable) trait.

mod arrow;
mod consts;
mod define;
mod exports;

pub use arrow::ArrowFn;
pub use consts::Const;
pub use define::DefineProperties;
pub use exports::Export;
