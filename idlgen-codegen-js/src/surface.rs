//! Where interface members are installed.
//!
//! Member generators do not write `Object.defineProperties` calls
//! themselves; they hand properties to an [`InterfaceSurface`], which the
//! interface-level generator owns and renders once all members are in.

use idlgen_codegen::{
    CodeBuilder, CodegenConfig, DEFAULT_DEFINE_DESCRIPTOR, DescriptorOverrides,
    PropertyDescriptorShape, PropertyKind, Result, descriptor::reconcile,
    property_key::access_expression,
};
use idlgen_ir::{InterfaceDescriptor, MemberSpecial, PropertyKey};
use indexmap::IndexMap;
use tracing::trace;

use crate::ast::DefineProperties;

/// Object a property is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Whence {
    /// The interface object itself.
    Static,
    /// The interface prototype object.
    Prototype,
    /// Each instance, set up when the wrapper is created.
    Instance,
}

/// Whether a member lives on instances rather than the prototype.
///
/// Only non-static members of `[Global]` interfaces are installed per instance.
pub fn is_on_instance(special: MemberSpecial, is_global: bool) -> bool {
    special != MemberSpecial::Static && is_global
}

/// The interface a member generator contributes properties to.
pub trait InterfaceSurface {
    /// Whether the interface is a global exposure surface (e.g. `[Global]`).
    fn is_global(&self) -> bool;

    fn add_static_property(&mut self, key: PropertyKey, value: String, overrides: DescriptorOverrides);

    fn add_property(
        &mut self,
        whence: Whence,
        key: PropertyKey,
        value: String,
        overrides: DescriptorOverrides,
    );

    /// Where non-static members go by default.
    fn default_whence(&self) -> Whence {
        if self.is_global() {
            Whence::Instance
        } else {
            Whence::Prototype
        }
    }

    /// Placement for a member with the given modifier.
    fn whence_for(&self, special: MemberSpecial) -> Whence {
        if special == MemberSpecial::Static {
            Whence::Static
        } else if is_on_instance(special, self.is_global()) {
            Whence::Instance
        } else {
            Whence::Prototype
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PropertyEntry {
    value: String,
    shape: PropertyDescriptorShape,
}

/// Collects data properties per [`Whence`] and renders them as
/// `Object.defineProperties` statements.
#[derive(Debug, Clone)]
pub struct MemberTable {
    name: String,
    is_global: bool,
    indent: idlgen_codegen::Indent,
    statics: IndexMap<PropertyKey, PropertyEntry>,
    prototype: IndexMap<PropertyKey, PropertyEntry>,
    instance: IndexMap<PropertyKey, PropertyEntry>,
}

impl MemberTable {
    /// Create a table for the named interface. `is_global` is supplied by the caller.
    pub fn new(config: &CodegenConfig, name: impl Into<String>, is_global: bool) -> Self {
        Self {
            name: name.into(),
            is_global,
            indent: config.indent(),
            statics: IndexMap::new(),
            prototype: IndexMap::new(),
            instance: IndexMap::new(),
        }
    }

    /// Create a table whose globality comes from the interface's `[Global]` attribute.
    pub fn for_interface(config: &CodegenConfig, interface: &InterfaceDescriptor) -> Self {
        Self::new(config, interface.name.clone(), interface.is_global())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn entries(&self, whence: Whence) -> &IndexMap<PropertyKey, PropertyEntry> {
        match whence {
            Whence::Static => &self.statics,
            Whence::Prototype => &self.prototype,
            Whence::Instance => &self.instance,
        }
    }

    fn entries_mut(&mut self, whence: Whence) -> &mut IndexMap<PropertyKey, PropertyEntry> {
        match whence {
            Whence::Static => &mut self.statics,
            Whence::Prototype => &mut self.prototype,
            Whence::Instance => &mut self.instance,
        }
    }

    /// Number of properties installed on `whence`.
    pub fn len(&self, whence: Whence) -> usize {
        self.entries(whence).len()
    }

    /// Value expression and final shape of a property, if present.
    pub fn get(&self, whence: Whence, key: &PropertyKey) -> Option<(&str, PropertyDescriptorShape)> {
        self.entries(whence)
            .get(key)
            .map(|entry| (entry.value.as_str(), entry.shape))
    }

    fn target(&self, whence: Whence) -> String {
        match whence {
            Whence::Static => self.name.clone(),
            Whence::Prototype => format!("{}.prototype", self.name),
            Whence::Instance => "wrapper".to_string(),
        }
    }

    /// Build the define statement for one whence.
    pub fn define_statement(&self, whence: Whence) -> Result<DefineProperties> {
        let mut define = DefineProperties::new(self.target(whence));
        for (key, entry) in self.entries(whence) {
            let patch = reconcile(
                &DEFAULT_DEFINE_DESCRIPTOR,
                &entry.shape,
                PropertyKind::Data,
                Some(&entry.value),
            );
            // A value is always supplied, so there is always a patch.
            if let Some(patch) = patch {
                define = define.property(access_expression(key)?, patch);
            }
        }
        Ok(define)
    }

    /// Render every non-empty whence, static first, then prototype, then instance.
    ///
    /// Fails if a key is a symbol other than a well-known one.
    pub fn render(&self) -> Result<String> {
        let mut builder = CodeBuilder::new(self.indent);
        for whence in [Whence::Static, Whence::Prototype, Whence::Instance] {
            let define = self.define_statement(whence)?;
            if !define.is_empty() {
                builder.emit(&define);
            }
        }
        Ok(builder.build())
    }
}

impl InterfaceSurface for MemberTable {
    fn is_global(&self) -> bool {
        self.is_global
    }

    fn add_static_property(&mut self, key: PropertyKey, value: String, overrides: DescriptorOverrides) {
        self.add_property(Whence::Static, key, value, overrides);
    }

    fn add_property(
        &mut self,
        whence: Whence,
        key: PropertyKey,
        value: String,
        overrides: DescriptorOverrides,
    ) {
        trace!(interface = %self.name, ?whence, ?key, %value, "adding property");
        // Symbol-keyed properties are not enumerable unless asked for.
        let base = PropertyDescriptorShape {
            enumerable: !key.is_symbol(),
            ..PropertyDescriptorShape::OPEN
        };
        let shape = base.with(overrides);
        self.entries_mut(whence)
            .insert(key, PropertyEntry { value, shape });
    }
}
