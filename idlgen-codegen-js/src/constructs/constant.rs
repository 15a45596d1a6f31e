use idlgen_codegen::{CodegenConfig, DescriptorOverrides, Registry, literal};
use idlgen_ir::{ConstantDescriptor, ConstructKind, PropertyKey};
use tracing::debug;

use crate::surface::InterfaceSurface;

/// Generator for `const` members.
///
/// A constant is installed twice: on the interface object and on the side
/// members normally live on (prototype, or instances for global interfaces).
/// Both copies are read-only and non-configurable but stay enumerable.
pub struct Constant<'a> {
    config: &'a CodegenConfig,
    descriptor: &'a ConstantDescriptor,
}

impl<'a> Constant<'a> {
    pub fn new(config: &'a CodegenConfig, descriptor: &'a ConstantDescriptor) -> Self {
        Self { config, descriptor }
    }

    pub fn kind(&self) -> ConstructKind {
        ConstructKind::Constant
    }

    /// Install the constant on `surface`. Constants need no imports, so the
    /// returned registry is always empty.
    pub fn generate(&self, surface: &mut impl InterfaceSurface) -> Registry {
        let name = &self.descriptor.name;
        debug!(constant = %name, "generating constant");

        let value = literal::serialize(&self.descriptor.value);
        let overrides = DescriptorOverrides::new().configurable(false).writable(false);

        surface.add_static_property(PropertyKey::text(name.as_str()), value.clone(), overrides);
        let whence = surface.whence_for(self.descriptor.special);
        surface.add_property(whence, PropertyKey::text(name.as_str()), value, overrides);
        debug!(constant = %name, kind = self.kind().as_str(), ?whence, "constant installed");

        Registry::new(self.config)
    }
}
