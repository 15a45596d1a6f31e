use idlgen_ir::{ConstructKind, MixinDescriptor};

/// An `interface mixin` declaration.
///
/// Mixins emit nothing on their own; their members are generated as part of
/// each interface that includes them. This type only carries identity so
/// consumers can tell a mixin apart from an ordinary interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceMixin {
    descriptor: MixinDescriptor,
}

impl InterfaceMixin {
    pub fn new(descriptor: MixinDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn kind(&self) -> ConstructKind {
        ConstructKind::InterfaceMixin
    }

    /// The construct type tag, `"interface mixin"`.
    pub fn construct_type(&self) -> &'static str {
        self.kind().as_str()
    }
}
