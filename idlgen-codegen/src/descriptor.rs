//! Minimal property descriptor patches.
//!
//! Generated code defines properties with `Object.defineProperties`, whose
//! omitted fields default to `false`. [`reconcile`] computes the smallest
//! descriptor literal that turns one shape into another.

/// The attribute half of a property descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyDescriptorShape {
    pub configurable: bool,
    pub enumerable: bool,
    pub writable: bool,
}

/// What `Object.defineProperty` assumes for fields left out of a descriptor.
pub const DEFAULT_DEFINE_DESCRIPTOR: PropertyDescriptorShape = PropertyDescriptorShape {
    configurable: false,
    enumerable: false,
    writable: false,
};

impl PropertyDescriptorShape {
    /// The shape of an ordinary assigned property: everything true.
    pub const OPEN: Self = Self {
        configurable: true,
        enumerable: true,
        writable: true,
    };

    pub fn with(self, overrides: DescriptorOverrides) -> Self {
        Self {
            configurable: overrides.configurable.unwrap_or(self.configurable),
            enumerable: overrides.enumerable.unwrap_or(self.enumerable),
            writable: overrides.writable.unwrap_or(self.writable),
        }
    }
}

/// Partial shape; unset fields keep the value they are applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptorOverrides {
    pub configurable: Option<bool>,
    pub enumerable: Option<bool>,
    pub writable: Option<bool>,
}

impl DescriptorOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configurable(mut self, value: bool) -> Self {
        self.configurable = Some(value);
        self
    }

    pub fn enumerable(mut self, value: bool) -> Self {
        self.enumerable = Some(value);
        self
    }

    pub fn writable(mut self, value: bool) -> Self {
        self.writable = Some(value);
        self
    }
}

/// Whether the property holds a value or is a getter/setter pair.
///
/// Accessors have no `writable` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Data,
    Accessor,
}

/// Compute the descriptor literal that moves `current` to `target`.
///
/// Returns `None` when nothing differs and no value is supplied. Fields are
/// always emitted in the order value, configurable, enumerable, writable.
///
/// ```
/// use idlgen_codegen::descriptor::{reconcile, PropertyDescriptorShape, PropertyKind, DEFAULT_DEFINE_DESCRIPTOR};
///
/// let target = PropertyDescriptorShape { configurable: false, enumerable: true, writable: false };
/// assert_eq!(
///     reconcile(&DEFAULT_DEFINE_DESCRIPTOR, &target, PropertyKind::Data, Some("1")).as_deref(),
///     Some("{ value: 1, enumerable: true }")
/// );
/// ```
pub fn reconcile(
    current: &PropertyDescriptorShape,
    target: &PropertyDescriptorShape,
    kind: PropertyKind,
    value: Option<&str>,
) -> Option<String> {
    let mut changes = Vec::new();
    if let Some(value) = value {
        changes.push(format!("value: {}", value));
    }
    if current.configurable != target.configurable {
        changes.push(format!("configurable: {}", target.configurable));
    }
    if current.enumerable != target.enumerable {
        changes.push(format!("enumerable: {}", target.enumerable));
    }
    if kind == PropertyKind::Data && current.writable != target.writable {
        changes.push(format!("writable: {}", target.writable));
    }

    if changes.is_empty() {
        return None;
    }
    Some(format!("{{ {} }}", changes.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SHAPES: [PropertyDescriptorShape; 8] = {
        let mut shapes = [DEFAULT_DEFINE_DESCRIPTOR; 8];
        let mut i = 0;
        while i < 8 {
            shapes[i] = PropertyDescriptorShape {
                configurable: i & 1 != 0,
                enumerable: i & 2 != 0,
                writable: i & 4 != 0,
            };
            i += 1;
        }
        shapes
    };

    #[test]
    fn test_identical_shapes_need_no_patch() {
        for shape in ALL_SHAPES {
            assert_eq!(reconcile(&shape, &shape, PropertyKind::Data, None), None);
            assert_eq!(reconcile(&shape, &shape, PropertyKind::Accessor, None), None);
        }
    }

    #[test]
    fn test_single_field_change() {
        let base = DEFAULT_DEFINE_DESCRIPTOR;
        let cases = [
            (DescriptorOverrides::new().configurable(true), "{ configurable: true }"),
            (DescriptorOverrides::new().enumerable(true), "{ enumerable: true }"),
            (DescriptorOverrides::new().writable(true), "{ writable: true }"),
        ];
        for (overrides, expected) in cases {
            let target = base.with(overrides);
            assert_eq!(
                reconcile(&base, &target, PropertyKind::Data, None).as_deref(),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_value_comes_first() {
        let target = PropertyDescriptorShape::OPEN;
        assert_eq!(
            reconcile(&DEFAULT_DEFINE_DESCRIPTOR, &target, PropertyKind::Data, Some("x")).as_deref(),
            Some("{ value: x, configurable: true, enumerable: true, writable: true }")
        );
    }

    #[test]
    fn test_value_alone_is_a_patch() {
        let shape = DEFAULT_DEFINE_DESCRIPTOR;
        assert_eq!(
            reconcile(&shape, &shape, PropertyKind::Data, Some("\"a\"")).as_deref(),
            Some("{ value: \"a\" }")
        );
    }

    #[test]
    fn test_accessor_ignores_writable() {
        let current = DEFAULT_DEFINE_DESCRIPTOR;
        let target = current.with(DescriptorOverrides::new().writable(true));
        assert_eq!(reconcile(&current, &target, PropertyKind::Accessor, None), None);

        let target = PropertyDescriptorShape::OPEN;
        assert_eq!(
            reconcile(&current, &target, PropertyKind::Accessor, None).as_deref(),
            Some("{ configurable: true, enumerable: true }")
        );
    }

    #[test]
    fn test_overrides_keep_unset_fields() {
        let shape = PropertyDescriptorShape::OPEN
            .with(DescriptorOverrides::new().configurable(false).writable(false));
        assert_eq!(
            shape,
            PropertyDescriptorShape {
                configurable: false,
                enumerable: true,
                writable: false,
            }
        );
    }
}
