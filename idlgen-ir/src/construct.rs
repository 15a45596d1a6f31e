//! Construct descriptors.

use serde::Deserialize;

use crate::DefaultValue;

/// Kind of a declared construct, used by consumers that dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    Constant,
    Enumeration,
    InterfaceMixin,
}

impl ConstructKind {
    /// Get the tag the parser uses for this construct.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructKind::Constant => "const",
            ConstructKind::Enumeration => "enum",
            ConstructKind::InterfaceMixin => "interface mixin",
        }
    }
}

/// An extended attribute such as `[Global]` or `[CEReactions]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtendedAttribute {
    pub name: String,
}

impl ExtendedAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Find the first extended attribute with the given name.
pub fn find_ext_attr<'a>(
    attrs: &'a [ExtendedAttribute],
    name: &str,
) -> Option<&'a ExtendedAttribute> {
    attrs.iter().find(|attr| attr.name == name)
}

/// Whether `[CEReactions]` is present.
pub fn has_ce_reactions(attrs: &[ExtendedAttribute]) -> bool {
    find_ext_attr(attrs, "CEReactions").is_some()
}

/// Member modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberSpecial {
    #[default]
    None,
    Static,
    Stringifier,
}

/// `const NAME = value;`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConstantDescriptor {
    pub name: String,
    pub value: DefaultValue,
    /// Constants are never static in IDL, but the placement rule is shared with other members.
    #[serde(default)]
    pub special: MemberSpecial,
}

impl ConstantDescriptor {
    pub fn new(name: impl Into<String>, value: DefaultValue) -> Self {
        Self {
            name: name.into(),
            value,
            special: MemberSpecial::None,
        }
    }
}

/// Parser output wraps each enumeration value as `{ "type": "enum-value", "value": ... }`;
/// plain strings are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnumValue {
    Plain(String),
    Tagged { value: String },
}

fn deserialize_enum_values<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values = Vec::<EnumValue>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|v| match v {
            EnumValue::Plain(s) | EnumValue::Tagged { value: s } => s,
        })
        .collect())
}

/// `enum Name { "a", "b" };`
///
/// Values keep declaration order. Uniqueness is checked at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumerationDescriptor {
    pub name: String,
    #[serde(deserialize_with = "deserialize_enum_values")]
    pub values: Vec<String>,
}

impl EnumerationDescriptor {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// `interface mixin Name { ... };`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MixinDescriptor {
    pub name: String,
}

impl MixinDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The parts of an interface declaration the member generators need.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterfaceDescriptor {
    pub name: String,
    #[serde(default, rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
}

impl InterfaceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ext_attrs: Vec::new(),
        }
    }

    pub fn with_ext_attr(mut self, name: impl Into<String>) -> Self {
        self.ext_attrs.push(ExtendedAttribute::new(name));
        self
    }

    /// Whether the interface is marked `[Global]`.
    pub fn is_global(&self) -> bool {
        find_ext_attr(&self.ext_attrs, "Global").is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_kind_as_str() {
        assert_eq!(ConstructKind::Constant.as_str(), "const");
        assert_eq!(ConstructKind::Enumeration.as_str(), "enum");
        assert_eq!(ConstructKind::InterfaceMixin.as_str(), "interface mixin");
    }

    #[test]
    fn test_find_ext_attr() {
        let attrs = vec![
            ExtendedAttribute::new("Exposed"),
            ExtendedAttribute::new("CEReactions"),
        ];
        assert!(find_ext_attr(&attrs, "Exposed").is_some());
        assert!(find_ext_attr(&attrs, "Global").is_none());
        assert!(has_ce_reactions(&attrs));
        assert!(!has_ce_reactions(&attrs[..1]));
    }

    #[test]
    fn test_interface_is_global() {
        assert!(InterfaceDescriptor::new("Window").with_ext_attr("Global").is_global());
        assert!(!InterfaceDescriptor::new("Node").is_global());
    }

    #[test]
    fn test_deserialize_enumeration() {
        let json = r#"{
            "name": "ScrollBehavior",
            "values": [
                { "type": "enum-value", "value": "auto" },
                { "type": "enum-value", "value": "smooth" },
                "instant"
            ]
        }"#;
        let desc: EnumerationDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc.name, "ScrollBehavior");
        assert_eq!(desc.values, vec!["auto", "smooth", "instant"]);
    }

    #[test]
    fn test_deserialize_constant() {
        let json = r#"{ "name": "ELEMENT_NODE", "value": { "type": "number", "value": "1" } }"#;
        let desc: ConstantDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc.value, DefaultValue::number("1"));
        assert_eq!(desc.special, MemberSpecial::None);
    }

    #[test]
    fn test_deserialize_interface() {
        let json = r#"{ "name": "Window", "extAttrs": [{ "name": "Global" }] }"#;
        let desc: InterfaceDescriptor = serde_json::from_str(json).unwrap();
        assert!(desc.is_global());
    }
}
