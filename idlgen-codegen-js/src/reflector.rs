//! Content attribute reflection.
//!
//! Accessor bodies for `[Reflect]` attributes. Each supported IDL type maps a
//! backing element's string attribute to a typed property value. The getter
//! and setter bodies read the new value from `V`.

use idlgen_codegen::{CodeBuilder, literal::quote};

const LONG_MIN: f64 = -2147483648.0;
/// Upper bound for both `long` and `unsigned long`. Reflected `unsigned long`
/// values are limited to the signed range.
const LONG_MAX: f64 = 2147483647.0;

/// IDL types that support attribute reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectedType {
    Boolean,
    DomString,
    UsvString,
    Long,
    UnsignedLong,
}

impl ReflectedType {
    pub const ALL: [ReflectedType; 5] = [
        ReflectedType::Boolean,
        ReflectedType::DomString,
        ReflectedType::UsvString,
        ReflectedType::Long,
        ReflectedType::UnsignedLong,
    ];

    /// Look up a type by its IDL name. Returns `None` for types that cannot be reflected.
    pub fn from_idl(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.idl_name() == name)
    }

    pub fn idl_name(&self) -> &'static str {
        match self {
            ReflectedType::Boolean => "boolean",
            ReflectedType::DomString => "DOMString",
            ReflectedType::UsvString => "USVString",
            ReflectedType::Long => "long",
            ReflectedType::UnsignedLong => "unsigned long",
        }
    }

    /// Getter body reading `attr` from `impl_obj`.
    pub fn get(&self, impl_obj: &str, attr: &str) -> String {
        let attr = quote(attr);
        let builder = CodeBuilder::js();
        match self {
            ReflectedType::Boolean => builder.line(&format!(
                "return {}.hasAttributeNS(null, {});",
                impl_obj, attr
            )),
            ReflectedType::DomString | ReflectedType::UsvString => builder
                .line(&format!(
                    "const value = {}.getAttributeNS(null, {});",
                    impl_obj, attr
                ))
                .line("return value === null ? \"\" : value;"),
            ReflectedType::Long => builder
                .line(&format!(
                    "const value = parseInt({}.getAttributeNS(null, {}));",
                    impl_obj, attr
                ))
                .line(
                    "return isNaN(value) || value < -2147483648 || value > 2147483647 ? 0 : value;",
                ),
            ReflectedType::UnsignedLong => builder
                .line(&format!(
                    "const value = parseInt({}.getAttributeNS(null, {}));",
                    impl_obj, attr
                ))
                .line("return isNaN(value) || value < 0 || value > 2147483647 ? 0 : value;"),
        }
        .build()
    }

    /// Setter body writing `V` to `attr` on `impl_obj`.
    pub fn set(&self, impl_obj: &str, attr: &str) -> String {
        let attr = quote(attr);
        let builder = CodeBuilder::js();
        match self {
            ReflectedType::Boolean => builder
                .block_with_close("if (V) {", "} else {", |b| {
                    b.line(&format!(
                        "{}.setAttributeNS(null, {}, \"\");",
                        impl_obj, attr
                    ))
                })
                .indent()
                .line(&format!("{}.removeAttributeNS(null, {});", impl_obj, attr))
                .dedent()
                .line("}"),
            ReflectedType::DomString | ReflectedType::UsvString => builder.line(&format!(
                "{}.setAttributeNS(null, {}, V);",
                impl_obj, attr
            )),
            ReflectedType::Long => builder.line(&format!(
                "{}.setAttributeNS(null, {}, String(V));",
                impl_obj, attr
            )),
            ReflectedType::UnsignedLong => builder.line(&format!(
                "{}.setAttributeNS(null, {}, String(V > 2147483647 ? 0 : V));",
                impl_obj, attr
            )),
        }
        .build()
    }

    /// The value the generated getter returns when the attribute holds
    /// `attribute` (`None` when absent).
    pub fn evaluate_get(&self, attribute: Option<&str>) -> ReflectedValue {
        match self {
            ReflectedType::Boolean => ReflectedValue::Boolean(attribute.is_some()),
            ReflectedType::DomString | ReflectedType::UsvString => {
                ReflectedValue::String(attribute.unwrap_or_default().to_string())
            }
            ReflectedType::Long => ReflectedValue::Number(clamp_parsed(attribute, LONG_MIN)),
            ReflectedType::UnsignedLong => ReflectedValue::Number(clamp_parsed(attribute, 0.0)),
        }
    }

    /// The attribute mutation the generated setter performs for `value`.
    pub fn evaluate_set(&self, value: &ReflectedValue) -> AttributeWrite {
        match self {
            ReflectedType::Boolean => {
                if value.is_truthy() {
                    AttributeWrite::Set(String::new())
                } else {
                    AttributeWrite::Remove
                }
            }
            ReflectedType::DomString | ReflectedType::UsvString | ReflectedType::Long => {
                AttributeWrite::Set(value.to_js_string())
            }
            ReflectedType::UnsignedLong => match value {
                ReflectedValue::Number(n) if *n > LONG_MAX => AttributeWrite::Set("0".to_string()),
                _ => AttributeWrite::Set(value.to_js_string()),
            },
        }
    }
}

/// A property value as seen by script.
#[derive(Debug, Clone, PartialEq)]
pub enum ReflectedValue {
    Boolean(bool),
    String(String),
    Number(f64),
}

impl ReflectedValue {
    fn is_truthy(&self) -> bool {
        match self {
            ReflectedValue::Boolean(b) => *b,
            ReflectedValue::String(s) => !s.is_empty(),
            ReflectedValue::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    /// `String(V)`.
    fn to_js_string(&self) -> String {
        match self {
            ReflectedValue::Boolean(b) => b.to_string(),
            ReflectedValue::String(s) => s.clone(),
            ReflectedValue::Number(n) if n.is_nan() => "NaN".to_string(),
            ReflectedValue::Number(n) if n.is_infinite() => {
                if *n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
            }
            ReflectedValue::Number(n) if *n == 0.0 => "0".to_string(),
            ReflectedValue::Number(n) => number_to_string(*n),
        }
    }
}

/// `Number.prototype.toString()` for finite, non-zero `n`.
///
/// Plain decimal notation for exponents in `-7..21`, `1e+21` style otherwise.
fn number_to_string(n: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-7`.
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let e = point - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, e.abs())
        }
    };

    if n < 0.0 { format!("-{}", body) } else { body }
}

/// Effect of a setter on the backing attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeWrite {
    Set(String),
    Remove,
}

fn clamp_parsed(attribute: Option<&str>, min: f64) -> f64 {
    // getAttributeNS returns null for a missing attribute, and parseInt(null) is NaN.
    match attribute.and_then(parse_int) {
        Some(value) if (min..=LONG_MAX).contains(&value) => value,
        _ => 0.0,
    }
}

/// ECMAScript `WhiteSpace` and `LineTerminator` code points.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `parseInt(text)` with no radix: leading whitespace, optional sign, optional
/// `0x` prefix, then the longest run of digits. `None` stands for `NaN`.
fn parse_int(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(is_js_whitespace);
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, text) = match text.get(..2) {
        Some("0x" | "0X") => (16, &text[2..]),
        _ => (10, text),
    };

    let mut value: Option<f64> = None;
    for digit in text.chars().map_while(|c| c.to_digit(radix)) {
        value = Some(value.unwrap_or(0.0) * f64::from(radix) + f64::from(digit));
    }
    value.map(|v| if negative { -v } else { v })
}
