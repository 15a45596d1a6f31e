//! Indentation configuration for emitted fragments.

const SPACES: &str = "        ";

/// Spaces per indentation level, capped at 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// 2-space indentation used for JavaScript output.
    pub const JS: Self = Self(2);

    pub fn spaces(width: u8) -> Self {
        Self(width)
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        &SPACES[..usize::from(self.0).min(SPACES.len())]
    }
}
