//! Indentation configuration for code generation.

use std::fmt;

/// Indentation style for generated code.
///
/// One unit is used for a whole generation run; nested scopes repeat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (conventional Java style).
    pub const JAVA: Self = Self::Spaces(4);

    /// Tab indentation.
    pub const TAB: Self = Self::Tab;

    /// The string written for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(width) => write!(f, "{} spaces", width),
            Self::Tab => write!(f, "tab"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::JAVA);
        assert_eq!(Indent::JAVA, Indent::Spaces(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Indent::Spaces(4).to_string(), "4 spaces");
        assert_eq!(Indent::TAB.to_string(), "tab");
    }
}
