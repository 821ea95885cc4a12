use serde::Deserialize;

/// Largest accepted indent width, in spaces.
pub const MAX_INDENT_WIDTH: u8 = 16;

/// Generator settings (`[generator]`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Indentation of generated code
    #[serde(default)]
    pub indent: IndentConfig,

    /// Comment emitted at the top of every generated file
    #[serde(default)]
    pub header: Option<String>,
}

/// Indentation unit
///
/// Supports two forms:
/// - `indent = 4` - a number of spaces (1 to 16)
/// - `indent = "tab"` - one tab character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum IndentConfig {
    Spaces(u8),
    Tab,
}

impl Default for IndentConfig {
    fn default() -> Self {
        IndentConfig::Spaces(4)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(i64),
    Keyword(String),
}

impl TryFrom<RawIndent> for IndentConfig {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(width) if (1..=i64::from(MAX_INDENT_WIDTH)).contains(&width) => {
                Ok(IndentConfig::Spaces(width as u8))
            }
            RawIndent::Width(width) => Err(format!(
                "invalid indent width {}, expected 1 to {} spaces",
                width, MAX_INDENT_WIDTH
            )),
            RawIndent::Keyword(keyword) if keyword == "tab" => Ok(IndentConfig::Tab),
            RawIndent::Keyword(keyword) => Err(format!(
                "invalid indent '{}', expected a number of spaces or \"tab\"",
                keyword
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<GeneratorConfig, toml::de::Error> {
        toml::from_str(src)
    }

    #[test]
    fn test_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.indent, IndentConfig::Spaces(4));
        assert!(config.header.is_none());
    }

    #[test]
    fn test_indent_forms() {
        assert_eq!(parse("indent = 2").unwrap().indent, IndentConfig::Spaces(2));
        assert_eq!(parse("indent = \"tab\"").unwrap().indent, IndentConfig::Tab);
    }

    #[test]
    fn test_invalid_indent() {
        let err = parse("indent = 0").unwrap_err();
        assert!(err.message().contains("invalid indent width 0"));

        assert!(parse("indent = 17").is_err());
        assert!(parse("indent = \"spaces\"").is_err());
    }
}
