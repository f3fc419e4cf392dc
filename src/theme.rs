// Theme - severity-to-style-token resolution
//
// Maps message severity to the CSS class token the host stylesheet defines,
// combined with a fixed wrapping token. Ships with built-in defaults; a
// deployment can override the tokens with a small TOML file.
//
// Format version: 1

use crate::domain::Severity;
use crate::error::BindError;
use serde::Deserialize;

/// Style tokens for severity-styled panels.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Fixed wrapping token applied to every message block.
    wrap: String,
    info: String,
    warn: String,
    error: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            wrap: "sp-msg".to_string(),
            info: "sp-txt-info".to_string(),
            warn: "sp-txt-warn".to_string(),
            error: "sp-txt-error".to_string(),
        }
    }
}

impl Theme {
    /// Resolve the style token for a severity level.
    ///
    /// Total over the known levels; anything unrecognized falls back to the
    /// info token so the panel stays renderable rather than failing on a
    /// cosmetic concern.
    pub fn severity_token(&self, severity: Severity) -> &str {
        match severity {
            Severity::Error => &self.error,
            Severity::Warn => &self.warn,
            _ => &self.info,
        }
    }

    /// The fixed wrapping token.
    pub fn wrap_token(&self) -> &str {
        &self.wrap
    }

    /// Final class string for a message block: wrap token, then the
    /// severity token, space-separated.
    pub fn message_class(&self, severity: Severity) -> String {
        format!("{} {}", self.wrap, self.severity_token(severity))
    }

    /// Parse a theme override file.
    pub fn from_toml_str(input: &str) -> Result<Self, BindError> {
        let file: TomlTheme = toml::from_str(input)?;
        Ok(Self {
            wrap: file.classes.wrap,
            info: file.classes.info,
            warn: file.classes.warn,
            error: file.classes.error,
        })
    }
}

/// Root structure for TOML theme files.
#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    #[allow(dead_code)] // For future schema evolution
    meta: Option<ThemeMeta>,
    classes: ClassTokens,
}

/// Theme metadata.
#[derive(Debug, Clone, Deserialize)]
struct ThemeMeta {
    #[allow(dead_code)]
    name: Option<String>,
    #[allow(dead_code)]
    version: Option<u32>,
}

/// Severity class tokens.
#[derive(Debug, Clone, Deserialize)]
struct ClassTokens {
    wrap: String,
    info: String,
    warn: String,
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_distinct_per_level() {
        let theme = Theme::default();
        let info = theme.severity_token(Severity::Info);
        let warn = theme.severity_token(Severity::Warn);
        let error = theme.severity_token(Severity::Error);
        assert_ne!(info, warn);
        assert_ne!(warn, error);
        assert_ne!(info, error);
    }

    #[test]
    fn test_message_class_wraps_token() {
        let theme = Theme::default();
        assert_eq!(theme.message_class(Severity::Warn), "sp-msg sp-txt-warn");
    }

    #[test]
    fn test_toml_override() {
        let theme = Theme::from_toml_str(
            r#"
            [meta]
            name = "custom"
            version = 1

            [classes]
            wrap = "msg"
            info = "msg-info"
            warn = "msg-warn"
            error = "msg-error"
            "#,
        )
        .unwrap();
        assert_eq!(theme.message_class(Severity::Error), "msg msg-error");
    }

    #[test]
    fn test_invalid_toml_surfaces_theme_error() {
        let err = Theme::from_toml_str("[classes]\nwrap = 1").unwrap_err();
        assert!(matches!(err, BindError::Theme(_)));
    }
}
