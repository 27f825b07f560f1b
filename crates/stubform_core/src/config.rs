//! Renderer configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TemplateResult;
use crate::store::DEFAULT_EXTENSION;

/// How attribute pairs are joined into the `DUMMYATTRIBUTES` slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttributeStyle {
    /// `key=value` pairs back to back, no separator, no quotes.
    ///
    /// `{class: foo, id: bar}` renders as `class=fooid=bar`. Kept as the
    /// default so existing stubs render byte-for-byte as before.
    #[default]
    Concatenated,
    /// ` key="value"` per pair. Values are not escaped.
    Quoted,
}

/// Renderer configuration, usually read from `stubform.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    /// Directory with published stubs overriding the built-in ones
    pub stubs_dir: Option<PathBuf>,
    /// Extension of stub files (without the dot)
    pub stub_extension: String,
    /// Button text used by `submit` when none is given
    pub default_button_text: String,
    /// Attribute rendering policy
    pub attribute_style: AttributeStyle,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            stubs_dir: None,
            stub_extension: DEFAULT_EXTENSION.to_string(),
            default_button_text: "Save".to_string(),
            attribute_style: AttributeStyle::default(),
        }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a YAML configuration file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let path = path.as_ref();
        debug!("Loading renderer config from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> TemplateResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn stubs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stubs_dir = Some(dir.into());
        self
    }

    pub fn stub_extension(mut self, extension: impl Into<String>) -> Self {
        self.stub_extension = extension.into();
        self
    }

    pub fn default_button_text(mut self, text: impl Into<String>) -> Self {
        self.default_button_text = text.into();
        self
    }

    pub fn attribute_style(mut self, style: AttributeStyle) -> Self {
        self.attribute_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = RendererConfig::default();
        assert_eq!(config.stubs_dir, None);
        assert_eq!(config.stub_extension, "stub");
        assert_eq!(config.default_button_text, "Save");
        assert_eq!(config.attribute_style, AttributeStyle::Concatenated);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = RendererConfig::from_yaml("attribute_style: quoted\n").unwrap();
        assert_eq!(config.attribute_style, AttributeStyle::Quoted);
        assert_eq!(config.default_button_text, "Save");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(RendererConfig::from_yaml("  \n").unwrap(), RendererConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("stubform.yaml");
        fs::write(
            &path,
            "stubs_dir: resources/stubs\nstub_extension: html\ndefault_button_text: Send\n",
        )
        .unwrap();

        let config = RendererConfig::load(&path).unwrap();
        assert_eq!(config.stubs_dir, Some(PathBuf::from("resources/stubs")));
        assert_eq!(config.stub_extension, "html");
        assert_eq!(config.default_button_text, "Send");
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        assert!(RendererConfig::from_yaml("attribute_style: fancy\n").is_err());
    }
}
