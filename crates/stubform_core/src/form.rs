//! Whole-form definitions.
//!
//! A definition lists the `open` tokens, the text fields, and the submit
//! text. Rendering concatenates the pieces in document order; there is no
//! layout logic beyond that.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TemplateResult;
use crate::model::FieldSource;
use crate::pairs::{Attributes, ExtraTokens};
use crate::renderer::{StubFormRenderer, TextField};
use crate::tokens::unresolved_tokens;

/// A text field entry in a form definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl From<&FieldDefinition> for TextField {
    fn from(def: &FieldDefinition) -> Self {
        TextField::new(def.name.clone())
            .label(def.label.clone())
            .attributes(def.attributes.clone())
    }
}

/// A form described in YAML (or JSON).
///
/// ```yaml
/// tokens:
///   action: /customers
///   method: POST
/// fields:
///   - name: email
///     label: Email
///     attributes:
///       class: wide
/// submit: Create
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormDefinition {
    /// Tokens for the `form-open` stub
    #[serde(default)]
    pub tokens: ExtraTokens,
    /// Text fields, in render order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Submit button text; the renderer default when absent
    #[serde(default)]
    pub submit: Option<String>,
}

impl FormDefinition {
    pub fn load(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let path = path.as_ref();
        debug!("Loading form definition from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML. JSON documents parse as well.
    pub fn from_yaml(content: &str) -> TemplateResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Render open + CSRF, every field, the submit button, and close.
    pub fn render(
        &self,
        renderer: &StubFormRenderer,
        model: &dyn FieldSource,
    ) -> TemplateResult<String> {
        let form = renderer.bind(model, &self.tokens)?;
        let mut markup = form.opening().to_string();

        for field in &self.fields {
            markup.push_str(&form.text(&TextField::from(field))?);
        }

        let button = match &self.submit {
            Some(text) => form.submit(text)?,
            None => form.submit_default()?,
        };
        markup.push_str(&button);
        markup.push_str(&form.close()?);

        let leftover = unresolved_tokens(&markup);
        if !leftover.is_empty() {
            warn!("Rendered form still contains tokens: {}", leftover.join(", "));
        }

        Ok(markup)
    }
}
