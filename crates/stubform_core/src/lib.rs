//! # stubform_core
//!
//! Form markup rendering from stub templates.
//!
//! Stubs are small text files carrying uppercase `DUMMY*` placeholders. The
//! renderer loads a stub by key, substitutes the placeholders and returns the
//! markup:
//!
//! - `form-open` + `_csrf` for [`StubFormRenderer::open`]
//! - `text` for text inputs, with values read from a bound model
//! - `submit` and `form-close`
//!
//! ## Example
//!
//! ```rust
//! use stubform_core::{pairs, MemoryTemplateStore, StubFormRenderer, TextField};
//! use serde_json::json;
//!
//! let renderer = StubFormRenderer::new(MemoryTemplateStore::builtin(), "csrf-token");
//! let customer = json!({ "email": "a@b.com" });
//!
//! let form = renderer
//!     .bind(&customer, &pairs([("action", "/customers"), ("method", "POST")]))
//!     .unwrap();
//!
//! let mut html = form.opening().to_string();
//! html.push_str(&form.text(&TextField::new("email").label("Email")).unwrap());
//! html.push_str(&form.submit_default().unwrap());
//! html.push_str(&form.close().unwrap());
//!
//! assert!(html.contains(r#"value="a@b.com""#));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod pairs;
pub mod renderer;
pub mod store;
pub mod tokens;

pub use config::{AttributeStyle, RendererConfig};
pub use error::{TemplateError, TemplateResult};
pub use form::{FieldDefinition, FormDefinition};
pub use model::{FieldFn, FieldSource};
pub use pairs::{pairs, Attributes, ExtraTokens, Pairs};
pub use renderer::{render_attributes, BoundForm, StubFormRenderer, TextField};
pub use store::{FallbackTemplateStore, FileTemplateStore, MemoryTemplateStore, TemplateStore};
pub use tokens::{unresolved_tokens, TokenSet};
