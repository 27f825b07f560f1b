//! Stub-based form markup rendering.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{AttributeStyle, RendererConfig};
use crate::error::TemplateResult;
use crate::model::{field_value, FieldSource};
use crate::pairs::{Attributes, ExtraTokens};
use crate::store::{names, FallbackTemplateStore, FileTemplateStore, MemoryTemplateStore, TemplateStore};
use crate::tokens::{self, TokenSet};

/// A text input to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// Field name, also the model field its value is read from
    pub name: String,
    /// Label text (empty by default)
    pub label: String,
    /// Extra attributes for the `DUMMYATTRIBUTES` slot
    pub attributes: Attributes,
}

impl TextField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Renders form fragments from named stubs.
///
/// The renderer holds no per-request state: the CSRF token is fixed at
/// construction and the model is passed to each call (or captured by a
/// [`BoundForm`]), so one renderer can serve concurrent requests.
#[derive(Clone)]
pub struct StubFormRenderer {
    store: Arc<dyn TemplateStore>,
    csrf_token: String,
    attribute_style: AttributeStyle,
    default_button_text: String,
}

impl StubFormRenderer {
    /// Create a renderer over `store` with the session's CSRF token.
    pub fn new(store: impl TemplateStore + 'static, csrf_token: impl Into<String>) -> Self {
        Self::with_store(Arc::new(store), csrf_token)
    }

    /// Create a renderer over a shared store.
    pub fn with_store(store: Arc<dyn TemplateStore>, csrf_token: impl Into<String>) -> Self {
        let defaults = RendererConfig::default();
        Self {
            store,
            csrf_token: csrf_token.into(),
            attribute_style: defaults.attribute_style,
            default_button_text: defaults.default_button_text,
        }
    }

    /// Create a renderer from configuration.
    ///
    /// With `stubs_dir` set, stubs found there override the built-in ones.
    pub fn from_config(config: &RendererConfig, csrf_token: impl Into<String>) -> Self {
        let renderer = match &config.stubs_dir {
            Some(dir) => {
                info!("Using published stubs from {:?}", dir);
                let files =
                    FileTemplateStore::new(dir).with_extension(config.stub_extension.clone());
                Self::new(
                    FallbackTemplateStore::new(files, MemoryTemplateStore::builtin()),
                    csrf_token,
                )
            }
            None => Self::new(MemoryTemplateStore::builtin(), csrf_token),
        };

        renderer
            .attribute_style(config.attribute_style)
            .default_button_text(config.default_button_text.clone())
    }

    pub fn attribute_style(mut self, style: AttributeStyle) -> Self {
        self.attribute_style = style;
        self
    }

    pub fn default_button_text(mut self, text: impl Into<String>) -> Self {
        self.default_button_text = text.into();
        self
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    pub fn store(&self) -> &dyn TemplateStore {
        self.store.as_ref()
    }

    fn load(&self, name: &str) -> TemplateResult<String> {
        debug!("Rendering stub: {}", name);
        self.store.get(name)
    }

    /// Opening `<form>` markup followed by the CSRF field.
    ///
    /// Each extra token `key` fills `DUMMY<KEY>` in the `form-open` stub, in
    /// insertion order.
    pub fn open(&self, extra_tokens: &ExtraTokens) -> TemplateResult<String> {
        let mut stub = self.load(names::FORM_OPEN)?;
        TokenSet::from_extra(extra_tokens).apply(&mut stub);

        let mut csrf_stub = self.load(names::CSRF)?;
        TokenSet::new()
            .with(tokens::CSRF, self.csrf_token.as_str())
            .apply(&mut csrf_stub);

        stub.push_str(&csrf_stub);
        Ok(stub)
    }

    /// The `form-close` stub, untouched.
    pub fn close(&self) -> TemplateResult<String> {
        self.load(names::FORM_CLOSE)
    }

    /// A text input whose value comes from `model`.
    ///
    /// An absent model field renders as an empty value.
    pub fn text(&self, field: &TextField, model: &dyn FieldSource) -> TemplateResult<String> {
        let mut stub = self.load(names::TEXT)?;

        // Order matters: values inserted early are seen by later passes.
        TokenSet::new()
            .with(tokens::FIELD_NAME, field.name.as_str())
            .with(tokens::LABEL, field.label.as_str())
            .with(tokens::ATTRIBUTES, self.render_attributes(&field.attributes))
            .with(tokens::VALUE, field_value(model, &field.name))
            .apply(&mut stub);

        Ok(stub)
    }

    /// A submit button with `button_text`.
    pub fn submit(&self, button_text: &str) -> TemplateResult<String> {
        let mut stub = self.load(names::SUBMIT)?;
        TokenSet::new()
            .with(tokens::BUTTON_TEXT, button_text)
            .apply(&mut stub);
        Ok(stub)
    }

    /// A submit button with the configured default text (`"Save"`).
    pub fn submit_default(&self) -> TemplateResult<String> {
        self.submit(&self.default_button_text)
    }

    pub fn render_attributes(&self, attributes: &Attributes) -> String {
        render_attributes(attributes, self.attribute_style)
    }

    /// Render the opening markup and bind `model` for the fields that follow.
    pub fn bind<'r, 'm>(
        &'r self,
        model: &'m dyn FieldSource,
        extra_tokens: &ExtraTokens,
    ) -> TemplateResult<BoundForm<'r, 'm>> {
        let opening = self.open(extra_tokens)?;
        Ok(BoundForm {
            renderer: self,
            model,
            opening,
        })
    }
}

/// Join attributes for the `DUMMYATTRIBUTES` slot.
pub fn render_attributes(attributes: &Attributes, style: AttributeStyle) -> String {
    let mut text = String::new();
    for (key, value) in attributes {
        match style {
            AttributeStyle::Concatenated => {
                text.push_str(key);
                text.push('=');
                text.push_str(value);
            }
            AttributeStyle::Quoted => {
                text.push(' ');
                text.push_str(key);
                text.push_str("=\"");
                text.push_str(value);
                text.push('"');
            }
        }
    }
    text
}

/// A form opened against a model.
///
/// Fields rendered through it read their values from the bound model.
pub struct BoundForm<'r, 'm> {
    renderer: &'r StubFormRenderer,
    model: &'m dyn FieldSource,
    opening: String,
}

impl<'r, 'm> BoundForm<'r, 'm> {
    /// The `form-open` + CSRF markup produced when binding.
    pub fn opening(&self) -> &str {
        &self.opening
    }

    pub fn into_opening(self) -> String {
        self.opening
    }

    pub fn model(&self) -> &'m dyn FieldSource {
        self.model
    }

    pub fn text(&self, field: &TextField) -> TemplateResult<String> {
        self.renderer.text(field, self.model)
    }

    pub fn submit(&self, button_text: &str) -> TemplateResult<String> {
        self.renderer.submit(button_text)
    }

    pub fn submit_default(&self) -> TemplateResult<String> {
        self.renderer.submit_default()
    }

    pub fn close(&self) -> TemplateResult<String> {
        self.renderer.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use crate::pairs::pairs;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        pub Store {}

        impl TemplateStore for Store {
            fn get(&self, name: &str) -> TemplateResult<String>;
            fn names(&self) -> TemplateResult<Vec<String>>;
        }
    }

    fn fixtures() -> MemoryTemplateStore {
        MemoryTemplateStore::new()
            .with("form-open", r#"<form action="DUMMYACTION" method="DUMMYMETHOD">"#)
            .with("_csrf", r#"<input type="hidden" name="_token" value="DUMMYCSRF">"#)
            .with("form-close", "</form><!-- DUMMYVALUE stays -->")
            .with(
                "text",
                r#"<label for="DUMMYFIELDNAME">DUMMYLABEL</label><input name="DUMMYFIELDNAME" value="DUMMYVALUE" DUMMYATTRIBUTES>"#,
            )
            .with("submit", "<button>DUMMYBUTTONTEXT</button>")
    }

    fn renderer() -> StubFormRenderer {
        StubFormRenderer::new(fixtures(), "tok-123")
    }

    #[test]
    fn test_open_replaces_extra_tokens_and_appends_csrf() {
        let extra = pairs([("action", "/users"), ("method", "POST")]);
        let html = renderer().open(&extra).unwrap();
        assert_eq!(
            html,
            r#"<form action="/users" method="POST"><input type="hidden" name="_token" value="tok-123">"#
        );
    }

    #[test]
    fn test_open_without_tokens_is_open_stub_plus_csrf() {
        let html = renderer().open(&ExtraTokens::new()).unwrap();
        assert!(html.starts_with(r#"<form action="DUMMYACTION" method="DUMMYMETHOD">"#));
        assert!(html.contains("tok-123"));
    }

    #[test]
    fn test_open_token_keys_are_uppercased() {
        let extra = pairs([("Action", "/x")]);
        let html = renderer().open(&extra).unwrap();
        assert!(html.contains(r#"action="/x""#));
    }

    #[test]
    fn test_close_is_verbatim() {
        assert_eq!(renderer().close().unwrap(), "</form><!-- DUMMYVALUE stays -->");
    }

    #[test]
    fn test_text_unbound_value_is_empty() {
        let html = renderer().text(&TextField::new("email"), &()).unwrap();
        assert_eq!(
            html,
            r#"<label for="email"></label><input name="email" value="" >"#
        );
    }

    #[test]
    fn test_text_reads_value_from_model() {
        let mut model = HashMap::new();
        model.insert("email".to_string(), "a@b.com".to_string());

        let field = TextField::new("email").label("Email").attribute("class", "wide");
        let html = renderer().text(&field, &model).unwrap();
        assert_eq!(
            html,
            r#"<label for="email">Email</label><input name="email" value="a@b.com" class=wide>"#
        );
    }

    #[test]
    fn test_submit_default_and_custom() {
        let renderer = renderer();
        assert_eq!(renderer.submit_default().unwrap(), "<button>Save</button>");
        assert_eq!(renderer.submit("Send").unwrap(), "<button>Send</button>");

        let renamed = renderer.default_button_text("Go");
        assert_eq!(renamed.submit_default().unwrap(), "<button>Go</button>");
    }

    #[test]
    fn test_render_attributes_concatenated_without_separator() {
        let attrs = pairs([("class", "foo"), ("id", "bar")]);
        assert_eq!(renderer().render_attributes(&attrs), "class=fooid=bar");
        assert_eq!(renderer().render_attributes(&Attributes::new()), "");
    }

    #[test]
    fn test_repeated_attribute_key_keeps_last_value() {
        let attrs = pairs([("class", "a"), ("id", "x"), ("class", "b")]);
        assert_eq!(renderer().render_attributes(&attrs), "class=bid=x");

        let field = TextField::new("email")
            .attribute("class", "a")
            .attribute("class", "b");
        let html = renderer().text(&field, &()).unwrap();
        assert!(html.ends_with(r#"value="" class=b>"#));
    }

    #[test]
    fn test_repeated_open_token_keeps_last_value() {
        let extra = pairs([("action", "/first"), ("method", "POST"), ("action", "/second")]);
        let html = renderer().open(&extra).unwrap();
        assert!(html.starts_with(r#"<form action="/second" method="POST">"#));
    }

    #[test]
    fn test_render_attributes_quoted() {
        let attrs = pairs([("class", "foo"), ("id", "bar")]);
        assert_eq!(
            render_attributes(&attrs, AttributeStyle::Quoted),
            r#" class="foo" id="bar""#
        );
    }

    #[test]
    fn test_missing_stub_is_an_error() {
        let mut store = fixtures();
        store.remove("_csrf");
        let renderer = StubFormRenderer::new(store, "tok");

        let err = renderer.open(&ExtraTokens::new()).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(ref n) if n == "_csrf"));
    }

    #[test]
    fn test_bind_renders_open_and_fields_from_model() {
        let model = serde_json::json!({ "name": "Ada" });
        let renderer = renderer();
        let form = renderer
            .bind(&model, &pairs([("action", "/p"), ("method", "PUT")]))
            .unwrap();

        assert!(form.opening().starts_with(r#"<form action="/p" method="PUT">"#));
        let field = form.text(&TextField::new("name")).unwrap();
        assert!(field.contains(r#"value="Ada""#));
        assert!(form.text(&TextField::new("email")).unwrap().contains(r#"value="""#));
        assert_eq!(form.close().unwrap(), renderer.close().unwrap());
    }

    #[test]
    fn test_stubs_are_loaded_on_every_call() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .times(2)
            .returning(|name| Ok(format!("<{}>", name)));

        let renderer = StubFormRenderer::new(store, "tok");
        assert_eq!(renderer.close().unwrap(), "<form-close>");
        assert_eq!(renderer.close().unwrap(), "<form-close>");
    }

    #[test]
    fn test_open_stops_at_first_missing_stub() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|name| Err(TemplateError::NotFound(name.to_string())));

        let renderer = StubFormRenderer::new(store, "tok");
        assert!(renderer.open(&ExtraTokens::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_from_config_uses_builtin_stubs() {
        let config = RendererConfig::new().attribute_style(AttributeStyle::Quoted);
        let renderer = StubFormRenderer::from_config(&config, "abc");

        let html = renderer
            .text(&TextField::new("email").attribute("id", "e"), &())
            .unwrap();
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#" id="e""#));
        assert!(renderer.open(&ExtraTokens::new()).unwrap().contains(r#"value="abc""#));
    }
}
